//! Sellah - Main entry point
//!
//! Reads commands from stdin, one per line, and prints the result of each to
//! stdout. Logs go to stderr.

use anyhow::Result;
use sellah::sample_data::sample_address_book;
use sellah::{
    AddressBook, AddressBookStorage, Config, JsonAddressBookStorage, Logic, LogicManager, Model,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so command output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting Sellah");
    info!(data_file = %config.data_file.display(), "Configuration loaded successfully");

    let storage = JsonAddressBookStorage::new(config.data_file.clone());
    let address_book = load_address_book(&storage);
    let mut logic = LogicManager::new(Model::new(address_book), storage);

    run(&mut logic)?;

    info!("Sellah stopped");
    Ok(())
}

/// Load the stored book, falling back to sample data when there is no file
/// and to an empty book when the file cannot be used.
fn load_address_book(storage: &impl AddressBookStorage) -> AddressBook {
    match storage.read_address_book() {
        Ok(Some(address_book)) => address_book,
        Ok(None) => {
            info!("Data file not found. Will be starting with a sample AddressBook");
            sample_address_book()
        }
        Err(e) => {
            warn!(
                error = %e,
                "Data file could not be loaded. Will be starting with an empty AddressBook"
            );
            AddressBook::new()
        }
    }
}

fn run(logic: &mut impl Logic) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match logic.execute(&line) {
                Ok(result) => {
                    writeln!(stdout, "{}", result.feedback_to_user())?;
                    if result.is_exit() {
                        break;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Command failed");
                    writeln!(stdout, "{}", e)?;
                }
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
