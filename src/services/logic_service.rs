//! Logic service: parse, execute, persist.

use crate::commands::CommandResult;
use crate::error::{CommandError, LogicError};
use crate::model::Model;
use crate::parser::AddressBookParser;
use crate::storage::AddressBookStorage;

/// Entry point for running user input against the application state.
pub trait Logic {
    /// Parse and execute one line of user input.
    fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError>;

    /// Current application state.
    fn model(&self) -> &Model;
}

/// Default implementation of [`Logic`].
///
/// After every command that may change the address book, the whole book is
/// written back through the storage.
pub struct LogicManager<S: AddressBookStorage> {
    model: Model,
    storage: S,
    parser: AddressBookParser,
}

impl<S: AddressBookStorage> LogicManager<S> {
    pub fn new(model: Model, storage: S) -> Self {
        Self {
            model,
            storage,
            parser: AddressBookParser::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: AddressBookStorage> Logic for LogicManager<S> {
    fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        tracing::info!(command = command_text, "User command");

        let command = self.parser.parse_command(command_text)?;
        let result = command.execute(&mut self.model)?;

        if command.mutates() {
            self.storage
                .save_address_book(self.model.address_book())
                .map_err(|e| {
                    tracing::error!(error = %e, "Failed to save address book");
                    CommandError::Storage(e)
                })?;
        }

        Ok(result)
    }

    fn model(&self) -> &Model {
        &self.model
    }
}
