//! Sellah - an address book for persons, clients and products.
//!
//! Records are held in memory behind validated value objects and persisted
//! as a single JSON document. A small command language drives the book.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, IDs, phones, emails, prices)
//! - **models**: Person, client and product records
//! - **address_book**: Duplicate-free lists of each record kind
//! - **model**: Address book plus the filtered views shown to the user
//! - **storage**: JSON adapters and the file-backed storage
//! - **parser**: Turns user input into commands
//! - **commands**: Operations on the model
//! - **services**: Parse, execute and persist in one step
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod address_book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod model;
pub mod models;
pub mod parser;
pub mod sample_data;
pub mod services;
pub mod storage;

// Re-export commonly used types
pub use address_book::{AddressBook, UniqueList};
pub use commands::{Command, CommandResult, Index};
pub use config::Config;
pub use error::{
    CommandError, ConfigError, IllegalValueError, LogicError, ParseError, StorageError,
};
pub use model::{ListFilter, Model};
pub use models::{Client, Person, Product};
pub use parser::AddressBookParser;
pub use services::{Logic, LogicManager};
pub use storage::{AddressBookStorage, JsonAddressBookStorage};
