//! Error types for Sellah.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// A persisted value could not be turned back into a valid address book.
///
/// This is the single failure category reported when loading: the message
/// is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalValueError {
    /// A required field was absent from a stored record
    #[error("{entity}'s {field} field is missing!")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A stored field failed its format rule
    #[error(transparent)]
    InvalidField(#[from] ValidationError),

    #[error("Persons list contains duplicate person(s).")]
    DuplicatePerson,

    #[error("Clients list contains duplicate client(s).")]
    DuplicateClient,

    #[error("Products list contains duplicate products(s).")]
    DuplicateProduct,
}

impl IllegalValueError {
    /// Build the missing-field error for `field` of `entity`.
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }
}

/// Errors that can occur while reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File could not be read or written
    #[error("Could not access data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a well-formed address book document
    #[error("Data file is not in the correct format: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but holds invalid or duplicate records
    #[error("{0}")]
    IllegalValue(#[from] IllegalValueError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while turning user input into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    /// Input does not follow the command's format; carries the usage text
    #[error("Invalid command format! \n{0}")]
    InvalidFormat(String),

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,

    #[error(transparent)]
    InvalidValue(#[from] ValidationError),
}

/// Errors raised while executing a command against the model.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("This client already exists in the address book")]
    DuplicateClient,

    #[error("This product already exists in the address book")]
    DuplicateProduct,

    #[error("The client index provided is invalid")]
    InvalidClientIndex,

    #[error("The product index provided is invalid")]
    InvalidProductIndex,

    /// The command ran but its result could not be saved
    #[error("Could not save data to file: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while processing one line of user input.
#[derive(Error, Debug)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors raised by [`crate::address_book::UniqueList`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueListError {
    #[error("Operation would result in duplicate entries")]
    DuplicateEntry,

    #[error("Entry not found in list")]
    EntryNotFound,
}

/// Convenience type alias for Results with IllegalValueError
pub type IllegalValueResult<T> = Result<T, IllegalValueError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type CommandOutcome<T> = Result<T, CommandError>;
