//! Domain validation errors.

use super::{Address, Email, Id, Name, PhoneNumber, Tag, UnitPrice};
use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input; the `Display` form is the
/// fixed constraint message of the offending field so it can be shown to
/// the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided ID is invalid.
    InvalidId(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is invalid.
    InvalidAddress(String),

    /// The provided unit price is invalid.
    InvalidUnitPrice(String),

    /// The provided tag name is invalid.
    InvalidTag(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::InvalidName(_) => Name::MESSAGE_CONSTRAINTS,
            Self::InvalidId(_) => Id::MESSAGE_CONSTRAINTS,
            Self::InvalidPhone(_) => PhoneNumber::MESSAGE_CONSTRAINTS,
            Self::InvalidEmail(_) => Email::MESSAGE_CONSTRAINTS,
            Self::InvalidAddress(_) => Address::MESSAGE_CONSTRAINTS,
            Self::InvalidUnitPrice(_) => UnitPrice::MESSAGE_CONSTRAINTS,
            Self::InvalidTag(_) => Tag::MESSAGE_CONSTRAINTS,
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}
