//! Address value object.

use super::errors::ValidationError;

/// A postal address. Any value is accepted as long as it does not start
/// with whitespace (which also rules out the empty string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if !Self::is_valid(&address) {
            return Err(ValidationError::InvalidAddress(address));
        }
        Ok(Self(address))
    }

    pub fn is_valid(test: &str) -> bool {
        test.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

string_value_object!(Address);
