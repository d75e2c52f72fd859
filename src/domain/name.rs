//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// first character must not be a space, otherwise " " becomes a valid input
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("Failed to compile name regex")
});

/// The name of a person, client or product.
///
/// Guarantees: immutable, and valid as declared in [`Name::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Create a new Name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is blank or holds
    /// anything other than ASCII letters, digits and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Returns true if the given string is a valid name.
    pub fn is_valid(test: &str) -> bool {
        NAME_REGEX.is_match(test)
    }

    /// Whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

string_value_object!(Name);
