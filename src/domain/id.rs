//! Id value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("Failed to compile ID regex"));

/// A type-safe wrapper for client and product IDs.
///
/// IDs are validated at construction time and cannot be empty.
///
/// # Example
///
/// ```
/// use sellah::domain::Id;
///
/// let id = Id::new("c-001").unwrap();
/// assert_eq!(id.as_str(), "c-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "IDs should only contain alphanumeric characters and hyphens, and it should not be blank";

    /// Create a new Id.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the ID is empty or contains
    /// characters other than ASCII alphanumerics and hyphens.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if !Self::is_valid(&id) {
            return Err(ValidationError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Generate a fresh random ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Returns true if the given string is a valid ID.
    pub fn is_valid(test: &str) -> bool {
        ID_REGEX.is_match(test)
    }
}

string_value_object!(Id);
