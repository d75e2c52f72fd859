//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// # Example
///
/// ```
/// use sellah::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("91234567").unwrap();
/// assert_eq!(phone.as_str(), "91234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Digits only
    /// - At least 3 digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Returns true if the given string is a valid phone number.
    pub fn is_valid(test: &str) -> bool {
        PHONE_REGEX.is_match(test)
    }
}

string_value_object!(PhoneNumber);
