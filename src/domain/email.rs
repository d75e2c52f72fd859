//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// local-part: alphanumeric runs joined by single special characters (+_.-)
// domain: hyphen-joined alphanumeric labels separated by periods, the last
// label at least two characters long
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*",
        r"@",
        r"(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*",
        r"(?:[A-Za-z0-9]{2,}(?:-[A-Za-z0-9]+)*|[A-Za-z0-9]+(?:-[A-Za-z0-9]+)+)$",
    ))
    .expect("Failed to compile email regex")
});

/// A client's or person's email address.
///
/// Guarantees: immutable, and valid as declared in [`Email::is_valid`].
///
/// # Example
///
/// ```
/// use sellah::domain::Email;
///
/// let email = Email::new("amy@example.com").unwrap();
/// assert_eq!(email.to_string(), "amy@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    /// Special characters allowed between alphanumeric runs of the local-part.
    pub const SPECIAL_CHARACTERS: &'static str = "+_.-";

    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special \
characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Returns true if the given string is a valid email.
    pub fn is_valid(test: &str) -> bool {
        EMAIL_REGEX.is_match(test)
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or_default()
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0
            .split_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }
}

string_value_object!(Email);
