//! Tag value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("Failed to compile tag regex"));

/// A single-word label attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(tag_name: impl Into<String>) -> Result<Self, ValidationError> {
        let tag_name = tag_name.into();
        if !Self::is_valid(&tag_name) {
            return Err(ValidationError::InvalidTag(tag_name));
        }
        Ok(Self(tag_name))
    }

    pub fn is_valid(test: &str) -> bool {
        TAG_REGEX.is_match(test)
    }
}

string_value_object!(Tag);
