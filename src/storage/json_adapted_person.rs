//! Serializable form of [`Person`].

use crate::domain::{Address, Email, Name, PhoneNumber, Tag};
use crate::error::{IllegalValueError, IllegalValueResult};
use crate::models::Person;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "Person";

/// JSON-friendly version of [`Person`]. Tags are stored as a plain array
/// of tag names under `tagged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,

    #[serde(default)]
    tagged: Vec<String>,
}

impl JsonAdaptedPerson {
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        tagged: Vec<String>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tagged,
        }
    }

    /// Convert back into the model's [`Person`]: name, phone, email and
    /// address are checked in that order, then each tag.
    pub fn to_model_type(&self) -> IllegalValueResult<Person> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "Name"))?;
        let model_name = Name::new(name)?;

        let phone = self
            .phone
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "PhoneNumber"))?;
        let model_phone = PhoneNumber::new(phone)?;

        let email = self
            .email
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "Email"))?;
        let model_email = Email::new(email)?;

        let address = self
            .address
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "Address"))?;
        let model_address = Address::new(address)?;

        let model_tags = self
            .tagged
            .iter()
            .map(|tag| Tag::new(tag.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Person::new(
            model_name,
            model_phone,
            model_email,
            model_address,
            model_tags,
        ))
    }
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(source: &Person) -> Self {
        Self {
            name: Some(source.name().to_string()),
            phone: Some(source.phone().to_string()),
            email: Some(source.email().to_string()),
            address: Some(source.address().to_string()),
            tagged: source.tags().iter().map(Tag::to_string).collect(),
        }
    }
}
