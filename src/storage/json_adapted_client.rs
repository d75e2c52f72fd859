//! Serializable form of [`Client`].

use crate::domain::{Address, Email, Id, Name, PhoneNumber};
use crate::error::{IllegalValueError, IllegalValueResult};
use crate::models::Client;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "Client";

/// JSON-friendly version of [`Client`].
///
/// Every field is optional so a partially written record still decodes;
/// missing and malformed fields are reported by [`JsonAdaptedClient::to_model_type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedClient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(
        rename = "phone number",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl JsonAdaptedClient {
    /// Construct from raw field values as they would appear in a document.
    pub fn new(
        name: Option<String>,
        id: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            name,
            id,
            phone_number,
            address,
            email,
        }
    }

    /// Convert back into the model's [`Client`].
    ///
    /// Fields are checked in the order name, ID, phone number, address,
    /// email; the first missing or invalid field is reported.
    ///
    /// # Errors
    ///
    /// `IllegalValueError::MissingField` for an absent field, or
    /// `IllegalValueError::InvalidField` carrying the field's constraint
    /// message.
    pub fn to_model_type(&self) -> IllegalValueResult<Client> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "Name"))?;
        let model_name = Name::new(name)?;

        let id = self
            .id
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "ID"))?;
        let model_id = Id::new(id)?;

        let phone_number = self
            .phone_number
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "PhoneNumber"))?;
        let model_phone_number = PhoneNumber::new(phone_number)?;

        let address = self
            .address
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "Address"))?;
        let model_address = Address::new(address)?;

        let email = self
            .email
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "Email"))?;
        let model_email = Email::new(email)?;

        Ok(Client::new(
            model_id,
            model_name,
            model_phone_number,
            model_email,
            model_address,
        ))
    }
}

impl From<&Client> for JsonAdaptedClient {
    fn from(source: &Client) -> Self {
        Self {
            name: Some(source.name().to_string()),
            id: Some(source.id().to_string()),
            phone_number: Some(source.phone_number().to_string()),
            address: Some(source.address().to_string()),
            email: Some(source.email().to_string()),
        }
    }
}
