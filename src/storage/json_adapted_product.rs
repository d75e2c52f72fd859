//! Serializable form of [`Product`].

use crate::domain::{Id, Name, UnitPrice};
use crate::error::{IllegalValueError, IllegalValueResult};
use crate::models::Product;
use serde::{Deserialize, Serialize};

const ENTITY: &str = "Product";

/// JSON-friendly version of [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(
        rename = "unit price",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    unit_price: Option<String>,
}

impl JsonAdaptedProduct {
    /// Construct from raw field values as they would appear in a document.
    pub fn new(name: Option<String>, id: Option<String>, unit_price: Option<String>) -> Self {
        Self {
            name,
            id,
            unit_price,
        }
    }

    /// Convert back into the model's [`Product`], checking name, ID and
    /// unit price in that order.
    pub fn to_model_type(&self) -> IllegalValueResult<Product> {
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

        let unit_price = self
            .unit_price
            .as_deref()
            .ok_or_else(|| IllegalValueError::missing(ENTITY, "UnitPrice"))?;
        let model_unit_price = UnitPrice::new(unit_price)?;

        Ok(Product::new(model_id, model_name, model_unit_price))
    }
}

impl From<&Product> for JsonAdaptedProduct {
    fn from(source: &Product) -> Self {
        Self {
            name: Some(source.name().to_string()),
            id: Some(source.id().to_string()),
            unit_price: Some(source.unit_price().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapted(name: Option<&str>, id: Option<&str>, price: Option<&str>) -> JsonAdaptedProduct {
        JsonAdaptedProduct::new(
            name.map(String::from),
            id.map(String::from),
            price.map(String::from),
        )
    }

    #[test]
    fn test_round_trip_through_adapter() {
        let product = adapted(Some("Daisy"), Some("p-2"), Some("4.56"))
            .to_model_type()
            .unwrap();
        let back = JsonAdaptedProduct::from(&product).to_model_type().unwrap();
        assert_eq!(product, back);
        assert_eq!(back.unit_price().to_string(), "4.56");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            adapted(None, Some("p-2"), Some("1")).to_model_type().unwrap_err().to_string(),
            "Product's Name field is missing!"
        );
        assert_eq!(
            adapted(Some("Daisy"), None, Some("1")).to_model_type().unwrap_err().to_string(),
            "Product's ID field is missing!"
        );
        assert_eq!(
            adapted(Some("Daisy"), Some("p-2"), None).to_model_type().unwrap_err().to_string(),
            "Product's UnitPrice field is missing!"
        );
    }

    #[test]
    fn test_invalid_unit_price() {
        let err = adapted(Some("Daisy"), Some("p-2"), Some("2s"))
            .to_model_type()
            .unwrap_err();
        assert_eq!(err.to_string(), UnitPrice::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_string(&adapted(Some("Daisy"), Some("p-2"), Some("1"))).unwrap();
        assert_eq!(json, r#"{"name":"Daisy","id":"p-2","unit price":"1"}"#);
    }
}
