//! Serializable form of the whole [`AddressBook`].

use super::{JsonAdaptedClient, JsonAdaptedPerson, JsonAdaptedProduct};
use crate::address_book::AddressBook;
use crate::error::{IllegalValueError, IllegalValueResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as an absent list.
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let list: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}

/// An immutable address book document that is serializable to JSON.
///
/// `persons` must be present in a stored document; `clients` and
/// `products` fall back to empty lists when absent or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    persons: Vec<JsonAdaptedPerson>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    clients: Vec<JsonAdaptedClient>,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    products: Vec<JsonAdaptedProduct>,
}

impl JsonSerializableAddressBook {
    /// Construct from adapter lists; absent client or product lists are
    /// taken as empty.
    pub fn new(
        persons: Vec<JsonAdaptedPerson>,
        clients: Option<Vec<JsonAdaptedClient>>,
        products: Option<Vec<JsonAdaptedProduct>>,
    ) -> Self {
        Self {
            persons,
            clients: clients.unwrap_or_default(),
            products: products.unwrap_or_default(),
        }
    }

    /// Rebuild a fresh [`AddressBook`] from this document.
    ///
    /// Records are inserted in list order, persons first, then clients,
    /// then products. Nothing is returned unless every record converts and
    /// no record repeats an earlier one.
    ///
    /// # Errors
    ///
    /// The first conversion failure, or the duplicate error for the kind
    /// of record that collided.
    pub fn to_model_type(&self) -> IllegalValueResult<AddressBook> {
        let mut address_book = AddressBook::new();

        for json_adapted_person in &self.persons {
            let person = json_adapted_person.to_model_type()?;
            address_book
                .add_person(person)
                .map_err(|_| IllegalValueError::DuplicatePerson)?;
        }

        for json_adapted_client in &self.clients {
            let client = json_adapted_client.to_model_type()?;
            address_book
                .add_client(client)
                .map_err(|_| IllegalValueError::DuplicateClient)?;
        }

        for json_adapted_product in &self.products {
            let product = json_adapted_product.to_model_type()?;
            address_book
                .add_product(product)
                .map_err(|_| IllegalValueError::DuplicateProduct)?;
        }

        tracing::debug!(
            persons = address_book.persons().len(),
            clients = address_book.clients().len(),
            products = address_book.products().len(),
            "Address book rebuilt from document"
        );

        Ok(address_book)
    }

    pub fn persons(&self) -> &[JsonAdaptedPerson] {
        &self.persons
    }

    pub fn clients(&self) -> &[JsonAdaptedClient] {
        &self.clients
    }

    pub fn products(&self) -> &[JsonAdaptedProduct] {
        &self.products
    }
}

impl From<&AddressBook> for JsonSerializableAddressBook {
    fn from(source: &AddressBook) -> Self {
        Self {
            persons: source.persons().iter().map(JsonAdaptedPerson::from).collect(),
            clients: source.clients().iter().map(JsonAdaptedClient::from).collect(),
            products: source.products().iter().map(JsonAdaptedProduct::from).collect(),
        }
    }
}
