//! Test fixtures and sample data.
//!
//! This module provides builders and reusable records for creating clients,
//! products and persons in tests.

use super::*;
use sellah::domain::{Id, Tag, UnitPrice};
use sellah::models::{Client, Person, Product};
use sellah::AddressBook;

pub const DEFAULT_CLIENT_ID: &str = "c-default";
pub const DEFAULT_PRODUCT_ID: &str = "p-default";

/// Builds a client, starting from Amy's details.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    id: Id,
    name: Name,
    phone_number: PhoneNumber,
    email: Email,
    address: Address,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            id: Id::new(DEFAULT_CLIENT_ID).unwrap(),
            name: Name::new(VALID_NAME_AMY).unwrap(),
            phone_number: PhoneNumber::new(VALID_PHONE_NUMBER_AMY).unwrap(),
            email: Email::new(VALID_EMAIL_AMY).unwrap(),
            address: Address::new(VALID_ADDRESS_AMY).unwrap(),
        }
    }

    /// Start from an existing client's values.
    pub fn from_client(client: &Client) -> Self {
        Self {
            id: client.id().clone(),
            name: client.name().clone(),
            phone_number: client.phone_number().clone(),
            email: client.email().clone(),
            address: client.address().clone(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Id::new(id).unwrap();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Name::new(name).unwrap();
        self
    }

    pub fn with_phone_number(mut self, phone_number: &str) -> Self {
        self.phone_number = PhoneNumber::new(phone_number).unwrap();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Email::new(email).unwrap();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Address::new(address).unwrap();
        self
    }

    pub fn build(self) -> Client {
        Client::new(self.id, self.name, self.phone_number, self.email, self.address)
    }
}

/// Builds a product, starting from Cannon's details.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    id: Id,
    name: Name,
    unit_price: UnitPrice,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            id: Id::new(DEFAULT_PRODUCT_ID).unwrap(),
            name: Name::new(VALID_NAME_CANNON).unwrap(),
            unit_price: UnitPrice::new(VALID_UNIT_PRICE_CANNON).unwrap(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Id::new(id).unwrap();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Name::new(name).unwrap();
        self
    }

    pub fn with_unit_price(mut self, unit_price: &str) -> Self {
        self.unit_price = UnitPrice::new(unit_price).unwrap();
        self
    }

    pub fn build(self) -> Product {
        Product::new(self.id, self.name, self.unit_price)
    }
}

/// Create a person with the given name and tags.
pub fn sample_person(name: &str, phone: &str, tags: &[&str]) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        PhoneNumber::new(phone).unwrap(),
        Email::new(VALID_EMAIL_AMY).unwrap(),
        Address::new(VALID_ADDRESS_AMY).unwrap(),
        tags.iter().map(|t| Tag::new(*t).unwrap()),
    )
}

pub fn alice() -> Client {
    ClientBuilder::new()
        .with_id("c-alice")
        .with_name("Alice Pauline")
        .with_phone_number("94351253")
        .with_email("alice@example.com")
        .with_address("123, Jurong West Ave 6, #08-111")
        .build()
}

pub fn benson() -> Client {
    ClientBuilder::new()
        .with_id("c-benson")
        .with_name("Benson Meier")
        .with_phone_number("98765432")
        .with_email("johnd@example.com")
        .with_address("311, Clementi Ave 2, #02-25")
        .build()
}

pub fn carl() -> Client {
    ClientBuilder::new()
        .with_id("c-carl")
        .with_name("Carl Kurz")
        .with_phone_number("95352563")
        .with_email("heinz@example.com")
        .with_address("wall street")
        .build()
}

pub fn daniel() -> Client {
    ClientBuilder::new()
        .with_id("c-daniel")
        .with_name("Daniel Meier")
        .with_phone_number("87652533")
        .with_email("cornelia@example.com")
        .with_address("10th street")
        .build()
}

/// Amy, with a fixed ID. Not part of the typical address book.
pub fn amy() -> Client {
    ClientBuilder::new().with_id("c-amy").build()
}

/// Bob, with a fixed ID. Not part of the typical address book.
pub fn bob() -> Client {
    ClientBuilder::new()
        .with_id("c-bob")
        .with_name(VALID_NAME_BOB)
        .with_phone_number(VALID_PHONE_NUMBER_BOB)
        .with_email(VALID_EMAIL_BOB)
        .with_address(VALID_ADDRESS_BOB)
        .build()
}

pub fn typical_clients() -> Vec<Client> {
    vec![alice(), benson(), carl(), daniel()]
}

pub fn eraser() -> Product {
    ProductBuilder::new()
        .with_id("p-eraser")
        .with_name("Eraser")
        .with_unit_price("0.80")
        .build()
}

pub fn stapler() -> Product {
    ProductBuilder::new()
        .with_id("p-stapler")
        .with_name("Heavy Duty Stapler")
        .with_unit_price("12.90")
        .build()
}

pub fn ruler() -> Product {
    ProductBuilder::new()
        .with_id("p-ruler")
        .with_name("Steel Ruler")
        .with_unit_price("3")
        .build()
}

/// Cannon, with a fixed ID. Not part of the typical address book.
pub fn cannon() -> Product {
    ProductBuilder::new().with_id("p-cannon").build()
}

/// Daisy, with a fixed ID. Not part of the typical address book.
pub fn daisy() -> Product {
    ProductBuilder::new()
        .with_id("p-daisy")
        .with_name(VALID_NAME_DAISY)
        .with_unit_price(VALID_UNIT_PRICE_DAISY)
        .build()
}

pub fn typical_products() -> Vec<Product> {
    vec![eraser(), stapler(), ruler()]
}

pub fn typical_persons() -> Vec<Person> {
    vec![
        sample_person("Elle Meyer", "94822240", &["friends"]),
        sample_person("Fiona Kunz", "94824270", &[]),
    ]
}

/// An address book with all the typical persons, clients and products.
pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in typical_persons() {
        book.add_person(person).unwrap();
    }
    for client in typical_clients() {
        book.add_client(client).unwrap();
    }
    for product in typical_products() {
        book.add_product(product).unwrap();
    }
    book
}
