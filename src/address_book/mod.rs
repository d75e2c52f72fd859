//! The in-memory address book.
//!
//! An [`AddressBook`] owns three ordered collections (persons, clients and
//! products), each backed by a [`UniqueList`] so that no two equal records
//! can be held at the same time.

mod unique_list;

pub use unique_list::UniqueList;

use crate::error::UniqueListError;
use crate::models::{Client, Person, Product};

/// Wraps all data at the address-book level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: UniqueList<Person>,
    clients: UniqueList<Client>,
    products: UniqueList<Product>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all data with a copy of `other`.
    pub fn reset_data(&mut self, other: &AddressBook) {
        self.clone_from(other);
    }

    // persons

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Add a person; it must not already exist.
    pub fn add_person(&mut self, person: Person) -> Result<(), UniqueListError> {
        self.persons.add(person)
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), UniqueListError> {
        self.persons.set(target, edited)
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, UniqueListError> {
        self.persons.remove(target)
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    // clients

    pub fn has_client(&self, client: &Client) -> bool {
        self.clients.contains(client)
    }

    /// Add a client; it must not already exist.
    pub fn add_client(&mut self, client: Client) -> Result<(), UniqueListError> {
        self.clients.add(client)
    }

    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), UniqueListError> {
        self.clients.set(target, edited)
    }

    pub fn remove_client(&mut self, target: &Client) -> Result<Client, UniqueListError> {
        self.clients.remove(target)
    }

    pub fn clients(&self) -> &[Client] {
        self.clients.as_slice()
    }

    // products

    pub fn has_product(&self, product: &Product) -> bool {
        self.products.contains(product)
    }

    /// Add a product; it must not already exist.
    pub fn add_product(&mut self, product: Product) -> Result<(), UniqueListError> {
        self.products.add(product)
    }

    pub fn set_product(
        &mut self,
        target: &Product,
        edited: Product,
    ) -> Result<(), UniqueListError> {
        self.products.set(target, edited)
    }

    pub fn remove_product(&mut self, target: &Product) -> Result<Product, UniqueListError> {
        self.products.remove(target)
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    /// Total number of records across all three collections.
    pub fn len(&self) -> usize {
        self.persons.len() + self.clients.len() + self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.clients.is_empty() && self.products.is_empty()
    }
}
