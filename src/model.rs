//! In-memory application state: the address book plus filtered views.

use crate::address_book::AddressBook;
use crate::error::UniqueListError;
use crate::matching::{NameContainsKeywordsPredicate, Named};
use crate::models::{Client, Person, Product};

/// Which records of one kind are currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListFilter {
    /// Show every record
    #[default]
    All,

    /// Show records whose name contains one of the keywords
    NameKeywords(NameContainsKeywordsPredicate),
}

impl ListFilter {
    pub fn allows<T: Named>(&self, record: &T) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(predicate) => predicate.test(record),
        }
    }
}

impl From<NameContainsKeywordsPredicate> for ListFilter {
    fn from(predicate: NameContainsKeywordsPredicate) -> Self {
        Self::NameKeywords(predicate)
    }
}

/// The address book together with one filter per record kind.
///
/// Commands operate on the filtered lists (indices shown to the user refer
/// to them), while duplicate checks always consult the whole book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    address_book: AddressBook,
    person_filter: ListFilter,
    client_filter: ListFilter,
    product_filter: ListFilter,
}

impl Model {
    /// Create a model over `address_book` with every list unfiltered.
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            ..Self::default()
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replace the address book data.
    pub fn set_address_book(&mut self, address_book: &AddressBook) {
        self.address_book.reset_data(address_book);
    }

    // persons

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), UniqueListError> {
        self.address_book.add_person(person)?;
        self.person_filter = ListFilter::All;
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), UniqueListError> {
        self.address_book.set_person(target, edited)
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<Person, UniqueListError> {
        self.address_book.remove_person(target)
    }

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        Self::filtered(self.address_book.persons(), &self.person_filter)
    }

    pub fn update_filtered_person_list(&mut self, filter: impl Into<ListFilter>) {
        self.person_filter = filter.into();
    }

    // clients

    pub fn has_client(&self, client: &Client) -> bool {
        self.address_book.has_client(client)
    }

    pub fn add_client(&mut self, client: Client) -> Result<(), UniqueListError> {
        self.address_book.add_client(client)?;
        self.client_filter = ListFilter::All;
        Ok(())
    }

    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<(), UniqueListError> {
        self.address_book.set_client(target, edited)
    }

    pub fn delete_client(&mut self, target: &Client) -> Result<Client, UniqueListError> {
        self.address_book.remove_client(target)
    }

    pub fn filtered_client_list(&self) -> Vec<&Client> {
        Self::filtered(self.address_book.clients(), &self.client_filter)
    }

    pub fn update_filtered_client_list(&mut self, filter: impl Into<ListFilter>) {
        self.client_filter = filter.into();
    }

    // products

    pub fn has_product(&self, product: &Product) -> bool {
        self.address_book.has_product(product)
    }

    pub fn add_product(&mut self, product: Product) -> Result<(), UniqueListError> {
        self.address_book.add_product(product)?;
        self.product_filter = ListFilter::All;
        Ok(())
    }

    pub fn set_product(
        &mut self,
        target: &Product,
        edited: Product,
    ) -> Result<(), UniqueListError> {
        self.address_book.set_product(target, edited)
    }

    pub fn delete_product(&mut self, target: &Product) -> Result<Product, UniqueListError> {
        self.address_book.remove_product(target)
    }

    pub fn filtered_product_list(&self) -> Vec<&Product> {
        Self::filtered(self.address_book.products(), &self.product_filter)
    }

    pub fn update_filtered_product_list(&mut self, filter: impl Into<ListFilter>) {
        self.product_filter = filter.into();
    }

    /// Drop every filter so all records are shown.
    pub fn show_all(&mut self) {
        self.person_filter = ListFilter::All;
        self.client_filter = ListFilter::All;
        self.product_filter = ListFilter::All;
    }

    fn filtered<'a, T: Named>(records: &'a [T], filter: &ListFilter) -> Vec<&'a T> {
        records.iter().filter(|r| filter.allows(*r)).collect()
    }
}
