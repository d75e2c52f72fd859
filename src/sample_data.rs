//! Records used to populate a new address book on first start.

use crate::address_book::AddressBook;
use crate::domain::{Address, Email, Id, Name, PhoneNumber, Tag, UnitPrice, ValidationError};
use crate::error::{IllegalValueError, IllegalValueResult};
use crate::models::{Client, Person, Product};

fn sample_persons() -> Result<Vec<Person>, ValidationError> {
    Ok(vec![
        Person::new(
            Name::new("Alex Yeoh")?,
            PhoneNumber::new("87438807")?,
            Email::new("alexyeoh@example.com")?,
            Address::new("Blk 30 Geylang Street 29, #06-40")?,
            [Tag::new("friends")?],
        ),
        Person::new(
            Name::new("Bernice Yu")?,
            PhoneNumber::new("99272758")?,
            Email::new("berniceyu@example.com")?,
            Address::new("Blk 30 Lorong 3 Serangoon Gardens, #07-18")?,
            [Tag::new("colleagues")?, Tag::new("friends")?],
        ),
    ])
}

fn sample_clients() -> Result<Vec<Client>, ValidationError> {
    Ok(vec![
        Client::new(
            Id::new("c-0001")?,
            Name::new("Charlotte Oliveiro")?,
            PhoneNumber::new("93210283")?,
            Email::new("charlotte@example.com")?,
            Address::new("Blk 11 Ang Mo Kio Street 74, #11-04")?,
        ),
        Client::new(
            Id::new("c-0002")?,
            Name::new("David Li")?,
            PhoneNumber::new("91031282")?,
            Email::new("lidavid@example.com")?,
            Address::new("Blk 436 Serangoon Gardens Street 26, #16-43")?,
        ),
    ])
}

fn sample_products() -> Result<Vec<Product>, ValidationError> {
    Ok(vec![
        Product::new(Id::new("p-0001")?, Name::new("Notebook")?, UnitPrice::new("3.50")?),
        Product::new(Id::new("p-0002")?, Name::new("Fountain Pen")?, UnitPrice::new("24")?),
    ])
}

fn build_sample_address_book() -> IllegalValueResult<AddressBook> {
    let mut book = AddressBook::new();
    for person in sample_persons()? {
        book
            .add_person(person)
            .map_err(|_| IllegalValueError::DuplicatePerson)?;
    }
    for client in sample_clients()? {
        book
            .add_client(client)
            .map_err(|_| IllegalValueError::DuplicateClient)?;
    }
    for product in sample_products()? {
        book
            .add_product(product)
            .map_err(|_| IllegalValueError::DuplicateProduct)?;
    }
    Ok(book)
}

/// A small address book with a few persons, clients and products.
///
/// Falls back to an empty book, with an error logged, if the sample records
/// cannot be built.
pub fn sample_address_book() -> AddressBook {
    build_sample_address_book().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Sample data could not be built");
        AddressBook::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_builds_without_error() {
        let book = build_sample_address_book().unwrap();
        assert_eq!(book, sample_address_book());
    }

    #[test]
    fn test_sample_data_is_complete() {
        let book = sample_address_book();
        assert_eq!(book.persons().len(), 2);
        assert_eq!(book.clients().len(), 2);
        assert_eq!(book.products().len(), 2);
    }
}
