//! Persistence for the address book.
//!
//! The address book is stored as one JSON document. Each entity has a
//! flat, string-only adapter (`JsonAdapted*`) and the document itself is a
//! [`JsonSerializableAddressBook`] holding the three adapter lists. Loading
//! rebuilds and validates the whole book; saving overwrites the whole file.

mod json_adapted_client;
mod json_adapted_person;
mod json_adapted_product;
mod json_address_book_storage;
mod json_serializable_address_book;
mod traits;

pub use json_adapted_client::JsonAdaptedClient;
pub use json_adapted_person::JsonAdaptedPerson;
pub use json_adapted_product::JsonAdaptedProduct;
pub use json_address_book_storage::JsonAddressBookStorage;
pub use json_serializable_address_book::JsonSerializableAddressBook;
pub use traits::AddressBookStorage;
