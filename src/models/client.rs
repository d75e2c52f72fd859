//! Client model: a customer record in the address book.

use crate::domain::{Address, Email, Id, Name, PhoneNumber};
use std::fmt;

/// A client in the address book.
///
/// Guarantees: every field is present and validated; the record is
/// immutable. Two clients are the same client only when every field is
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client {
    id: Id,
    name: Name,
    phone_number: PhoneNumber,
    email: Email,
    address: Address,
}

impl Client {
    /// Create a new client from validated fields.
    pub fn new(
        id: Id,
        name: Name,
        phone_number: PhoneNumber,
        email: Email,
        address: Address,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            email,
            address,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; ID: {}; Phone Number: {}; Email: {}; Address: {}",
            self.name, self.id, self.phone_number, self.email, self.address
        )
    }
}
