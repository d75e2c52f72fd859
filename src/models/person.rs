//! Person model: a personal contact in the address book.

use crate::domain::{Address, Email, Name, PhoneNumber, Tag};
use std::collections::BTreeSet;
use std::fmt;

/// A person in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: Name,
    phone: PhoneNumber,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Create a new person from validated fields.
    pub fn new(
        name: Name,
        phone: PhoneNumber,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Tags in sorted order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
