//! Product model: an item in the catalog.

use crate::domain::{Id, Name, UnitPrice};
use std::fmt;

/// A product in the address book catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    id: Id,
    name: Name,
    unit_price: UnitPrice,
}

impl Product {
    /// Create a new product from validated fields.
    pub fn new(id: Id, name: Name, unit_price: UnitPrice) -> Self {
        Self {
            id,
            name,
            unit_price,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn unit_price(&self) -> &UnitPrice {
        &self.unit_price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; ID: {}; Unit Price: {}",
            self.name, self.id, self.unit_price
        )
    }
}
