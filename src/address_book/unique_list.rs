//! Ordered list that refuses duplicate entries.

use crate::error::UniqueListError;

/// An ordered list of entries in which no two entries are equal.
///
/// Equality is the element type's `PartialEq`, so for the record types this
/// means full field-tuple equality. Order of insertion is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T: PartialEq> UniqueList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns true if the list contains an entry equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// `DuplicateEntry` if an equal entry is already present.
    pub fn add(&mut self, item: T) -> Result<(), UniqueListError> {
        if self.contains(&item) {
            return Err(UniqueListError::DuplicateEntry);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// # Errors
    ///
    /// `EntryNotFound` if `target` is absent, `DuplicateEntry` if `edited`
    /// equals some other entry.
    pub fn set(&mut self, target: &T, edited: T) -> Result<(), UniqueListError> {
        let index = self
            .position(target)
            .ok_or(UniqueListError::EntryNotFound)?;

        let clashes = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && *existing == edited);
        if clashes {
            return Err(UniqueListError::DuplicateEntry);
        }

        self.items[index] = edited;
        Ok(())
    }

    /// Remove the entry equal to `target`.
    pub fn remove(&mut self, target: &T) -> Result<T, UniqueListError> {
        let index = self
            .position(target)
            .ok_or(UniqueListError::EntryNotFound)?;
        Ok(self.items.remove(index))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == target)
    }
}

impl<T: PartialEq> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}
