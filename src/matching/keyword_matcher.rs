//! Name keyword matching for filtering record lists.

use crate::domain::Name;
use crate::models::{Client, Person, Product};

/// Records that carry a [`Name`] and can therefore be filtered by it.
pub trait Named {
    fn name(&self) -> &Name;
}

impl Named for Client {
    fn name(&self) -> &Name {
        Client::name(self)
    }
}

impl Named for Product {
    fn name(&self) -> &Name {
        Product::name(self)
    }
}

impl Named for Person {
    fn name(&self) -> &Name {
        Person::name(self)
    }
}

/// Tests that a record's name contains any of the given keywords.
///
/// Matching is case-insensitive and on whole words only: `"Amy"` matches
/// `"amy bee"` but `"Am"` does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns true if any keyword equals (ignoring case) a word of the name.
    pub fn test<T: Named>(&self, record: &T) -> bool {
        let name = record.name();
        self.keywords
            .iter()
            .any(|keyword| name.words().any(|word| word.eq_ignore_ascii_case(keyword)))
    }
}
