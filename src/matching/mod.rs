//! Matching utilities for narrowing the displayed record lists.

pub mod keyword_matcher;

pub use keyword_matcher::{NameContainsKeywordsPredicate, Named};
