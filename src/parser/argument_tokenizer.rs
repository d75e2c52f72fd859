//! Splits an argument string into a preamble and prefixed values.
//!
//! `" 1 n/Amy Bee p/123"` with prefixes `n/` and `p/` yields the preamble
//! `"1"`, `n/` → `"Amy Bee"` and `p/` → `"123"`. A prefix only counts when
//! it follows whitespace, so `a/b/c` inside a value is left alone.

use super::cli_syntax::Prefix;
use std::collections::HashMap;

/// Argument values keyed by prefix, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }
}

/// Tokenize `args` against the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    let mut previous_is_space = true;
    for (i, c) in args.char_indices() {
        if previous_is_space {
            if let Some(prefix) = prefixes.iter().find(|p| args[i..].starts_with(p.as_str())) {
                positions.push((i, *prefix));
            }
        }
        previous_is_space = c.is_whitespace();
    }

    let preamble_end = positions.first().map_or(args.len(), |(i, _)| *i);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (n, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(n + 1).map_or(args.len(), |(i, _)| *i);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}
