//! One-based / zero-based list index.

/// A position in a displayed list.
///
/// Users see one-based positions; code indexes slices zero-based. Keeping
/// both behind one type avoids off-by-one mix-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for 0, which is not a valid one-based position.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}
