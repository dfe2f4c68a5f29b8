//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a word within one attempt's [`WordSet`](crate::WordSet).
///
/// `WordId(n)` is the n-th distinct word of the attempt, in input order.
/// Ids are only meaningful inside the attempt that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub u32);

impl WordId {
    /// The id as a slice index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WordId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
