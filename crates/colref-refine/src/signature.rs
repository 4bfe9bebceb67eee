use std::fmt;

/// Sorted multiset of degrees describing a vertex's neighbourhood.
///
/// Entries are kept in ascending order. Every entry is the original degree of
/// some vertex, so no entry exceeds the maximum degree of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature(Vec<usize>);

impl Signature {
    /// Singleton signature `[degree]` assigned before the first round.
    pub fn from_degree(degree: usize) -> Self {
        Self(vec![degree])
    }

    /// Builds a signature from arbitrary entries, sorting them.
    pub fn from_entries(mut entries: Vec<usize>) -> Self {
        entries.sort_unstable();
        Self(entries)
    }

    /// Returns the entries in ascending order.
    pub fn entries(&self) -> &[usize] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature has no entries (isolated vertices after one round).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest entry, if any.
    pub fn max_entry(&self) -> Option<usize> {
        self.0.last().copied()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
