#![deny(missing_docs)]
#![doc = "Core identifiers and error types shared by the colref crates."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::{ColrefError, ErrorInfo, ParseErrorKind};

/// Identifier for a vertex of an undirected graph.
///
/// Vertex identifiers are 1-based: a graph declaring `n` vertices owns the
/// identifiers `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns the zero-based slot of the identifier within adjacency arrays.
    ///
    /// Returns `None` for the reserved identifier `0`.
    pub fn index(&self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// Creates the identifier stored at a zero-based slot.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
