#![deny(missing_docs)]
#![doc = "Vertex ordering by iterated neighbourhood-signature refinement, a \
sequence-valued variant of colour refinement (1-WL)."]

/// YAML configuration for refinement runs.
pub mod config;
/// Fixpoint driver.
pub mod driver;
/// Sort-key encoding and stable re-sorting.
pub mod encode;
/// Content hashes for graphs and orders.
pub mod hash;
/// Signature exchange between neighbours.
pub mod propagate;
/// Run and round reports.
pub mod report;
/// JSON helpers for reports.
#[path = "serde.rs"]
pub mod serde_io;
/// Per-vertex signatures.
pub mod signature;
/// Positional-numeral sort keys.
pub mod sort_key;
/// Mutable refinement state.
pub mod state;

use colref_core::VertexId;

pub use config::RefineConfig;
pub use driver::{refine, Refiner};
pub use propagate::Executor;
pub use report::{RefinementReport, RoundReport};
pub use signature::Signature;
pub use sort_key::SortKey;
pub use state::RefinementState;

// Adjacency lists only hold declared vertices, whose ids start at 1.
pub(crate) fn slot(vertex: VertexId) -> usize {
    vertex.as_raw() as usize - 1
}
