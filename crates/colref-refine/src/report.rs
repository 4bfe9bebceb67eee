use colref_core::VertexId;
use serde::{Deserialize, Serialize};

/// Diagnostics for one propagation round and the sort that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round index.
    pub round: usize,
    /// Whether the sort produced a different order than the previous round.
    pub order_changed: bool,
    /// Length of the longest signature after the round.
    pub max_signature_len: usize,
    /// Combined length of all signatures after the round.
    pub total_signature_len: usize,
    /// Number of distinct sort keys after the round.
    pub distinct_keys: usize,
}

/// Outcome of a refinement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementReport {
    /// Vertex order at the fixpoint (or when the round cap stopped the run).
    pub order: Vec<VertexId>,
    /// Propagation rounds executed.
    pub rounds: usize,
    /// Sorts executed, including the initial degree sort.
    pub sort_passes: usize,
    /// Whether the order was stable when the run stopped.
    pub converged: bool,
    /// Common degree when the input is regular.
    pub regular_degree: Option<usize>,
    /// Numeral base of the sort keys.
    pub base: u64,
    /// Declared vertex count.
    pub vertex_count: usize,
    /// Edge count, including loops and repeated edges.
    pub edge_count: usize,
    /// Length of the longest final signature.
    pub max_signature_len: usize,
    /// Number of distinct final sort keys.
    pub distinct_keys: usize,
    /// Per-round diagnostics, empty when recording is disabled.
    #[serde(default)]
    pub history: Vec<RoundReport>,
    /// Structural hash of the input graph.
    pub graph_hash: String,
    /// Hash of the final order.
    pub order_digest: String,
}

impl RefinementReport {
    /// Final order as raw integers.
    pub fn order_raw(&self) -> Vec<u32> {
        self.order.iter().map(VertexId::as_raw).collect()
    }
}
