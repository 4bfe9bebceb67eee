use std::fmt;

use colref_core::VertexId;
use colref_graph::Graph;

use crate::encode::{degree_base, distinct_keys, encode_all, sort_by_keys};
use crate::propagate::Executor;
use crate::signature::Signature;
use crate::slot;
use crate::sort_key::SortKey;

/// A graph under refinement: its visiting order plus per-vertex signatures and keys.
///
/// The state owns the graph. Signatures and keys are indexed by
/// [`VertexId::index`] and replaced wholesale on every round.
#[derive(Debug, Clone)]
pub struct RefinementState {
    graph: Graph,
    base: u64,
    vertices: Vec<VertexId>,
    signatures: Vec<Signature>,
    sort_keys: Vec<SortKey>,
}

impl RefinementState {
    /// Seeds every vertex with the signature `[degree]` and key `degree`.
    ///
    /// The visiting order starts as the declaration order `1..=n`.
    pub fn new(graph: Graph) -> Self {
        let base = degree_base(&graph);
        let degrees = graph.degrees();
        let signatures = degrees
            .iter()
            .map(|&degree| Signature::from_degree(degree))
            .collect();
        let sort_keys = degrees
            .iter()
            .map(|&degree| SortKey::from_digits(base, &[degree]))
            .collect();
        let vertices = graph.vertices().collect();
        Self {
            graph,
            base,
            vertices,
            signatures,
            sort_keys,
        }
    }

    /// The graph being refined.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Numeral base used for every key of this graph.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Current visiting order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Copy of the current visiting order, detached from later rounds.
    pub fn snapshot_order(&self) -> Vec<VertexId> {
        self.vertices.clone()
    }

    /// Current signature of `vertex`.
    pub fn signature(&self, vertex: VertexId) -> Option<&Signature> {
        self.signatures.get(vertex.index()?)
    }

    /// Current sort key of `vertex`.
    pub fn sort_key(&self, vertex: VertexId) -> Option<&SortKey> {
        self.sort_keys.get(vertex.index()?)
    }

    /// All signatures, indexed by [`VertexId::index`].
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// All sort keys, indexed by [`VertexId::index`].
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Re-encodes every signature and stably re-sorts the visiting order.
    pub fn sort_vertices(&mut self) {
        self.sort_keys = encode_all(&self.signatures, self.base);
        sort_by_keys(&mut self.vertices, &self.sort_keys);
    }

    /// Replaces every signature with the next round's in one step.
    pub fn propagate(&mut self, executor: &Executor) {
        self.signatures = executor.propagate(&self.graph, &self.signatures);
    }

    /// Length of the longest signature.
    pub fn max_signature_len(&self) -> usize {
        self.signatures
            .iter()
            .map(Signature::len)
            .max()
            .unwrap_or(0)
    }

    /// Combined length of every signature.
    pub fn total_signature_len(&self) -> usize {
        self.signatures.iter().map(Signature::len).sum()
    }

    /// Number of distinct sort keys among all vertices.
    pub fn distinct_keys(&self) -> usize {
        distinct_keys(&self.sort_keys)
    }
}

impl fmt::Display for RefinementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------- Graph -----------")?;
        for &vertex in &self.vertices {
            let index = slot(vertex);
            let neighbours: Vec<u32> = self.graph.adjacency()[index]
                .iter()
                .map(VertexId::as_raw)
                .collect();
            writeln!(f, "Vertex {vertex}: {neighbours:?}")?;
            writeln!(f, "  has signature {}", self.signatures[index])?;
            writeln!(f, "  has sort key {}", self.sort_keys[index])?;
        }
        Ok(())
    }
}
