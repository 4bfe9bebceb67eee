use colref_core::errors::{ColrefError, ErrorInfo, ParseErrorKind};
use colref_core::VertexId;

/// Undirected multigraph over the vertex identifiers `1..=n`.
///
/// Adjacency lists keep edge arrival order. Self-loops and parallel edges are
/// stored verbatim, so a loop `(v, v)` contributes two entries to the list of
/// `v` and counts twice towards its degree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph without vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph declaring the vertices `1..=count` and no edges.
    pub fn with_vertex_count(count: u32) -> Self {
        let mut graph = Self {
            adjacency: Vec::with_capacity(count as usize),
            edge_count: 0,
        };
        graph.adjacency.resize_with(count as usize, Vec::new);
        graph
    }

    /// Registers an empty adjacency list for `id`.
    ///
    /// Vertices must be declared exactly once and in order, starting at `1`.
    pub fn add_vertex(&mut self, id: VertexId) -> Result<(), ColrefError> {
        let expected = VertexId::from_index(self.adjacency.len());
        if id != expected {
            return Err(graph_error(
                "vertex-out-of-sequence",
                "vertices must be declared once each, in increasing order from 1",
            )
            .with_context("vertex", id)
            .with_context("expected", expected));
        }
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Appends `head` to the neighbours of `tail` and `tail` to the neighbours of `head`.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId) -> Result<(), ColrefError> {
        let tail_slot = self.slot(tail)?;
        let head_slot = self.slot(head)?;
        self.adjacency[tail_slot].push(head);
        self.adjacency[head_slot].push(tail);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges added, counting loops and repeats.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether the graph declares no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates the declared vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.adjacency.len()).map(VertexId::from_index)
    }

    /// Returns the neighbours of `vertex` in edge arrival order.
    pub fn neighbours(&self, vertex: VertexId) -> Result<&[VertexId], ColrefError> {
        let slot = self.slot(vertex)?;
        Ok(&self.adjacency[slot])
    }

    /// Returns every adjacency list, indexed by [`VertexId::index`].
    pub fn adjacency(&self) -> &[Vec<VertexId>] {
        &self.adjacency
    }

    /// Returns the degree of `vertex`.
    pub fn degree(&self, vertex: VertexId) -> Result<usize, ColrefError> {
        Ok(self.neighbours(vertex)?.len())
    }

    /// Returns the degree of every vertex, indexed by [`VertexId::index`].
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Returns the largest degree, or `0` for a graph without vertices.
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the common degree when every vertex has the same degree.
    ///
    /// A graph without vertices has no degree and reports `None`.
    pub fn regular_degree(&self) -> Option<usize> {
        let mut degrees = self.adjacency.iter().map(Vec::len);
        let first = degrees.next()?;
        degrees.all(|degree| degree == first).then_some(first)
    }

    /// Checks that every adjacency entry is mirrored with matching multiplicity.
    pub fn is_symmetric(&self) -> bool {
        let count = |list: &[VertexId], target: VertexId| {
            list.iter().filter(|&&entry| entry == target).count()
        };
        self.adjacency.iter().enumerate().all(|(slot, list)| {
            let v = VertexId::from_index(slot);
            list.iter().all(|&w| {
                match w.index().and_then(|other| self.adjacency.get(other)) {
                    Some(mirror) => count(list.as_slice(), w) == count(mirror.as_slice(), v),
                    None => false,
                }
            })
        })
    }

    fn slot(&self, vertex: VertexId) -> Result<usize, ColrefError> {
        vertex
            .index()
            .filter(|&slot| slot < self.adjacency.len())
            .ok_or_else(|| {
                graph_error(
                    ParseErrorKind::UndeclaredVertex.code(),
                    "vertex is outside the declared range",
                )
                .with_context("vertex", vertex)
                .with_context("declared", self.adjacency.len())
            })
    }
}

fn graph_error(code: impl Into<String>, message: impl Into<String>) -> ColrefError {
    ColrefError::Graph(ErrorInfo::new(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: u32) -> VertexId {
        VertexId::from_raw(raw)
    }

    #[test]
    fn loops_count_twice() {
        let mut graph = Graph::with_vertex_count(2);
        graph.add_edge(v(1), v(1)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();
        assert_eq!(graph.neighbours(v(1)).unwrap(), &[v(1), v(1), v(2)]);
        assert_eq!(graph.degree(v(1)).unwrap(), 3);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn vertex_zero_is_never_declared() {
        let graph = Graph::with_vertex_count(3);
        let err = graph.neighbours(v(0)).unwrap_err();
        assert_eq!(err.info().code, "undeclared-vertex");
    }

    #[test]
    fn asymmetric_lists_are_detected() {
        let mut graph = Graph::with_vertex_count(2);
        graph.adjacency[0].push(v(2));
        assert!(!graph.is_symmetric());
    }
}
