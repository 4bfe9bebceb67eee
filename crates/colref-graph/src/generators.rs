use colref_core::VertexId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

fn v(raw: u32) -> VertexId {
    VertexId::from_raw(raw)
}

// Endpoints below are always within `1..=n`, so edge insertion cannot fail.
fn push_edges(graph: &mut Graph, edges: impl IntoIterator<Item = (u32, u32)>) {
    for (tail, head) in edges {
        let added = graph.add_edge(v(tail), v(head));
        debug_assert!(added.is_ok());
    }
}

/// Cycle `1 - 2 - ... - n - 1`. Fewer than three vertices produce a path.
pub fn cycle(n: u32) -> Graph {
    let mut graph = path(n);
    if n >= 3 {
        push_edges(&mut graph, [(n, 1)]);
    }
    graph
}

/// Path `1 - 2 - ... - n`.
pub fn path(n: u32) -> Graph {
    let mut graph = Graph::with_vertex_count(n);
    push_edges(&mut graph, (1..n).map(|tail| (tail, tail + 1)));
    graph
}

/// Complete graph on `n` vertices.
pub fn complete(n: u32) -> Graph {
    let mut graph = Graph::with_vertex_count(n);
    push_edges(
        &mut graph,
        (1..=n).flat_map(|tail| (tail + 1..=n).map(move |head| (tail, head))),
    );
    graph
}

/// Star with centre `1` and `leaves` leaves.
pub fn star(leaves: u32) -> Graph {
    let mut graph = Graph::with_vertex_count(leaves + 1);
    push_edges(&mut graph, (2..=leaves + 1).map(|leaf| (1, leaf)));
    graph
}

/// Multigraph with `n` vertices and `m` uniformly drawn edges.
///
/// Loops and repeated edges are kept, matching what the edge-list reader
/// accepts. The same seed always yields the same edge sequence.
pub fn random_gnm(n: u32, m: usize, seed: u64) -> Graph {
    let mut graph = Graph::with_vertex_count(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let edges: Vec<(u32, u32)> = (0..m)
        .map(|_| (rng.gen_range(1..=n), rng.gen_range(1..=n)))
        .collect();
    push_edges(&mut graph, edges);
    graph
}
