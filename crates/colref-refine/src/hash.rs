use colref_core::VertexId;
use colref_graph::Graph;
use sha2::{Digest, Sha256};

/// Hashes the vertex count and every adjacency list in arrival order.
pub fn graph_hash(graph: &Graph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.vertex_count() as u64).to_le_bytes());
    for neighbours in graph.adjacency() {
        update_ids(neighbours, &mut hasher);
    }
    hex::encode(hasher.finalize())
}

/// Hashes a vertex order.
pub fn order_digest(order: &[VertexId]) -> String {
    let mut hasher = Sha256::new();
    update_ids(order, &mut hasher);
    hex::encode(hasher.finalize())
}

fn update_ids(ids: &[VertexId], hasher: &mut Sha256) {
    hasher.update((ids.len() as u64).to_le_bytes());
    for id in ids {
        hasher.update(id.as_raw().to_le_bytes());
    }
}
