use colref_core::VertexId;
use colref_graph::Graph;

use crate::signature::Signature;
use crate::slot;
use crate::sort_key::SortKey;

/// Numeral base for sort keys: one more than the maximum original degree.
///
/// Signature entries are degrees, so every entry is a valid digit.
pub fn degree_base(graph: &Graph) -> u64 {
    graph.max_degree() as u64 + 1
}

/// Encodes a signature as `Σ s_i · base^i`.
pub fn encode(signature: &Signature, base: u64) -> SortKey {
    SortKey::from_digits(base, signature.entries())
}

/// Encodes every signature, preserving slot indexing.
pub fn encode_all(signatures: &[Signature], base: u64) -> Vec<SortKey> {
    signatures
        .iter()
        .map(|signature| encode(signature, base))
        .collect()
}

/// Re-sorts `order` by ascending key. Ties keep their current relative order.
pub fn sort_by_keys(order: &mut [VertexId], keys: &[SortKey]) {
    order.sort_by(|a, b| keys[slot(*a)].cmp(&keys[slot(*b)]));
}

/// Number of distinct keys, i.e. cells of the partition the keys induce.
pub fn distinct_keys(keys: &[SortKey]) -> usize {
    let mut sorted: Vec<&SortKey> = keys.iter().collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colref_graph::path;

    #[test]
    fn base_uses_the_original_degree() {
        assert_eq!(degree_base(&path(4)), 3);
        assert_eq!(degree_base(&Graph::with_vertex_count(3)), 1);
    }

    #[test]
    fn ties_keep_previous_relative_order() {
        let keys = vec![
            SortKey::from_digits(3, &[2]),
            SortKey::from_digits(3, &[1]),
            SortKey::from_digits(3, &[2]),
            SortKey::from_digits(3, &[1]),
        ];
        let mut order: Vec<VertexId> = [3, 1, 4, 2].map(VertexId::from_raw).to_vec();
        sort_by_keys(&mut order, &keys);
        assert_eq!(order, [4, 2, 3, 1].map(VertexId::from_raw).to_vec());
        assert_eq!(distinct_keys(&keys), 2);
    }
}
