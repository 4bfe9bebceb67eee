use colref_core::VertexId;
use colref_graph::{complete, cycle, path, random_gnm, star, Graph};
use proptest::prelude::*;

#[test]
fn generators_have_expected_degrees() {
    assert_eq!(cycle(5).regular_degree(), Some(2));
    assert_eq!(path(4).degrees(), vec![1, 2, 2, 1]);
    assert_eq!(complete(4).regular_degree(), Some(3));
    assert_eq!(star(3).degrees(), vec![3, 1, 1, 1]);
    assert_eq!(cycle(2).edge_count(), 1);
}

#[test]
fn vertices_must_be_declared_in_sequence() {
    let mut graph = Graph::new();
    graph.add_vertex(VertexId::from_raw(1)).unwrap();
    let err = graph.add_vertex(VertexId::from_raw(1)).unwrap_err();
    assert_eq!(err.info().code, "vertex-out-of-sequence");
    let err = graph.add_vertex(VertexId::from_raw(3)).unwrap_err();
    assert_eq!(err.info().context.get("expected"), Some(&"2".to_string()));
    graph.add_vertex(VertexId::from_raw(2)).unwrap();
    assert_eq!(graph.vertex_count(), 2);
}

proptest! {
    #[test]
    fn random_multigraphs_stay_symmetric(seed in any::<u64>(), n in 1u32..12, m in 0usize..40) {
        let graph = random_gnm(n, m, seed);
        prop_assert!(graph.is_symmetric());
        prop_assert_eq!(graph.edge_count(), m);
        let degree_sum: usize = graph.degrees().iter().sum();
        prop_assert_eq!(degree_sum, 2 * m);
    }

    #[test]
    fn random_multigraphs_are_reproducible(seed in any::<u64>(), n in 1u32..12, m in 0usize..40) {
        prop_assert_eq!(random_gnm(n, m, seed), random_gnm(n, m, seed));
    }
}
