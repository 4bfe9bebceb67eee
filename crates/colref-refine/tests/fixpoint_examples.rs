use colref_core::VertexId;
use colref_graph::{cycle, parse_str, path, star, Graph};
use colref_refine::{refine, Executor, RefinementState, Signature};

fn ids(raw: &[u32]) -> Vec<VertexId> {
    raw.iter().copied().map(VertexId::from_raw).collect()
}

#[test]
fn four_cycle_is_regular_and_keeps_its_order() {
    let graph = parse_str("p edge 4\n1 2\n2 3\n3 4\n4 1\n").unwrap();
    let report = refine(graph);
    assert_eq!(report.regular_degree, Some(2));
    assert_eq!(report.order, ids(&[1, 2, 3, 4]));
    assert_eq!(report.rounds, 1);
    assert_eq!(report.sort_passes, 2);
    assert!(report.converged);
    assert_eq!(report.history.len(), 1);
    assert!(!report.history[0].order_changed);
    assert_eq!(report.distinct_keys, 1);
}

#[test]
fn path_puts_leaves_first_in_input_order() {
    let graph = parse_str("p edge 4\n1 2\n2 3\n3 4\n").unwrap();
    let report = refine(graph);
    assert_eq!(report.regular_degree, None);
    assert_eq!(report.order_raw(), vec![1, 4, 2, 3]);
    assert!(report.sort_passes >= 2);
    assert_eq!(report.rounds, 1);
    assert_eq!(report.base, 3);
    assert_eq!(report.history[0].total_signature_len, 6);
}

#[test]
fn longer_paths_need_more_rounds() {
    let report = refine(path(5));
    assert_eq!(report.order_raw(), vec![1, 5, 2, 4, 3]);
    assert_eq!(report.rounds, 2);
    let changed: Vec<bool> = report.history.iter().map(|r| r.order_changed).collect();
    assert_eq!(changed, vec![true, false]);

    let report = refine(path(7));
    assert_eq!(report.order_raw(), vec![1, 7, 2, 6, 3, 5, 4]);
    assert_eq!(report.rounds, 3);
    assert_eq!(report.max_signature_len, 8);
}

#[test]
fn reversed_labelling_of_a_path_still_orders_by_position() {
    let graph = parse_str("p edge 6\n6 5\n5 4\n4 3\n3 2\n2 1\n").unwrap();
    let report = refine(graph);
    assert_eq!(report.order_raw(), vec![1, 6, 2, 5, 3, 4]);
    assert_eq!(report.rounds, 2);
}

#[test]
fn star_centre_sorts_last() {
    let report = refine(star(3));
    assert_eq!(report.order_raw(), vec![2, 3, 4, 1]);
    assert_eq!(report.rounds, 1);
}

#[test]
fn triangle_with_pendant() {
    let graph = parse_str("p edge 4\n1 2\n2 3\n3 1\n3 4\n").unwrap();
    let report = refine(graph);
    assert_eq!(report.order_raw(), vec![4, 1, 2, 3]);
    assert_eq!(report.distinct_keys, 3);
}

#[test]
fn loops_feed_a_vertex_its_own_signature_twice() {
    let graph = parse_str("p edge 3\n1 1\n1 2\n").unwrap();
    let mut state = RefinementState::new(graph);
    state.sort_vertices();
    state.propagate(&Executor::Sequential);
    state.sort_vertices();
    let v = |raw| VertexId::from_raw(raw);
    assert_eq!(state.signature(v(1)).unwrap().entries(), &[1, 3, 3]);
    assert_eq!(state.signature(v(2)).unwrap().entries(), &[3]);
    assert!(state.signature(v(3)).unwrap().is_empty());
    assert_eq!(state.sort_key(v(1)).unwrap().to_u128(), Some(61));
    assert_eq!(state.vertices(), &ids(&[3, 2, 1])[..]);
}

#[test]
fn empty_graph_terminates_without_regularity() {
    let report = refine(Graph::with_vertex_count(0));
    assert!(report.order.is_empty());
    assert_eq!(report.regular_degree, None);
    assert_eq!(report.rounds, 1);
    assert!(report.converged);
}

#[test]
fn edgeless_graph_is_zero_regular() {
    let report = refine(Graph::with_vertex_count(3));
    assert_eq!(report.regular_degree, Some(0));
    assert_eq!(report.order_raw(), vec![1, 2, 3]);
    assert_eq!(report.base, 1);
}

#[test]
fn initial_state_uses_degrees() {
    let state = RefinementState::new(cycle(5));
    assert_eq!(state.snapshot_order(), ids(&[1, 2, 3, 4, 5]));
    assert!(state
        .signatures()
        .iter()
        .all(|signature| *signature == Signature::from_degree(2)));
    assert!(state.sort_keys().iter().all(|key| key.to_u128() == Some(2)));
}

#[test]
fn snapshots_are_detached_from_later_sorts() {
    let mut state = RefinementState::new(path(4));
    let before = state.snapshot_order();
    state.sort_vertices();
    assert_eq!(before, ids(&[1, 2, 3, 4]));
    assert_eq!(state.vertices(), &ids(&[1, 4, 2, 3])[..]);
}

#[test]
fn state_dump_lists_every_vertex() {
    let mut state = RefinementState::new(path(3));
    state.sort_vertices();
    let dump = state.to_string();
    assert!(dump.starts_with("----------- Graph -----------\n"));
    assert!(dump.contains("Vertex 2: [1, 3]\n  has signature [2]\n  has sort key 2\n"));
    assert_eq!(dump.matches("Vertex ").count(), 3);
}
