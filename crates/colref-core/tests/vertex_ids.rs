use colref_core::VertexId;

#[test]
fn ids_are_one_based() {
    let first = VertexId::from_index(0);
    assert_eq!(first.as_raw(), 1);
    assert_eq!(first.index(), Some(0));
    assert_eq!(VertexId::from_raw(0).index(), None);
}

#[test]
fn ids_display_as_raw_integers() {
    assert_eq!(VertexId::from_raw(42).to_string(), "42");
    assert_eq!(serde_json::to_string(&VertexId::from_raw(3)).unwrap(), "3");
}
