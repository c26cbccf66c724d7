//! Integration tests for plant audit queries and snapshot loading.

use std::io::Write;

use fibertrace::{Edge, Node, Snapshot, Topology};

/// Create a plant with a feeder ring, a separate spur, and a stranded pole.
///
/// ```text
///   OLT-01 — SW-1 — SW-2        ONU-301 — Splitter-3
///      \_____________/
///        (ring)
///
///   Pole-77 (edge to a device that has no record)
/// ```
fn audit_plant() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        Node::new("OLT-01", "olt"),
        Node::new("SW-1", "switch"),
        Node::new("SW-2", "switch"),
        Node::new("ONU-301", "onu"),
        Node::new("Splitter-3", "splitter"),
        Node::new("Pole-77", "pole"),
    ];
    let edges = vec![
        Edge::new("OLT-01", "SW-1"),
        Edge::new("SW-1", "SW-2"),
        Edge::new("SW-2", "OLT-01"),
        Edge::new("ONU-301", "Splitter-3"),
        Edge::new("Pole-77", "GHOST-1"),
    ];
    (nodes, edges)
}

#[test]
fn segments_report_ring_and_spur_separately() {
    let (nodes, edges) = audit_plant();
    let topology = Topology::new(&nodes, &edges);

    let segments = topology.segments();

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].node_ids, vec!["OLT-01", "SW-1", "SW-2"]);
    assert!(segments[0].has_ring, "feeder loop should be flagged as a ring");
    assert_eq!(segments[1].node_ids, vec!["ONU-301", "Splitter-3"]);
    assert!(!segments[1].has_ring);
    assert_eq!(segments[2].node_ids, vec!["Pole-77"]);
}

#[test]
fn stranded_pole_is_isolated_despite_its_dangling_edge() {
    let (nodes, edges) = audit_plant();
    let topology = Topology::new(&nodes, &edges);

    let isolated = topology.isolated_nodes();

    assert_eq!(isolated.len(), 1);
    assert_eq!(isolated[0].id, "Pole-77");
}

#[test]
fn stats_reflect_the_audit_plant() {
    let (nodes, edges) = audit_plant();
    let topology = Topology::new(&nodes, &edges);

    let stats = topology.stats();

    assert_eq!(stats.node_count, 6);
    assert_eq!(stats.edge_count, 5);
    assert_eq!(stats.resolved_edge_count, 4);
    assert_eq!(stats.dangling_edge_count, 1);
    assert_eq!(stats.segment_count, 3);
    assert_eq!(stats.isolated_node_count, 1);
}

#[test]
fn snapshot_file_round_trips_into_audit_queries() {
    let (nodes, edges) = audit_plant();
    let snapshot = Snapshot {
        captured_at: None,
        nodes,
        edges,
    };

    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    let json = serde_json::to_string(&snapshot).expect("snapshot should serialize");
    file.write_all(json.as_bytes())
        .expect("failed to write temp file");

    let loaded = Snapshot::from_path(file.path()).expect("snapshot should load");
    let topology = loaded.topology();

    assert_eq!(topology.segments().len(), 3);
    assert_eq!(topology.stats().dangling_edge_count, 1);
    assert!(topology.trace("OLT-01", "SW-2").is_found());
}

#[test]
fn empty_snapshot_audits_cleanly() {
    let topology = Topology::new(&[], &[]);

    assert!(topology.segments().is_empty());
    assert!(topology.isolated_nodes().is_empty());
    assert_eq!(topology.stats().node_count, 0);
}
