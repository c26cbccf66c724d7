//! Property tests for the path tracer.
//!
//! Random small plants are generated and the tracer's documented properties
//! are checked against them:
//! - Every returned consecutive pair corresponds to a supplied edge
//! - The returned hop count matches an independent BFS distance oracle
//! - Tracing a device to itself yields the single-element path
//! - Identical inputs yield identical results
//! - Edges referencing unknown devices change nothing

use std::collections::{HashMap, VecDeque};

use fibertrace::{Edge, Node, trace_path};
use proptest::prelude::*;

/// Random small plant: 2..8 devices, up to 16 connections between them,
/// plus a start/end device index.
fn arb_plant() -> impl Strategy<Value = (Vec<Node>, Vec<Edge>, usize, usize)> {
    (2usize..8).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..16),
            0..n,
            0..n,
        )
            .prop_map(|(n, pairs, start, end)| {
                let nodes = (0..n)
                    .map(|i| Node::new(format!("N{i}"), "pole"))
                    .collect::<Vec<_>>();
                let edges = pairs
                    .into_iter()
                    .map(|(a, b)| Edge::new(format!("N{a}"), format!("N{b}")))
                    .collect::<Vec<_>>();
                (nodes, edges, start, end)
            })
    })
}

/// Independent shortest-distance oracle: plain level-order BFS with a
/// distance map, structured nothing like the tracer's frontier of paths.
fn bfs_distance(edges: &[Edge], start: &str, end: &str) -> Option<usize> {
    if start == end {
        return Some(0);
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.from.as_str())
            .or_default()
            .push(edge.to.as_str());
        adjacency
            .entry(edge.to.as_str())
            .or_default()
            .push(edge.from.as_str());
    }

    let mut distance: HashMap<&str, usize> = HashMap::from([(start, 0)]);
    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = distance[current];
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };
        for &neighbor in neighbors {
            if !distance.contains_key(neighbor) {
                distance.insert(neighbor, d + 1);
                if neighbor == end {
                    return Some(d + 1);
                }
                queue.push_back(neighbor);
            }
        }
    }

    None
}

proptest! {
    #[test]
    fn returned_path_uses_only_supplied_edges((nodes, edges, start, end) in arb_plant()) {
        let start_id = format!("N{start}");
        let end_id = format!("N{end}");

        let result = trace_path(&start_id, &end_id, &nodes, &edges);

        for pair in result.path.windows(2) {
            prop_assert!(
                edges.iter().any(|e| e.connects(&pair[0].id, &pair[1].id)),
                "hop {} - {} has no supplied edge",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn hop_count_matches_distance_oracle((nodes, edges, start, end) in arb_plant()) {
        let start_id = format!("N{start}");
        let end_id = format!("N{end}");

        let result = trace_path(&start_id, &end_id, &nodes, &edges);
        let oracle = bfs_distance(&edges, &start_id, &end_id);

        match oracle {
            Some(distance) => {
                prop_assert!(result.is_found(), "oracle found a path, tracer did not");
                prop_assert_eq!(result.hop_count(), distance);
            }
            None => prop_assert!(!result.is_found(), "tracer found a path, oracle did not"),
        }
    }

    #[test]
    fn trace_to_self_is_the_singleton_path((nodes, edges, start, _end) in arb_plant()) {
        let start_id = format!("N{start}");

        let result = trace_path(&start_id, &start_id, &nodes, &edges);

        prop_assert_eq!(result.path.len(), 1);
        prop_assert_eq!(result.path[0].id.as_str(), start_id.as_str());
    }

    #[test]
    fn identical_inputs_give_identical_results((nodes, edges, start, end) in arb_plant()) {
        let start_id = format!("N{start}");
        let end_id = format!("N{end}");

        let first = trace_path(&start_id, &end_id, &nodes, &edges);
        let second = trace_path(&start_id, &end_id, &nodes, &edges);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn dangling_edges_change_nothing(
        (nodes, edges, start, end) in arb_plant(),
        phantoms in proptest::collection::vec((0usize..8, 0usize..4), 0..6),
    ) {
        let start_id = format!("N{start}");
        let end_id = format!("N{end}");

        // Append edges to devices that have no record; the tracer must
        // exclude them without changing any outcome.
        let mut dirty = edges.clone();
        dirty.extend(
            phantoms
                .into_iter()
                .map(|(a, b)| Edge::new(format!("N{a}"), format!("GHOST-{b}"))),
        );

        let clean_result = trace_path(&start_id, &end_id, &nodes, &edges);
        let dirty_result = trace_path(&start_id, &end_id, &nodes, &dirty);

        prop_assert_eq!(clean_result, dirty_result);
    }
}
