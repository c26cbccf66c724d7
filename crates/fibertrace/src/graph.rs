//! Plant topology and the fiber path tracer.
//!
//! This module builds an explicit adjacency structure from a snapshot of
//! nodes and edges, then answers shortest-path queries over it by
//! breadth-first search. All edges are unit cost, so the first path BFS
//! reaches the destination with is guaranteed minimal in hop count.
//!
//! ## Design
//!
//! - The adjacency map is built once per [`Topology`], turning neighbor
//!   lookup from an O(E) edge scan into an O(1) amortized map access
//! - Edges referencing an identifier with no node record are excluded at
//!   build time, so a trace can never route through a phantom device
//! - A trace is a pure read: no I/O, no mutation, no state between calls,
//!   and it never returns an error — "no path" is ordinary data
//!
//! ## Tie-breaking
//!
//! When multiple shortest paths exist, the one found first under the edge
//! supply order is returned. This is deterministic for a fixed snapshot
//! ordering, but callers must only rely on receiving *some* shortest path.

use std::collections::{HashMap, HashSet, VecDeque};

use serde_json::Value;
use tracing::debug;

use crate::types::{Edge, Node, TraceResult};

/// Adjacency view over one immutable snapshot of the plant.
///
/// Borrowed from the caller's node and edge slices; building one is cheap
/// and per-call, matching the snapshot lifecycle (fetch, query, discard).
pub struct Topology<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
    lookup: HashMap<&'a str, &'a Node>,
    adjacency: HashMap<&'a str, Vec<&'a str>>,
    resolved_edge_count: usize,
    dangling_edge_count: usize,
}

impl<'a> Topology<'a> {
    /// Build the adjacency structure for a snapshot.
    ///
    /// Edges are inserted in supply order, in both directions. An edge whose
    /// `from` or `to` does not resolve to any node record is skipped and
    /// counted as dangling. Duplicate node identifiers are tolerated; the
    /// last record wins in the lookup.
    #[must_use]
    pub fn new(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut lookup: HashMap<&str, &Node> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            lookup.insert(node.id.as_str(), node);
        }

        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut resolved_edge_count = 0;
        let mut dangling_edge_count = 0;

        for edge in edges {
            let (Some(from), Some(to)) = (
                lookup.get_key_value(edge.from.as_str()),
                lookup.get_key_value(edge.to.as_str()),
            ) else {
                debug!(
                    from = %edge.from,
                    to = %edge.to,
                    "Edge references an unknown node identifier, excluding it"
                );
                dangling_edge_count += 1;
                continue;
            };

            let (from, to) = (*from.0, *to.0);
            adjacency.entry(from).or_default().push(to);
            adjacency.entry(to).or_default().push(from);
            resolved_edge_count += 1;
        }

        Self {
            nodes,
            edges,
            lookup,
            adjacency,
            resolved_edge_count,
            dangling_edge_count,
        }
    }

    /// The node records this topology was built from, in supply order.
    #[must_use]
    pub fn node_records(&self) -> &'a [Node] {
        self.nodes
    }

    /// The edge records this topology was built from, in supply order.
    #[must_use]
    pub fn edge_records(&self) -> &'a [Edge] {
        self.edges
    }

    /// Look up a node record by identifier.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.lookup.get(id).copied()
    }

    /// Whether the snapshot contains a record for this identifier.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// Neighbor identifiers of a node, in edge supply order.
    ///
    /// Empty for unknown identifiers and for nodes with no resolved edge.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> &[&'a str] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Edges whose both endpoints resolved to a node record.
    #[must_use]
    pub fn resolved_edge_count(&self) -> usize {
        self.resolved_edge_count
    }

    /// Edges excluded because an endpoint had no node record.
    #[must_use]
    pub fn dangling_edge_count(&self) -> usize {
        self.dangling_edge_count
    }

    /// Trace the shortest hop-count path between two devices.
    ///
    /// Returns the ordered node records from `start_id` to `end_id`
    /// inclusive, or an empty path if either endpoint is unknown or no
    /// path exists. The outcome is always described in the result's notes;
    /// this method never fails.
    ///
    /// Tracing `start_id == end_id` for a known device returns the
    /// single-element path containing just that device.
    #[must_use]
    pub fn trace(&self, start_id: &str, end_id: &str) -> TraceResult {
        if !self.contains(start_id) || !self.contains(end_id) {
            debug!(start = start_id, end = end_id, "Trace endpoint not in snapshot");
            return Self::not_found(start_id, end_id);
        }

        // Frontier of partial paths, each an ordered list of identifiers.
        // The visited set guarantees each node is expanded at most once,
        // bounding work to O(V + E) even on cyclic plants.
        let mut frontier: VecDeque<Vec<&str>> = VecDeque::new();
        let mut visited: HashSet<&str> = HashSet::new();
        frontier.push_back(vec![start_id]);

        while let Some(path) = frontier.pop_front() {
            let Some(&last) = path.last() else {
                continue;
            };

            // First path to reach the destination is minimal: BFS explores
            // level by level and all edges are unit cost.
            if last == end_id {
                return self.found(&path, start_id, end_id);
            }

            if !visited.insert(last) {
                continue;
            }

            for &neighbor in self.neighbors(last) {
                if !visited.contains(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    frontier.push_back(extended);
                }
            }
        }

        Self::not_found(start_id, end_id)
    }

    /// Convert a found identifier path into full node records plus notes.
    fn found(&self, ids: &[&str], start_id: &str, end_id: &str) -> TraceResult {
        // Every id came from the adjacency map, so the lookups succeed; the
        // filter is a guard against dangling identifiers, not a code path.
        let path: Vec<Node> = ids
            .iter()
            .filter_map(|id| self.node(id).cloned())
            .collect();

        let hops = path.len().saturating_sub(1);
        let mut notes = format!("Traced {} from {start_id} to {end_id}", hop_phrase(hops));
        if let Some(cable) = second_hop_cable(&path) {
            notes.push_str(&format!(" (cable: {cable})"));
        }

        TraceResult { path, notes }
    }

    fn not_found(start_id: &str, end_id: &str) -> TraceResult {
        TraceResult {
            path: vec![],
            notes: format!("No path could be traced between {start_id} and {end_id}"),
        }
    }
}

/// Trace the shortest hop-count path between two devices in one call.
///
/// Builds a [`Topology`] for the snapshot and runs [`Topology::trace`].
/// Callers issuing several traces against the same snapshot should build
/// the topology once instead.
#[must_use]
pub fn trace_path(start_id: &str, end_id: &str, nodes: &[Node], edges: &[Edge]) -> TraceResult {
    Topology::new(nodes, edges).trace(start_id, end_id)
}

/// Format a hop count for notes ("1 hop", "2 hops").
fn hop_phrase(hops: usize) -> String {
    if hops == 1 {
        "1 hop".to_string()
    } else {
        format!("{hops} hops")
    }
}

/// The illustrative cable label of the path's second hop, if it carries one.
fn second_hop_cable(path: &[Node]) -> Option<String> {
    let label = path.get(1)?.attributes.get("cable")?;
    match label {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
