//! Plant audit queries: segments, rings, and isolated devices.
//!
//! These are snapshot-integrity reports for field operations:
//!
//! | Query | Answers |
//! |-------|---------|
//! | Segments | Which devices are physically connected to each other? |
//! | Rings | Which segments contain a redundant loop of fiber? |
//! | Isolated nodes | Which devices have no recorded connection at all? |
//!
//! Segment membership is computed with a union-find over the resolved edges.
//! A segment is flagged as a ring when it carries at least as many edges as
//! devices; a tree of N devices has N - 1 edges, so anything more closes a
//! loop. Parallel runs and self-loops count toward this test.

use std::collections::HashMap;

use petgraph::unionfind::UnionFind;

use crate::graph::Topology;
use crate::types::{Node, PlantStats, Segment};

impl<'a> Topology<'a> {
    /// Connected components of the plant, over resolved edges only.
    ///
    /// Segments are ordered by their first-seen device; device identifiers
    /// within a segment follow snapshot supply order. A device with no
    /// resolved connection forms a single-node segment.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let (order, index) = self.unique_ids();

        let mut union = UnionFind::<usize>::new(order.len());
        for edge in self.edge_records() {
            if let (Some(&from), Some(&to)) =
                (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
            {
                union.union(from, to);
            }
        }

        // Edge count per component root, for the ring test.
        let mut edge_counts: HashMap<usize, usize> = HashMap::new();
        for edge in self.edge_records() {
            if let (Some(&from), Some(_)) =
                (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
            {
                *edge_counts.entry(union.find(from)).or_default() += 1;
            }
        }

        // Group devices by component, keeping first-seen order.
        let mut positions: HashMap<usize, usize> = HashMap::new();
        let mut segments: Vec<Segment> = Vec::new();
        for (i, id) in order.iter().enumerate() {
            let root = union.find(i);
            let position = *positions.entry(root).or_insert_with(|| {
                segments.push(Segment {
                    node_ids: Vec::new(),
                    has_ring: false,
                });
                segments.len() - 1
            });
            segments[position].node_ids.push((*id).to_string());
        }

        for (root, position) in positions {
            let edges = edge_counts.get(&root).copied().unwrap_or(0);
            segments[position].has_ring = edges >= segments[position].node_ids.len();
        }

        segments
    }

    /// Devices with no resolved connection at all.
    ///
    /// A device whose only edges are dangling (the other endpoint has no
    /// record) counts as isolated.
    #[must_use]
    pub fn isolated_nodes(&self) -> Vec<&'a Node> {
        let (order, _) = self.unique_ids();
        order
            .iter()
            .filter(|id| self.neighbors(id).is_empty())
            .filter_map(|id| self.node(id))
            .collect()
    }

    /// Snapshot-level counts for the `stats` report.
    #[must_use]
    pub fn stats(&self) -> PlantStats {
        PlantStats {
            node_count: self.node_records().len(),
            edge_count: self.edge_records().len(),
            resolved_edge_count: self.resolved_edge_count(),
            dangling_edge_count: self.dangling_edge_count(),
            segment_count: self.segments().len(),
            isolated_node_count: self.isolated_nodes().len(),
        }
    }

    /// Unique node identifiers in supply order, with their positions.
    fn unique_ids(&self) -> (Vec<&'a str>, HashMap<&'a str, usize>) {
        let mut order: Vec<&str> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for node in self.node_records() {
            if !index.contains_key(node.id.as_str()) {
                index.insert(node.id.as_str(), order.len());
                order.push(node.id.as_str());
            }
        }
        (order, index)
    }
}
