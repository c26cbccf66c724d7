//! Domain types for the fiber plant model.
//!
//! These types represent the core domain model:
//! - **Snapshot records**: [`Node`], [`Edge`] (supplied by the caller, never mutated)
//! - **Results**: [`TraceResult`], [`Segment`], [`PlantStats`] (returned by queries)
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | `node_type` | String not enum | Opaque category tag; carried through, never interpreted |
//! | `status`, `attributes` | Optional / defaulted | Pass-through payload; absent fields must not reject a record |
//! | Edge weight | None | All connections are unit cost for hop counting |
//! | "No path" | Ordinary data | Signaled via an empty path plus notes, never an error |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Snapshot records
// ============================================================================

/// A physical network device or infrastructure element (OLT, splitter, pole,
/// ONU, etc.).
///
/// Only `id` is interpreted by the tracer. Every other field is payload,
/// carried through to the result untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, stable across calls.
    pub id: String,
    /// Category tag (e.g., "olt", "onu", "splitter", "switch", "pole").
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Latitude, if the device has a surveyed position.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, if the device has a surveyed position.
    #[serde(default)]
    pub lng: Option<f64>,
    /// Operational status tag (e.g., "active", "faulty").
    #[serde(default)]
    pub status: Option<String>,
    /// Free-form device attributes (cable labels, port counts, ...).
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl Node {
    /// Create a node with the given identifier and category tag.
    ///
    /// All payload fields start empty; callers that need them set the fields
    /// directly.
    #[must_use]
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            name: String::new(),
            lat: None,
            lng: None,
            status: None,
            attributes: Map::new(),
        }
    }
}

/// An undirected physical link between two devices (e.g., a fiber run).
///
/// Traversal is permitted in either direction; there is no weight or cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint's node identifier.
    pub from: String,
    /// The other endpoint's node identifier.
    pub to: String,
}

impl Edge {
    /// Create an edge between two node identifiers.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether this edge links the two given identifiers, in either direction.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

// ============================================================================
// Query results
// ============================================================================

/// Outcome of one trace call.
///
/// An empty `path` means no path exists (or an endpoint was unknown); the
/// `notes` field carries the human-readable summary either way. A trace never
/// fails with an error for a disconnected or malformed plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceResult {
    /// Ordered device records from start to end inclusive; empty if no path.
    pub path: Vec<Node>,
    /// Human-readable summary of the outcome.
    pub notes: String,
}

impl TraceResult {
    /// Number of edge traversals in the path (0 for empty or single-node paths).
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether a path was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// One connected component of the plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Identifiers of the devices in this segment, in snapshot supply order.
    pub node_ids: Vec<String>,
    /// Whether the segment contains a ring (a cycle of connections).
    pub has_ring: bool,
}

/// Snapshot-level counts reported by the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantStats {
    /// Total node records in the snapshot.
    pub node_count: usize,
    /// Total edge records in the snapshot.
    pub edge_count: usize,
    /// Edges whose both endpoints resolve to a node record.
    pub resolved_edge_count: usize,
    /// Edges referencing at least one unknown node identifier.
    pub dangling_edge_count: usize,
    /// Connected components among the resolved plant.
    pub segment_count: usize,
    /// Nodes with no resolved connection at all.
    pub isolated_node_count: usize,
}
