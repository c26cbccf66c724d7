//! # Fibertrace: Fiber Plant Connectivity Tracing
//!
//! Fibertrace answers "how does device A physically reach device B?" over a
//! snapshot of a fiber-optic plant: infrastructure devices as vertices,
//! physical connections as undirected unit-cost edges. It returns one
//! shortest hop-count path as full device records, plus audit reports
//! (segments, rings, isolated devices) over the same snapshot.
//!
//! ## Design Philosophy
//!
//! - **Snapshot in, path out** - the caller supplies the node and edge sets;
//!   the tracer never reaches out to storage, keeping it pure and testable
//! - **"No path" is data** - disconnected plants and unknown endpoints are
//!   ordinary outcomes described in the result notes, never errors
//! - **Tolerant of dirty plants** - edges referencing unknown devices are
//!   excluded and counted, not fatal
//! - **Embeddable** - library first, CLI second
//!
//! ## Quick Start
//!
//! ```
//! use fibertrace::{trace_path, Edge, Node};
//!
//! let nodes = vec![
//!     Node::new("OLT-01", "olt"),
//!     Node::new("Splitter-1", "splitter"),
//!     Node::new("ONU-101", "onu"),
//! ];
//! let edges = vec![
//!     Edge::new("OLT-01", "Splitter-1"),
//!     Edge::new("Splitter-1", "ONU-101"),
//! ];
//!
//! let result = trace_path("OLT-01", "ONU-101", &nodes, &edges);
//! assert_eq!(result.hop_count(), 2);
//! assert_eq!(result.path[1].id, "Splitter-1");
//! ```

#![forbid(unsafe_code)]

mod analysis;
mod error;
mod graph;
mod snapshot;
mod types;

pub use error::{Error, Result};
pub use graph::{Topology, trace_path};
pub use snapshot::Snapshot;
pub use types::{Edge, Node, PlantStats, Segment, TraceResult};
