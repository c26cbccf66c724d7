//! Snapshot loading for the CLI and other file-backed callers.
//!
//! Library callers pass node and edge slices directly; a [`Snapshot`] is the
//! on-disk representation of one: a JSON document with a `nodes` array, an
//! `edges` array, and an optional capture timestamp.
//!
//! The parse is strict — a malformed file is an infrastructure error, not
//! something to paper over. Tolerance for *semantic* defects (dangling edge
//! references, duplicate identifiers) lives in the topology layer, which
//! handles them per record instead of rejecting the snapshot.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::Topology;
use crate::types::{Edge, Node};

/// One immutable snapshot of the plant, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this snapshot was taken from the backing store, if recorded.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    /// Infrastructure device records.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Physical connection records.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Parse`] if it is not valid snapshot JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "Loaded plant snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a snapshot from any JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Parse`] if the input is not valid snapshot JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build the adjacency view over this snapshot's records.
    #[must_use]
    pub fn topology(&self) -> Topology<'_> {
        Topology::new(&self.nodes, &self.edges)
    }
}
