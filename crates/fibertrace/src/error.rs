//! Error types for fibertrace operations.
//!
//! ## Error Philosophy
//!
//! Only infrastructure failures are errors: a snapshot file that cannot be
//! read or parsed. Domain outcomes are never errors:
//!
//! - "No path" is ordinary data, returned through [`crate::TraceResult`]
//! - Edges referencing unknown node identifiers are tolerated, excluded
//!   from traversal, and counted — they never halt anything

use thiserror::Error;

/// Result type for fibertrace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fibertrace operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Snapshot file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file is not valid JSON for the plant schema
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
