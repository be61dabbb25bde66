//! # Error Types Module
//!
//! Errors raised at the edges of the crate, where the kitchen snapshot is read
//! from disk and parsed. List derivation itself never fails.

/// Custom error types for snapshot loading
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// Snapshot file does not exist
    NotFound(String),
    /// Snapshot file could not be read
    Read(String),
    /// Snapshot content is not valid JSON for the expected shape
    Parse(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::NotFound(msg) => write!(f, "Snapshot not found: {msg}"),
            SnapshotError::Read(msg) => write!(f, "Snapshot read error: {msg}"),
            SnapshotError::Parse(msg) => write!(f, "Snapshot parse error: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => SnapshotError::NotFound(err.to_string()),
            _ => SnapshotError::Read(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Parse(err.to_string())
    }
}
