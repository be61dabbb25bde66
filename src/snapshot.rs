//! # Kitchen Snapshot
//!
//! A JSON document holding the kitchen state and the session overrides, as
//! exported by the application. Used by the command line tool.

use crate::errors::SnapshotError;
use crate::shopping_list::{KitchenState, SessionOverrides};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenSnapshot {
    #[serde(flatten)]
    pub state: KitchenState,
    /// User-curated filter strings saved with the household
    #[serde(default)]
    pub extra_filters: Vec<String>,
    #[serde(default)]
    pub unfiltered: HashSet<String>,
    #[serde(default)]
    pub checked: HashSet<String>,
}

impl KitchenSnapshot {
    pub fn session(&self) -> SessionOverrides {
        SessionOverrides {
            unfiltered: self.unfiltered.clone(),
            checked: self.checked.clone(),
        }
    }
}

/// Parse a snapshot from a JSON string
pub fn parse_snapshot(json: &str) -> Result<KitchenSnapshot, SnapshotError> {
    let snapshot: KitchenSnapshot = serde_json::from_str(json)?;
    debug!(
        "Parsed snapshot: {} plan days, {} staples, {} fridge, {} freezer, {} free entries",
        snapshot.state.plan.len(),
        snapshot.state.staples.len(),
        snapshot.state.fridge.len(),
        snapshot.state.freezer.len(),
        snapshot.state.free_entries.len()
    );
    Ok(snapshot)
}

/// Read and parse a snapshot file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<KitchenSnapshot, SnapshotError> {
    let path = path.as_ref();
    info!("Loading kitchen snapshot from {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| match SnapshotError::from(e) {
            SnapshotError::NotFound(_) => SnapshotError::NotFound(path.display().to_string()),
            other => other,
        })?;

    parse_snapshot(&content)
}
