//! State persistence: save and load dashboard state to/from JSON.
//!
//! The snapshot stores the selection plus the dataset as ordered
//! `(id, source)` pairs, so a restore rebuilds both the map content and the
//! insertion order the selector list depends on. The selection lives under
//! one explicit field name (`selected_source`) on both the save and the
//! restore path; a mismatch here silently drops the selection on every
//! reload, which is exactly the failure mode this mirror type exists to
//! prevent.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::dataset::{EventDataset, SourceData};
use crate::data::sync::DatasetSync;
use crate::transport::{MessengerEvent, SourceId, SourceInfo};

// ---------- Serializable mirror types ----------

/// Serializable version of SourceData.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSerde {
    pub id: SourceId,
    pub name: String,
    pub active: bool,
    pub exports_diagnostic_api: bool,
    pub info: Option<SourceInfo>,
    /// Newest first, same order as the in-memory log.
    pub events: Vec<MessengerEvent>,
}

impl From<&SourceData> for SourceSerde {
    fn from(s: &SourceData) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            active: s.active,
            exports_diagnostic_api: s.exports_diagnostic_api,
            info: s.info,
            events: s.events.iter().cloned().collect(),
        }
    }
}

impl SourceSerde {
    /// Convert back to in-memory source data.
    pub fn into_data(self) -> SourceData {
        SourceData {
            id: self.id,
            name: self.name,
            active: self.active,
            exports_diagnostic_api: self.exports_diagnostic_api,
            info: self.info,
            events: self.events.into_iter().collect(),
        }
    }
}

/// Full dashboard state (for save/load).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStateSerde {
    /// Currently selected source id; empty string = no selection.
    pub selected_source: String,
    /// Dataset as ordered `(id, source)` pairs.
    pub sources: Vec<(SourceId, SourceSerde)>,
}

/// Capture the synchronizer state into a serializable snapshot.
pub fn capture_state(sync: &DatasetSync) -> DashboardStateSerde {
    DashboardStateSerde {
        selected_source: sync.selected_id().cloned().unwrap_or_default(),
        sources: sync
            .dataset()
            .to_pairs()
            .iter()
            .map(|(id, data)| (id.clone(), SourceSerde::from(data)))
            .collect(),
    }
}

/// Rebuild a synchronizer from a snapshot.
pub fn apply_state(state: DashboardStateSerde) -> DatasetSync {
    let selected = if state.selected_source.is_empty() {
        None
    } else {
        Some(state.selected_source)
    };
    let pairs = state
        .sources
        .into_iter()
        .map(|(id, s)| (id, s.into_data()))
        .collect();
    DatasetSync::from_snapshot(selected, EventDataset::from_pairs(pairs))
}

// ---------- Public API ----------

/// Serialize the dashboard state as pretty JSON.
pub fn state_to_json(state: &DashboardStateSerde) -> Result<String, String> {
    serde_json::to_string_pretty(state).map_err(|e| e.to_string())
}

/// Deserialize dashboard state from JSON.
pub fn state_from_json(json: &str) -> Result<DashboardStateSerde, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Save the dashboard state to a JSON file at the given path.
pub fn save_state_to_path(state: &DashboardStateSerde, path: &Path) -> Result<(), String> {
    let txt = state_to_json(state)?;
    std::fs::write(path, txt).map_err(|e| e.to_string())
}

/// Load the dashboard state from a JSON file at the given path.
pub fn load_state_from_path(path: &Path) -> Result<DashboardStateSerde, String> {
    let txt = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    state_from_json(&txt)
}

/// Restore a synchronizer from a snapshot file.
///
/// An absent or malformed file is a recoverable condition: the dashboard
/// starts with an empty dataset and no selection instead of failing.
pub fn restore_or_default(path: &Path) -> DatasetSync {
    match load_state_from_path(path) {
        Ok(state) => apply_state(state),
        Err(_) => DatasetSync::new(),
    }
}
