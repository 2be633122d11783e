//! Configuration types for the dashboard.

use std::path::PathBuf;

use crate::controllers::SelectionController;
use crate::events::EventController;

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused dashboard for embedding.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the header with the source selector and refresh button.
    pub header: bool,
    /// Show the status / counters strip for the selected source.
    pub info_strip: bool,
    /// Show the per-sender charts below the table.
    pub charts: bool,
    /// Show the CSV export button.
    pub csv_export: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            header: true,
            info_strip: true,
            charts: true,
            csv_export: true,
        }
    }
}

/// Optional programmatic controllers attached to the dashboard.
#[derive(Clone, Default)]
pub struct Controllers {
    pub selection: Option<SelectionController>,
    pub event: Option<EventController>,
}

/// Top-level configuration for the dashboard.
pub struct MsgScopeConfig {
    /// Native window title.
    pub title: String,
    /// Where to persist the UI state snapshot. `None` disables persistence.
    pub persist_path: Option<PathBuf>,
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,
    /// External controllers for programmatic interaction.
    pub controllers: Controllers,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for MsgScopeConfig {
    fn default() -> Self {
        Self {
            title: "Messenger Devtools".to_string(),
            persist_path: None,
            features: FeatureFlags::default(),
            controllers: Controllers::default(),
            native_options: None,
        }
    }
}
