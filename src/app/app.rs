//! Dashboard app: channel ingestion, state synchronization, and rendering.

use std::path::PathBuf;

use eframe::egui;

use crate::config::{FeatureFlags, MsgScopeConfig};
use crate::controllers::{SelectionController, SelectionInfo};
use crate::data::charts::SenderAggregate;
use crate::data::sync::DatasetSync;
use crate::events::{DashboardEvent, EventController, EventKind};
use crate::panels::export;
use crate::panels::header_ui::{self, HeaderAction};
use crate::panels::{charts_ui, info_ui, table_ui};
use crate::persistence;
use crate::transport::{messenger_debug, HostMessage, MessengerConnection};

/// Egui app displaying intercepted messenger traffic for a selected source.
///
/// All dataset mutations happen inside [`update_data`](Self::update_data) by
/// draining the messenger channel, so reactions never overlap and the
/// dataset needs no locking.
pub struct MsgScopeApp {
    connection: MessengerConnection,
    sync: DatasetSync,
    persist_path: Option<PathBuf>,
    features: FeatureFlags,
    /// Optional controller to observe/drive the selection from host code.
    pub selection_controller: Option<SelectionController>,
    /// Optional controller broadcasting dashboard events to subscribers.
    pub event_controller: Option<EventController>,
    /// Cached per-sender aggregation for the selected source; recomputed
    /// only when a mutation invalidated the visible view.
    chart_cache: SenderAggregate,
}

impl MsgScopeApp {
    /// Build the app: restore the persisted snapshot (or start empty) and
    /// issue the initial, non-refresh source-list request.
    pub fn new(connection: MessengerConnection, cfg: &MsgScopeConfig) -> Self {
        let sync = match &cfg.persist_path {
            Some(path) => persistence::restore_or_default(path),
            None => DatasetSync::new(),
        };
        if connection.request_source_list(false).is_err() {
            messenger_debug!("[msgscope] host gone, initial list request dropped");
        }
        let mut app = Self {
            connection,
            sync,
            persist_path: cfg.persist_path.clone(),
            features: cfg.features.clone(),
            selection_controller: cfg.controllers.selection.clone(),
            event_controller: cfg.controllers.event.clone(),
            chart_cache: SenderAggregate::default(),
        };
        app.refresh_chart_cache();
        app
    }

    /// Direct access to the synchronizer (e.g. for embedding hosts).
    pub fn sync(&self) -> &DatasetSync {
        &self.sync
    }

    fn emit(&self, event: DashboardEvent) {
        if let Some(ctrl) = &self.event_controller {
            ctrl.emit(event);
        }
    }

    fn refresh_chart_cache(&mut self) {
        self.chart_cache = self.sync.chart_data();
    }

    /// Write the snapshot after a mutation. I/O failure is logged, not fatal.
    fn persist(&self) {
        let Some(path) = &self.persist_path else {
            return;
        };
        let state = persistence::capture_state(&self.sync);
        match persistence::save_state_to_path(&state, path) {
            Ok(()) => self.emit(DashboardEvent::new(EventKind::STATE_SAVED)),
            Err(e) => eprintln!("msgscope: failed to persist state: {e}"),
        }
    }

    fn publish_selection(&self) {
        if let Some(ctrl) = &self.selection_controller {
            ctrl.publish(SelectionInfo {
                selected: self.sync.selected_id().cloned(),
                known_sources: self
                    .sync
                    .dataset()
                    .iter_in_order()
                    .map(|s| s.id.clone())
                    .collect(),
            });
        }
    }

    fn request_refresh(&self) {
        if self.connection.request_source_list(true).is_err() {
            messenger_debug!("[msgscope] host gone, refresh request dropped");
        }
    }

    fn select_source(&mut self, id: String) {
        let refresh = self.sync.select(id.clone());
        self.persist();
        self.emit(DashboardEvent::for_source(EventKind::SELECTION_CHANGED, id));
        self.publish_selection();
        if refresh.needed() {
            self.refresh_chart_cache();
        }
    }

    /// Drain controller requests and inbound host messages; apply each as
    /// one discrete reaction and persist after every mutation.
    pub fn update_data(&mut self) {
        if let Some(ctrl) = self.selection_controller.clone() {
            let (select, refresh) = ctrl.take_requests();
            if let Some(id) = select {
                self.select_source(id);
            }
            if refresh {
                self.request_refresh();
            }
        }

        while let Some(msg) = self.connection.try_recv() {
            match msg {
                HostMessage::SourceList { sources } => {
                    self.sync.apply_source_list(sources);
                    self.persist();
                    self.emit(DashboardEvent::new(EventKind::SOURCES_REFRESHED));
                    self.publish_selection();
                    // A list response always warrants a full redraw.
                    self.refresh_chart_cache();
                }
                HostMessage::Push { source, event } => {
                    let is_new = !self.sync.dataset().contains(&source);
                    let refresh = self.sync.apply_push(&source, event);
                    self.persist();
                    if is_new {
                        self.emit(DashboardEvent::for_source(
                            EventKind::SOURCE_ADDED | EventKind::EVENT_PUSHED,
                            source.clone(),
                        ));
                        self.publish_selection();
                    } else {
                        self.emit(DashboardEvent::for_source(EventKind::EVENT_PUSHED, source));
                    }
                    // Chart/table refresh is selection-scoped: a push for an
                    // unselected source mutates state off-screen only.
                    if refresh.needed() {
                        self.refresh_chart_cache();
                    }
                }
            }
        }
    }

    fn export_csv(&self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(export::default_file_name())
            .add_filter("CSV", &["csv"])
            .save_file()
        {
            if let Err(e) = export::save_events_csv(&path, self.sync.selected_events()) {
                eprintln!("msgscope: failed to export events CSV: {e}");
            }
        }
    }

    /// Render the dashboard into the given `Ui`. Embedding hosts can call
    /// this directly; standalone mode goes through [`eframe::App::update`].
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.update_data();

        if self.features.header {
            let action = header_ui::header_contents(
                ui,
                self.sync.dataset(),
                self.sync.selected_id(),
                self.features.csv_export,
            );
            match action {
                Some(HeaderAction::Select(id)) => self.select_source(id),
                Some(HeaderAction::Refresh) => self.request_refresh(),
                Some(HeaderAction::ExportCsv) => self.export_csv(),
                None => {}
            }
            ui.separator();
        }

        if self.features.info_strip {
            info_ui::info_strip_contents(ui, self.sync.selected_source());
            ui.separator();
        }

        if self.features.charts {
            let chart_h = (ui.available_height() * 0.35).clamp(120.0, 280.0);
            egui::TopBottomPanel::bottom("msgscope_charts")
                .exact_height(chart_h)
                .show_inside(ui, |ui| {
                    charts_ui::charts_contents(ui, &self.chart_cache);
                });
        }

        egui::CentralPanel::default().show_inside(ui, |ui| {
            table_ui::event_table_contents(ui, self.sync.selected_events());
        });
    }
}

impl eframe::App for MsgScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
        // Pushes arrive outside egui's input events; keep polling.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
