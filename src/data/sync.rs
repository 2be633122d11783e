//! Event dataset synchronizer.
//!
//! [`DatasetSync`] reconciles three input streams into one consistent view:
//! the one-shot source-list response, asynchronous event pushes, and a
//! restored snapshot from a previous session. It owns the dataset and the
//! current selection and tells the caller how much of the view needs a
//! redraw after each mutation. It has no UI dependencies, so the
//! reconciliation rules are testable without a rendering host.

use std::collections::VecDeque;

use crate::data::charts::SenderAggregate;
use crate::data::dataset::{EventDataset, SourceData};
use crate::transport::{MessengerEvent, SourceId, SourceRecord};

/// How much of the view a mutation invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRefresh {
    /// Nothing visible changed (e.g. a push for an unselected source).
    None,
    /// The selected source's table and charts need a redraw.
    Selected,
}

impl ViewRefresh {
    pub fn needed(self) -> bool {
        matches!(self, ViewRefresh::Selected)
    }
}

/// Owns the dataset and selection; applies all reconciliation rules.
#[derive(Debug, Clone, Default)]
pub struct DatasetSync {
    dataset: EventDataset,
    selected: Option<SourceId>,
}

impl DatasetSync {
    /// Start empty (no snapshot, or an unreadable one).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a restored snapshot.
    pub fn from_snapshot(selected: Option<SourceId>, dataset: EventDataset) -> Self {
        Self { dataset, selected }
    }

    pub fn dataset(&self) -> &EventDataset {
        &self.dataset
    }

    pub fn selected_id(&self) -> Option<&SourceId> {
        self.selected.as_ref()
    }

    pub fn selected_source(&self) -> Option<&SourceData> {
        self.selected.as_deref().and_then(|id| self.dataset.get(id))
    }

    /// The selected source's log, newest first; empty when nothing is
    /// selected or the selection is stale (not yet in the dataset).
    pub fn selected_events(&self) -> &VecDeque<MessengerEvent> {
        static EMPTY: VecDeque<MessengerEvent> = VecDeque::new();
        self.selected_source().map(|s| &s.events).unwrap_or(&EMPTY)
    }

    /// Per-sender {count, total size} aggregation of the selected log.
    pub fn chart_data(&self) -> SenderAggregate {
        SenderAggregate::collect(self.selected_events())
    }

    /// Merge a source-list response. If nothing was selected yet and the
    /// dataset is now non-empty, the first source in iteration order becomes
    /// the selection. A list response always warrants a full redraw.
    pub fn apply_source_list(&mut self, records: Vec<SourceRecord>) -> ViewRefresh {
        for record in records {
            self.dataset.merge_record(record);
        }
        if self.selected.is_none() {
            self.selected = self.dataset.first_id().cloned();
        }
        ViewRefresh::Selected
    }

    /// Record a pushed event. Only a push for the currently selected source
    /// invalidates the view; everything else mutates state off-screen.
    pub fn apply_push(&mut self, source: &str, event: MessengerEvent) -> ViewRefresh {
        self.dataset.push_event(source, event);
        if self.selected.as_deref() == Some(source) {
            ViewRefresh::Selected
        } else {
            ViewRefresh::None
        }
    }

    /// Change the selection. Pure state transition: the dataset is not
    /// touched, only which log the views expose.
    pub fn select<S: Into<SourceId>>(&mut self, id: S) -> ViewRefresh {
        self.selected = Some(id.into());
        ViewRefresh::Selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{EventKind, SourceInfo};

    fn record(id: &str, name: &str) -> SourceRecord {
        SourceRecord {
            id: id.into(),
            name: name.into(),
            active: true,
            exports_diagnostic_api: true,
            info: Some(SourceInfo::default()),
        }
    }

    fn event(sender: &str, size: u64) -> MessengerEvent {
        MessengerEvent {
            kind: EventKind::Request,
            sender: sender.into(),
            receiver: "view".into(),
            method: "m".into(),
            correlation_id: None,
            size,
            error: None,
        }
    }

    #[test]
    fn first_fetch_selects_first_source() {
        let mut sync = DatasetSync::new();
        let refresh = sync.apply_source_list(vec![record("a", "A"), record("b", "B")]);
        assert!(refresh.needed());
        assert_eq!(sync.selected_id().unwrap(), "a");
        assert!(sync.dataset().get("a").unwrap().events.is_empty());
        assert!(sync.dataset().get("b").unwrap().events.is_empty());
    }

    #[test]
    fn fetch_keeps_existing_selection() {
        let mut sync = DatasetSync::new();
        sync.apply_source_list(vec![record("a", "A")]);
        sync.select("a");
        sync.apply_source_list(vec![record("b", "B"), record("a", "A")]);
        assert_eq!(sync.selected_id().unwrap(), "a");
    }

    #[test]
    fn push_for_unselected_source_does_not_refresh_view() {
        let mut sync = DatasetSync::new();
        sync.apply_source_list(vec![record("a", "A"), record("b", "B")]);
        assert_eq!(sync.selected_id().unwrap(), "a");

        let refresh = sync.apply_push("b", event("host", 5));
        assert!(!refresh.needed());
        assert_eq!(sync.dataset().get("b").unwrap().events.len(), 1);
    }

    #[test]
    fn push_for_selected_source_refreshes_view() {
        let mut sync = DatasetSync::new();
        sync.apply_source_list(vec![record("a", "A")]);
        let refresh = sync.apply_push("a", event("host", 5));
        assert!(refresh.needed());
        assert_eq!(sync.selected_events().len(), 1);
    }

    #[test]
    fn refresh_fetch_updates_metadata_without_touching_logs() {
        let mut sync = DatasetSync::new();
        sync.apply_source_list(vec![record("a", "A")]);
        sync.apply_push("a", event("host", 5));
        let before = sync.dataset().get("a").unwrap().events.clone();

        let mut rec = record("a", "A");
        rec.active = false;
        sync.apply_source_list(vec![rec]);

        let a = sync.dataset().get("a").unwrap();
        assert!(!a.active);
        assert_eq!(a.events, before);
    }

    #[test]
    fn selection_change_never_mutates_dataset() {
        let mut sync = DatasetSync::new();
        sync.apply_source_list(vec![record("a", "A"), record("b", "B")]);
        sync.apply_push("a", event("host", 5));
        let before = sync.dataset().clone();

        sync.select("b");
        assert_eq!(sync.dataset(), &before);
        assert!(sync.selected_events().is_empty());
    }

    #[test]
    fn stale_selection_exposes_empty_log() {
        let sync = DatasetSync::from_snapshot(Some("gone".into()), EventDataset::new());
        assert!(sync.selected_source().is_none());
        assert!(sync.selected_events().is_empty());
    }

    #[test]
    fn log_length_is_non_decreasing_across_fetch_merges() {
        let mut sync = DatasetSync::new();
        let mut last_len = 0usize;
        for i in 0..10 {
            if i % 3 == 0 {
                sync.apply_source_list(vec![record("a", "A")]);
            } else {
                sync.apply_push("a", event("host", i));
            }
            let len = sync.dataset().get("a").unwrap().events.len();
            assert!(len >= last_len);
            last_len = len;
        }
    }
}
