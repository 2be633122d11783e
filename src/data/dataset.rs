//! Per-source event bookkeeping.
//!
//! An [`EventDataset`] maps source ids to their metadata and accumulated
//! event log. Iteration order is insertion order; the selector dropdown and
//! the "first source" auto-selection both rely on it.

use std::collections::{HashMap, VecDeque};

use crate::transport::{MessengerEvent, SourceId, SourceInfo, SourceRecord};

/// Metadata plus the accumulated event log for one monitored source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceData {
    pub id: SourceId,
    pub name: String,
    pub active: bool,
    pub exports_diagnostic_api: bool,
    pub info: Option<SourceInfo>,
    /// Observed events, newest first. Pushes prepend.
    pub events: VecDeque<MessengerEvent>,
}

impl SourceData {
    /// Placeholder for a source first seen via a push, before any list fetch
    /// mentioned it. Name stays empty until metadata arrives.
    pub fn placeholder(id: SourceId) -> Self {
        Self {
            id,
            name: String::new(),
            active: true,
            exports_diagnostic_api: true,
            info: None,
            events: VecDeque::new(),
        }
    }

    fn from_record(record: SourceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            active: record.active,
            exports_diagnostic_api: record.exports_diagnostic_api,
            info: record.info,
            events: VecDeque::new(),
        }
    }
}

/// All known sources keyed by id, with explicit insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDataset {
    sources: HashMap<SourceId, SourceData>,
    order: Vec<SourceId>,
}

impl EventDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&SourceData> {
        self.sources.get(id)
    }

    /// First source id in insertion order, if any.
    pub fn first_id(&self) -> Option<&SourceId> {
        self.order.first()
    }

    /// Sources in insertion order.
    pub fn iter_in_order(&self) -> impl Iterator<Item = &SourceData> {
        self.order.iter().filter_map(|id| self.sources.get(id))
    }

    /// Merge freshly fetched metadata into the dataset.
    ///
    /// List responses never carry events, so the rule is: a new id is
    /// inserted with an empty log; a known id gets all metadata fields
    /// replaced while the accumulated log is kept untouched. Metadata always
    /// reflects the latest fetch, event history is never fetch-overwritten.
    pub fn merge_record(&mut self, record: SourceRecord) {
        match self.sources.get_mut(&record.id) {
            Some(existing) => {
                existing.name = record.name;
                existing.active = record.active;
                existing.exports_diagnostic_api = record.exports_diagnostic_api;
                existing.info = record.info;
            }
            None => {
                self.order.push(record.id.clone());
                self.sources
                    .insert(record.id.clone(), SourceData::from_record(record));
            }
        }
    }

    /// Prepend an event to the given source's log (newest first).
    ///
    /// An unknown id gets a placeholder entry first, so pushes arriving
    /// before the id shows up in any list fetch are tolerated. Returns
    /// `true` when the source was created by this call.
    pub fn push_event(&mut self, id: &str, event: MessengerEvent) -> bool {
        let created = !self.sources.contains_key(id);
        if created {
            self.order.push(id.to_string());
            self.sources
                .insert(id.to_string(), SourceData::placeholder(id.to_string()));
        }
        // Entry exists by construction at this point.
        if let Some(data) = self.sources.get_mut(id) {
            data.events.push_front(event);
        }
        created
    }

    /// Rebuild from persisted `(id, source)` pairs, restoring insertion order.
    pub fn from_pairs(pairs: Vec<(SourceId, SourceData)>) -> Self {
        let mut ds = Self::new();
        for (id, data) in pairs {
            if ds.sources.contains_key(&id) {
                continue;
            }
            ds.order.push(id.clone());
            ds.sources.insert(id, data);
        }
        ds
    }

    /// Snapshot as ordered `(id, source)` pairs for persistence.
    pub fn to_pairs(&self) -> Vec<(SourceId, SourceData)> {
        self.order
            .iter()
            .filter_map(|id| self.sources.get(id).map(|d| (id.clone(), d.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::EventKind;

    fn record(id: &str, name: &str, active: bool) -> SourceRecord {
        SourceRecord {
            id: id.into(),
            name: name.into(),
            active,
            exports_diagnostic_api: true,
            info: None,
        }
    }

    fn event(method: &str) -> MessengerEvent {
        MessengerEvent {
            kind: EventKind::Notification,
            sender: "host".into(),
            receiver: "view".into(),
            method: method.into(),
            correlation_id: None,
            size: 10,
            error: None,
        }
    }

    #[test]
    fn merge_inserts_new_source_with_empty_log() {
        let mut ds = EventDataset::new();
        ds.merge_record(record("a", "A", true));
        let a = ds.get("a").unwrap();
        assert_eq!(a.name, "A");
        assert!(a.events.is_empty());
    }

    #[test]
    fn merge_replaces_metadata_but_keeps_events() {
        let mut ds = EventDataset::new();
        ds.merge_record(record("a", "A", true));
        ds.push_event("a", event("m1"));
        ds.push_event("a", event("m2"));

        ds.merge_record(record("a", "A renamed", false));
        let a = ds.get("a").unwrap();
        assert_eq!(a.name, "A renamed");
        assert!(!a.active);
        assert_eq!(a.events.len(), 2, "merge must never drop events");
        assert_eq!(a.events[0].method, "m2");
    }

    #[test]
    fn push_prepends_newest_first() {
        let mut ds = EventDataset::new();
        ds.merge_record(record("a", "A", true));
        ds.push_event("a", event("first"));
        ds.push_event("a", event("second"));
        let a = ds.get("a").unwrap();
        assert_eq!(a.events[0].method, "second");
        assert_eq!(a.events[1].method, "first");
    }

    #[test]
    fn push_to_unknown_id_synthesizes_placeholder() {
        let mut ds = EventDataset::new();
        let created = ds.push_event("ghost", event("m"));
        assert!(created);
        let g = ds.get("ghost").unwrap();
        assert_eq!(g.name, "");
        assert!(g.active);
        assert!(g.exports_diagnostic_api);
        assert_eq!(g.events.len(), 1);
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let mut ds = EventDataset::new();
        ds.merge_record(record("b", "B", true));
        ds.merge_record(record("a", "A", true));
        ds.push_event("c", event("m"));
        let ids: Vec<&str> = ds.iter_in_order().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(ds.first_id().unwrap(), "b");
    }

    #[test]
    fn pairs_round_trip_preserves_order_and_logs() {
        let mut ds = EventDataset::new();
        ds.merge_record(record("b", "B", true));
        ds.merge_record(record("a", "A", false));
        ds.push_event("a", event("m"));

        let restored = EventDataset::from_pairs(ds.to_pairs());
        assert_eq!(restored, ds);
    }
}
