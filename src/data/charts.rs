//! Per-sender aggregation feeding the two dashboard charts.

use std::collections::HashMap;

use crate::transport::MessengerEvent;

/// Event count and total payload size per sender.
///
/// Both charts are rendered from one aggregate so they always share the same
/// category axis. Senders are listed in first-seen order over the log, which
/// keeps the axis stable while new events for known senders stream in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderAggregate {
    /// Sender ids, first-seen order. Index-aligned with `counts`/`sizes`.
    pub senders: Vec<String>,
    /// Number of events per sender.
    pub counts: Vec<u64>,
    /// Summed payload size (chars) per sender.
    pub sizes: Vec<u64>,
}

impl SenderAggregate {
    /// Aggregate a log in a single pass.
    pub fn collect<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a MessengerEvent>,
    {
        let mut agg = Self::default();
        let mut index: HashMap<String, usize> = HashMap::new();
        for event in events {
            let i = match index.get(event.sender.as_str()) {
                Some(&i) => i,
                None => {
                    let i = agg.senders.len();
                    agg.senders.push(event.sender.clone());
                    agg.counts.push(0);
                    agg.sizes.push(0);
                    index.insert(event.sender.clone(), i);
                    i
                }
            };
            agg.counts[i] += 1;
            agg.sizes[i] += event.size;
        }
        agg
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::EventKind;

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
    fn groups_by_sender_with_first_seen_order() {
        let log = vec![
            event("host", 10),
            event("view", 4),
            event("host", 6),
            event("worker", 1),
        ];
        let agg = SenderAggregate::collect(&log);
        assert_eq!(agg.senders, vec!["host", "view", "worker"]);
        assert_eq!(agg.counts, vec![2, 1, 1]);
        assert_eq!(agg.sizes, vec![16, 4, 1]);
    }

    #[test]
    fn series_are_axis_aligned() {
        let log = vec![event("a", 1), event("b", 2), event("a", 3)];
        let agg = SenderAggregate::collect(&log);
        assert_eq!(agg.senders.len(), agg.counts.len());
        assert_eq!(agg.senders.len(), agg.sizes.len());
    }

    #[test]
    fn empty_log_yields_empty_aggregate() {
        let log: Vec<MessengerEvent> = Vec::new();
        let agg = SenderAggregate::collect(&log);
        assert!(agg.is_empty());
    }
}
