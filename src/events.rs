//! Generic event system for msgscope.
//!
//! Host code can subscribe to dashboard events via [`EventController`].
//! Each event carries a set of [`EventKind`] flags (bitflags-style); the
//! subscriber specifies an [`EventFilter`] OR-mask and receives an event
//! when `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::transport::SourceId;

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// A previously unknown source appeared (via fetch or push).
    pub const SOURCE_ADDED: Self = Self(1 << 0);
    /// An intercepted event was recorded for some source.
    pub const EVENT_PUSHED: Self = Self(1 << 1);
    /// The selection moved to a different source.
    pub const SELECTION_CHANGED: Self = Self(1 << 2);
    /// A source-list response was merged into the dataset.
    pub const SOURCES_REFRESHED: Self = Self(1 << 3);
    /// The state snapshot was written to disk.
    pub const STATE_SAVED: Self = Self(1 << 4);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A dashboard event delivered to subscribers.
#[derive(Debug, Clone)]
pub struct DashboardEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Source id the event refers to, where applicable.
    pub source: Option<SourceId>,
}

impl DashboardEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            source: None,
        }
    }

    pub fn for_source<S: Into<SourceId>>(kinds: EventKind, source: S) -> Self {
        Self {
            kinds,
            source: Some(source.into()),
        }
    }
}

/// OR-mask selecting which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &DashboardEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

struct Subscriber {
    filter: EventFilter,
    sender: Sender<DashboardEvent>,
}

/// Collects and distributes dashboard events to subscribers.
///
/// Attach it to the config before launching the UI, then call
/// [`subscribe`](Self::subscribe) to receive events on an mpsc channel.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<Vec<Subscriber>>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscribe to events matching the given filter.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<DashboardEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut subs = self.inner.lock().unwrap();
        subs.push(Subscriber { filter, sender: tx });
        rx
    }

    /// Subscribe to all events (no filtering).
    pub fn subscribe_all(&self) -> Receiver<DashboardEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Emit an event to all matching subscribers. Subscribers whose receiver
    /// was dropped are pruned.
    pub fn emit(&self, event: DashboardEvent) {
        let mut subs = self.inner.lock().unwrap();
        subs.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}
