//! Messenger link types and channels feeding the dashboard UI.
//!
//! The dashboard never talks to a wire protocol directly. Instead the host
//! side of the application obtains a [`MessengerSink`] and the UI side a
//! [`MessengerConnection`] from [`channel_messenger`]. The host pushes
//! intercepted events and answers source-list requests; the UI drains
//! everything during its per-frame update.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use serde::{Deserialize, Serialize};

// Feature-gated debug logging for messenger link traffic.
// Enable prints with: cargo run --features messenger_link_debug --example simulated_traffic
// When the feature is disabled, logs are compiled out.
#[cfg(feature = "messenger_link_debug")]
#[allow(unused_macros)]
macro_rules! messenger_debug { ($($arg:tt)*) => { eprintln!($($arg)*); } }

#[cfg(not(feature = "messenger_link_debug"))]
#[allow(unused_macros)]
macro_rules! messenger_debug {
    ($($arg:tt)*) => {{ /* no-op */ }};
}

pub(crate) use messenger_debug;

/// Identifier of a monitored source (unique within a dataset).
pub type SourceId = String;

/// Category of an observed message exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Request,
    Response,
    Notification,
    Unknown,
}

impl EventKind {
    /// Short label used in the event table's type column.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Request => "request",
            EventKind::Response => "response",
            EventKind::Notification => "notification",
            EventKind::Unknown => "unknown",
        }
    }
}

/// One intercepted message exchange between two sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessengerEvent {
    pub kind: EventKind,
    pub sender: String,
    pub receiver: String,
    pub method: String,
    /// Correlation id linking a response to its request, if any.
    pub correlation_id: Option<String>,
    /// Payload size in characters.
    pub size: u64,
    /// Error description when the exchange failed.
    pub error: Option<String>,
}

impl MessengerEvent {
    /// Whether this event carries an error description.
    pub fn is_error(&self) -> bool {
        self.error.as_deref().map_or(false, |e| !e.is_empty())
    }
}

/// Live counters reported by a source's diagnostic API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Number of attached views.
    pub views: u32,
    /// Number of registered diagnostic listeners.
    pub listeners: u32,
    /// Number of requests awaiting a response.
    pub pending_requests: u32,
}

/// Metadata for one monitored source as returned by a source-list request.
///
/// List responses are metadata-only: a record never carries an event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: SourceId,
    pub name: String,
    pub active: bool,
    pub exports_diagnostic_api: bool,
    pub info: Option<SourceInfo>,
}

/// A request from the UI to (re-)fetch the list of monitored sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    /// `true` when the operator pressed the refresh button, `false` for the
    /// initial population at startup.
    pub refresh: bool,
}

/// Messages sent from the host side to the UI.
#[derive(Debug, Clone)]
pub enum HostMessage {
    /// Response to a [`ListRequest`]: the current set of monitored sources.
    SourceList { sources: Vec<SourceRecord> },
    /// An intercepted event for the given source, pushed as it happens.
    Push {
        source: SourceId,
        event: MessengerEvent,
    },
}

/// Host-side handle: feed intercepted events and answer list requests.
pub struct MessengerSink {
    tx: Sender<HostMessage>,
    request_rx: Receiver<ListRequest>,
}

impl MessengerSink {
    /// Push one intercepted event for a source.
    pub fn push_event<S: Into<SourceId>>(
        &self,
        source: S,
        event: MessengerEvent,
    ) -> Result<(), std::sync::mpsc::SendError<HostMessage>> {
        let source = source.into();
        messenger_debug!("[msgscope] push {} {}", source, event.method);
        self.tx.send(HostMessage::Push { source, event })
    }

    /// Answer an outstanding list request with the current source metadata.
    pub fn send_source_list(
        &self,
        sources: Vec<SourceRecord>,
    ) -> Result<(), std::sync::mpsc::SendError<HostMessage>> {
        messenger_debug!("[msgscope] source list ({} entries)", sources.len());
        self.tx.send(HostMessage::SourceList { sources })
    }

    /// Take the next pending list request, if any (non-blocking).
    ///
    /// Returns `None` both when no request is pending and when the UI side
    /// has been dropped; hosts that need to distinguish can watch their own
    /// send results instead.
    pub fn try_recv_request(&self) -> Option<ListRequest> {
        match self.request_rx.try_recv() {
            Ok(req) => Some(req),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// UI-side handle: issue list requests and drain inbound host messages.
pub struct MessengerConnection {
    rx: Receiver<HostMessage>,
    request_tx: Sender<ListRequest>,
}

impl MessengerConnection {
    /// Ask the host for the source list. The response arrives later as a
    /// [`HostMessage::SourceList`]; pushes may interleave meanwhile.
    pub fn request_source_list(
        &self,
        refresh: bool,
    ) -> Result<(), std::sync::mpsc::SendError<ListRequest>> {
        messenger_debug!("[msgscope] list request (refresh={refresh})");
        self.request_tx.send(ListRequest { refresh })
    }

    /// Take the next inbound host message, if any (non-blocking).
    pub fn try_recv(&self) -> Option<HostMessage> {
        match self.rx.try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Create a new messenger link: `(MessengerSink, MessengerConnection)`.
pub fn channel_messenger() -> (MessengerSink, MessengerConnection) {
    let (tx, rx) = std::sync::mpsc::channel();
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    (
        MessengerSink { tx, request_rx },
        MessengerConnection { rx, request_tx },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(method: &str) -> MessengerEvent {
        MessengerEvent {
            kind: EventKind::Request,
            sender: "host".into(),
            receiver: "view".into(),
            method: method.into(),
            correlation_id: Some("1".into()),
            size: 42,
            error: None,
        }
    }

    #[test]
    fn list_request_reaches_sink() {
        let (sink, conn) = channel_messenger();
        conn.request_source_list(true).unwrap();
        assert_eq!(sink.try_recv_request(), Some(ListRequest { refresh: true }));
        assert_eq!(sink.try_recv_request(), None);
    }

    #[test]
    fn push_reaches_connection() {
        let (sink, conn) = channel_messenger();
        sink.push_event("ext.a", event("doIt")).unwrap();
        match conn.try_recv() {
            Some(HostMessage::Push { source, event }) => {
                assert_eq!(source, "ext.a");
                assert_eq!(event.method, "doIt");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn source_list_reaches_connection() {
        let (sink, conn) = channel_messenger();
        sink.send_source_list(vec![SourceRecord {
            id: "ext.a".into(),
            name: "A".into(),
            active: true,
            exports_diagnostic_api: true,
            info: None,
        }])
        .unwrap();
        match conn.try_recv() {
            Some(HostMessage::SourceList { sources }) => assert_eq!(sources.len(), 1),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn is_error_requires_non_empty_text() {
        let mut e = event("m");
        assert!(!e.is_error());
        e.error = Some(String::new());
        assert!(!e.is_error());
        e.error = Some("boom".into());
        assert!(e.is_error());
    }
}
