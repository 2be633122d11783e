//! Controllers for interacting with the dashboard from external code.
//!
//! The controller exposes lightweight state and a subscription mechanism so
//! non-UI code can observe the current selection and push simple requests
//! (select a source, trigger a list refresh) without touching the UI.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use crate::transport::SourceId;

/// Current selection information published by the UI.
#[derive(Debug, Clone, Default)]
pub struct SelectionInfo {
    /// Last observed selection.
    pub selected: Option<SourceId>,
    /// Ids of all known sources, dataset iteration order.
    pub known_sources: Vec<SourceId>,
}

pub(crate) struct SelectionCtrlInner {
    pub(crate) current: SelectionInfo,
    pub(crate) request_select: Option<SourceId>,
    pub(crate) request_refresh: bool,
    pub(crate) listeners: Vec<Sender<SelectionInfo>>,
}

/// Controller to observe the selection and request selection/refresh actions.
#[derive(Clone)]
pub struct SelectionController {
    pub(crate) inner: Arc<Mutex<SelectionCtrlInner>>, // crate-visible for UI
}

impl SelectionController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SelectionCtrlInner {
                current: SelectionInfo::default(),
                request_select: None,
                request_refresh: false,
                listeners: Vec::new(),
            })),
        }
    }

    /// Get the last selection info published by the UI.
    pub fn get_selection(&self) -> SelectionInfo {
        self.inner.lock().unwrap().current.clone()
    }

    /// Request selecting the given source. Applied on the next UI frame.
    pub fn request_select<S: Into<SourceId>>(&self, id: S) {
        self.inner.lock().unwrap().request_select = Some(id.into());
    }

    /// Request a source-list refresh, as if the refresh button was pressed.
    pub fn request_refresh(&self) {
        self.inner.lock().unwrap().request_refresh = true;
    }

    /// Subscribe to selection updates. The receiver gets a [`SelectionInfo`]
    /// whenever the UI publishes one.
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<SelectionInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().unwrap().listeners.push(tx);
        rx
    }

    /// UI side: take pending requests `(select, refresh)`.
    pub(crate) fn take_requests(&self) -> (Option<SourceId>, bool) {
        let mut inner = self.inner.lock().unwrap();
        let select = inner.request_select.take();
        let refresh = std::mem::take(&mut inner.request_refresh);
        (select, refresh)
    }

    /// UI side: publish the current selection and notify listeners.
    pub(crate) fn publish(&self, info: SelectionInfo) {
        let mut inner = self.inner.lock().unwrap();
        inner.current = info.clone();
        inner.listeners.retain(|tx| tx.send(info.clone()).is_ok());
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}
