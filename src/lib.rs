//! msgscope crate root: re-exports and module wiring.
//!
//! This crate provides a ready-to-use diagnostic dashboard built on
//! egui/eframe for intercepted request/notification messenger traffic:
//! - `transport`: messenger link types and channels feeding the UI
//! - `data`: dataset bookkeeping, reconciliation, and chart aggregation
//! - `persistence`: JSON snapshot save/load of the dashboard state
//! - `events`: event subscription for host code
//! - `controllers`: programmatic selection/refresh control
//! - `config`: top-level configuration
//! - `app`: the eframe app and run helpers
//! - `panels`: header, info strip, event table, and chart widgets

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod events;
pub mod panels;
pub mod persistence;
pub mod transport;

// Public re-exports for a compact external API
pub use app::{run_msgscope, MsgScopeApp};
pub use config::{FeatureFlags, MsgScopeConfig};
pub use controllers::{SelectionController, SelectionInfo};
pub use data::{DatasetSync, EventDataset, SenderAggregate, SourceData, ViewRefresh};
pub use events::{DashboardEvent, EventController, EventFilter, EventKind as DashboardEventKind};
pub use transport::{
    channel_messenger, EventKind, HostMessage, ListRequest, MessengerConnection, MessengerEvent,
    MessengerSink, SourceId, SourceInfo, SourceRecord,
};
