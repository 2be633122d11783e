//! UI building blocks for the dashboard.

pub mod charts_ui;
pub mod export;
pub mod header_ui;
pub mod info_ui;
pub mod table_ui;

pub use header_ui::HeaderAction;
