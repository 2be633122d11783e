//! Non-UI core: dataset bookkeeping, reconciliation, and chart aggregation.

pub mod charts;
pub mod dataset;
pub mod sync;

pub use charts::SenderAggregate;
pub use dataset::{EventDataset, SourceData};
pub use sync::{DatasetSync, ViewRefresh};
