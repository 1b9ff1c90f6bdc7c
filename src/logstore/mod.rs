//! In-memory diagnostic log
//!
//! This module provides the rolling log served by the HTTP API:
//! - Append-only, capacity-bounded storage (oldest entries evicted first)
//! - Paginated reads with skip/take and substring filtering
//! - A `tracing` layer that mirrors every emitted event into the store
//!
//! Nothing here persists; the log is reset on process restart.

mod entry;
mod layer;
mod store;

pub use entry::LogEntry;
pub use layer::CaptureLayer;
pub use store::LogStore;
