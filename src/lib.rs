pub mod config;
pub mod http;
pub mod logstore;
pub mod registry;

pub use config::Config;
pub use http::{create_router, AppState};
pub use logstore::{CaptureLayer, LogEntry, LogStore};
pub use registry::{CallRecord, CallRegistry, CallSession, RegistryError};
