use crate::logstore::LogStore;
use crate::registry::CallRegistry;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active call index
    pub registry: Arc<CallRegistry>,

    /// Rolling diagnostic log
    pub logs: Arc<LogStore>,

    /// Base URL used to build the call/log links returned by the calls
    /// endpoint, without a trailing slash
    pub public_base_url: String,
}

impl AppState {
    pub fn new(
        registry: Arc<CallRegistry>,
        logs: Arc<LogStore>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            logs,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}
