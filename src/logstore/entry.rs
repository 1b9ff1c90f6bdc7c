use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One immutable log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Insertion-order sequence number, assigned at append
    pub sequence: u64,

    /// When the entry was appended
    pub timestamp: DateTime<Utc>,

    /// Category tag; for captured tracing events this is the event target
    pub category: String,

    /// Log message text
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.sequence,
            self.timestamp.to_rfc3339(),
            self.category,
            self.message
        )
    }
}
