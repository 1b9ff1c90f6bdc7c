use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Point-in-time snapshot of one active call.
///
/// This is what `list`/`get` hand out; the live session handle never
/// leaves the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    /// Call-leg identifier (unique key)
    pub leg_id: String,

    /// Correlation id for tracing
    pub scenario_id: Uuid,

    /// When the leg was registered
    pub started_at: DateTime<Utc>,
}
