use super::error::RegistryError;
use super::record::CallRecord;
use super::session::CallSession;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// One registry entry: the shared session handle plus registration metadata.
struct ActiveCall {
    session: Arc<dyn CallSession>,
    started_at: DateTime<Utc>,
}

impl ActiveCall {
    fn record(&self, leg_id: &str) -> CallRecord {
        CallRecord {
            leg_id: leg_id.to_string(),
            scenario_id: self.session.scenario_id(),
            started_at: self.started_at,
        }
    }
}

/// Thread-safe index of currently active calls (leg id → session).
///
/// Shared process-wide behind an `Arc`; all operations take `&self` and are
/// safe to call concurrently from any number of request handlers. The map
/// lock is never held across a signaling await.
pub struct CallRegistry {
    calls: RwLock<HashMap<String, ActiveCall>>,
}

impl CallRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(HashMap::new()),
        }
    }

    /// Register a call leg once signaling has acknowledged call setup.
    ///
    /// Fails with [`RegistryError::AlreadyRegistered`] if the leg id is
    /// already present; the existing entry is left untouched.
    pub async fn register(&self, session: Arc<dyn CallSession>) -> Result<(), RegistryError> {
        let leg_id = session.leg_id().to_string();

        let mut calls = self.calls.write().await;
        if calls.contains_key(&leg_id) {
            warn!("Call leg {} is already registered", leg_id);
            return Err(RegistryError::AlreadyRegistered(leg_id));
        }

        info!(
            "Registered call leg {} (scenario {})",
            leg_id,
            session.scenario_id()
        );

        calls.insert(
            leg_id,
            ActiveCall {
                session,
                started_at: Utc::now(),
            },
        );

        Ok(())
    }

    /// Snapshot of all active calls, in no particular order.
    ///
    /// Empty when no calls are active; never an error.
    pub async fn list(&self) -> Vec<CallRecord> {
        let calls = self.calls.read().await;
        calls
            .iter()
            .map(|(leg_id, call)| call.record(leg_id))
            .collect()
    }

    /// Look up a single call by leg id. Absent is a normal outcome.
    pub async fn get(&self, leg_id: &str) -> Option<CallRecord> {
        let calls = self.calls.read().await;
        calls.get(leg_id).map(|call| call.record(leg_id))
    }

    /// End the call identified by `leg_id`.
    ///
    /// Asks the signaling layer to hang up and removes the entry only after
    /// that succeeds. On failure the entry stays in place so a later retry
    /// still finds the call. Once this returns `Ok`, no subsequent
    /// `list`/`get` observes the record.
    pub async fn end_call(&self, leg_id: &str) -> Result<(), RegistryError> {
        // Clone the handle out so the hang-up await runs without the lock.
        let session = {
            let calls = self.calls.read().await;
            match calls.get(leg_id) {
                Some(call) => Arc::clone(&call.session),
                None => return Err(RegistryError::NotFound(leg_id.to_string())),
            }
        };

        info!("Ending call {}", leg_id);

        if let Err(source) = session.hang_up().await {
            return Err(RegistryError::Termination {
                leg_id: leg_id.to_string(),
                source,
            });
        }

        // Hang-up confirmed; now drop the record.
        let mut calls = self.calls.write().await;
        calls.remove(leg_id);

        info!("Call {} ended", leg_id);

        Ok(())
    }

    /// Number of active calls
    pub async fn len(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Whether no calls are active
    pub async fn is_empty(&self) -> bool {
        self.calls.read().await.is_empty()
    }
}

impl Default for CallRegistry {
    fn default() -> Self {
        Self::new()
    }
}
