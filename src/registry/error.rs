use thiserror::Error;

/// Error type for registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No active call with the given leg id. Expected during normal
    /// operation (stale links, double deletes), not a failure.
    #[error("no active call with leg id {0}")]
    NotFound(String),

    /// A call with this leg id is already registered
    #[error("call leg {0} is already registered")]
    AlreadyRegistered(String),

    /// The signaling layer failed to end the call; the record stays in the
    /// registry so the operation can be retried.
    #[error("failed to terminate call {leg_id}: {source}")]
    Termination {
        leg_id: String,
        #[source]
        source: anyhow::Error,
    },
}
