use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Handle to one call leg owned by the external signaling layer.
///
/// The registry holds these by `Arc` and only ever reads the identifiers
/// or asks the leg to hang up. Everything else about the call (media,
/// protocol state) stays behind this seam.
#[async_trait]
pub trait CallSession: Send + Sync {
    /// Unique call-leg identifier
    fn leg_id(&self) -> &str;

    /// Correlation id grouping related call activity for tracing
    fn scenario_id(&self) -> Uuid;

    /// Ask the signaling layer to end this call.
    ///
    /// Errors are returned as-is; the registry wraps them into
    /// [`RegistryError::Termination`](super::RegistryError) and does not retry.
    async fn hang_up(&self) -> Result<()>;
}
