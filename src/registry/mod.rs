//! Active call registry
//!
//! This module provides the authoritative index of the bot's active calls:
//! - Registration of a call leg when signaling acknowledges call setup
//! - Snapshot listing and lookup for the HTTP API
//! - Termination by leg id (hang up via the signaling layer, then remove)
//!
//! The registry never talks to the signaling stack directly; it only holds
//! shared references to [`CallSession`] handles owned by that layer.

mod error;
mod record;
mod session;
mod store;

pub use error::RegistryError;
pub use record::CallRecord;
pub use session::CallSession;
pub use store::CallRegistry;
