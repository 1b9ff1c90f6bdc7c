//! HTTP API for call management and diagnostics
//!
//! This module provides the REST surface of the console:
//! - GET /calls/ - List active calls (204 when none)
//! - DELETE /calls/:call_leg_id - End a call
//! - GET /logs/ - Read the in-memory log (skip/take pagination)
//! - GET /logs/:filter - Same, restricted to matching entries
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
