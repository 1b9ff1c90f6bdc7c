use super::state::AppState;
use crate::registry::{CallRecord, RegistryError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

// ============================================================================
// Request/Response Types
// ============================================================================

/// One row of the calls listing, with navigation links for the operator
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSummary {
    pub leg_id: String,
    pub scenario_id: Uuid,

    /// Link to this call's management resource (DELETE ends the call)
    pub call: String,

    /// Link to this call's log entries (the filter endpoint keyed by leg id)
    pub logs: String,
}

impl CallSummary {
    fn new(record: &CallRecord, base_url: &str) -> Self {
        Self {
            call: format!("{}/calls/{}", base_url, record.leg_id),
            logs: format!("{}/logs/{}", base_url, record.leg_id),
            leg_id: record.leg_id.clone(),
            scenario_id: record.scenario_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    #[serde(default)]
    pub skip: usize,

    #[serde(default = "default_take")]
    pub take: usize,
}

fn default_take() -> usize {
    1000
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /calls/
/// List all active calls; 204 when the bot has none
pub async fn list_calls(State(state): State<AppState>) -> impl IntoResponse {
    info!("Getting calls");

    let calls = state.registry.list().await;
    if calls.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let summaries: Vec<CallSummary> = calls
        .iter()
        .map(|record| CallSummary::new(record, &state.public_base_url))
        .collect();

    (StatusCode::OK, Json(summaries)).into_response()
}

/// DELETE /calls/:call_leg_id
/// End the call identified by the leg id
pub async fn end_call(
    State(state): State<AppState>,
    Path(call_leg_id): Path<String>,
) -> impl IntoResponse {
    info!("Ending call {}", call_leg_id);

    match state.registry.end_call(&call_leg_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err @ RegistryError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            error!("Failed to end call {}: {}", call_leg_id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /logs/
/// Read the in-memory log as plain text, windowed by skip/take
pub async fn get_logs(
    State(state): State<AppState>,
    Query(params): Query<LogsQuery>,
) -> impl IntoResponse {
    let body = state.logs.query_text(params.skip, params.take, None);
    (StatusCode::OK, body)
}

/// GET /logs/:filter
/// Same as GET /logs/, restricted to entries matching the filter
pub async fn get_logs_filtered(
    State(state): State<AppState>,
    Path(filter): Path<String>,
    Query(params): Query<LogsQuery>,
) -> impl IntoResponse {
    let body = state
        .logs
        .query_text(params.skip, params.take, Some(&filter));
    (StatusCode::OK, body)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
