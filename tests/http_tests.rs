// Integration tests for the HTTP API
//
// Each test drives the real router with `tower::ServiceExt::oneshot`
// against in-process stores, so status codes, bodies, and link
// construction are verified end to end without binding a socket.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use call_console::{create_router, AppState, CallRegistry, CallSession, LogStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Stub call leg whose hang-up outcome is controlled by the test
struct FakeSession {
    leg_id: String,
    scenario_id: Uuid,
    fail_hang_up: AtomicBool,
}

impl FakeSession {
    fn new(leg_id: &str, fail_hang_up: bool) -> Arc<Self> {
        Arc::new(Self {
            leg_id: leg_id.to_string(),
            scenario_id: Uuid::new_v4(),
            fail_hang_up: AtomicBool::new(fail_hang_up),
        })
    }
}

#[async_trait]
impl CallSession for FakeSession {
    fn leg_id(&self) -> &str {
        &self.leg_id
    }

    fn scenario_id(&self) -> Uuid {
        self.scenario_id
    }

    async fn hang_up(&self) -> Result<()> {
        if self.fail_hang_up.load(Ordering::SeqCst) {
            Err(anyhow!("remote rejected the hang-up"))
        } else {
            Ok(())
        }
    }
}

fn setup() -> (Router, Arc<CallRegistry>, Arc<LogStore>) {
    let registry = Arc::new(CallRegistry::new());
    let logs = Arc::new(LogStore::new(100));
    // Trailing slash on the base URL must not leak into the links
    let state = AppState::new(
        Arc::clone(&registry),
        Arc::clone(&logs),
        "https://bot.example.com/",
    );
    (create_router(state), registry, logs)
}

async fn body_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "OK");
}

#[tokio::test]
async fn test_list_calls_empty_returns_204() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(Request::builder().uri("/calls/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_string(response.into_body()).await.is_empty());
}

#[tokio::test]
async fn test_list_calls_returns_call_and_log_links() {
    let (app, registry, _) = setup();
    let session = FakeSession::new("leg-1", false);
    registry.register(session.clone()).await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/calls/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    let calls: serde_json::Value = serde_json::from_str(&body).unwrap();
    let call = &calls.as_array().unwrap()[0];

    assert_eq!(call["legId"], "leg-1");
    assert_eq!(call["scenarioId"], session.scenario_id.to_string());
    assert_eq!(call["call"], "https://bot.example.com/calls/leg-1");
    assert_eq!(call["logs"], "https://bot.example.com/logs/leg-1");
}

#[tokio::test]
async fn test_end_call_unknown_returns_404() {
    let (app, _, _) = setup();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/calls/leg-missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response.into_body()).await;
    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("leg-missing"));
}

#[tokio::test]
async fn test_end_call_success_removes_call() {
    let (app, registry, _) = setup();
    registry
        .register(FakeSession::new("leg-1", false))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/calls/leg-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response.into_body()).await.is_empty());

    // The call is gone from the listing
    let response = app
        .oneshot(Request::builder().uri("/calls/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_end_call_failure_returns_500_and_keeps_call() {
    let (app, registry, _) = setup();
    registry
        .register(FakeSession::new("leg-1", true))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/calls/leg-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The termination cause is surfaced in the body
    let body = body_string(response.into_body()).await;
    let error: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(error["error"]
        .as_str()
        .unwrap()
        .contains("remote rejected the hang-up"));

    // The call is still tracked for a retry
    assert!(registry.get("leg-1").await.is_some());
}

#[tokio::test]
async fn test_get_logs_honors_skip_and_take() {
    let (app, _, logs) = setup();
    for i in 0..5 {
        logs.append("call", format!("message {}", i));
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/logs/?skip=1&take=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("message 1"));
    assert!(lines[1].ends_with("message 2"));
}

#[tokio::test]
async fn test_get_logs_default_window() {
    let (app, _, logs) = setup();
    for i in 0..3 {
        logs.append("call", format!("message {}", i));
    }

    let response = app
        .oneshot(Request::builder().uri("/logs/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await.lines().count(), 3);
}

#[tokio::test]
async fn test_get_logs_filtered_by_path_segment() {
    let (app, _, logs) = setup();
    logs.append("call.signaling", "leg-1 answered");
    logs.append("call.signaling", "leg-2 answered");
    logs.append("call.media", "leg-1 stream opened");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/logs/leg-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.contains("leg-1")));
}
