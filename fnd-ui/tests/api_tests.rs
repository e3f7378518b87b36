//! Integration tests for fnd-ui API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Empty-input rejection before the backend is consulted
//! - Full analyze cycle against a canned local backend
//! - Transport-failure degradation to the terminal result
//! - Current-result storage and explicit clear

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

use fnd_ui::client::ClassifierClient;
use fnd_ui::{build_router, AppState};

/// Test helper: Create app state pointing at the given backend endpoint
fn setup_state(backend_url: &str) -> AppState {
    let classifier =
        ClassifierClient::new(backend_url.to_string()).expect("Should create classifier client");
    AppState::new(classifier)
}

/// Test helper: Spawn a canned classification backend on an ephemeral
/// port and return its classify-all endpoint URL
async fn spawn_backend(response: Value) -> String {
    let app = Router::new().route(
        "/api/classify-all",
        post(move || {
            let response = response.clone();
            async move { Json(response) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Should read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend serve");
    });

    format!("http://{}/api/classify-all", addr)
}

/// Test helper: Spawn a backend that always answers 500
async fn spawn_failing_backend() -> String {
    let app = Router::new().route(
        "/api/classify-all",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Should read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock backend serve");
    });

    format!("http://{}/api/classify-all", addr)
}

/// Test helper: JSON POST request
fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_router(setup_state("http://127.0.0.1:9/api/classify-all"));

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fnd-ui");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_number());
}

// =============================================================================
// Input Validation Tests
// =============================================================================

#[tokio::test]
async fn test_analyze_empty_text_rejected() {
    let app = build_router(setup_state("http://127.0.0.1:9/api/classify-all"));

    let request = json_request("/api/analyze", json!({ "text": "   " }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("enter or load some text"));
}

#[tokio::test]
async fn test_analyze_missing_text_field_rejected() {
    let app = build_router(setup_state("http://127.0.0.1:9/api/classify-all"));

    let request = json_request("/api/analyze", json!({}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Analyze Cycle Tests
// =============================================================================

#[tokio::test]
async fn test_analyze_overall_fake_scenario() {
    let backend = spawn_backend(json!({
        "overall": { "classification": "fake", "confidence": 87 }
    }))
    .await;
    let app = build_router(setup_state(&backend));

    let request = json_request("/api/analyze", json!({ "text": "BREAKING: shocking claim" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["seq"], 1);
    assert_eq!(body["result"]["label"], "FAKE");
    assert_eq!(body["result"]["score"], 0.87);
    assert_eq!(body["display"]["score_percent"], 87);
    assert_eq!(body["display"]["risk_tier"], "high");
    assert_eq!(body["display"]["summary"], "Looks FAKE / high risk.");
    assert_eq!(body["display"]["flags"], json!(["No extra details."]));
}

#[tokio::test]
async fn test_analyze_real_with_flags_scenario() {
    let backend = spawn_backend(json!({
        "tweet": { "classification": "REAL", "probability": 12 },
        "flags": ["a", "b"]
    }))
    .await;
    let app = build_router(setup_state(&backend));

    let request = json_request("/api/analyze", json!({ "text": "plain factual report" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["result"]["label"], "REAL");
    assert_eq!(body["result"]["score"], 0.12);
    assert_eq!(body["result"]["flags"], json!(["a", "b"]));
    assert_eq!(body["display"]["risk_tier"], "safe");
    assert_eq!(body["display"]["flags"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_analyze_partial_response_degrades() {
    // Backend answers 200 with nothing usable in it
    let backend = spawn_backend(json!({ "urls": [] })).await;
    let app = build_router(setup_state(&backend));

    let request = json_request("/api/analyze", json!({ "text": "some text" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["result"]["label"], "UNKNOWN");
    assert!(body["result"].get("score").is_none());
    assert_eq!(body["display"]["summary"], "Not sure. Be careful.");
}

// =============================================================================
// Transport Failure Tests
// =============================================================================

#[tokio::test]
async fn test_analyze_backend_unreachable() {
    // Nothing listens on the discard port; connect fails immediately
    let app = build_router(setup_state("http://127.0.0.1:9/api/classify-all"));

    let request = json_request("/api/analyze", json!({ "text": "some text" }));
    let response = app.oneshot(request).await.unwrap();

    // Transport failure is not an HTTP error; the card must still render
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["result"]["label"], "UNKNOWN");
    assert!(body["result"].get("score").is_none());
    assert_eq!(body["result"]["flags"], json!([]));
    assert_eq!(body["result"]["error"], "Backend not reachable.");
    assert_eq!(body["display"]["flags"], json!(["No extra details."]));
}

#[tokio::test]
async fn test_analyze_backend_error_status() {
    let backend = spawn_failing_backend().await;
    let app = build_router(setup_state(&backend));

    let request = json_request("/api/analyze", json!({ "text": "some text" }));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["result"]["label"], "UNKNOWN");
    assert_eq!(body["result"]["error"], "Backend not reachable.");
}

// =============================================================================
// Current Result / Clear Tests
// =============================================================================

#[tokio::test]
async fn test_result_storage_and_clear() {
    let backend = spawn_backend(json!({
        "overall": { "classification": "REAL", "confidence": 20 }
    }))
    .await;
    let state = setup_state(&backend);
    let app = build_router(state);

    // Nothing analyzed yet
    let request = Request::builder()
        .method("GET")
        .uri("/api/result")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["seq"], Value::Null);

    // Run an analysis
    let request = json_request("/api/analyze", json!({ "text": "hello" }));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The result is now current
    let request = Request::builder()
        .method("GET")
        .uri("/api/result")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["seq"], 1);
    assert_eq!(body["result"]["label"], "REAL");
    assert_eq!(body["display"]["risk_tier"], "safe");

    // Clear drops it
    let request = Request::builder()
        .method("POST")
        .uri("/api/clear")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("GET")
        .uri("/api/result")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["seq"], Value::Null);
}

#[tokio::test]
async fn test_sequence_numbers_increase_across_requests() {
    let backend = spawn_backend(json!({
        "overall": { "classification": "FAKE", "confidence": 90 }
    }))
    .await;
    let app = build_router(setup_state(&backend));

    for expected_seq in 1..=3 {
        let request = json_request("/api/analyze", json!({ "text": "text" }));
        let response = app.clone().oneshot(request).await.unwrap();
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["seq"], expected_seq);
    }
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_widget_page_served() {
    let app = build_router(setup_state("http://127.0.0.1:9/api/classify-all"));

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("FND Checker"));
    assert!(html.contains("/static/widget.js"));
}

#[tokio::test]
async fn test_widget_script_served() {
    let app = build_router(setup_state("http://127.0.0.1:9/api/classify-all"));

    let request = Request::builder()
        .method("GET")
        .uri("/static/widget.js")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/javascript"
    );
}
