//! fnd-ui library interface
//!
//! Exposes the router and shared state for integration testing

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod latest;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::client::ClassifierClient;
use crate::latest::ResultStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for the classification backend
    pub classifier: Arc<ClassifierClient>,
    /// Current analysis result, newest-wins across overlapping requests
    pub results: Arc<ResultStore>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(classifier: ClassifierClient) -> Self {
        Self {
            classifier: Arc::new(classifier),
            results: Arc::new(ResultStore::new()),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // UI routes (embedded widget page)
        .merge(api::ui_routes())
        // API routes
        .route("/api/analyze", post(api::analyze))
        .route("/api/result", get(api::current_result))
        .route("/api/clear", post(api::clear_result))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
