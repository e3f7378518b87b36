//! Analysis endpoints
//!
//! One analysis is one request/response cycle: capture the text, consult
//! the backend, aggregate, store newest-wins, return the renderable
//! result. A transport failure is not an HTTP error here; it degrades to
//! the terminal result so the card always renders something.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use fnd_common::capture::{PastedText, TextSource};
use fnd_common::{aggregate, AnalysisResult, DisplayModel};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub seq: u64,
    pub result: AnalysisResult,
    pub display: DisplayModel,
}

/// GET /api/result response; `seq` is null until a first analysis lands.
#[derive(Debug, Serialize)]
pub struct CurrentResultResponse {
    pub seq: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayModel>,
}

/// POST /api/analyze
///
/// Empty input is rejected before the backend is consulted.
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let text = PastedText::new(payload.text).capture();
    if text.is_empty() {
        return Err(ApiError::BadRequest(
            "Please enter or load some text first.".to_string(),
        ));
    }

    let seq = state.results.begin();

    let result = match state.classifier.classify(&text).await {
        Ok(raw) => aggregate(&raw),
        Err(e) => {
            tracing::warn!(seq, error = %e, "Classification exchange failed");
            AnalysisResult::backend_unreachable()
        }
    };

    if !state.results.commit(seq, result.clone()).await {
        tracing::debug!(seq, "A newer analysis already completed");
    }

    let display = DisplayModel::from_result(&result);
    Ok(Json(AnalyzeResponse {
        seq,
        result,
        display,
    }))
}

/// GET /api/result
pub async fn current_result(State(state): State<AppState>) -> Json<CurrentResultResponse> {
    match state.results.snapshot().await {
        Some(stored) => Json(CurrentResultResponse {
            seq: Some(stored.seq),
            display: Some(DisplayModel::from_result(&stored.result)),
            result: Some(stored.result),
        }),
        None => Json(CurrentResultResponse {
            seq: None,
            result: None,
            display: None,
        }),
    }
}

/// POST /api/clear
pub async fn clear_result(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.results.clear().await;
    Json(serde_json::json!({ "cleared": true }))
}
