//! UI serving routes
//!
//! Serves the embedded checker widget page and its script

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::AppState;

const INDEX_HTML: &str = include_str!("../ui/index.html");
const WIDGET_JS: &str = include_str!("../ui/widget.js");

/// GET /
///
/// Serves the checker widget page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/widget.js
///
/// Serves the widget script
pub async fn serve_widget_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        WIDGET_JS,
    )
        .into_response()
}

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_index))
        .route("/static/widget.js", get(serve_widget_js))
}
