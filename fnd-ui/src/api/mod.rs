//! HTTP API handlers

mod analyze;
mod health;
mod ui;

pub use analyze::{analyze, clear_result, current_result, AnalyzeRequest, AnalyzeResponse};
pub use health::{health_check, health_routes, HealthResponse};
pub use ui::ui_routes;
