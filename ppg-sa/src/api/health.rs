//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status ("healthy")
    pub status: String,
    /// Module name ("ppg-sa")
    pub module: String,
    /// Crate version from Cargo.toml
    pub version: String,
    /// Analysis mode ("demo" until a real scorer is configured)
    pub mode: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET /health
///
/// Health check endpoint for monitoring. The reported mode tells the
/// frontend whether analyses are generated or inferred.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        module: "ppg-sa".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mode: state.scorer_info().mode,
        timestamp: Utc::now(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
