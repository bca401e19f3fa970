//! Player statistics endpoint

use axum::{routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub message: String,
}

/// POST /stats/update
///
/// Accepts arbitrary stats JSON from the frontend. Nothing is persisted;
/// the payload is logged and acknowledged.
pub async fn update_stats(Json(payload): Json<Value>) -> Json<StatsResponse> {
    info!("Stats update: {}", payload);
    Json(StatsResponse {
        success: true,
        message: "Stats updated".to_string(),
    })
}

/// Build stats routes
pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats/update", post(update_stats))
}
