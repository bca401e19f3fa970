//! Model status endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::analysis::ScorerInfo;
use crate::AppState;

/// GET /model-info
///
/// Reports whether a real scorer is loaded and the input contract a
/// scorer has to meet. With only the mock analyzer configured this
/// truthfully reports `model_loaded: false`.
pub async fn model_info(State(state): State<AppState>) -> Json<ScorerInfo> {
    Json(state.scorer_info())
}

/// Build model info routes
pub fn model_routes() -> Router<AppState> {
    Router::new().route("/model-info", get(model_info))
}
