//! ppg-sa - Speech Analysis service
//!
//! HTTP backend for the pronunciation practice game: serves the practice
//! vocabulary and analyzes recorded pronunciations. Analysis currently
//! runs in demo mode (see [`analysis::MockAnalyzer`]); the feature
//! extraction front-end and the [`analysis::PronunciationScorer`]
//! contract are in place for a real model.

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod analysis;
pub mod api;
pub mod audio;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use crate::analysis::{MockAnalyzer, PronunciationScorer, ScorerInfo};
use crate::audio::MfccExtractor;

/// Application state shared across HTTP handlers
///
/// Everything here is immutable configuration or interior-locked; no
/// cross-request mutable state exists.
#[derive(Clone)]
pub struct AppState {
    /// Demo-mode analyzer (seedable for tests)
    pub analyzer: Arc<MockAnalyzer>,
    /// MFCC feature extraction front-end
    pub extractor: Arc<MfccExtractor>,
    /// Real scorer, when one is configured. None in the shipping
    /// configuration: analysis falls back to the demo path.
    pub scorer: Option<Arc<dyn PronunciationScorer>>,
}

impl AppState {
    pub fn new(analyzer: MockAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            extractor: Arc::new(MfccExtractor::new()),
            scorer: None,
        }
    }

    /// Attach a real scorer; analyses with usable audio then go through
    /// it instead of the demo draw.
    pub fn with_scorer(mut self, scorer: Arc<dyn PronunciationScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Status for the health and model-info endpoints
    pub fn scorer_info(&self) -> ScorerInfo {
        match &self.scorer {
            Some(scorer) => ScorerInfo::loaded(scorer.name()),
            None => ScorerInfo::mock(),
        }
    }
}

/// Build application router
///
/// Frontend runs on a different origin, so CORS is permissive across
/// all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::word_routes())
        .merge(api::model_routes())
        .merge(api::analyze_routes())
        .merge(api::stats_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
}
