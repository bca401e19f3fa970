//! Speech analysis endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::analysis::AnalysisResult;
use crate::audio::{assess_quality, decode_base64_wav};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64 WAV payload, optionally data-URL prefixed. Optional: the
    /// mock analyzer produces a result without it.
    pub audio_data: Option<String>,
    #[serde(alias = "word")]
    pub target_word: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub word: String,
    pub difficulty: String,
}

/// 500 body carrying the fixed fallback analysis so the game can keep
/// going after an internal failure
#[derive(Debug, Serialize)]
pub struct AnalyzeErrorResponse {
    pub success: bool,
    pub error: String,
    pub analysis: AnalysisResult,
}

/// POST /analyze-speech
///
/// Validates the target word, decodes the optional audio payload, and
/// produces an analysis. Audio problems degrade to a result without
/// audio-derived fields; only a failure inside scoring itself yields a
/// 500, and that response still embeds a usable fallback analysis.
pub async fn analyze_speech(
    State(state): State<AppState>,
    payload: Option<Json<AnalyzeRequest>>,
) -> Response {
    let Some(Json(req)) = payload else {
        return ApiError::BadRequest("No data provided".to_string()).into_response();
    };

    let word = match req.target_word.as_deref().map(str::trim) {
        Some(w) if !w.is_empty() => w.to_lowercase(),
        _ => {
            return ApiError::BadRequest("Missing target_word".to_string()).into_response();
        }
    };
    let difficulty = req
        .difficulty
        .unwrap_or_else(|| "medium".to_string())
        .to_lowercase();

    info!("Analyzing word: '{}' (difficulty: {})", word, difficulty);

    // The audio payload is optional, and problems with it never fail the
    // request: decode failures report quality "unknown", degenerate
    // clips keep their RMS label and skip feature extraction.
    let mut audio_quality: Option<&'static str> = None;
    let mut extracted = None;
    if let Some(audio_data) = req.audio_data.as_deref() {
        match decode_base64_wav(audio_data) {
            Ok(clip) => {
                audio_quality = Some(assess_quality(&clip));
                match state.extractor.extract(&clip) {
                    Ok(features) => {
                        extracted = Some((features, f64::from(clip.duration_secs())));
                    }
                    Err(e) => warn!("Feature extraction skipped for '{}': {}", word, e),
                }
            }
            Err(e) => {
                warn!("Ignoring undecodable audio payload: {}", e);
                audio_quality = Some("unknown");
            }
        }
    }

    let analysis = match (state.scorer.as_deref(), extracted) {
        (Some(scorer), Some((features, duration))) => {
            match state.analyzer.score_with_model(
                scorer,
                &features,
                &word,
                &difficulty,
                duration,
                audio_quality.unwrap_or("unknown"),
            ) {
                Ok(analysis) => analysis,
                Err(e) => {
                    error!("Analysis failed for '{}': {}", word, e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(AnalyzeErrorResponse {
                            success: false,
                            error: e.to_string(),
                            analysis: AnalysisResult::fallback(&word),
                        }),
                    )
                        .into_response();
                }
            }
        }
        _ => state.analyzer.analyze(&word, &difficulty, audio_quality),
    };

    info!("Analysis complete: {}% accuracy", analysis.accuracy_score);

    Json(AnalyzeResponse {
        success: true,
        analysis,
        word,
        difficulty,
    })
    .into_response()
}

/// Build analysis routes
pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/analyze-speech", post(analyze_speech))
}
