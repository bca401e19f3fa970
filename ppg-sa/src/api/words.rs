//! Practice word list endpoints

use axum::{extract::Path, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;
use ppg_common::{vocabulary, Difficulty};

/// Full word list grouped by difficulty
#[derive(Debug, Serialize)]
pub struct WordListResponse {
    pub words: WordsByDifficulty,
    pub total_words: usize,
}

#[derive(Debug, Serialize)]
pub struct WordsByDifficulty {
    pub easy: Vec<&'static str>,
    pub medium: Vec<&'static str>,
    pub hard: Vec<&'static str>,
}

/// Word list for one difficulty level
#[derive(Debug, Serialize)]
pub struct LevelWordsResponse {
    pub words: Vec<&'static str>,
}

/// GET /get-word-list
///
/// All practice words, grouped by difficulty.
pub async fn get_word_list() -> Json<WordListResponse> {
    Json(WordListResponse {
        words: WordsByDifficulty {
            easy: vocabulary::words_for(Difficulty::Easy).to_vec(),
            medium: vocabulary::words_for(Difficulty::Medium).to_vec(),
            hard: vocabulary::words_for(Difficulty::Hard).to_vec(),
        },
        total_words: vocabulary::total_words(),
    })
}

/// GET /words/difficulty/:level
///
/// Words for one difficulty level; unrecognized levels fall back to
/// medium.
pub async fn get_words_by_difficulty(Path(level): Path<String>) -> Json<LevelWordsResponse> {
    let difficulty = Difficulty::parse(&level).unwrap_or(Difficulty::Medium);
    Json(LevelWordsResponse {
        words: vocabulary::words_for(difficulty).to_vec(),
    })
}

/// Build word list routes
pub fn word_routes() -> Router<AppState> {
    Router::new()
        .route("/get-word-list", get(get_word_list))
        .route("/words/difficulty/:level", get(get_words_by_difficulty))
}
