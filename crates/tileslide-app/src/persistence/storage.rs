//! Reading and writing app state through eframe's key-value storage.
//!
//! Best scores live under one key per board size, `puzzle-best-{n}x{n}`, each
//! holding `{ moves, time }`. Settings live under a single key.

use eframe::Storage;
use tileslide_core::Difficulty;
use tileslide_game::{BestScore, MemoryScoreStore, ScoreStore as _};

use crate::state::{AppState, Settings};

const SETTINGS_KEY: &str = "tileslide-settings";

#[must_use]
pub(crate) fn best_score_key(difficulty: Difficulty) -> String {
    let n = difficulty.side();
    format!("puzzle-best-{n}x{n}")
}

#[must_use]
pub(crate) fn load_settings(storage: &dyn Storage) -> Settings {
    eframe::get_value(storage, SETTINGS_KEY).unwrap_or_default()
}

#[must_use]
pub(crate) fn load_scores(storage: &dyn Storage) -> MemoryScoreStore {
    Difficulty::ALL
        .into_iter()
        .filter_map(|difficulty| {
            // Cleared records are stored as `None`.
            eframe::get_value::<Option<BestScore>>(storage, &best_score_key(difficulty))
                .flatten()
                .map(|score| (difficulty, score))
        })
        .collect()
}

#[must_use]
pub(crate) fn load_state(storage: &dyn Storage) -> AppState {
    let settings = load_settings(storage);
    let scores = load_scores(storage);
    log::debug!(
        "loaded settings {settings:?} and {} best score(s)",
        scores.iter().count()
    );
    AppState::new(settings, scores)
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    eframe::set_value(storage, SETTINGS_KEY, &app_state.settings);
    for difficulty in Difficulty::ALL {
        eframe::set_value(
            storage,
            &best_score_key(difficulty),
            &app_state.scores.load(difficulty),
        );
    }
}
