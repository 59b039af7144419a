use tileslide_core::Difficulty;
use tileslide_game::{Game, MemoryScoreStore, ScoreStore as _};
use tileslide_generator::BoardGenerator;

use crate::state::Settings;

// AppState holds the session plus persisted state (settings + best scores).
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Game,
    pub(crate) scores: MemoryScoreStore,
    pub(crate) settings: Settings,
    dirty: bool,
}

impl AppState {
    /// Creates the state with a freshly shuffled board for the selected difficulty.
    #[must_use]
    pub(crate) fn new(settings: Settings, scores: MemoryScoreStore) -> Self {
        let game = new_game(settings.difficulty, &scores);
        Self {
            game,
            scores,
            settings,
            dirty: false,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_board(
        board: tileslide_core::Board,
        settings: Settings,
        scores: MemoryScoreStore,
    ) -> Self {
        let best = Difficulty::from_side(board.side()).and_then(|d| scores.load(d));
        Self {
            game: Game::new(board, best),
            scores,
            settings,
            dirty: false,
        }
    }

    pub(crate) fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    #[must_use]
    pub(crate) fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Starts a new session for `difficulty`, comparing against its stored best.
#[must_use]
pub(crate) fn new_game(difficulty: Difficulty, scores: &MemoryScoreStore) -> Game {
    let generated = BoardGenerator::for_difficulty(difficulty).generate();
    log::debug!(
        "new {difficulty} game from seed {} (corrected: {})",
        generated.seed,
        generated.corrected
    );
    Game::new(generated.board, scores.load(difficulty))
}

// Mutations of persisted fields go through `as_mut`, which marks the state dirty.
// The session itself is not persisted, so `game_mut` leaves the flag alone.
#[derive(Debug)]
pub(crate) struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub(crate) fn as_ref(&self) -> &AppState {
        self.app_state
    }

    pub(crate) fn as_mut(&mut self) -> &mut AppState {
        self.app_state.dirty = true;
        self.app_state
    }

    pub(crate) fn game_mut(&mut self) -> &mut Game {
        &mut self.app_state.game
    }

    /// Borrows the session together with the score store it records into.
    ///
    /// Call [`mark_dirty`](Self::mark_dirty) if a score was saved.
    pub(crate) fn session_mut(&mut self) -> (&mut Game, &mut MemoryScoreStore) {
        (&mut self.app_state.game, &mut self.app_state.scores)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.app_state.dirty = true;
    }
}
