use std::time::Duration;

use tileslide_core::{Difficulty, Direction};
use tileslide_game::ScoreStore as _;
use tileslide_solver::Planner;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{self, AppState, AppStateAccess, Settings, UiState},
};

/// Search budget for a single hint. A complete 5×5 plan stays far below it.
const HINT_NODE_LIMIT: u64 = 1_000_000;

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };

    let board_before = ctx.app_state.as_ref().game.board().clone();

    match action {
        Action::PressTile(index) => ctx.press_tile(index),
        Action::Slide(direction) => ctx.slide(direction),
        Action::SetDifficulty(difficulty) => ctx.set_difficulty(difficulty),
        Action::NewGame => ctx.start_new_game(),
        Action::RequestHint => ctx.request_hint(),
        Action::ClearBestScores => ctx.clear_best_scores(),
        Action::UpdateSettings(settings) => ctx.update_settings(settings),
        Action::Tick(dt) => ctx.tick(dt),
    }

    if ctx.app_state.as_ref().game.board() != &board_before {
        ctx.ui_state.clear_hint();
    }
}

impl ActionContext<'_> {
    fn press_tile(&mut self, index: usize) {
        let (game, scores) = self.app_state.session_mut();
        let next = game.attempt_move_recording(index, scores);
        let recorded = next.is_new_best() && !game.is_new_best();
        *game = next;
        if recorded {
            self.app_state.mark_dirty();
        }
    }

    fn slide(&mut self, direction: Direction) {
        if let Some(index) = self
            .app_state
            .as_ref()
            .game
            .board()
            .neighbor_of_empty(direction)
        {
            self.press_tile(index);
        }
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        let app_state = self.app_state.as_ref();
        if app_state.game.status().is_playing() {
            log::debug!("difficulty change to {difficulty} ignored while playing");
            return;
        }
        if app_state.difficulty() == difficulty {
            return;
        }
        let app_state = self.app_state.as_mut();
        app_state.settings.difficulty = difficulty;
        app_state.game = state::new_game(difficulty, &app_state.scores);
    }

    fn start_new_game(&mut self) {
        let app_state = self.app_state.as_ref();
        let game = state::new_game(app_state.difficulty(), &app_state.scores);
        *self.app_state.game_mut() = game;
    }

    fn request_hint(&mut self) {
        let app_state = self.app_state.as_ref();
        if !app_state.settings.assist.hints_enabled || app_state.game.status().is_complete() {
            return;
        }
        match Planner::with_node_limit(HINT_NODE_LIMIT).hint(app_state.game.board()) {
            Ok(hint) => {
                self.ui_state.hint = hint;
                self.ui_state.solver_error = None;
            }
            Err(e) => {
                log::warn!("hint unavailable: {e}");
                self.ui_state.hint = None;
                self.ui_state.solver_error = Some(e);
            }
        }
    }

    fn clear_best_scores(&mut self) {
        let app_state = self.app_state.as_mut();
        app_state.scores.clear();
        app_state.game = app_state.game.with_best(None);
        log::info!("best scores cleared");
    }

    fn update_settings(&mut self, settings: Settings) {
        if !settings.assist.hints_enabled {
            self.ui_state.clear_hint();
        }
        self.app_state.as_mut().settings = settings;
    }

    fn tick(&mut self, dt: Duration) {
        let game = self.app_state.game_mut();
        *game = game.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tileslide_core::{Board, Difficulty, Direction};
    use tileslide_game::{BestScore, GameStatus, MemoryScoreStore, ScoreStore as _};
    use tileslide_generator::{BoardGenerator, PuzzleSeed};

    use super::handle;
    use crate::{
        action::Action,
        state::{AppState, Settings, UiState},
    };

    fn one_move_state(scores: MemoryScoreStore) -> AppState {
        let board: Board = "1 2 3/4 5 6/7 . 8".parse().unwrap();
        AppState::with_board(board, Settings::default(), scores)
    }

    #[test]
    fn press_tile_completes_and_records_best() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::PressTile(8));

        assert_eq!(app_state.game.status(), GameStatus::Complete);
        assert_eq!(
            app_state.scores.load(Difficulty::Easy),
            Some(BestScore::new(1, 0))
        );
        assert!(app_state.is_dirty());
    }

    #[test]
    fn illegal_press_changes_nothing() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();
        let before = app_state.game.clone();

        handle(&mut app_state, &mut ui_state, Action::PressTile(0));

        assert_eq!(app_state.game, before);
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn slower_completion_keeps_record() {
        let scores = [(Difficulty::Easy, BestScore::new(1, 0))]
            .into_iter()
            .collect();
        let mut app_state = one_move_state(scores);
        let mut ui_state = UiState::new();

        for index in [4, 7, 8] {
            handle(&mut app_state, &mut ui_state, Action::PressTile(index));
        }

        assert_eq!(app_state.game.status(), GameStatus::Complete);
        assert_eq!(app_state.game.moves(), 3);
        assert_eq!(
            app_state.scores.load(Difficulty::Easy),
            Some(BestScore::new(1, 0))
        );
        assert!(!app_state.is_dirty());
    }

    #[test]
    fn slide_moves_tile_into_empty_cell() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::Slide(Direction::Up));
        assert_eq!(app_state.game.moves(), 0);

        handle(&mut app_state, &mut ui_state, Action::Slide(Direction::Left));
        assert!(app_state.game.status().is_complete());
    }

    #[test]
    fn difficulty_locked_while_playing() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::PressTile(4));
        handle(
            &mut app_state,
            &mut ui_state,
            Action::SetDifficulty(Difficulty::Hard),
        );
        assert_eq!(app_state.difficulty(), Difficulty::Easy);
        assert_eq!(app_state.game.board().side(), 3);
        assert_eq!(app_state.game.moves(), 1);
    }

    #[test]
    fn set_difficulty_starts_new_board() {
        let scores = [(Difficulty::Medium, BestScore::new(90, 200))]
            .into_iter()
            .collect();
        let mut app_state = one_move_state(scores);
        let mut ui_state = UiState::new();

        handle(
            &mut app_state,
            &mut ui_state,
            Action::SetDifficulty(Difficulty::Medium),
        );

        assert_eq!(app_state.difficulty(), Difficulty::Medium);
        assert_eq!(app_state.game.board().side(), 4);
        assert_eq!(app_state.game.status(), GameStatus::Ready);
        assert_eq!(app_state.game.best(), Some(BestScore::new(90, 200)));
        assert!(app_state.is_dirty());
    }

    #[test]
    fn new_game_resets_session() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::PressTile(4));
        handle(&mut app_state, &mut ui_state, Action::NewGame);

        assert_eq!(app_state.game.status(), GameStatus::Ready);
        assert_eq!(app_state.game.moves(), 0);
        assert_eq!(app_state.game.board().side(), 3);
        assert!(!app_state.game.board().is_solved());
    }

    #[test]
    fn hint_points_at_next_move_and_clears_after_move() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::RequestHint);
        assert_eq!(ui_state.hint, Some(8));
        assert_eq!(ui_state.solver_error, None);

        handle(&mut app_state, &mut ui_state, Action::Tick(Duration::from_secs(1)));
        assert_eq!(ui_state.hint, Some(8));

        handle(&mut app_state, &mut ui_state, Action::PressTile(4));
        assert_eq!(ui_state.hint, None);
    }

    #[test]
    fn hints_found_for_generated_boards() {
        for difficulty in Difficulty::ALL {
            let generator = BoardGenerator::for_difficulty(difficulty);
            for byte in 0..8 {
                let board = generator
                    .generate_with_seed(PuzzleSeed::from_bytes([byte; 32]))
                    .board;
                let mut app_state =
                    AppState::with_board(board.clone(), Settings::default(), MemoryScoreStore::new());
                let mut ui_state = UiState::new();

                handle(&mut app_state, &mut ui_state, Action::RequestHint);

                assert_eq!(ui_state.solver_error, None, "{difficulty} board {board}");
                let hint = ui_state.hint.expect("unsolved boards get a hint");
                assert!(board.is_movable(hint), "{difficulty} board {board}");
            }
        }
    }

    #[test]
    fn following_hints_completes_medium_board() {
        let board = BoardGenerator::for_difficulty(Difficulty::Medium)
            .generate_with_seed(PuzzleSeed::from_bytes([42; 32]))
            .board;
        let mut app_state = AppState::with_board(board, Settings::default(), MemoryScoreStore::new());
        let mut ui_state = UiState::new();

        for _ in 0..1_000 {
            handle(&mut app_state, &mut ui_state, Action::RequestHint);
            let Some(hint) = ui_state.hint else {
                break;
            };
            handle(&mut app_state, &mut ui_state, Action::PressTile(hint));
        }
        assert_eq!(app_state.game.status(), GameStatus::Complete);
    }

    #[test]
    fn hint_respects_settings() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();

        let mut settings = app_state.settings.clone();
        settings.assist.hints_enabled = false;
        handle(&mut app_state, &mut ui_state, Action::UpdateSettings(settings));
        assert!(app_state.is_dirty());

        handle(&mut app_state, &mut ui_state, Action::RequestHint);
        assert_eq!(ui_state.hint, None);
    }

    #[test]
    fn clear_best_scores_forgets_records() {
        let scores = [(Difficulty::Easy, BestScore::new(1, 0))]
            .into_iter()
            .collect();
        let mut app_state = one_move_state(scores);
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, Action::ClearBestScores);

        assert_eq!(app_state.scores.load(Difficulty::Easy), None);
        assert_eq!(app_state.game.best(), None);
        assert!(app_state.is_dirty());
    }

    #[test]
    fn tick_runs_only_while_playing() {
        let mut app_state = one_move_state(MemoryScoreStore::new());
        let mut ui_state = UiState::new();
        let second = Duration::from_secs(1);

        handle(&mut app_state, &mut ui_state, Action::Tick(second));
        assert_eq!(app_state.game.elapsed(), Duration::ZERO);

        handle(&mut app_state, &mut ui_state, Action::PressTile(4));
        handle(&mut app_state, &mut ui_state, Action::Tick(second));
        assert_eq!(app_state.game.elapsed(), second);

        handle(&mut app_state, &mut ui_state, Action::PressTile(7));
        handle(&mut app_state, &mut ui_state, Action::PressTile(8));
        handle(&mut app_state, &mut ui_state, Action::Tick(second));
        assert!(app_state.game.status().is_complete());
        assert_eq!(app_state.game.elapsed(), second);
    }
}
