use tileslide_game::{Elapsed, GameStatus};

use crate::{
    state::{AppState, UiState},
    ui::{
        board::{BoardCell, BoardViewModel, TileVisualState},
        game_screen::GameScreenViewModel,
        sidebar::SidebarViewModel,
        status_line::{self, StatusLineViewModel},
    },
};

#[must_use]
pub(crate) fn build_board_view_model(app_state: &AppState, ui_state: &UiState) -> BoardViewModel {
    let game = &app_state.game;
    let board = game.board();
    let complete = game.status().is_complete();

    let cells = (0..board.cell_count())
        .map(|index| {
            let mut visual_state = TileVisualState::empty();
            if complete {
                visual_state |= TileVisualState::SOLVED;
            } else if board.is_movable(index) {
                visual_state |= TileVisualState::MOVABLE;
            }
            if ui_state.hint == Some(index) {
                visual_state |= TileVisualState::HINT;
            }
            BoardCell {
                tile: board.cell(index),
                visual_state,
            }
        })
        .collect();

    BoardViewModel::new(board.side(), cells, &app_state.settings.assist)
}

#[must_use]
pub(crate) fn build_status_line_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> StatusLineViewModel {
    let game = &app_state.game;
    let status = if let Some(error) = ui_state.solver_error {
        status_line::GameStatus::HintUnavailable(error)
    } else if ui_state.hint.is_some() {
        status_line::GameStatus::Hint
    } else {
        match game.status() {
            GameStatus::Ready => status_line::GameStatus::Ready,
            GameStatus::Playing => status_line::GameStatus::Playing,
            GameStatus::Complete => status_line::GameStatus::Complete {
                moves: game.moves(),
                elapsed: Elapsed::from(game.elapsed()),
                new_best: game.is_new_best(),
            },
        }
    };
    StatusLineViewModel::new(status)
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    GameScreenViewModel::new(
        build_board_view_model(app_state, ui_state),
        build_status_line_view_model(app_state, ui_state),
    )
}

#[must_use]
pub(crate) fn build_sidebar_view_model(app_state: &AppState) -> SidebarViewModel<'_> {
    let game = &app_state.game;
    SidebarViewModel {
        status: game.status(),
        moves: game.moves(),
        elapsed: Elapsed::from(game.elapsed()),
        best: game.best(),
        has_any_best: app_state.scores.iter().next().is_some(),
        settings: &app_state.settings,
    }
}
