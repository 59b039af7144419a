use eframe::egui::{Align, Label, RichText, Ui, Vec2, Widget as _};
use tileslide_game::Elapsed;
use tileslide_solver::SolverError;

use crate::ui::layout::{ComponentUnits, LayoutScale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    Ready,
    Playing,
    Complete {
        moves: u32,
        elapsed: Elapsed,
        new_best: bool,
    },
    Hint,
    HintUnavailable(SolverError),
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    status: GameStatus,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(status: GameStatus) -> Self {
        Self { status }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn status(&self) -> GameStatus {
        self.status
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 0.5)
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, scale: &LayoutScale) {
    let cell_size = scale.cell_size;
    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, 0.0);
    ui.horizontal(|ui| {
        let (status_text, status_color) = match vm.status {
            GameStatus::Ready => (
                "Ready. Click a tile next to the empty space to start.".to_owned(),
                ui.visuals().weak_text_color(),
            ),
            GameStatus::Playing => ("Playing...".to_owned(), ui.visuals().text_color()),
            GameStatus::Complete {
                moves,
                elapsed,
                new_best,
            } => {
                let mut text = format!(
                    "\u{1f389} Congratulations! Puzzle completed in {moves} moves and {elapsed}!"
                );
                if new_best {
                    text.push_str(" New best score!");
                }
                (text, ui.visuals().warn_fg_color)
            }
            GameStatus::Hint => (
                "Hint: slide the highlighted tile.".to_owned(),
                ui.visuals().warn_fg_color,
            ),
            GameStatus::HintUnavailable(error) => (
                format!("No hint available: {error}."),
                ui.visuals().error_fg_color,
            ),
        };
        Label::new(
            RichText::new(status_text)
                .color(status_color)
                .size(cell_size * 0.3),
        )
        .halign(Align::Center)
        .ui(ui);
    });
}
