use eframe::egui::{Button, CollapsingHeader, Grid, RichText, ScrollArea, Ui, widgets};
use tileslide_core::Difficulty;
use tileslide_game::{BestScore, Elapsed, GameStatus};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AssistSettings, Settings},
    ui::board_theme,
    version,
};

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) status: GameStatus,
    pub(crate) moves: u32,
    pub(crate) elapsed: Elapsed,
    pub(crate) best: Option<BestScore>,
    pub(crate) has_any_best: bool,
    pub(crate) settings: &'a Settings,
}

impl SidebarViewModel<'_> {
    fn can_change_difficulty(&self) -> bool {
        !self.status.is_playing()
    }

    fn can_request_hint(&self) -> bool {
        self.settings.assist.hints_enabled && !self.status.is_complete()
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    let difficulty = vm.settings.difficulty;
    ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Sliding Puzzle");
        ui.label("Challenge yourself with this classic number sliding puzzle.");
        ui.separator();

        ui.label(RichText::new("Difficulty").strong());
        ui.add_enabled_ui(vm.can_change_difficulty(), |ui| {
            for candidate in Difficulty::ALL {
                if ui.radio(candidate == difficulty, candidate.to_string()).clicked() {
                    action_queue.request(Action::SetDifficulty(candidate));
                }
            }
        })
        .response
        .on_disabled_hover_text("Finish or restart the current game to change size.");

        ui.horizontal(|ui| {
            if ui.button("New Game").clicked() {
                action_queue.request(Action::NewGame);
            }
            if ui
                .add_enabled(vm.can_request_hint(), Button::new("Hint"))
                .clicked()
            {
                action_queue.request(Action::RequestHint);
            }
        });
        ui.separator();

        ui.label(RichText::new("Current Game").strong());
        Grid::new("current_game").num_columns(2).show(ui, |ui| {
            ui.label("Difficulty:");
            ui.label(difficulty.to_string());
            ui.end_row();
            ui.label("Moves:");
            ui.label(vm.moves.to_string());
            ui.end_row();
            ui.label("Time:");
            ui.label(vm.elapsed.to_string());
            ui.end_row();
            ui.label("Status:");
            let status = match vm.status {
                GameStatus::Ready => RichText::new("Ready").color(ui.visuals().weak_text_color()),
                GameStatus::Playing => RichText::new("Playing"),
                GameStatus::Complete => {
                    RichText::new("Complete!").color(ui.visuals().warn_fg_color)
                }
            };
            ui.label(status);
            ui.end_row();
        });

        if let Some(best) = vm.best {
            ui.separator();
            let side = difficulty.side();
            ui.label(RichText::new(format!("Best Score ({side}×{side})")).strong());
            Grid::new("best_score").num_columns(2).show(ui, |ui| {
                ui.label("Moves:");
                ui.label(RichText::new(best.moves.to_string()).strong());
                ui.end_row();
                ui.label("Time:");
                ui.label(RichText::new(best.elapsed().to_string()).strong());
                ui.end_row();
            });
        }
        if vm.has_any_best && ui.small_button("Clear best scores").clicked() {
            action_queue.request(Action::ClearBestScores);
        }
        ui.separator();

        CollapsingHeader::new("How to Play")
            .default_open(true)
            .show(ui, |ui| {
                ui.label("• Click on tiles adjacent to the empty space to move them");
                ui.label(format!(
                    "• Arrange numbers in order from 1 to {}",
                    difficulty.tile_count()
                ));
                ui.label("• The empty space should be in the bottom-right corner");
                ui.label("• Try to complete the puzzle in minimum moves!");
                ui.label("• Arrow keys slide tiles, H shows a hint, Ctrl+N starts a new game");
            });

        CollapsingHeader::new("Difficulty Guide").show(ui, |ui| {
            for candidate in Difficulty::ALL {
                let side = candidate.side();
                let text = format!(
                    "{side}×{side} - {} ({} tiles)",
                    candidate.name(),
                    candidate.tile_count()
                );
                let accent = board_theme::difficulty_accent(Some(candidate));
                ui.label(RichText::new(text).color(accent));
            }
        });

        let mut changed = false;
        let mut settings = vm.settings.clone();
        CollapsingHeader::new("Settings").show(ui, |ui| {
            let AssistSettings {
                highlight_movable,
                hints_enabled,
            } = &mut settings.assist;
            changed |= ui
                .checkbox(highlight_movable, "Highlight movable tiles")
                .changed();
            changed |= ui.checkbox(hints_enabled, "Enable hints").changed();
            widgets::global_theme_preference_buttons(ui);
        });
        if changed {
            action_queue.request(Action::UpdateSettings(settings));
        }

        ui.separator();
        ui.weak(format!("Tileslide {}", version::build_version()));
    });
}
