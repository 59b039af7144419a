use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use crate::{
    action::ActionRequestQueue,
    ui::{
        board::{self, BoardViewModel},
        layout::LayoutScale,
        status_line::{self, StatusLineViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) board_vm: BoardViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(board_vm: BoardViewModel, status_line_vm: StatusLineViewModel) -> Self {
        Self {
            board_vm,
            status_line_vm,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let board_units = board::required_units(vm.board_vm.side());
    let status_units = status_line::required_units();
    let spacing_units = LayoutScale::SPACING_FACTOR.y;

    let available = ui.available_size();
    let cell_size = f32::min(
        available.x / board_units.width,
        available.y / (board_units.height + spacing_units + status_units.height),
    );
    let scale = LayoutScale::new(cell_size);
    let board_side = cell_size * board_units.width;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(board_side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(board_side))
                    .size(Size::exact(scale.spacing.y))
                    .size(Size::exact(cell_size * status_units.height))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            board::show(ui, &vm.board_vm, &scale, action_queue);
                        });
                        strip.cell(|_ui| {}); // Spacer
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_line_vm, &scale);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
