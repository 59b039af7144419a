use std::sync::Arc;

use eframe::egui::{
    Align2, Color32, CursorIcon, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use tileslide_core::{Difficulty, Tile};

use crate::{
    action::{Action, ActionRequestQueue},
    state::AssistSettings,
    ui::{
        board_theme::BoardPalette,
        layout::{ComponentUnits, LayoutScale},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct TileVisualState: u8 {
        const MOVABLE = 0b0000_0001;
        const HINT = 0b0000_0010;
        const SOLVED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BoardCell {
    pub(crate) tile: Option<Tile>,
    pub(crate) visual_state: TileVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct BoardViewModel {
    side: usize,
    cells: Vec<BoardCell>,
    enabled_highlights: TileVisualState,
}

impl BoardViewModel {
    #[must_use]
    pub(crate) fn new(side: usize, cells: Vec<BoardCell>, assist: &AssistSettings) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        let mut enabled_highlights = TileVisualState::HINT | TileVisualState::SOLVED;
        if assist.highlight_movable {
            enabled_highlights |= TileVisualState::MOVABLE;
        }
        Self {
            side,
            cells,
            enabled_highlights,
        }
    }

    #[must_use]
    pub(crate) fn side(&self) -> usize {
        self.side
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    fn effective_visual_state(&self, state: TileVisualState) -> EffectiveTileVisualState {
        EffectiveTileVisualState(self.enabled_highlights & state)
    }
}

const TILE_GAP_RATIO: f32 = 0.08;
const TILE_ROUNDING_RATIO: f32 = 0.08;
const TILE_BORDER_WIDTH_RATIO: f32 = 0.02;
const HINT_BORDER_WIDTH_RATIO: f32 = 0.06;
const TILE_FONT_RATIO: f32 = 0.45;

#[expect(clippy::cast_precision_loss)]
fn side_units(side: usize) -> f32 {
    let side = side as f32;
    side + (side + 1.0) * TILE_GAP_RATIO
}

#[must_use]
pub(crate) fn required_units(side: usize) -> ComponentUnits {
    let len = side_units(side);
    ComponentUnits::new(len, len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveTileVisualState(TileVisualState);

impl EffectiveTileVisualState {
    fn fill_color(self, hovered: bool, palette: &BoardPalette) -> Color32 {
        if self.0.intersects(TileVisualState::SOLVED) {
            return palette.tile_bg_solved;
        }
        if hovered && self.0.intersects(TileVisualState::MOVABLE) {
            return palette.tile_bg_hovered;
        }
        if self.0.intersects(TileVisualState::MOVABLE) {
            return palette.tile_bg_movable;
        }
        palette.tile_bg
    }

    fn text_color(self, palette: &BoardPalette) -> Color32 {
        if self.0.intersects(TileVisualState::SOLVED) {
            palette.text_solved
        } else {
            palette.text
        }
    }

    fn border(self, palette: &BoardPalette, cell_size: f32) -> Stroke {
        if self.0.intersects(TileVisualState::HINT) {
            Stroke::new(cell_size * HINT_BORDER_WIDTH_RATIO, palette.tile_border_hint)
        } else {
            let width = f32::max(cell_size * TILE_BORDER_WIDTH_RATIO, 1.0);
            Stroke::new(width, palette.tile_border)
        }
    }
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(
    ui: &mut Ui,
    vm: &BoardViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let palette = BoardPalette::from_visuals(&style.visuals, Difficulty::from_side(vm.side));
    let gap = cell_size * TILE_GAP_RATIO;
    let board_side = cell_size * side_units(vm.side);

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(board_side), Sense::hover());
    let rounding = cell_size * TILE_ROUNDING_RATIO;
    ui.painter().rect_filled(rect, rounding, palette.board_bg);

    for (index, cell) in vm.cells.iter().enumerate() {
        let Some(tile) = cell.tile else {
            continue;
        };
        let row = (index / vm.side) as f32;
        let col = (index % vm.side) as f32;
        let min = rect.min + Vec2::new(gap + col * (cell_size + gap), gap + row * (cell_size + gap));
        let tile_rect = Rect::from_min_size(min, Vec2::splat(cell_size));

        let vs = vm.effective_visual_state(cell.visual_state);
        let mut response = ui.interact(tile_rect, ui.id().with(index), Sense::click());
        if vs.0.intersects(TileVisualState::MOVABLE) {
            response = response.on_hover_cursor(CursorIcon::PointingHand);
        }

        let painter = ui.painter();
        painter.rect_filled(tile_rect, rounding, vs.fill_color(response.hovered(), &palette));
        painter.rect_stroke(
            tile_rect,
            rounding,
            vs.border(&palette, cell_size),
            StrokeKind::Inside,
        );
        painter.text(
            tile_rect.center(),
            Align2::CENTER_CENTER,
            tile.to_string(),
            FontId::proportional(cell_size * TILE_FONT_RATIO),
            vs.text_color(&palette),
        );

        if response.clicked() {
            action_queue.request(Action::PressTile(index));
        }
    }
}
