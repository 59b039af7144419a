use eframe::egui::{Color32, Visuals};
use tileslide_core::Difficulty;

/// Strength of the difficulty tint on idle and movable tiles.
const TILE_TINT: f32 = 0.3;
const MOVABLE_TINT: f32 = 0.5;

/// Accent color of a board size: green, amber and red from easy to hard, and
/// blue for sizes without a difficulty.
#[must_use]
pub(crate) fn difficulty_accent(difficulty: Option<Difficulty>) -> Color32 {
    match difficulty {
        Some(Difficulty::Easy) => Color32::from_rgb(34, 197, 94),
        Some(Difficulty::Medium) => Color32::from_rgb(245, 158, 11),
        Some(Difficulty::Hard) => Color32::from_rgb(239, 68, 68),
        None => Color32::from_rgb(59, 130, 246),
    }
}

/// Color palette for board rendering.
///
/// Derived from `egui::Visuals` so light and dark themes both work, but kept
/// separate so board-specific states (movable, hint, solved) can be tuned on
/// their own. Tiles are tinted with the accent of the board's difficulty.
#[derive(Debug, Clone)]
pub(crate) struct BoardPalette {
    pub(crate) board_bg: Color32,

    pub(crate) tile_bg: Color32,
    pub(crate) tile_bg_movable: Color32,
    pub(crate) tile_bg_hovered: Color32,
    pub(crate) tile_bg_solved: Color32,

    pub(crate) tile_border: Color32,
    pub(crate) tile_border_hint: Color32,

    pub(crate) text: Color32,
    pub(crate) text_solved: Color32,
}

impl BoardPalette {
    #[must_use]
    pub(crate) fn from_visuals(visuals: &Visuals, difficulty: Option<Difficulty>) -> Self {
        let accent = difficulty_accent(difficulty);
        Self {
            board_bg: visuals.extreme_bg_color,

            tile_bg: visuals.widgets.inactive.bg_fill.lerp_to_gamma(accent, TILE_TINT),
            tile_bg_movable: visuals
                .widgets
                .hovered
                .weak_bg_fill
                .lerp_to_gamma(accent, MOVABLE_TINT),
            tile_bg_hovered: visuals.widgets.active.weak_bg_fill,
            tile_bg_solved: visuals.selection.bg_fill,

            tile_border: visuals.widgets.inactive.fg_stroke.color,
            tile_border_hint: visuals.warn_fg_color,

            text: visuals.strong_text_color(),
            text_solved: visuals.selection.stroke.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_tinted_per_difficulty() {
        let visuals = Visuals::dark();
        let palettes: Vec<_> = Difficulty::ALL
            .into_iter()
            .map(|difficulty| BoardPalette::from_visuals(&visuals, Some(difficulty)))
            .collect();
        for (i, a) in palettes.iter().enumerate() {
            for b in &palettes[i + 1..] {
                assert_ne!(a.tile_bg, b.tile_bg);
                assert_ne!(a.tile_bg_movable, b.tile_bg_movable);
            }
        }
        assert_eq!(palettes[0].board_bg, visuals.extreme_bg_color);
    }

    #[test]
    fn accents_follow_difficulty() {
        let easy = difficulty_accent(Some(Difficulty::Easy));
        let hard = difficulty_accent(Some(Difficulty::Hard));
        assert!(easy.g() > easy.r());
        assert!(hard.r() > hard.g());
        assert_ne!(difficulty_accent(None), easy);
    }
}
