//! Tile labels.

use std::{fmt, num::NonZeroU8};

/// A labeled, movable tile.
///
/// Labels start at 1. On a board of side `n` the valid labels are
/// `1..=n²-1`; the empty cell is represented as `None` rather than a tile.
///
/// # Examples
///
/// ```
/// use tileslide_core::Tile;
///
/// let tile = Tile::new(5);
/// assert_eq!(tile.label(), 5);
/// assert_eq!(tile.solved_index(), 4);
/// assert_eq!(tile.to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(NonZeroU8);

impl Tile {
    /// Creates a tile with the given label.
    ///
    /// # Panics
    ///
    /// Panics if `label` is 0.
    #[must_use]
    pub const fn new(label: u8) -> Self {
        match NonZeroU8::new(label) {
            Some(label) => Self(label),
            None => panic!("tile label must be non-zero"),
        }
    }

    /// Creates a tile, returning `None` if `label` is 0.
    #[must_use]
    pub const fn try_new(label: u8) -> Option<Self> {
        match NonZeroU8::new(label) {
            Some(label) => Some(Self(label)),
            None => None,
        }
    }

    /// Returns the tile's label.
    #[must_use]
    pub const fn label(self) -> u8 {
        self.0.get()
    }

    /// Returns the flat index this tile occupies on a solved board.
    #[must_use]
    pub const fn solved_index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(Tile::try_new(0), None);
        assert_eq!(Tile::try_new(1), Some(Tile::new(1)));
    }

    #[test]
    fn test_ordering_follows_label() {
        assert!(Tile::new(2) < Tile::new(10));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_new_zero_panics() {
        let _ = Tile::new(0);
    }
}
