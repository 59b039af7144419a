//! Playable board sizes.

/// One of the fixed board sizes offered to players.
///
/// # Examples
///
/// ```
/// use tileslide_core::Difficulty;
///
/// assert_eq!(Difficulty::Medium.side(), 4);
/// assert_eq!(Difficulty::Medium.tile_count(), 15);
/// assert_eq!(Difficulty::Medium.to_string(), "4×4 (Medium)");
/// assert_eq!(Difficulty::from_side(5), Some(Difficulty::Hard));
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Difficulty {
    /// 3×3 board with 8 tiles.
    #[default]
    #[display("3×3 (Easy)")]
    Easy,
    /// 4×4 board with 15 tiles.
    #[display("4×4 (Medium)")]
    Medium,
    /// 5×5 board with 24 tiles.
    #[display("5×5 (Hard)")]
    Hard,
}

impl Difficulty {
    /// All difficulties from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the board side length.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 5,
        }
    }

    /// Returns the number of movable tiles (`side² - 1`).
    #[must_use]
    pub const fn tile_count(self) -> usize {
        self.side() * self.side() - 1
    }

    /// Returns the short name shown next to the size.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Looks up the difficulty for a side length.
    #[must_use]
    pub fn from_side(side: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.side() == side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_are_distinct_and_increasing() {
        let sides: Vec<_> = Difficulty::ALL.iter().map(|d| d.side()).collect();
        assert_eq!(sides, [3, 4, 5]);
    }

    #[test]
    fn test_from_side_rejects_unknown() {
        assert_eq!(Difficulty::from_side(2), None);
        assert_eq!(Difficulty::from_side(6), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_side(d.side()), Some(d));
        }
    }
}
