//! Board coordinates, slide directions, and the adjacency rule.

/// A cell coordinate on a board, counted from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, 0 is the top row.
    pub row: usize,
    /// Column index, 0 is the leftmost column.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major flat index into a position.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Position;
    ///
    /// assert_eq!(Position::from_index(5, 3), Position::new(1, 2));
    /// ```
    #[must_use]
    pub const fn from_index(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    /// Converts the position into a row-major flat index.
    #[must_use]
    pub const fn to_index(self, side: usize) -> usize {
        self.row * side + self.col
    }

    /// Returns the neighboring position in `direction`, or `None` at the board edge.
    #[must_use]
    pub fn step(self, direction: Direction, side: usize) -> Option<Self> {
        let Self { row, col } = self;
        let (row, col) = match direction {
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
        };
        (row < side && col < side).then_some(Self { row, col })
    }
}

/// The direction a tile slides into the empty cell.
///
/// `Up` moves the tile directly below the empty cell upward, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slide a tile upward.
    Up,
    /// Slide a tile downward.
    Down,
    /// Slide a tile to the left.
    Left,
    /// Slide a tile to the right.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Returns `true` if the cell at `index` is orthogonally adjacent to `empty_index`.
///
/// Two cells are adjacent when they share a row and their columns differ by one,
/// or share a column and their rows differ by one. Flat indices that differ by
/// one but sit on different rows (the last cell of a row and the first cell of
/// the next) are *not* adjacent.
///
/// # Examples
///
/// ```
/// use tileslide_core::is_adjacent;
///
/// assert!(is_adjacent(7, 8, 3));
/// assert!(is_adjacent(5, 8, 3));
/// assert!(!is_adjacent(2, 3, 3)); // row wrap
/// assert!(!is_adjacent(8, 8, 3));
/// ```
#[must_use]
pub const fn is_adjacent(index: usize, empty_index: usize, side: usize) -> bool {
    let a = Position::from_index(index, side);
    let b = Position::from_index(empty_index, side);
    (a.row == b.row && a.col.abs_diff(b.col) == 1)
        || (a.col == b.col && a.row.abs_diff(b.row) == 1)
}
