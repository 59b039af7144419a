//! The tile board.

use std::{fmt, str::FromStr};

use crate::{Direction, Position, Tile, position::is_adjacent};

/// Errors produced when building or parsing a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The side length is outside the supported range.
    #[display("board side must be between {min} and {max}, got {side}")]
    InvalidSide {
        /// Requested side length.
        side: usize,
        /// Smallest supported side.
        min: usize,
        /// Largest supported side.
        max: usize,
    },
    /// The number of cells does not match `side²`.
    #[display("expected {expected} cells, got {actual}")]
    CellCount {
        /// Required number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A row in the text form has the wrong number of cells.
    #[display("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row number.
        row: usize,
        /// Number of cells every row must have.
        expected: usize,
        /// Number of cells found in the row.
        actual: usize,
    },
    /// A tile label does not fit on a board of this side.
    #[display("tile {label} is out of range for a {side}x{side} board")]
    TileOutOfRange {
        /// Offending label.
        label: u8,
        /// Board side length.
        side: usize,
    },
    /// The same tile label appears twice.
    #[display("tile {label} appears more than once")]
    DuplicateTile {
        /// Repeated label.
        label: u8,
    },
    /// The board does not have exactly one empty cell.
    #[display("expected exactly one empty cell, found {count}")]
    EmptyCellCount {
        /// Number of empty cells found.
        count: usize,
    },
    /// A cell in the text form is neither a label nor an empty marker.
    #[display("invalid cell `{text}`")]
    InvalidCell {
        /// The unparsable cell text.
        text: String,
    },
}

/// An `side × side` arrangement of tiles with exactly one empty cell.
///
/// Cells are stored in row-major order. `None` marks the empty cell, whose
/// flat index is cached so adjacency checks do not need to scan the board.
///
/// # Invariants
///
/// - Exactly one cell is empty.
/// - The tiles are exactly the labels `1..=side²-1`, each appearing once.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
///
/// let board = Board::solved(3);
/// assert_eq!(board.to_string(), "1 2 3/4 5 6/7 8 .");
/// assert_eq!(board.empty_index(), 8);
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vec<Option<Tile>>,
    empty: usize,
}

impl Board {
    /// Smallest supported side length.
    pub const MIN_SIDE: usize = 2;
    /// Largest supported side length; keeps every label within `u8`.
    pub const MAX_SIDE: usize = 15;

    /// Creates the solved board: tiles `1..=side²-1` in row-major order, followed
    /// by the empty cell in the bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if `side` is not in `MIN_SIDE..=MAX_SIDE`.
    #[must_use]
    pub fn solved(side: usize) -> Self {
        assert!(
            (Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side),
            "unsupported board side {side}"
        );
        let len = side * side;
        #[expect(clippy::cast_possible_truncation)]
        let cells = (1..len)
            .map(|label| Some(Tile::new(label as u8)))
            .chain([None])
            .collect();
        Self {
            side,
            cells,
            empty: len - 1,
        }
    }

    /// Builds a board from row-major cells, validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the side is unsupported, the cell count is
    /// wrong, a label is out of range or repeated, or there is not exactly one
    /// empty cell.
    pub fn from_cells(side: usize, cells: Vec<Option<Tile>>) -> Result<Self, BoardError> {
        if !(Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side) {
            return Err(BoardError::InvalidSide {
                side,
                min: Self::MIN_SIDE,
                max: Self::MAX_SIDE,
            });
        }
        let len = side * side;
        if cells.len() != len {
            return Err(BoardError::CellCount {
                expected: len,
                actual: cells.len(),
            });
        }

        let mut seen = vec![false; len];
        let mut empty = None;
        let mut empty_count = 0;
        for (index, cell) in cells.iter().enumerate() {
            match cell {
                None => {
                    empty_count += 1;
                    empty = Some(index);
                }
                Some(tile) => {
                    let slot = tile.solved_index();
                    if slot >= len - 1 {
                        return Err(BoardError::TileOutOfRange {
                            label: tile.label(),
                            side,
                        });
                    }
                    if seen[slot] {
                        return Err(BoardError::DuplicateTile {
                            label: tile.label(),
                        });
                    }
                    seen[slot] = true;
                }
            }
        }
        match (empty, empty_count) {
            (Some(empty), 1) => Ok(Self { side, cells, empty }),
            _ => Err(BoardError::EmptyCellCount { count: empty_count }),
        }
    }

    /// Returns the side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of cells (`side²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    /// Returns the tile at `index`, or `None` for the empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`cell_count`](Self::cell_count).
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Tile> {
        self.cells[index]
    }

    /// Returns the flat index of the empty cell.
    #[must_use]
    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Returns the position of the empty cell.
    #[must_use]
    pub fn empty_position(&self) -> Position {
        Position::from_index(self.empty, self.side)
    }

    /// Returns the tiles in row-major order, skipping the empty cell.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns `true` if the tile at `index` may slide into the empty cell.
    ///
    /// Out-of-range indices and the empty cell itself are never movable.
    #[must_use]
    pub fn is_movable(&self, index: usize) -> bool {
        index < self.cells.len()
            && index != self.empty
            && is_adjacent(index, self.empty, self.side)
    }

    /// Returns the index of the tile that would slide in `direction`.
    ///
    /// The tile moving up sits below the empty cell, and so on. Returns `None`
    /// when the empty cell is on the edge that has no such tile.
    #[must_use]
    pub fn neighbor_of_empty(&self, direction: Direction) -> Option<usize> {
        self.empty_position()
            .step(direction.opposite(), self.side)
            .map(|pos| pos.to_index(self.side))
    }

    /// Returns the indices of every tile that may currently move.
    pub fn movable_indices(&self) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor_of_empty(direction))
    }

    /// Exchanges two cells in place, keeping the empty index in sync.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.cells.swap(i, j);
        if self.empty == i {
            self.empty = j;
        } else if self.empty == j {
            self.empty = i;
        }
    }

    /// Returns a copy of the board with two cells exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut board = self.clone();
        board.swap(i, j);
        board
    }

    /// Returns the board after sliding the tile at `index` into the empty cell.
    ///
    /// Returns `None` if the tile is not adjacent to the empty cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Board;
    ///
    /// let board = Board::solved(3);
    /// assert!(board.slide(0).is_none());
    /// let moved = board.slide(7).unwrap();
    /// assert_eq!(moved.empty_index(), 7);
    /// ```
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<Self> {
        self.is_movable(index)
            .then(|| self.swapped(index, self.empty))
    }

    /// Checks whether the board is in the solved arrangement.
    ///
    /// Every index `i < side²-1` must hold tile `i+1` and the last cell must be
    /// empty.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.empty == last
            && self.cells[..last]
                .iter()
                .enumerate()
                .all(|(i, cell)| cell.is_some_and(|tile| tile.solved_index() == i))
    }

    /// Counts pairs of tiles that appear in the wrong relative order.
    ///
    /// The empty cell is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Board;
    ///
    /// let board: Board = "2 1 3/4 5 6/7 8 .".parse()?;
    /// assert_eq!(board.inversions(), 1);
    /// # Ok::<(), tileslide_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn inversions(&self) -> usize {
        let tiles: Vec<Tile> = self.tiles().collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, a)| tiles[i + 1..].iter().filter(|b| a > b).count())
            .sum()
    }

    /// Returns the zero-based row of the empty cell, counted from the bottom row.
    #[must_use]
    pub fn empty_row_from_bottom(&self) -> usize {
        self.side - 1 - self.empty / self.side
    }

    /// Checks whether the board can reach the solved arrangement.
    ///
    /// A horizontal move leaves the inversion count unchanged. A vertical move
    /// carries a tile past the `side - 1` tiles between its old and new cell,
    /// flipping one pair for each, so the count changes by an amount with the
    /// parity of `side - 1`. Therefore:
    ///
    /// - odd sides: solvable iff the inversion count is even;
    /// - even sides: solvable iff `inversions + empty_row_from_bottom` is even.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.side % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.empty_row_from_bottom()) % 2 == 0
        }
    }

    /// Sum over all tiles of the grid distance to their solved position.
    ///
    /// This never overestimates the number of remaining moves.
    #[must_use]
    pub fn manhattan_distance(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|tile| (index, tile)))
            .map(|(index, tile)| {
                let here = Position::from_index(index, self.side);
                let goal = Position::from_index(tile.solved_index(), self.side);
                here.row.abs_diff(goal.row) + here.col.abs_diff(goal.col)
            })
            .sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(self.side).enumerate() {
            if row_index > 0 {
                f.write_str("/")?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{tile}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses rows separated by `/` or newlines, cells separated by whitespace.
    /// `.` or `_` marks the empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<&str>> = s
            .split(['/', '\n'])
            .map(|row| row.split_whitespace().collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(BoardError::RaggedRow {
                    row: row_index,
                    expected: side,
                    actual: row.len(),
                });
            }
            for &text in row {
                let cell = match text {
                    "." | "_" => None,
                    _ => {
                        let tile = text
                            .parse::<u8>()
                            .ok()
                            .and_then(Tile::try_new)
                            .ok_or_else(|| BoardError::InvalidCell {
                                text: text.to_owned(),
                            })?;
                        Some(tile)
                    }
                };
                cells.push(cell);
            }
        }
        Self::from_cells(side, cells)
    }
}
