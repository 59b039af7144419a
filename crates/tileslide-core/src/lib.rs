//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the board model shared by generation, solving, and game
//! session management.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`tile`]: Type-safe tile labels (`1..=side²-1`)
//!    - [`position`]: Row/column coordinates, slide directions, and the
//!      adjacency rule that decides whether a tile may move
//!
//! 2. **Board**
//!    - [`board`]: The `side × side` arrangement of tiles plus one empty cell,
//!      including the win detector and inversion/parity based solvability check
//!
//! 3. **Difficulty**
//!    - [`difficulty`]: The fixed set of playable board sizes
//!
//! # Examples
//!
//! ```
//! use tileslide_core::Board;
//!
//! let board: Board = "1 2 3/4 5 6/7 . 8".parse()?;
//! assert!(!board.is_solved());
//! assert!(board.is_movable(8));
//!
//! let next = board.slide(8).expect("tile 8 is next to the empty cell");
//! assert!(next.is_solved());
//! # Ok::<(), tileslide_core::BoardError>(())
//! ```

pub mod board;
pub mod difficulty;
pub mod position;
pub mod tile;

pub use self::{
    board::{Board, BoardError},
    difficulty::Difficulty,
    position::{Direction, Position, is_adjacent},
    tile::Tile,
};
