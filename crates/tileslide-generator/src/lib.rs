//! Random board generation for sliding-tile puzzles.
//!
//! A board is generated in two steps:
//!
//! 1. [`shuffle_board`] applies a Fisher–Yates shuffle to every cell of the
//!    solved board, including the empty cell, so every arrangement is equally
//!    likely.
//! 2. [`ensure_solvable`] checks the parity invariant and, if the arrangement
//!    cannot be solved, swaps the first two neighboring tiles to flip it.
//!
//! The correction maps each unsolvable arrangement onto a solvable one, so
//! solvable arrangements are not all equally likely afterwards. The bias is
//! small and accepted.
//!
//! Generation is deterministic for a given [`PuzzleSeed`] and side length.
//!
//! # Examples
//!
//! ```
//! use tileslide_core::Difficulty;
//! use tileslide_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::for_difficulty(Difficulty::Medium);
//! let generated = generator.generate();
//! assert_eq!(generated.board.side(), 4);
//! assert!(generated.board.is_solvable());
//! assert!(!generated.board.is_solved());
//!
//! // The same seed reproduces the same board.
//! let again = generator.generate_with_seed(generated.seed);
//! assert_eq!(again.board, generated.board);
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
