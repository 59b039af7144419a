//! Game session management for sliding-tile puzzles.
//!
//! A [`Game`] wraps one attempt at a board: the tiles, the move counter, the
//! elapsed time, and a [`GameStatus`] tag that moves from `Ready` to
//! `Playing` on the first accepted move and to `Complete` once the board is
//! solved.
//!
//! Sessions are immutable values. Every transition returns a new [`Game`], so
//! the board, counters, status, and best score always change together.
//!
//! Best scores are kept per [`Difficulty`](tileslide_core::Difficulty)
//! through the [`ScoreStore`] trait.
//!
//! # Examples
//!
//! ```
//! use tileslide_core::Board;
//! use tileslide_game::{Game, GameStatus};
//!
//! let board: Board = "1 2 3/4 5 6/7 . 8".parse()?;
//! let game = Game::new(board, None);
//! assert_eq!(game.status(), GameStatus::Ready);
//!
//! let game = game.attempt_move(8);
//! assert_eq!(game.status(), GameStatus::Complete);
//! assert_eq!(game.moves(), 1);
//! # Ok::<(), tileslide_core::BoardError>(())
//! ```

pub use self::{elapsed::*, error::*, game::*, score::*};

mod elapsed;
mod error;
mod game;
mod score;
