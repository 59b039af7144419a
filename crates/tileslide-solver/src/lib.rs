//! Sliding-tile puzzle solvers.
//!
//! - [`Solver`] finds optimal solutions with IDA* and the Manhattan-distance
//!   heuristic. A node budget keeps large boards from stalling the caller.
//! - [`Planner`] places tiles row by row and column by column. Its plans are
//!   longer than optimal on 4×4 and larger boards, but they are found in
//!   milliseconds on every supported size, which makes it the source of hints.
//! - [`reachable_boards`] enumerates the whole state space reachable from a
//!   board with breadth-first search. Only 2×2 and 3×3 boards are small enough
//!   for this; it exists to cross-check the parity rule and the IDA* search.
//!
//! # Examples
//!
//! ```
//! use tileslide_core::Board;
//! use tileslide_solver::Solver;
//!
//! let board: Board = "1 2 3/4 5 6/. 7 8".parse()?;
//! let solution = Solver::new().solve(&board)?;
//! assert_eq!(solution.moves(), &[7, 8]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{bfs::*, ida_star::*, planner::*};

mod bfs;
mod ida_star;
mod planner;

/// Errors returned by the solvers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SolverError {
    /// The board cannot reach the solved arrangement.
    #[display("board is not solvable")]
    Unsolvable,
    /// The search expanded more nodes than allowed.
    #[display("search gave up after expanding {limit} nodes")]
    NodeLimitExceeded {
        /// The configured node budget.
        limit: u64,
    },
    /// The exhaustive search found more states than allowed.
    #[display("state space exceeds {limit} boards")]
    StateLimitExceeded {
        /// The configured state budget.
        limit: usize,
    },
}
