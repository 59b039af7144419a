use tileslide_core::{Board, Position};
use tinyvec::ArrayVec;

use crate::SolverError;

/// Counters collected during a search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolverStats {
    pub(crate) nodes_expanded: u64,
    pub(crate) iterations: u32,
}

impl SolverStats {
    /// Returns the number of boards expanded across all iterations.
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Returns the number of deepening iterations or placement stages performed.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

/// A move sequence that solves a board.
///
/// Sequences from [`Solver`] are shortest. Sequences from
/// [`Planner`](crate::Planner) are not, except on 3×3 boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<usize>,
    stats: SolverStats,
}

impl Solution {
    pub(crate) fn new(moves: Vec<usize>, stats: SolverStats) -> Self {
        Self { moves, stats }
    }

    /// Returns the flat indices of the tiles to press, in order.
    ///
    /// Pressing index `i` slides the tile at `i` into the empty cell.
    #[must_use]
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Returns the number of moves in the solution.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the board was already solved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the search statistics.
    #[must_use]
    pub fn stats(&self) -> SolverStats {
        self.stats
    }
}

/// An IDA* solver using the Manhattan-distance heuristic.
///
/// The heuristic never overestimates, so the first solution found is a
/// shortest one. Each deepening iteration raises the cost bound to the
/// smallest estimate that exceeded the previous bound.
///
/// 3×3 boards solve instantly. Random 4×4 boards may need millions of nodes
/// and random 5×5 boards are usually out of reach, so callers that must stay
/// responsive should configure a node budget with
/// [`with_node_limit`](Self::with_node_limit).
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_solver::{Solver, SolverError};
///
/// let solver = Solver::with_node_limit(1_000);
/// let unsolvable: Board = "2 1 3/4 5 6/7 8 .".parse()?;
/// assert_eq!(solver.solve(&unsolvable), Err(SolverError::Unsolvable));
/// # Ok::<(), tileslide_core::BoardError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Solver {
    node_limit: Option<u64>,
}

impl Solver {
    /// Creates a solver without a node budget.
    #[must_use]
    pub fn new() -> Self {
        Self { node_limit: None }
    }

    /// Creates a solver that gives up after expanding `limit` nodes.
    #[must_use]
    pub fn with_node_limit(limit: u64) -> Self {
        Self {
            node_limit: Some(limit),
        }
    }

    /// Finds a shortest move sequence that solves `board`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the board fails the parity check,
    /// or [`SolverError::NodeLimitExceeded`] if the node budget runs out.
    pub fn solve(&self, board: &Board) -> Result<Solution, SolverError> {
        if !board.is_solvable() {
            return Err(SolverError::Unsolvable);
        }

        let mut search = Search {
            board: board.clone(),
            path: Vec::new(),
            stats: SolverStats::default(),
            node_limit: self.node_limit,
        };
        let estimate = board.manhattan_distance();
        let mut bound = estimate;
        loop {
            search.stats.iterations += 1;
            match search.visit(0, bound, estimate, None)? {
                Visit::Found => {
                    log::debug!(
                        "solved {}x{} board in {} moves ({} nodes, {} iterations)",
                        board.side(),
                        board.side(),
                        search.path.len(),
                        search.stats.nodes_expanded,
                        search.stats.iterations,
                    );
                    return Ok(Solution {
                        moves: search.path,
                        stats: search.stats,
                    });
                }
                Visit::Exceeded(next_bound) => bound = next_bound,
            }
        }
    }

    /// Returns the first move of a shortest solution, or `None` if the board is
    /// already solved.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn hint(&self, board: &Board) -> Result<Option<usize>, SolverError> {
        Ok(self.solve(board)?.moves.first().copied())
    }
}

enum Visit {
    Found,
    Exceeded(usize),
}

struct Search {
    board: Board,
    path: Vec<usize>,
    stats: SolverStats,
    node_limit: Option<u64>,
}

impl Search {
    fn visit(
        &mut self,
        cost: usize,
        bound: usize,
        estimate: usize,
        previous_empty: Option<usize>,
    ) -> Result<Visit, SolverError> {
        let total = cost + estimate;
        if total > bound {
            return Ok(Visit::Exceeded(total));
        }
        if estimate == 0 {
            return Ok(Visit::Found);
        }

        self.stats.nodes_expanded += 1;
        if let Some(limit) = self.node_limit
            && self.stats.nodes_expanded > limit
        {
            return Err(SolverError::NodeLimitExceeded { limit });
        }

        let empty = self.board.empty_index();
        let candidates: ArrayVec<[usize; 4]> = self
            .board
            .movable_indices()
            .filter(|&index| Some(index) != previous_empty)
            .collect();

        let mut next_bound = usize::MAX;
        for index in candidates {
            let next_estimate = estimate_after_move(&self.board, index, estimate);
            self.board.swap(index, empty);
            self.path.push(index);
            match self.visit(cost + 1, bound, next_estimate, Some(empty))? {
                Visit::Found => return Ok(Visit::Found),
                Visit::Exceeded(exceeded) => next_bound = next_bound.min(exceeded),
            }
            self.path.pop();
            self.board.swap(index, empty);
        }
        Ok(Visit::Exceeded(next_bound))
    }
}

/// Updates the Manhattan estimate for sliding the tile at `index` into the empty cell.
fn estimate_after_move(board: &Board, index: usize, estimate: usize) -> usize {
    let Some(tile) = board.cell(index) else {
        return estimate;
    };
    let side = board.side();
    let goal = Position::from_index(tile.solved_index(), side);
    let distance = |at: usize| {
        let pos = Position::from_index(at, side);
        pos.row.abs_diff(goal.row) + pos.col.abs_diff(goal.col)
    };
    estimate + distance(board.empty_index()) - distance(index)
}

#[cfg(test)]
mod tests {
    use tileslide_core::Board;

    use super::*;
    use crate::reachable_boards;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn replay(start: &Board, moves: &[usize]) -> Board {
        moves.iter().fold(start.clone(), |b, &index| {
            b.slide(index).expect("solution moves are legal")
        })
    }

    #[test]
    fn test_solved_board_needs_no_moves() {
        let solution = Solver::new().solve(&Board::solved(4)).unwrap();
        assert!(solution.is_empty());
        assert_eq!(Solver::new().hint(&Board::solved(4)), Ok(None));
    }

    #[test]
    fn test_one_move_from_solved() {
        let start = board("1 2 3/4 5 6/7 . 8");
        let solution = Solver::new().solve(&start).unwrap();
        assert_eq!(solution.moves(), &[8]);
        assert_eq!(Solver::new().hint(&start), Ok(Some(8)));
    }

    #[test]
    fn test_known_hard_board() {
        // One of the two 3x3 boards at the maximum distance of 31 moves.
        let start = board("8 6 7/2 5 4/3 . 1");
        let solution = Solver::new().solve(&start).unwrap();
        assert_eq!(solution.len(), 31);
        assert!(replay(&start, solution.moves()).is_solved());
    }

    #[test]
    fn test_unsolvable_is_rejected() {
        let start = board("1 2 3 4/5 6 7 8/9 10 11 12/13 15 14 .");
        assert_eq!(Solver::new().solve(&start), Err(SolverError::Unsolvable));
    }

    #[test]
    fn test_node_limit_is_enforced() {
        let start = board("8 6 7/2 5 4/3 . 1");
        assert_eq!(
            Solver::with_node_limit(10).solve(&start),
            Err(SolverError::NodeLimitExceeded { limit: 10 })
        );
    }

    #[test]
    fn test_solution_length_matches_bfs_distance() {
        let distances = reachable_boards(&Board::solved(3), 200_000).unwrap();
        let solver = Solver::new();
        for (start, &distance) in distances.iter().step_by(997) {
            let solution = solver.solve(start).unwrap();
            assert_eq!(solution.len(), distance, "board {start}");
            assert!(replay(start, solution.moves()).is_solved());
        }
    }
}
