use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, hash_map::Entry},
};

use tileslide_core::{Board, Direction, Position};
use tinyvec::ArrayVec;

use crate::{Solution, SolverError, SolverStats};

/// Cells of the tracked tiles, followed by the empty cell.
type Key = ArrayVec<[usize; 9]>;

/// A solver that places tiles in a fixed order instead of searching for a
/// shortest solution.
///
/// While the unsolved region is larger than 3×3, its top row and then its left
/// column are placed and locked, shrinking the region by one. Tiles go in one
/// at a time, except the last two of each row or column, which are placed
/// together. The final 3×3 region is solved with A*.
///
/// Each stage only tracks the tiles it places and the empty cell, so the
/// stages stay small on every board size. Plans are not shortest on boards
/// larger than 3×3, but following [`hint`](Self::hint) after each move always
/// makes progress.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_solver::Planner;
///
/// let board: Board = "1 2 3 4/5 6 7 8/9 10 11 12/13 14 . 15".parse()?;
/// let plan = Planner::new().solve(&board)?;
/// assert_eq!(plan.moves(), &[15]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Planner {
    node_limit: Option<u64>,
}

impl Planner {
    /// Creates a planner without a node budget.
    #[must_use]
    pub fn new() -> Self {
        Self { node_limit: None }
    }

    /// Creates a planner that gives up after expanding `limit` nodes in total.
    #[must_use]
    pub fn with_node_limit(limit: u64) -> Self {
        Self {
            node_limit: Some(limit),
        }
    }

    /// Builds a complete move sequence that solves `board`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the board fails the parity check,
    /// or [`SolverError::NodeLimitExceeded`] if the node budget runs out.
    pub fn solve(&self, board: &Board) -> Result<Solution, SolverError> {
        let solution = self.plan(board, false)?;
        log::debug!(
            "planned {}x{} board in {} moves ({} nodes, {} stages)",
            board.side(),
            board.side(),
            solution.len(),
            solution.stats().nodes_expanded(),
            solution.stats().iterations(),
        );
        Ok(solution)
    }

    /// Returns the next move of the plan, or `None` if the board is already
    /// solved.
    ///
    /// Only the stages up to the first one with work left are searched.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn hint(&self, board: &Board) -> Result<Option<usize>, SolverError> {
        Ok(self.plan(board, true)?.moves().first().copied())
    }

    fn plan(&self, board: &Board, first_move_only: bool) -> Result<Solution, SolverError> {
        if !board.is_solvable() {
            return Err(SolverError::Unsolvable);
        }

        let mut board = board.clone();
        let mut locked = vec![false; board.cell_count()];
        let mut moves = Vec::new();
        let mut stats = SolverStats::default();
        for goals in stages(board.side()) {
            stats.iterations += 1;
            let path = place(&board, &goals, &locked, self.node_limit, &mut stats)?;
            for &index in &path {
                let empty = board.empty_index();
                board.swap(index, empty);
            }
            moves.extend_from_slice(&path);
            if first_move_only && !moves.is_empty() {
                break;
            }
            for goal in goals {
                locked[goal] = true;
            }
        }
        Ok(Solution::new(moves, stats))
    }
}

/// Splits the solved cells of a board into placement stages.
///
/// Each stage lists the solved indices of the tiles it places.
fn stages(side: usize) -> Vec<Vec<usize>> {
    let mut stages = Vec::new();
    let mut top = 0;
    while side - top > 3 {
        let size = side - top;
        let row: Vec<usize> = (top..side).map(|col| top * side + col).collect();
        stages.extend(row[..size - 2].iter().map(|&goal| vec![goal]));
        stages.push(row[size - 2..].to_vec());

        let column: Vec<usize> = (top + 1..side).map(|row| row * side + top).collect();
        stages.extend(column[..size - 3].iter().map(|&goal| vec![goal]));
        stages.push(column[size - 3..].to_vec());

        top += 1;
    }
    let last = side * side - 1;
    stages.push(
        (top..side)
            .flat_map(|row| (top..side).map(move |col| row * side + col))
            .filter(|&goal| goal != last)
            .collect(),
    );
    stages
}

fn distance(a: usize, b: usize, side: usize) -> usize {
    let a = Position::from_index(a, side);
    let b = Position::from_index(b, side);
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

struct Node {
    key: Key,
    /// Parent node and the index pressed to get here.
    from: Option<(usize, usize)>,
}

/// Moves the tiles whose solved indices are `goals` home with A*, never
/// touching a locked cell. Returns the indices to press.
fn place(
    board: &Board,
    goals: &[usize],
    locked: &[bool],
    node_limit: Option<u64>,
    stats: &mut SolverStats,
) -> Result<Vec<usize>, SolverError> {
    let side = board.side();
    let mut cell_of = vec![0; board.cell_count()];
    for (index, tile) in board.cells().iter().enumerate() {
        if let Some(tile) = tile {
            cell_of[tile.solved_index()] = index;
        }
    }

    let estimate = |key: &Key| -> usize {
        goals
            .iter()
            .zip(key.iter())
            .map(|(&goal, &at)| distance(goal, at, side))
            .sum()
    };

    let mut start: Key = goals.iter().map(|&goal| cell_of[goal]).collect();
    start.push(board.empty_index());
    let start_estimate = estimate(&start);

    let mut best_cost = HashMap::from([(start.clone(), 0)]);
    let mut nodes = vec![Node {
        key: start,
        from: None,
    }];
    let mut open = BinaryHeap::from([Reverse((start_estimate, Reverse(0), 0))]);

    while let Some(Reverse((total, Reverse(cost), id))) = open.pop() {
        let key = nodes[id].key.clone();
        if best_cost.get(&key).is_some_and(|&best| best < cost) {
            continue;
        }
        if total == cost {
            return Ok(path_to(&nodes, id));
        }

        stats.nodes_expanded += 1;
        if let Some(limit) = node_limit
            && stats.nodes_expanded > limit
        {
            return Err(SolverError::NodeLimitExceeded { limit });
        }

        let empty = key[goals.len()];
        for direction in Direction::ALL {
            let Some(next) = Position::from_index(empty, side).step(direction, side) else {
                continue;
            };
            let next = next.to_index(side);
            if locked[next] {
                continue;
            }

            let mut next_key = key.clone();
            if let Some(slot) = next_key[..goals.len()].iter().position(|&at| at == next) {
                next_key[slot] = empty;
            }
            next_key[goals.len()] = next;

            let next_cost = cost + 1;
            match best_cost.entry(next_key.clone()) {
                Entry::Occupied(mut entry) => {
                    if *entry.get() <= next_cost {
                        continue;
                    }
                    entry.insert(next_cost);
                }
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                }
            }

            let next_total = next_cost + estimate(&next_key);
            nodes.push(Node {
                key: next_key,
                from: Some((id, next)),
            });
            open.push(Reverse((next_total, Reverse(next_cost), nodes.len() - 1)));
        }
    }
    Err(SolverError::Unsolvable)
}

fn path_to(nodes: &[Node], mut id: usize) -> Vec<usize> {
    let mut path = Vec::new();
    while let Some((parent, pressed)) = nodes[id].from {
        path.push(pressed);
        id = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use tileslide_core::Board;

    use super::*;
    use crate::reachable_boards;

    fn replay(start: &Board, moves: &[usize]) -> Board {
        moves.iter().fold(start.clone(), |b, &index| {
            b.slide(index).expect("planned moves are legal")
        })
    }

    /// Scrambles a solved board with a xorshift-driven random walk.
    fn scrambled(side: usize, mut state: u64, steps: usize) -> Board {
        let mut b = Board::solved(side);
        for _ in 0..steps {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let movable: ArrayVec<[usize; 4]> = b.movable_indices().collect();
            let pick = usize::try_from(state % 4).unwrap() % movable.len();
            b = b.slide(movable[pick]).unwrap();
        }
        b
    }

    #[test]
    fn test_stages_cover_every_tile_once() {
        for side in Board::MIN_SIDE..=7 {
            let mut goals: Vec<usize> = stages(side).into_iter().flatten().collect();
            goals.sort_unstable();
            assert_eq!(goals, (0..side * side - 1).collect::<Vec<_>>(), "side {side}");
        }
        assert_eq!(
            stages(4),
            [
                vec![0],
                vec![1],
                vec![2, 3],
                vec![4],
                vec![8, 12],
                vec![5, 6, 7, 9, 10, 11, 13, 14],
            ]
        );
    }

    #[test]
    fn test_solved_board_needs_no_moves() {
        for side in 2..=5 {
            let solved = Board::solved(side);
            assert!(Planner::new().solve(&solved).unwrap().is_empty());
            assert_eq!(Planner::new().hint(&solved), Ok(None));
        }
    }

    #[test]
    fn test_unsolvable_is_rejected() {
        let start: Board = "1 2 3 4/5 6 7 8/9 10 11 12/13 15 14 .".parse().unwrap();
        assert_eq!(Planner::new().solve(&start), Err(SolverError::Unsolvable));
        assert_eq!(Planner::new().hint(&start), Err(SolverError::Unsolvable));
    }

    #[test]
    fn test_plans_are_shortest_on_3x3() {
        let distances = reachable_boards(&Board::solved(3), 200_000).unwrap();
        let planner = Planner::new();
        for (start, &distance) in distances.iter().step_by(4_999) {
            let plan = planner.solve(start).unwrap();
            assert_eq!(plan.len(), distance, "board {start}");
            assert!(replay(start, plan.moves()).is_solved());
        }
    }

    #[test]
    fn test_plans_solve_large_boards() {
        let planner = Planner::with_node_limit(1_000_000);
        for side in 4..=6 {
            for seed in 1..=5 {
                let start = scrambled(side, seed * 0x9e37_79b9, 2_000);
                let plan = planner.solve(&start).unwrap();
                assert!(replay(&start, plan.moves()).is_solved(), "board {start}");
                assert_eq!(planner.hint(&start), Ok(plan.moves().first().copied()));
            }
        }
    }

    #[test]
    fn test_following_hints_reaches_solved() {
        let planner = Planner::new();
        for side in [4, 5] {
            let mut b = scrambled(side, 0x2545_f491, 1_500);
            let mut steps = 0;
            while let Some(index) = planner.hint(&b).unwrap() {
                b = b.slide(index).expect("hints are legal moves");
                steps += 1;
                assert!(steps < 2_000, "hints did not converge on {side}x{side}");
            }
            assert!(b.is_solved());
        }
    }

    #[test]
    fn test_node_limit_is_enforced() {
        let start = scrambled(5, 7, 2_000);
        assert_eq!(
            Planner::with_node_limit(10).solve(&start),
            Err(SolverError::NodeLimitExceeded { limit: 10 })
        );
    }
}
