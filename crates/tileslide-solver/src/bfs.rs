use std::collections::{HashMap, VecDeque};

use tileslide_core::Board;

use crate::SolverError;

/// Enumerates every board reachable from `start`, with its move distance.
///
/// The search is exhaustive and keeps every visited board in memory. A 3×3
/// board has 181 440 reachable arrangements; anything larger is far beyond
/// `max_states` for any practical budget.
///
/// # Errors
///
/// Returns [`SolverError::StateLimitExceeded`] once more than `max_states`
/// boards have been discovered.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_solver::reachable_boards;
///
/// let reachable = reachable_boards(&Board::solved(2), 100)?;
/// // Half of the 4! arrangements of a 2x2 board are reachable.
/// assert_eq!(reachable.len(), 12);
/// # Ok::<(), tileslide_solver::SolverError>(())
/// ```
pub fn reachable_boards(
    start: &Board,
    max_states: usize,
) -> Result<HashMap<Board, usize>, SolverError> {
    let mut distances = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(board) = queue.pop_front() {
        let distance = distances[&board];
        for index in board.movable_indices() {
            let Some(next) = board.slide(index) else {
                continue;
            };
            if distances.contains_key(&next) {
                continue;
            }
            if distances.len() >= max_states {
                return Err(SolverError::StateLimitExceeded { limit: max_states });
            }
            distances.insert(next.clone(), distance + 1);
            queue.push_back(next);
        }
    }

    log::debug!(
        "explored {} boards reachable from {start}",
        distances.len()
    );
    Ok(distances)
}

#[cfg(test)]
mod tests {
    use tileslide_core::{Board, Tile};

    use super::*;

    /// Calls `f` with every arrangement of `1..side²-1` plus one empty cell.
    fn for_each_board(side: usize, mut f: impl FnMut(Board)) {
        #[expect(clippy::cast_possible_truncation)]
        let mut cells: Vec<Option<Tile>> = (1..side * side)
            .map(|label| Some(Tile::new(label as u8)))
            .chain([None])
            .collect();
        permute(&mut cells, 0, &mut |perm| {
            f(Board::from_cells(side, perm.to_vec()).unwrap());
        });
    }

    fn permute<T>(items: &mut [T], k: usize, f: &mut impl FnMut(&[T])) {
        if k == items.len() {
            f(items);
            return;
        }
        for i in k..items.len() {
            items.swap(k, i);
            permute(items, k + 1, f);
            items.swap(k, i);
        }
    }

    #[test]
    fn test_parity_matches_reachability_2x2() {
        let reachable = reachable_boards(&Board::solved(2), 100).unwrap();
        let mut count = 0;
        let mut solved = Vec::new();
        for_each_board(2, |board| {
            count += 1;
            assert_eq!(
                board.is_solvable(),
                reachable.contains_key(&board),
                "board {board}"
            );
            if board.is_solved() {
                solved.push(board);
            }
        });
        assert_eq!(count, 24);
        assert_eq!(solved, [Board::solved(2)]);
    }

    #[test]
    fn test_parity_matches_reachability_3x3() {
        let reachable = reachable_boards(&Board::solved(3), 200_000).unwrap();
        assert_eq!(reachable.len(), 181_440);
        assert_eq!(reachable.values().max(), Some(&31));
        let mut solvable = 0;
        let mut solved = Vec::new();
        for_each_board(3, |board| {
            assert_eq!(
                board.is_solvable(),
                reachable.contains_key(&board),
                "board {board}"
            );
            solvable += usize::from(board.is_solvable());
            if board.is_solved() {
                solved.push(board);
            }
        });
        assert_eq!(solvable, 181_440);
        // The win detector accepts exactly one of the 9! arrangements.
        assert_eq!(solved, [Board::solved(3)]);
    }

    #[test]
    fn test_state_limit() {
        assert_eq!(
            reachable_boards(&Board::solved(3), 1_000),
            Err(SolverError::StateLimitExceeded { limit: 1_000 })
        );
    }
}
