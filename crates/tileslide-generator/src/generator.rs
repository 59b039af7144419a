use rand::RngExt;
use tileslide_core::{Board, Difficulty};

use crate::PuzzleSeed;

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The shuffled, solvable board.
    pub board: Board,
    /// The seed used for generation.
    pub seed: PuzzleSeed,
    /// Whether the shuffle had to be corrected to become solvable.
    pub corrected: bool,
}

/// Generates shuffled, solvable boards of a fixed side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    side: usize,
}

impl BoardGenerator {
    /// Creates a generator for boards of the given side.
    ///
    /// # Panics
    ///
    /// Panics if `side` is not in `Board::MIN_SIDE..=Board::MAX_SIDE`.
    #[must_use]
    pub fn new(side: usize) -> Self {
        assert!(
            (Board::MIN_SIDE..=Board::MAX_SIDE).contains(&side),
            "unsupported board side {side}"
        );
        Self { side }
    }

    /// Creates a generator for the board size of `difficulty`.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.side())
    }

    /// Returns the side of generated boards.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the board determined by `seed`.
    ///
    /// The result is always solvable and never already solved. A shuffle that
    /// ends on the solved arrangement is redrawn from the same RNG stream.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedBoard {
        let mut rng = seed.board_rng(self.side);
        loop {
            let mut board = Board::solved(self.side);
            shuffle_board(&mut board, &mut rng);
            let corrected = ensure_solvable(&mut board);
            if board.is_solved() {
                log::debug!("shuffle of seed {seed} landed on the solved board, redrawing");
                continue;
            }
            log::debug!(
                "generated {side}x{side} board from seed {seed} (corrected: {corrected})",
                side = self.side,
            );
            return GeneratedBoard {
                board,
                seed,
                corrected,
            };
        }
    }
}

/// Shuffles every cell of `board`, including the empty cell, with a
/// Fisher–Yates shuffle.
///
/// Every permutation of the cells is equally likely. The result may be
/// unsolvable; see [`ensure_solvable`].
pub fn shuffle_board<R>(board: &mut Board, rng: &mut R)
where
    R: RngExt,
{
    for i in (1..board.cell_count()).rev() {
        let j = rng.random_range(0..=i);
        board.swap(i, j);
    }
}

/// Makes `board` solvable, returning `true` if it had to be changed.
///
/// An unsolvable board is fixed by swapping the first two neighboring tiles in
/// row-major order. Exchanging two tiles changes the inversion count by an odd
/// amount and leaves the empty cell in place, which flips solvability.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_generator::ensure_solvable;
///
/// let mut board: Board = "2 1 3/4 5 6/7 8 .".parse()?;
/// assert!(ensure_solvable(&mut board));
/// assert!(board.is_solved());
///
/// assert!(!ensure_solvable(&mut board));
/// # Ok::<(), tileslide_core::BoardError>(())
/// ```
pub fn ensure_solvable(board: &mut Board) -> bool {
    if board.is_solvable() {
        return false;
    }
    // Every board has at least four cells, so the first tile pair starts
    // right after the empty cell when it sits in the first two slots.
    let first = match board.empty_index() {
        0 => 1,
        1 => 2,
        _ => 0,
    };
    board.swap(first, first + 1);
    debug_assert!(board.is_solvable());
    true
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use tileslide_core::Board;
    use tileslide_solver::reachable_boards;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_ensure_solvable_swaps_first_tile_pair() {
        let mut b = board("3 2 1/4 5 6/7 8 .");
        assert!(!b.is_solvable());
        assert!(ensure_solvable(&mut b));
        assert_eq!(b.to_string(), "2 3 1/4 5 6/7 8 .");

        let mut b = board(". 2 1/3 4 5/6 7 8");
        assert!(ensure_solvable(&mut b));
        assert_eq!(b.to_string(), ". 1 2/3 4 5/6 7 8");

        let mut b = board("2 . 1/3 4 5/6 7 8");
        assert!(!b.is_solvable());
        assert!(ensure_solvable(&mut b));
        assert_eq!(b.to_string(), "2 . 3/1 4 5/6 7 8");
    }

    #[test]
    fn test_ensure_solvable_keeps_solvable_boards() {
        let original = board("1 2 3 4/5 6 7 8/9 10 11 ./13 14 15 12");
        let mut b = original.clone();
        assert!(!ensure_solvable(&mut b));
        assert_eq!(b, original);
    }

    #[test]
    fn test_same_seed_same_board() {
        let seed = PuzzleSeed::from_bytes([42; 32]);
        for side in 2..=5 {
            let generator = BoardGenerator::new(side);
            assert_eq!(
                generator.generate_with_seed(seed),
                generator.generate_with_seed(seed)
            );
        }
    }

    #[test]
    fn test_generated_3x3_boards_are_reachable() {
        let reachable = reachable_boards(&Board::solved(3), 200_000).unwrap();
        let generator = BoardGenerator::new(3);
        for _ in 0..1_000 {
            let generated = generator.generate();
            assert!(
                reachable.contains_key(&generated.board),
                "seed {} produced unreachable board {}",
                generated.seed,
                generated.board
            );
        }
    }

    #[test]
    fn test_generated_boards_are_solvable_for_all_difficulties() {
        for difficulty in Difficulty::ALL {
            let generator = BoardGenerator::for_difficulty(difficulty);
            for _ in 0..1_000 {
                let generated = generator.generate();
                assert_eq!(generated.board.side(), difficulty.side());
                assert!(generated.board.is_solvable(), "{}", generated.board);
                assert!(!generated.board.is_solved());
            }
        }
    }

    #[test]
    fn test_shuffle_reaches_every_2x2_arrangement() {
        let mut rng = Pcg64::seed_from_u64(7);
        let mut counts = HashMap::new();
        for _ in 0..24_000 {
            let mut b = Board::solved(2);
            shuffle_board(&mut b, &mut rng);
            *counts.entry(b).or_insert(0_u32) += 1;
        }
        assert_eq!(counts.len(), 24);
        // Expected 1000 each; a fair shuffle stays well inside this band.
        assert!(counts.values().all(|&n| (800..1200).contains(&n)));
    }

    proptest! {
        #[test]
        fn any_seed_generates_playable_board(bytes in any::<[u8; 32]>(), side in 2usize..=5) {
            let seed = PuzzleSeed::from_bytes(bytes);
            let generated = BoardGenerator::new(side).generate_with_seed(seed);
            let board = &generated.board;
            prop_assert_eq!(board.side(), side);
            prop_assert_eq!(board.cells().iter().filter(|c| c.is_none()).count(), 1);
            prop_assert!(board.is_solvable());
            prop_assert!(!board.is_solved());
        }
    }
}
