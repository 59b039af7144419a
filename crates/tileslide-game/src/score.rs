use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tileslide_core::Difficulty;

use crate::Elapsed;

/// The best (fewest-moves) completion recorded for one board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BestScore {
    /// Number of moves used.
    pub moves: u32,
    /// Play time in whole seconds.
    pub time: u64,
}

impl BestScore {
    /// Creates a score record.
    #[must_use]
    pub const fn new(moves: u32, time: u64) -> Self {
        Self { moves, time }
    }

    /// Returns the play time for display.
    #[must_use]
    pub const fn elapsed(&self) -> Elapsed {
        Elapsed::from_secs(self.time)
    }

    /// Returns `true` if this score should replace `current`.
    ///
    /// Only a strictly lower move count wins. Time is not compared, so a tie
    /// on moves keeps the existing record.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_game::BestScore;
    ///
    /// let score = BestScore::new(20, 30);
    /// assert!(score.improves_on(None));
    /// assert!(score.improves_on(Some(&BestScore::new(21, 10))));
    /// assert!(!score.improves_on(Some(&BestScore::new(20, 90))));
    /// assert!(!score.improves_on(Some(&BestScore::new(19, 90))));
    /// ```
    #[must_use]
    pub fn improves_on(&self, current: Option<&Self>) -> bool {
        current.is_none_or(|current| self.moves < current.moves)
    }
}

/// Durable per-difficulty storage for best scores.
///
/// `save` overwrites unconditionally; callers check
/// [`BestScore::improves_on`] first.
pub trait ScoreStore {
    /// Returns the stored record for `difficulty`, if any.
    fn load(&self, difficulty: Difficulty) -> Option<BestScore>;

    /// Stores `score` as the record for `difficulty`.
    fn save(&mut self, difficulty: Difficulty, score: BestScore);

    /// Removes every stored record.
    fn clear(&mut self);
}

/// A [`ScoreStore`] kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    scores: HashMap<Difficulty, BestScore>,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored record.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, BestScore)> + '_ {
        self.scores.iter().map(|(&difficulty, &score)| (difficulty, score))
    }
}

impl FromIterator<(Difficulty, BestScore)> for MemoryScoreStore {
    fn from_iter<I: IntoIterator<Item = (Difficulty, BestScore)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self, difficulty: Difficulty) -> Option<BestScore> {
        self.scores.get(&difficulty).copied()
    }

    fn save(&mut self, difficulty: Difficulty, score: BestScore) {
        self.scores.insert(difficulty, score);
    }

    fn clear(&mut self) {
        self.scores.clear();
    }
}

/// Storage that may be unavailable.
///
/// `None` behaves like a store that is switched off: reads find nothing and
/// writes are dropped.
impl<S> ScoreStore for Option<S>
where
    S: ScoreStore,
{
    fn load(&self, difficulty: Difficulty) -> Option<BestScore> {
        self.as_ref().and_then(|store| store.load(difficulty))
    }

    fn save(&mut self, difficulty: Difficulty, score: BestScore) {
        match self {
            Some(store) => store.save(difficulty, score),
            None => log::debug!("score storage unavailable, dropping {difficulty} record"),
        }
    }

    fn clear(&mut self) {
        if let Some(store) = self {
            store.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_keeps_sizes_apart() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.load(Difficulty::Easy), None);

        store.save(Difficulty::Easy, BestScore::new(30, 40));
        store.save(Difficulty::Hard, BestScore::new(300, 400));
        assert_eq!(store.load(Difficulty::Easy), Some(BestScore::new(30, 40)));
        assert_eq!(store.load(Difficulty::Medium), None);
        assert_eq!(store.load(Difficulty::Hard), Some(BestScore::new(300, 400)));
    }

    #[test]
    fn test_save_overwrites_unconditionally() {
        let mut store = MemoryScoreStore::new();
        store.save(Difficulty::Easy, BestScore::new(10, 5));
        store.save(Difficulty::Easy, BestScore::new(50, 60));
        assert_eq!(store.load(Difficulty::Easy), Some(BestScore::new(50, 60)));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut store: MemoryScoreStore = Difficulty::ALL
            .into_iter()
            .map(|d| (d, BestScore::new(1, 1)))
            .collect();
        assert_eq!(store.iter().count(), 3);
        store.clear();
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn test_unavailable_store_degrades() {
        let mut store: Option<MemoryScoreStore> = None;
        store.save(Difficulty::Easy, BestScore::new(10, 5));
        assert_eq!(store.load(Difficulty::Easy), None);
        store.clear();

        let mut store = Some(MemoryScoreStore::new());
        store.save(Difficulty::Easy, BestScore::new(10, 5));
        assert_eq!(store.load(Difficulty::Easy), Some(BestScore::new(10, 5)));
    }

    #[test]
    fn test_improves_on_requires_strictly_fewer_moves() {
        let current = BestScore::new(25, 100);
        assert!(BestScore::new(24, 500).improves_on(Some(&current)));
        assert!(!BestScore::new(25, 1).improves_on(Some(&current)));
        assert!(!BestScore::new(26, 1).improves_on(Some(&current)));
    }
}
