use std::time::Duration;

use tileslide_core::{Board, Difficulty, Direction};

use crate::{BestScore, MoveBlockReason, ScoreStore};

/// The phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum GameStatus {
    /// No move has been made yet. The timer is stopped.
    #[default]
    Ready,
    /// At least one move has been made. The timer is running.
    Playing,
    /// The board is solved. The session is frozen.
    Complete,
}

/// A sliding-tile game session.
///
/// Holds the board, the move counter, the elapsed play time, the session
/// status, and the best score for the board's size. Every operation returns a
/// new `Game` and leaves `self` untouched.
///
/// # Example
///
/// ```
/// use tileslide_core::Difficulty;
/// use tileslide_game::{Game, GameStatus};
/// use tileslide_generator::BoardGenerator;
///
/// let generated = BoardGenerator::for_difficulty(Difficulty::Easy).generate();
/// let game = Game::new(generated.board, None);
///
/// assert_eq!(game.status(), GameStatus::Ready);
/// assert_eq!(game.moves(), 0);
/// assert!(!game.board().is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    moves: u32,
    elapsed: Duration,
    status: GameStatus,
    best: Option<BestScore>,
    new_best: bool,
}

impl Game {
    /// Creates a session for `board` with the currently stored best score.
    ///
    /// The session starts in [`GameStatus::Ready`] with no moves and no
    /// elapsed time.
    #[must_use]
    pub fn new(board: Board, best: Option<BestScore>) -> Self {
        Self {
            board,
            moves: 0,
            elapsed: Duration::ZERO,
            status: GameStatus::Ready,
            best,
            new_best: false,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the difficulty matching the board size, if it is one of the
    /// playable sizes.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_side(self.board.side())
    }

    /// Returns the number of accepted moves.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the accumulated play time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the best score for this board size, including one set by this
    /// session.
    #[must_use]
    pub fn best(&self) -> Option<BestScore> {
        self.best
    }

    /// Returns the session with `best` as the score to beat.
    ///
    /// Used when stored records change outside the session, for example when
    /// the player clears them.
    #[must_use]
    pub fn with_best(&self, best: Option<BestScore>) -> Self {
        Self {
            best,
            ..self.clone()
        }
    }

    /// Returns `true` if completing this session set a new best score.
    #[must_use]
    pub fn is_new_best(&self) -> bool {
        self.new_best
    }

    /// Returns this session's moves and whole seconds played.
    #[must_use]
    pub fn score(&self) -> BestScore {
        BestScore::new(self.moves, self.elapsed.as_secs())
    }

    /// Checks whether the tile at `target` can slide into the empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveBlockReason::Complete`] once the puzzle is solved,
    /// [`MoveBlockReason::OutOfBounds`] for an index outside the board,
    /// [`MoveBlockReason::EmptyCell`] for the empty cell itself, and
    /// [`MoveBlockReason::NotAdjacent`] for a tile not next to the empty cell.
    pub fn move_capability(&self, target: usize) -> Result<(), MoveBlockReason> {
        if self.status.is_complete() {
            return Err(MoveBlockReason::Complete);
        }
        if target >= self.board.cell_count() {
            return Err(MoveBlockReason::OutOfBounds);
        }
        if target == self.board.empty_index() {
            return Err(MoveBlockReason::EmptyCell);
        }
        if !self.board.is_movable(target) {
            return Err(MoveBlockReason::NotAdjacent);
        }
        Ok(())
    }

    /// Slides the tile at `target` into the empty cell.
    ///
    /// A blocked move (see [`move_capability`](Self::move_capability)) is
    /// ignored and the returned session equals `self`. An accepted move
    /// increments the move counter and starts the session. If the board ends
    /// up solved, the session completes and the best score is replaced when
    /// this session used strictly fewer moves.
    ///
    /// # Example
    ///
    /// ```
    /// use tileslide_core::Board;
    /// use tileslide_game::{BestScore, Game, GameStatus};
    ///
    /// let board: Board = "1 2 3/4 5 6/7 . 8".parse()?;
    /// let game = Game::new(board, Some(BestScore::new(12, 30)));
    ///
    /// // Tile 1 is not next to the empty cell.
    /// assert_eq!(game.attempt_move(0), game);
    ///
    /// let game = game.attempt_move(8);
    /// assert_eq!(game.status(), GameStatus::Complete);
    /// assert!(game.is_new_best());
    /// assert_eq!(game.best(), Some(BestScore::new(1, 0)));
    /// # Ok::<(), tileslide_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn attempt_move(&self, target: usize) -> Self {
        if let Err(reason) = self.move_capability(target) {
            log::trace!("move of cell {target} ignored: {reason}");
            return self.clone();
        }

        let empty = self.board.empty_index();
        let mut next = self.clone();
        next.board.swap(target, empty);
        next.moves += 1;
        next.status = GameStatus::Playing;

        if next.board.is_solved() {
            next.status = GameStatus::Complete;
            let score = next.score();
            log::info!(
                "puzzle solved in {} moves ({}s)",
                score.moves,
                score.time
            );
            if score.improves_on(next.best.as_ref()) {
                log::debug!("new best score: {score:?} (previous: {:?})", next.best);
                next.best = Some(score);
                next.new_best = true;
            }
        }
        next
    }

    /// Same as [`attempt_move`](Self::attempt_move), then saves a new best
    /// score to `store`.
    ///
    /// Nothing is saved when the board is not one of the playable sizes.
    #[must_use]
    pub fn attempt_move_recording<S>(&self, target: usize, store: &mut S) -> Self
    where
        S: ScoreStore + ?Sized,
    {
        let next = self.attempt_move(target);
        if next.new_best
            && !self.new_best
            && let (Some(difficulty), Some(best)) = (next.difficulty(), next.best)
        {
            store.save(difficulty, best);
        }
        next
    }

    /// Slides the tile that can move in `direction`.
    ///
    /// `Up` moves the tile below the empty cell, and so on. Does nothing if
    /// no tile can move that way.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Self {
        match self.board.neighbor_of_empty(direction) {
            Some(target) => self.attempt_move(target),
            None => self.clone(),
        }
    }

    /// Advances the timer by `dt`.
    ///
    /// The timer only runs while [`GameStatus::Playing`]. In any other state
    /// the returned session equals `self`.
    #[must_use]
    pub fn tick(&self, dt: Duration) -> Self {
        let mut next = self.clone();
        if self.status.is_playing() {
            next.elapsed = next.elapsed.saturating_add(dt);
        }
        next
    }
}
