/// Reasons a tile cannot be moved.
///
/// A blocked move is not an error at the session level:
/// [`Game::attempt_move`](crate::Game::attempt_move) simply leaves the
/// session unchanged. The reason is exposed for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveBlockReason {
    /// The index is outside the board.
    #[display("cell is outside the board")]
    OutOfBounds,
    /// The index refers to the empty cell.
    #[display("cell is empty")]
    EmptyCell,
    /// The tile is not next to the empty cell.
    #[display("tile is not next to the empty cell")]
    NotAdjacent,
    /// The puzzle is already solved.
    #[display("puzzle is already complete")]
    Complete,
}
