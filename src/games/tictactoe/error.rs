//! Errors surfaced by game operations.

use super::phases::GameState;
use super::position::Position;

/// Error that can occur when driving a game.
///
/// Every variant is returned before the game is touched, so a failed call
/// leaves the game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The operation is not legal in the current state.
    #[display("Operation not allowed while game is {}", _0)]
    InvalidState(#[error(not(source))] GameState),

    /// `start` was called with an empty player slot.
    #[display("Cannot start game which does not have 2 players assigned")]
    MissingPlayers,

    /// The same identity was assigned to both player slots.
    #[display("Player is already assigned to the other slot")]
    DuplicatePlayer,

    /// A move was attempted on a game that is not running.
    #[display("Only running games can be changed (game is {})", _0)]
    NotRunning(#[error(not(source))] GameState),

    /// The move was attempted out of turn.
    #[display("Player is not allowed to move now")]
    WrongPlayer,

    /// The move targets an occupied cell.
    #[display("Cannot change already taken cell {}", _0)]
    CellTaken(#[error(not(source))] Position),

    /// A raw index outside 0-8.
    #[display("Cell index {} out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] usize),
}

/// Error returned when a deserialized game is not one `Game` could reach.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// A started or finished game is missing a player.
    #[display("Game is {} but a player slot is empty", _0)]
    MissingPlayers(#[error(not(source))] GameState),

    /// Both slots hold the same identity.
    #[display("Both player slots hold the same identity")]
    DuplicatePlayer,

    /// The turn pointer names neither player.
    #[display("Turn pointer does not name either player")]
    UnknownTurnHolder,

    /// Board contents disagree with the recorded state or result.
    #[display("Board does not match a game that is {}", _0)]
    BoardMismatch(#[error(not(source))] GameState),

    /// One or more game invariants fail.
    #[display("Game invariants violated: {}", _0)]
    Invariants(#[error(not(source))] String),
}
