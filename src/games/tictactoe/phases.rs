//! Lifecycle state and outcome of a match.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameState {
    /// Players are being assigned; no moves yet.
    #[default]
    #[display("not started")]
    NotStarted,
    /// Moves are being played.
    #[display("running")]
    Running,
    /// A line was completed or the board filled up.
    #[display("finished")]
    Finished,
}

/// Outcome of a game. Anything but `Unknown` only appears once finished.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameResult {
    /// Game is not over.
    #[default]
    #[display("unknown")]
    Unknown,
    /// Board filled with no completed line.
    #[display("draw")]
    Draw,
    /// Player 1 completed a line of X.
    #[display("player 1 won")]
    Player1Won,
    /// Player 2 completed a line of O.
    #[display("player 2 won")]
    Player2Won,
}

impl GameResult {
    /// True for any decided outcome.
    pub fn is_decided(self) -> bool {
        self != GameResult::Unknown
    }
}
