//! Tic-tac-toe match engine.

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod phases;
mod position;
mod rules;
mod types;

pub use action::Move;
pub use contracts::{
    CellIsEmpty, Contract, GameIsRunning, LegalMove, MoveContract, NotYetStarted, PlayersTurn,
};
pub use error::{GameError, SnapshotError};
pub use game::Game;
pub use invariants::{
    AlternatingMarksInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    OccupancyInvariant, ResultMatchesStateInvariant,
};
pub use phases::{GameResult, GameState};
pub use position::Position;
pub use rules::{LINES, check_winner, is_full, terminal_result};
pub use types::{Board, Cell, Mark};
