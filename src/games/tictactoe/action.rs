//! First-class move type.
//!
//! A move is the caller's intent (who, where), validated before anything is
//! written to the board.

use super::Position;
use serde::{Deserialize, Serialize};

/// A player asking to mark a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<P> {
    /// Identity the caller supplied.
    pub player: P,
    /// Target cell.
    pub position: Position,
}

impl<P> Move<P> {
    /// Creates a new move.
    pub fn new(player: P, position: Position) -> Self {
        Self { player, position }
    }
}
