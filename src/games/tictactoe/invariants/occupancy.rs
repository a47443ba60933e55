//! Occupancy invariant: one occupied cell per successful move.

use super::super::Game;
use super::Invariant;
use crate::identity::PlayerIdentity;

/// Invariant: the number of non-empty cells equals the number of moves made.
///
/// Together with `Board::place` refusing occupied cells, this means no cell
/// is ever cleared or overwritten.
pub struct OccupancyInvariant;

impl<P: PlayerIdentity> Invariant<Game<P>> for OccupancyInvariant {
    fn holds(game: &Game<P>) -> bool {
        game.board().occupied() == usize::from(game.moves_made())
    }

    fn description() -> &'static str {
        "Occupied cells match the number of moves made"
    }
}
