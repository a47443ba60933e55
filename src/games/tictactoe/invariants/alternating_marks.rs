//! Alternating marks invariant: X, O, X, O, ...

use super::super::{Game, GameState, Mark};
use super::Invariant;
use crate::identity::PlayerIdentity;

/// Invariant: X is played on player 1's turns and O on player 2's.
///
/// Player 1 always opens, so X leads O by zero or one, and while the game
/// runs it is player 1's turn exactly when the counts are level.
pub struct AlternatingMarksInvariant;

impl<P: PlayerIdentity> Invariant<Game<P>> for AlternatingMarksInvariant {
    fn holds(game: &Game<P>) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        let balanced = x == o || x == o + 1;
        let turn_agrees = game.state() != GameState::Running || game.is_player1_turn() == (x == o);
        balanced && turn_agrees
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
