//! A decided result exists exactly when the game is finished.

use super::super::{Game, GameState};
use super::Invariant;
use crate::identity::PlayerIdentity;

/// Invariant: `result != Unknown` iff `state == Finished`, and the turn
/// pointer is set iff the game has started.
pub struct ResultMatchesStateInvariant;

impl<P: PlayerIdentity> Invariant<Game<P>> for ResultMatchesStateInvariant {
    fn holds(game: &Game<P>) -> bool {
        let finished = game.state() == GameState::Finished;
        let started = game.state() != GameState::NotStarted;
        game.result().is_decided() == finished && game.current_turn().is_some() == started
    }

    fn description() -> &'static str {
        "Result is decided exactly when the game is finished"
    }
}
