//! Contract-based validation for tic-tac-toe.
//!
//! Each precondition is a small named check. Operations on [`Game`] run
//! them in a fixed order and only touch state once all have passed.

use super::action::Move;
use super::invariants::{GameInvariants, InvariantSet};
use super::{Game, GameError, GameState};
use crate::identity::PlayerIdentity;
use tracing::{instrument, trace};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks that the transition kept every invariant.
    fn post(after: &S) -> bool;
}

/// Precondition: the game has not been started yet.
pub struct NotYetStarted;

impl NotYetStarted {
    /// Fails with `InvalidState` once the game has left `NotStarted`.
    pub fn check<P: PlayerIdentity>(game: &Game<P>) -> Result<(), GameError> {
        match game.state() {
            GameState::NotStarted => Ok(()),
            other => Err(GameError::InvalidState(other)),
        }
    }
}

/// Precondition: the game accepts moves.
pub struct GameIsRunning;

impl GameIsRunning {
    /// Fails with `NotRunning` unless the game is running.
    pub fn check<P: PlayerIdentity>(game: &Game<P>) -> Result<(), GameError> {
        match game.state() {
            GameState::Running => Ok(()),
            other => Err(GameError::NotRunning(other)),
        }
    }
}

/// Precondition: the caller may move, as decided by the game's turn rule.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `WrongPlayer` when the turn rule refuses the caller.
    #[instrument(skip(game))]
    pub fn check<P: PlayerIdentity>(mov: &Move<P>, game: &Game<P>) -> Result<(), GameError> {
        let rule = game.config().turn_rule();
        match game.current_turn() {
            Some(to_move) if rule.permits(&mov.player, to_move) => Ok(()),
            to_move => {
                trace!(?to_move, %rule, "Turn rule refused caller");
                Err(GameError::WrongPlayer)
            }
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellTaken` when the target cell holds a mark.
    pub fn check<P: PlayerIdentity>(mov: &Move<P>, game: &Game<P>) -> Result<(), GameError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(GameError::CellTaken(mov.position))
        }
    }
}

/// Composite precondition: running, caller's turn, empty cell (in that order).
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check<P: PlayerIdentity>(mov: &Move<P>, game: &Game<P>) -> Result<(), GameError> {
        GameIsRunning::check(game)?;
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for `put`.
pub struct MoveContract;

impl<P: PlayerIdentity> Contract<Game<P>, Move<P>> for MoveContract {
    fn pre(game: &Game<P>, action: &Move<P>) -> Result<(), GameError> {
        LegalMove::check(action, game)
    }

    fn post(after: &Game<P>) -> bool {
        GameInvariants::check_all(after).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchConfig, TurnRule};
    use crate::games::tictactoe::Position;

    fn running(rule: TurnRule) -> Game<u8> {
        let mut game = Game::with_config(MatchConfig::new(rule));
        game.assign_player1(1).unwrap();
        game.assign_player2(2).unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn test_not_running_checked_first() {
        let game: Game<u8> = Game::new();
        // Occupied-cell and turn checks cannot fire before the state check.
        assert_eq!(
            MoveContract::pre(&game, &Move::new(1, Position::Center)),
            Err(GameError::NotRunning(GameState::NotStarted))
        );
    }

    #[test]
    fn test_legacy_rule_refuses_player_to_move() {
        let game = running(TurnRule::Legacy);
        assert_eq!(
            MoveContract::pre(&game, &Move::new(1, Position::Center)),
            Err(GameError::WrongPlayer)
        );
        assert!(MoveContract::pre(&game, &Move::new(2, Position::Center)).is_ok());
    }

    #[test]
    fn test_strict_rule_refuses_waiting_player() {
        let game = running(TurnRule::Strict);
        assert_eq!(
            MoveContract::pre(&game, &Move::new(2, Position::Center)),
            Err(GameError::WrongPlayer)
        );
        assert!(MoveContract::pre(&game, &Move::new(1, Position::Center)).is_ok());
    }

    #[test]
    fn test_turn_checked_before_cell() {
        let mut game = running(TurnRule::Strict);
        game.put(&1, Position::Center).unwrap();
        // Wrong player on a taken cell reports the turn problem.
        assert_eq!(
            MoveContract::pre(&game, &Move::new(1, Position::Center)),
            Err(GameError::WrongPlayer)
        );
        assert_eq!(
            MoveContract::pre(&game, &Move::new(2, Position::Center)),
            Err(GameError::CellTaken(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_moves() {
        let mut game = running(TurnRule::Strict);
        game.put(&1, Position::TopLeft).unwrap();
        game.put(&2, Position::Center).unwrap();
        assert!(MoveContract::post(&game));
    }
}
