//! Game engine for a two-player tic-tac-toe match.

use super::action::Move;
use super::contracts::{Contract, GameIsRunning, MoveContract, NotYetStarted};
use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, Cell, GameError, GameResult, GameState, Mark, Position, SnapshotError, rules};
use crate::config::MatchConfig;
use crate::identity::{GameId, PlayerId, PlayerIdentity};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Which player slot an assignment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Slot {
    #[display("player 1")]
    One,
    #[display("player 2")]
    Two,
}

/// A tic-tac-toe match between two players.
///
/// Lifecycle: `NotStarted` (assign players) → `start` → `Running` (`put`
/// moves) → `Finished` once a line is completed or the board is full.
/// `Finished` is absorbing.
///
/// Every operation validates before it writes; an `Err` leaves the game
/// unchanged.
///
/// Deserialization rejects snapshots describing a game no sequence of
/// operations could produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game<P = PlayerId> {
    id: GameId,
    player1: Option<P>,
    player2: Option<P>,
    state: GameState,
    result: GameResult,
    board: Board,
    current_turn: Option<P>,
    moves_made: u8,
    config: MatchConfig,
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct GameSnapshot<P> {
    id: GameId,
    player1: Option<P>,
    player2: Option<P>,
    state: GameState,
    result: GameResult,
    board: Board,
    current_turn: Option<P>,
    moves_made: u8,
    config: MatchConfig,
}

impl<'de, P> Deserialize<'de> for Game<P>
where
    P: PlayerIdentity + Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = GameSnapshot::deserialize(deserializer)?;
        Self::from_snapshot(snapshot)
            .inspect_err(|e| warn!(error = %e, "Rejected game snapshot"))
            .map_err(serde::de::Error::custom)
    }
}

impl<P: PlayerIdentity> Game<P> {
    /// Creates a new game with a fresh ID and default configuration.
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    /// Creates a new game with a fresh ID.
    pub fn with_config(config: MatchConfig) -> Self {
        Self::with_id(GameId::new(), config)
    }

    /// Creates a new game with a known ID.
    #[instrument(skip(config), fields(turn_rule = %config.turn_rule()))]
    pub fn with_id(id: GameId, config: MatchConfig) -> Self {
        info!(game_id = %id, "Creating new game");
        Self {
            id,
            player1: None,
            player2: None,
            state: GameState::NotStarted,
            result: GameResult::Unknown,
            board: Board::new(),
            current_turn: None,
            moves_made: 0,
            config,
        }
    }

    /// Assigns player 1 (plays X and moves first).
    ///
    /// Only allowed before the game starts; re-assigning replaces the
    /// previous identity.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn assign_player1(&mut self, player: P) -> Result<(), GameError> {
        self.assign(Slot::One, player)
    }

    /// Assigns player 2 (plays O).
    ///
    /// Only allowed before the game starts; re-assigning replaces the
    /// previous identity.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn assign_player2(&mut self, player: P) -> Result<(), GameError> {
        self.assign(Slot::Two, player)
    }

    fn assign(&mut self, slot: Slot, player: P) -> Result<(), GameError> {
        NotYetStarted::check(&*self).inspect_err(|e| {
            warn!(%slot, error = %e, "Assignment rejected");
        })?;

        let (target, other) = match slot {
            Slot::One => (&mut self.player1, &self.player2),
            Slot::Two => (&mut self.player2, &self.player1),
        };
        if other.as_ref() == Some(&player) {
            warn!(%slot, ?player, "Player already holds the other slot");
            return Err(GameError::DuplicatePlayer);
        }

        debug!(%slot, ?player, replaced = target.is_some(), "Player assigned");
        *target = Some(player);
        Ok(())
    }

    /// Starts the game; player 1 moves first.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the game was already started.
    /// - `MissingPlayers` if either slot is empty.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn start(&mut self) -> Result<(), GameError> {
        NotYetStarted::check(&*self).inspect_err(|e| {
            warn!(error = %e, "Start rejected");
        })?;

        let first = match (&self.player1, &self.player2) {
            (Some(player1), Some(_)) => player1.clone(),
            (p1, p2) => {
                warn!(
                    player1_assigned = p1.is_some(),
                    player2_assigned = p2.is_some(),
                    "Cannot start without both players"
                );
                return Err(GameError::MissingPlayers);
            }
        };

        info!(first = ?first, "Game started");
        self.current_turn = Some(first);
        self.state = GameState::Running;
        Ok(())
    }

    /// Places the mark of the player whose turn it is.
    ///
    /// Which caller ID is accepted is decided by the configured
    /// [`TurnRule`](crate::TurnRule). The mark written depends only on the
    /// turn pointer: X on player 1's turn, O on player 2's.
    ///
    /// Returns the result after the move (`Unknown` while the game goes on).
    ///
    /// # Errors
    ///
    /// Checked in this order: `NotRunning`, `WrongPlayer`, `CellTaken`.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn put(&mut self, player_id: &P, position: Position) -> Result<GameResult, GameError> {
        let action = Move::new(player_id.clone(), position);
        MoveContract::pre(&*self, &action).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let (mark, next) = if self.is_player1_turn() {
            (Mark::X, self.player2.clone())
        } else {
            (Mark::O, self.player1.clone())
        };
        let placed = self.board.place(position, mark);
        debug_assert!(placed, "precondition guarantees an empty cell");
        self.moves_made += 1;
        self.current_turn = next;
        debug!(%mark, %position, moves_made = self.moves_made, "Mark placed");

        self.evaluate_terminal();
        debug_assert!(MoveContract::post(&*self), "game invariants violated after move");

        Ok(self.result)
    }

    /// Like [`put`](Self::put), taking a raw 0-8 index.
    ///
    /// # Errors
    ///
    /// `NotRunning` first, then `IndexOutOfRange` for indices above 8,
    /// otherwise as `put`.
    pub fn put_index(&mut self, player_id: &P, index: usize) -> Result<GameResult, GameError> {
        GameIsRunning::check(&*self).inspect_err(|e| {
            warn!(game_id = %self.id, error = %e, "Move rejected");
        })?;
        let position = Position::try_from(index).inspect_err(|e| {
            warn!(game_id = %self.id, error = %e, "Move rejected");
        })?;
        self.put(player_id, position)
    }

    /// Validates a deserialized game before handing it out.
    fn from_snapshot(snapshot: GameSnapshot<P>) -> Result<Self, SnapshotError> {
        let GameSnapshot {
            id,
            player1,
            player2,
            state,
            result,
            board,
            current_turn,
            moves_made,
            config,
        } = snapshot;

        if state != GameState::NotStarted && (player1.is_none() || player2.is_none()) {
            return Err(SnapshotError::MissingPlayers(state));
        }
        if player1.is_some() && player1 == player2 {
            return Err(SnapshotError::DuplicatePlayer);
        }
        let stranger = current_turn
            .as_ref()
            .is_some_and(|turn| player1.as_ref() != Some(turn) && player2.as_ref() != Some(turn));
        if stranger {
            return Err(SnapshotError::UnknownTurnHolder);
        }

        let decided = rules::terminal_result(&board);
        let consistent = match state {
            GameState::NotStarted => moves_made == 0,
            GameState::Running => decided.is_none(),
            GameState::Finished => decided == Some(result),
        };
        if !consistent {
            return Err(SnapshotError::BoardMismatch(state));
        }

        let game = Self {
            id,
            player1,
            player2,
            state,
            result,
            board,
            current_turn,
            moves_made,
            config,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            SnapshotError::Invariants(descriptions.join("; "))
        })?;
        debug!(game_id = %game.id, state = %game.state, "Game snapshot accepted");
        Ok(game)
    }

    /// Finishes the game if the board is decided.
    fn evaluate_terminal(&mut self) {
        if let Some(result) = rules::terminal_result(&self.board) {
            self.state = GameState::Finished;
            self.result = result;
            info!(game_id = %self.id, %result, moves = self.moves_made, "Game finished");
        }
    }

    /// True iff the turn pointer is player 1. False before the game starts.
    pub fn is_player1_turn(&self) -> bool {
        match (&self.current_turn, &self.player1) {
            (Some(current), Some(player1)) => current == player1,
            _ => false,
        }
    }

    /// Mark at a position.
    pub fn cell(&self, position: Position) -> Cell {
        self.board.get(position)
    }

    /// Mark at a raw 0-8 index.
    pub fn cell_at(&self, index: usize) -> Result<Cell, GameError> {
        Position::try_from(index).map(|pos| self.cell(pos))
    }

    /// Game ID.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Outcome; `Unknown` until finished.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player 1, if assigned.
    pub fn player1(&self) -> Option<&P> {
        self.player1.as_ref()
    }

    /// Player 2, if assigned.
    pub fn player2(&self) -> Option<&P> {
        self.player2.as_ref()
    }

    /// Player holding the turn pointer. `None` before the game starts; once
    /// finished it keeps the player who would have moved next.
    pub fn current_turn(&self) -> Option<&P> {
        self.current_turn.as_ref()
    }

    /// Configuration the game was created with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Number of successful moves.
    pub fn moves_made(&self) -> u8 {
        self.moves_made
    }
}

impl<P: PlayerIdentity> Default for Game<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw field access for building states `put` can never reach.
#[cfg(test)]
impl<P> Game<P> {
    pub(crate) fn force_result(&mut self, result: GameResult) {
        self.result = result;
    }

    pub(crate) fn force_moves_made(&mut self, moves_made: u8) {
        self.moves_made = moves_made;
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
