//! Strictly Match - a checked two-player tic-tac-toe engine
//!
//! The engine validates every operation before touching state, so a failed
//! call never leaves a game half-updated.
//!
//! # Architecture
//!
//! - **Game**: state machine owning board, player slots, turn pointer and result
//! - **Rules**: pure win/draw detection over the board
//! - **Contracts**: named preconditions checked before each transition
//! - **Invariants**: properties re-checked after each move in debug builds
//! - **Registry**: mutex-guarded map for callers that share games across threads
//!
//! # Example
//!
//! ```
//! use strictly_match::{Game, GameResult, MatchConfig, Player, Position, TurnRule};
//!
//! # fn example() -> Result<(), strictly_match::GameError> {
//! let alice = Player::new("Alice");
//! let bob = Player::new("Bob");
//!
//! let mut game = Game::with_config(MatchConfig::new(TurnRule::Strict));
//! game.assign_player1(alice.id())?;
//! game.assign_player2(bob.id())?;
//! game.start()?;
//!
//! game.put(&alice.id(), Position::Center)?;
//! assert_eq!(game.put(&bob.id(), Position::TopLeft)?, GameResult::Unknown);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod identity;
mod player;
mod registry;
mod telemetry;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, TurnRule};

// Crate-level exports - Identity
pub use identity::{GameId, PlayerId, PlayerIdentity};

// Crate-level exports - Player collaborator
pub use player::Player;

// Crate-level exports - Registry
pub use registry::{GameRegistry, RegistryError};

// Crate-level exports - Tracing
pub use telemetry::{init_test_tracing, init_tracing};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingMarksInvariant, Board, Cell, CellIsEmpty, Contract, Game, GameError,
    GameInvariants, GameIsRunning, GameResult, GameState, Invariant, InvariantSet,
    InvariantViolation, LINES, LegalMove, Mark, Move, MoveContract, NotYetStarted,
    OccupancyInvariant, PlayersTurn, Position, ResultMatchesStateInvariant, SnapshotError,
    check_winner, is_full, terminal_result,
};
