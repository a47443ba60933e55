//! Registry owning live games.
//!
//! A `Game` has no internal locking. The registry serialises access by
//! holding its mutex for the whole of each operation on a game. A panic
//! while the lock is held does not lock out other games: the map is
//! recovered on the next access.

use crate::config::MatchConfig;
use crate::games::tictactoe::{Game, GameError};
use crate::identity::{GameId, PlayerId, PlayerIdentity};
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Error returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RegistryError {
    /// No game with this ID is registered.
    #[display("Game {} not found", _0)]
    NotFound(#[error(not(source))] GameId),

    /// A game with this ID is already registered.
    #[display("Game {} already exists", _0)]
    Duplicate(#[error(not(source))] GameId),

    /// The game refused the operation.
    #[display("{}", _0)]
    #[from]
    Game(GameError),
}

/// Shared map of games keyed by ID. Cloning shares the same map.
#[derive(Debug, Clone)]
pub struct GameRegistry<P = PlayerId> {
    games: Arc<Mutex<HashMap<GameId, Game<P>>>>,
}

impl<P: PlayerIdentity> GameRegistry<P> {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, Game<P>>> {
        self.games.lock().unwrap_or_else(|poisoned| {
            warn!("Recovering game registry after a panic under the lock");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Creates and registers a new game, returning its ID.
    #[instrument(skip(self))]
    pub fn create(&self, config: MatchConfig) -> Result<GameId, RegistryError> {
        let game = Game::with_config(config);
        let id = game.id();
        self.insert(game)?;
        Ok(id)
    }

    /// Registers an existing game.
    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    pub fn insert(&self, game: Game<P>) -> Result<(), RegistryError> {
        let mut games = self.lock();
        let id = game.id();
        if games.contains_key(&id) {
            warn!("Game already registered");
            return Err(RegistryError::Duplicate(id));
        }
        games.insert(id, game);
        info!(count = games.len(), "Game registered");
        Ok(())
    }

    /// Runs `f` against a registered game while holding the registry lock.
    ///
    /// Errors from `f` are passed through as `RegistryError::Game`.
    #[instrument(skip(self, f))]
    pub fn with_game<T>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Game<P>) -> Result<T, GameError>,
    ) -> Result<T, RegistryError> {
        let mut games = self.lock();
        let game = games.get_mut(&id).ok_or_else(|| {
            debug!(game_id = %id, "Game not found");
            RegistryError::NotFound(id)
        })?;
        Ok(f(game)?)
    }

    /// Copy of a registered game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: GameId) -> Result<Game<P>, RegistryError> {
        let games = self.lock();
        games.get(&id).cloned().ok_or(RegistryError::NotFound(id))
    }

    /// Removes a game, returning it.
    #[instrument(skip(self))]
    pub fn remove(&self, id: GameId) -> Result<Game<P>, RegistryError> {
        let mut games = self.lock();
        let game = games.remove(&id).ok_or(RegistryError::NotFound(id))?;
        info!(game_id = %id, "Game removed");
        Ok(game)
    }

    /// IDs of all registered games.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Vec<GameId> {
        let games = self.lock();
        let ids: Vec<_> = games.keys().copied().collect();
        debug!(count = ids.len(), "Listed games");
        ids
    }

    /// Number of registered games.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no games are registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<P: PlayerIdentity> Default for GameRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
