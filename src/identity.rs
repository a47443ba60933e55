//! Opaque identifiers for games and players.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything the engine can use to tell two players apart.
///
/// The engine only ever compares identities for equality, so any cloneable,
/// comparable value works. [`PlayerId`] is the identity this crate hands out.
pub trait PlayerIdentity: Clone + Eq + std::fmt::Debug {}

impl<T: Clone + Eq + std::fmt::Debug> PlayerIdentity for T {}

/// Unique identifier of a game, fixed at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier of a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}
