//! Players taking part in a match.

use crate::identity::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player: a stable identity plus a display name.
///
/// The game engine only sees [`PlayerId`]; the name is for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Player's unique ID.
    #[getter(copy)]
    id: PlayerId,
    /// Player's display name.
    name: String,
}

impl Player {
    /// Creates a player with a freshly generated ID.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::new(), name)
    }

    /// Creates a player with a known ID.
    #[instrument(skip(name))]
    pub fn with_id(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Changes the display name. The ID never changes.
    #[instrument(skip(self, name), fields(player_id = %self.id))]
    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        debug!(name = %self.name, "Player renamed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_keeps_identity() {
        let mut player = Player::new("Alice");
        let id = player.id();
        player.change_name("Bob");
        assert_eq!(player.name(), "Bob");
        assert_eq!(player.id(), id);
    }
}
