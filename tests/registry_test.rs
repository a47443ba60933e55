//! Tests for sharing games through the registry.

use std::thread;
use strictly_match::{
    GameError, GameRegistry, GameResult, GameState, MatchConfig, Player, Position, RegistryError,
    TurnRule,
};

#[test]
fn test_games_driven_from_many_threads() {
    let registry: GameRegistry = GameRegistry::new();
    let alice = Player::new("Alice");
    let bob = Player::new("Bob");

    let ids: Vec<_> = (0..8)
        .map(|_| {
            let id = registry
                .create(MatchConfig::new(TurnRule::Strict))
                .expect("create game");
            registry
                .with_game(id, |game| {
                    game.assign_player1(alice.id())?;
                    game.assign_player2(bob.id())?;
                    game.start()
                })
                .expect("start game");
            id
        })
        .collect();

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let registry = registry.clone();
            let (a, b) = (alice.id(), bob.id());
            thread::spawn(move || {
                let moves = [
                    (a, Position::TopLeft),
                    (b, Position::Center),
                    (a, Position::TopCenter),
                    (b, Position::BottomLeft),
                    (a, Position::TopRight),
                ];
                moves
                    .into_iter()
                    .map(|(caller, pos)| registry.with_game(id, |game| game.put(&caller, pos)))
                    .last()
                    .expect("at least one move")
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("thread panicked");
        assert_eq!(result, Ok(GameResult::Player1Won));
    }
    for id in ids {
        assert_eq!(registry.snapshot(id).unwrap().state(), GameState::Finished);
    }
}

#[test]
fn test_rejected_move_reported_through_registry() {
    let registry: GameRegistry = GameRegistry::new();
    let alice = Player::new("Alice");
    let id = registry.create(MatchConfig::default()).unwrap();
    registry
        .with_game(id, |game| game.assign_player1(alice.id()))
        .unwrap();
    let err = registry.with_game(id, |game| game.start()).unwrap_err();
    assert_eq!(err, RegistryError::Game(GameError::MissingPlayers));
    assert_eq!(
        err.to_string(),
        "Cannot start game which does not have 2 players assigned"
    );
}
