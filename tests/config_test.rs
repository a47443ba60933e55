//! Tests for loading match configuration from disk.

use strictly_match::{Game, GameError, MatchConfig, PlayerId, Position, TurnRule};

fn write_config(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("strictly_match_{}_{}.toml", name, std::process::id()));
    std::fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn test_strict_config_from_file_drives_game() {
    let path = write_config("strict", "turn_rule = \"strict\"\n");
    let config = MatchConfig::from_file(&path).expect("load config");
    std::fs::remove_file(&path).ok();
    assert_eq!(config.turn_rule(), TurnRule::Strict);

    let (a, b) = (PlayerId::new(), PlayerId::new());
    let mut game: Game = Game::with_config(config);
    game.assign_player1(a).unwrap();
    game.assign_player2(b).unwrap();
    game.start().unwrap();
    assert_eq!(game.put(&b, Position::Center), Err(GameError::WrongPlayer));
    assert!(game.put(&a, Position::Center).is_ok());
}

#[test]
fn test_empty_file_gives_legacy_default() {
    let path = write_config("empty", "");
    let config = MatchConfig::from_file(&path).expect("load config");
    std::fs::remove_file(&path).ok();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(config.turn_rule(), TurnRule::Legacy);
}

#[test]
fn test_malformed_file_reports_location() {
    let path = write_config("bad", "turn_rule = 3\n");
    let err = MatchConfig::from_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}
