//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How `put` decides whether the calling player may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TurnRule {
    /// Rejects a move when the caller's ID equals the player to move.
    ///
    /// Matches the long-standing behaviour of the engine: the caller passes
    /// the ID of the player who is waiting, and the mark is still chosen
    /// from the turn pointer.
    #[default]
    #[display("legacy")]
    Legacy,
    /// Rejects a move unless the caller's ID equals the player to move.
    #[display("strict")]
    Strict,
}

impl TurnRule {
    /// True if `caller` may move while `to_move` holds the turn.
    pub fn permits<P: PartialEq>(self, caller: &P, to_move: &P) -> bool {
        match self {
            TurnRule::Legacy => caller != to_move,
            TurnRule::Strict => caller == to_move,
        }
    }
}

/// Settings applied to a game at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Turn-check polarity for `put`.
    #[serde(default)]
    #[getter(copy)]
    turn_rule: TurnRule,
}

impl MatchConfig {
    /// Creates a configuration with the given turn rule.
    pub fn new(turn_rule: TurnRule) -> Self {
        Self { turn_rule }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(turn_rule = %config.turn_rule, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(turn_rule = %config.turn_rule, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_legacy() {
        assert_eq!(MatchConfig::default().turn_rule(), TurnRule::Legacy);
        assert_eq!(MatchConfig::from_toml("").unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_parse_strict() {
        let config = MatchConfig::from_toml("turn_rule = \"strict\"").unwrap();
        assert_eq!(config.turn_rule(), TurnRule::Strict);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let err = MatchConfig::from_toml("turn_rule = \"sideways\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reported() {
        let err = MatchConfig::from_file("/nonexistent/strictly_match.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_rule_polarity() {
        assert!(TurnRule::Legacy.permits(&1, &2));
        assert!(!TurnRule::Legacy.permits(&1, &1));
        assert!(TurnRule::Strict.permits(&1, &1));
        assert!(!TurnRule::Strict.permits(&1, &2));
    }
}
