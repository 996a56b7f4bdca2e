//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Settings for one game session.
///
/// Builder-style: start from [`GameConfig::default`] (AI plays `O`, the human
/// opens, pruning on) and adjust.
///
/// # Examples
///
/// ```
/// use noughts::config::GameConfig;
/// use noughts::tictactoe::Player;
///
/// let config = GameConfig::default()
///     .with_ai(Player::X)
///     .with_human_first(false)
///     .with_alpha_beta(false);
/// assert_eq!(config.human(), Player::O);
/// assert_eq!(config.first_player(), Player::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mark the AI plays
    pub ai: Player,
    /// Whether the human makes the opening move
    pub human_first: bool,
    /// Whether the AI's search uses alpha-beta pruning
    pub use_alpha_beta: bool,
}

impl GameConfig {
    /// Configuration with the AI playing `ai`, human first, pruning on.
    pub fn new(ai: Player) -> Self {
        Self {
            ai,
            human_first: true,
            use_alpha_beta: true,
        }
    }

    /// Set the AI's mark.
    pub fn with_ai(mut self, ai: Player) -> Self {
        self.ai = ai;
        self
    }

    /// Set who opens the game.
    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = human_first;
        self
    }

    /// Toggle alpha-beta pruning.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.use_alpha_beta = enabled;
        self
    }

    /// The human's mark
    pub fn human(&self) -> Player {
        self.ai.opponent()
    }

    /// The mark that makes the opening move
    pub fn first_player(&self) -> Player {
        if self.human_first {
            self.human()
        } else {
            self.ai
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_setup() {
        let config = GameConfig::default();
        assert_eq!(config.ai, Player::O);
        assert_eq!(config.human(), Player::X);
        assert_eq!(config.first_player(), Player::X);
        assert!(config.use_alpha_beta);
    }

    #[test]
    fn test_ai_first_opens_with_ai_mark() {
        let config = GameConfig::new(Player::O).with_human_first(false);
        assert_eq!(config.first_player(), Player::O);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"ai":"X"}"#).unwrap();
        assert_eq!(config.ai, Player::X);
        assert!(config.human_first);
        assert!(config.use_alpha_beta);
    }
}
