//! Subcommand implementations

pub mod compare;
pub mod search;
pub mod selfplay;
pub mod verify;

use anyhow::{Result, anyhow};

use crate::{config::GameConfig, tictactoe::Player};

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

pub(crate) fn build_config(ai: &str, ai_first: bool, no_pruning: bool) -> Result<GameConfig> {
    Ok(GameConfig::new(parse_player_token(ai, "--ai")?)
        .with_human_first(!ai_first)
        .with_alpha_beta(!no_pruning))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("x", "--ai").unwrap(), Player::X);
        assert_eq!(parse_player_token(" O ", "--ai").unwrap(), Player::O);
        let err = parse_player_token("z", "--ai").unwrap_err();
        assert!(err.to_string().contains("--ai"));
    }

    #[test]
    fn test_build_config() {
        let config = build_config("x", true, true).unwrap();
        assert_eq!(config.ai, Player::X);
        assert!(!config.human_first);
        assert!(!config.use_alpha_beta);
        assert_eq!(config.first_player(), Player::X);
    }
}
