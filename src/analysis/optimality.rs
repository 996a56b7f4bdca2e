//! Exhaustive optimality verification

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::{
    config::GameConfig,
    error::{Result, StateError},
    search::SearchEngine,
    tictactoe::{BoardState, GameOutcome, Player},
};

/// Tally of every game the engine can be forced into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptimalityReport {
    pub config: GameConfig,
    /// Distinct opponent move sequences played to the end
    pub games: usize,
    pub ai_wins: usize,
    pub draws: usize,
    pub ai_losses: usize,
    /// Searches run for the AI
    pub ai_searches: usize,
    /// Nodes expanded over all searches
    pub total_nodes: usize,
}

impl OptimalityReport {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            games: 0,
            ai_wins: 0,
            draws: 0,
            ai_losses: 0,
            ai_searches: 0,
            total_nodes: 0,
        }
    }

    /// True when no opponent line beats the engine
    pub fn is_optimal(&self) -> bool {
        self.ai_losses == 0
    }

    fn record_outcome(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(winner) if winner == self.config.ai => self.ai_wins += 1,
            GameOutcome::Win(_) => self.ai_losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play the engine against every legal opponent move sequence.
///
/// The engine plays `config.ai` with `config.use_alpha_beta`; the opponent
/// branches on every legal move at each of its turns. The opening side
/// follows `config.human_first`.
///
/// # Errors
///
/// Propagates search failures, which indicate a broken state invariant.
pub fn verify_optimality(config: GameConfig) -> Result<OptimalityReport> {
    let engine = SearchEngine::new(config.ai).with_alpha_beta(config.use_alpha_beta);
    let mut report = OptimalityReport::new(config);
    explore(
        &engine,
        BoardState::new_with_player(config.first_player()),
        &mut report,
    )?;

    debug!(
        games = report.games,
        ai_wins = report.ai_wins,
        draws = report.draws,
        ai_losses = report.ai_losses,
        total_nodes = report.total_nodes,
        "optimality verification complete"
    );

    Ok(report)
}

fn explore(engine: &SearchEngine, state: BoardState, report: &mut OptimalityReport) -> Result<()> {
    if let Some(outcome) = state.outcome() {
        report.record_outcome(outcome);
        return Ok(());
    }

    if state.to_move == engine.ai() {
        let result = engine.search(&state)?;
        report.ai_searches += 1;
        report.total_nodes += result.nodes_expanded;
        let mv = result.best_move.ok_or(StateError::NoLegalMoves)?;
        return explore(engine, state.apply_move(mv, engine.ai())?, report);
    }

    for mv in state.legal_moves() {
        explore(engine, state.apply_move(mv, state.to_move)?, report)?;
    }
    Ok(())
}

/// Every state reachable by legal play from an empty board with `first` to move,
/// in breadth-first discovery order (root first).
pub fn reachable_states(first: Player) -> Vec<BoardState> {
    let root = BoardState::new_with_player(first);
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut states = Vec::new();

    while let Some(state) = queue.pop_front() {
        states.push(state);

        if state.is_terminal() {
            continue;
        }

        for mv in state.legal_moves() {
            let Ok(next) = state.play(mv) else {
                continue;
            };
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_state_count() {
        // Classic count of positions reachable from the empty board
        let states = reachable_states(Player::X);
        assert_eq!(states.len(), 5478);
        assert_eq!(states[0], BoardState::new());
        assert_eq!(states.iter().filter(|s| s.is_terminal()).count(), 958);
    }

    #[test]
    fn test_o_first_mirrors_x_first() {
        assert_eq!(reachable_states(Player::O).len(), 5478);
    }

    #[test]
    fn test_engine_second_never_loses() {
        let report = verify_optimality(GameConfig::default()).unwrap();
        assert!(report.is_optimal(), "{report:?}");
        assert!(report.games > 0);
        assert_eq!(report.games, report.ai_wins + report.draws);
    }
}
