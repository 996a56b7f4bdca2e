//! Game session management
//!
//! A [`GameSession`] is the narrow surface a presentation layer drives: it holds
//! the live [`BoardState`], accepts human moves, asks the [`SearchEngine`] for
//! the AI's replies, and keeps the move history and search instrumentation the
//! caller may want to display.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::GameConfig,
    error::{InvalidMoveError, Result, StateError},
    search::{SearchEngine, SearchResult},
    tictactoe::{BoardState, GameOutcome, Move, Player},
};

/// One move of the game, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub player: Player,
    pub by_ai: bool,
}

/// Cumulative instrumentation for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionMetrics {
    /// Moves made by both sides
    pub moves_made: usize,
    /// Searches run for the AI
    pub ai_moves: usize,
    /// Nodes expanded over all AI searches
    pub total_nodes: usize,
    /// Search time over all AI searches
    pub total_ai_time: Duration,
}

impl SessionMetrics {
    /// Mean nodes per AI search, `None` before the AI has moved
    pub fn average_nodes_per_move(&self) -> Option<f64> {
        (self.ai_moves > 0).then(|| self.total_nodes as f64 / self.ai_moves as f64)
    }

    pub fn total_ai_time_ms(&self) -> f64 {
        self.total_ai_time.as_secs_f64() * 1000.0
    }

    fn record_search(&mut self, result: &SearchResult) {
        self.ai_moves += 1;
        self.total_nodes += result.nodes_expanded;
        self.total_ai_time += result.elapsed;
    }
}

/// A human-versus-AI game in progress
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    config: GameConfig,
    state: BoardState,
    history: Vec<MoveRecord>,
    outcome: Option<GameOutcome>,
    metrics: SessionMetrics,
}

impl GameSession {
    /// Start a game on an empty board with the configured side to open
    pub fn new(config: GameConfig) -> Self {
        info!(
            ai = %config.ai,
            first = %config.first_player(),
            alpha_beta = config.use_alpha_beta,
            "new game"
        );

        Self {
            config,
            state: BoardState::new_with_player(config.first_player()),
            history: Vec::new(),
            outcome: None,
            metrics: SessionMetrics::default(),
        }
    }

    /// Fresh board, same configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The live state
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// True when the game is running and the AI's mark is to move
    pub fn ai_to_move(&self) -> bool {
        !self.is_over() && self.state.to_move == self.config.ai
    }

    /// AI utility of the finished game, `None` while in progress
    pub fn ai_utility(&self) -> Option<i32> {
        self.state.utility(self.config.ai).ok()
    }

    /// Apply the human's move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] for an out-of-range or occupied cell, when
    /// it is the AI's turn, or after the game has ended. The session is left
    /// unchanged.
    pub fn play_human(&mut self, mv: Move) -> Result<()> {
        if self.is_over() {
            return Err(InvalidMoveError::GameOver.into());
        }

        let next = self.state.apply_move(mv, self.config.human())?;
        self.advance(next, mv, false);
        Ok(())
    }

    /// Search for the AI's move, apply it and return the search result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] when the game is over or it is the human's
    /// turn.
    pub fn play_ai(&mut self) -> Result<SearchResult> {
        if self.is_over() {
            return Err(InvalidMoveError::GameOver.into());
        }
        if self.state.to_move != self.config.ai {
            return Err(InvalidMoveError::OutOfTurn {
                expected: self.state.to_move,
                got: self.config.ai,
            }
            .into());
        }

        let result = SearchEngine::new(self.config.ai)
            .with_alpha_beta(self.config.use_alpha_beta)
            .search(&self.state)?;
        let mv = result.best_move.ok_or(StateError::NoLegalMoves)?;
        let next = self.state.apply_move(mv, self.config.ai)?;

        self.metrics.record_search(&result);
        self.advance(next, mv, true);
        Ok(result)
    }

    fn advance(&mut self, next: BoardState, mv: Move, by_ai: bool) {
        let player = self.state.to_move;
        self.state = next;
        self.history.push(MoveRecord { mv, player, by_ai });
        self.metrics.moves_made += 1;

        debug!(
            ply = self.history.len(),
            player = %player,
            by_ai,
            mv = %mv,
            "move played"
        );

        if let Some(outcome) = self.state.outcome() {
            self.outcome = Some(outcome);
            info!(
                outcome = ?outcome,
                moves = self.metrics.moves_made,
                total_nodes = self.metrics.total_nodes,
                "game over"
            );
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
