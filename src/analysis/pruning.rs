//! Side-by-side comparison of plain minimax and alpha-beta

use serde::Serialize;

use crate::{
    error::Result,
    search::{SearchEngine, SearchResult},
    tictactoe::{BoardState, Player},
};

/// Both search variants run on the same state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PruningComparison {
    pub state: BoardState,
    pub ai: Player,
    pub minimax: SearchResult,
    pub alpha_beta: SearchResult,
}

impl PruningComparison {
    /// True when both variants chose the same move with the same value
    pub fn agrees(&self) -> bool {
        self.minimax.best_move == self.alpha_beta.best_move
            && self.minimax.value == self.alpha_beta.value
    }

    pub fn nodes_saved(&self) -> usize {
        self.minimax
            .nodes_expanded
            .saturating_sub(self.alpha_beta.nodes_expanded)
    }

    /// Fraction of minimax nodes pruning avoided, in `[0, 1)`
    pub fn reduction(&self) -> f64 {
        if self.minimax.nodes_expanded == 0 {
            return 0.0;
        }
        self.nodes_saved() as f64 / self.minimax.nodes_expanded as f64
    }
}

/// Search `state` for `ai` with and without pruning.
pub fn compare_pruning(state: &BoardState, ai: Player) -> Result<PruningComparison> {
    let engine = SearchEngine::new(ai);
    Ok(PruningComparison {
        state: *state,
        ai,
        minimax: engine.with_alpha_beta(false).search(state)?,
        alpha_beta: engine.with_alpha_beta(true).search(state)?,
    })
}
