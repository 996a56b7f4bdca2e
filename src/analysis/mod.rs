//! Exhaustive checks of the engine's guarantees
//!
//! The 3×3 state space is small enough to enumerate completely, so the
//! properties the engine promises (never losing, pruning equivalence) are
//! checked by brute force rather than sampled.

pub mod optimality;
pub mod pruning;

pub use optimality::{OptimalityReport, reachable_states, verify_optimality};
pub use pruning::{PruningComparison, compare_pruning};
