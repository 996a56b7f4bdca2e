//! Search invariants checked over every reachable position

mod common;

use common::{board, non_terminal_states};
use noughts::{
    search,
    search::SearchEngine,
    tictactoe::{BoardState, Player, UTILITY_DRAW, UTILITY_LOSS, UTILITY_WIN},
};

mod pruning_equivalence {
    use super::*;

    #[test]
    fn pruning_preserves_move_and_value_everywhere() {
        for state in non_terminal_states() {
            for ai in [Player::X, Player::O] {
                let plain = search(&state, ai, false).unwrap();
                let pruned = search(&state, ai, true).unwrap();

                assert_eq!(
                    plain.value,
                    pruned.value,
                    "value differs on {} for {ai}",
                    state.encode()
                );
                assert_eq!(
                    plain.best_move,
                    pruned.best_move,
                    "move differs on {} for {ai}",
                    state.encode()
                );
                assert!(
                    pruned.nodes_expanded <= plain.nodes_expanded,
                    "pruning expanded more nodes on {}",
                    state.encode()
                );
            }
        }
    }

    #[test]
    fn pruning_cuts_the_opening_tree() {
        let plain = search(&BoardState::new(), Player::O, false).unwrap();
        let pruned = search(&BoardState::new(), Player::O, true).unwrap();
        assert_eq!(plain.nodes_expanded, 549_946);
        assert!(pruned.nodes_expanded * 2 < plain.nodes_expanded);
    }
}

mod search_contract {
    use super::*;

    #[test]
    fn best_move_is_legal_and_value_in_range() {
        for state in non_terminal_states() {
            let ai = state.to_move;
            let result = search(&state, ai, true).unwrap();
            let mv = result.best_move.expect("non-terminal state must yield a move");

            assert!(state.legal_moves().contains(&mv));
            assert!([UTILITY_LOSS, UTILITY_DRAW, UTILITY_WIN].contains(&result.value));
            assert!(result.nodes_expanded >= 2);
        }
    }

    #[test]
    fn best_move_reaches_the_reported_value() {
        for state in non_terminal_states().into_iter().step_by(7) {
            let engine = SearchEngine::new(state.to_move).with_alpha_beta(false);
            let result = engine.search(&state).unwrap();
            let values = engine.evaluate_moves(&state).unwrap();

            let best = values.iter().map(|&(_, v)| v).max().unwrap();
            assert_eq!(result.value, best);
            let first_best = values.iter().find(|&&(_, v)| v == best).unwrap().0;
            assert_eq!(result.best_move, Some(first_best));
        }
    }

    #[test]
    fn minimizing_root_takes_the_smallest_child() {
        for state in non_terminal_states().into_iter().step_by(11) {
            let ai = state.to_move.opponent();
            let engine = SearchEngine::new(ai).with_alpha_beta(false);
            let result = engine.search(&state).unwrap();
            let worst = engine
                .evaluate_moves(&state)
                .unwrap()
                .into_iter()
                .map(|(_, v)| v)
                .min()
                .unwrap();
            assert_eq!(result.value, worst);
        }
    }

    #[test]
    fn terminal_states_cost_one_node() {
        for encoded in ["XXX OO. ...", "XOX XOO OXX", "OOO XX. X.X"] {
            let state = board(encoded);
            for ai in [Player::X, Player::O] {
                let result = search(&state, ai, true).unwrap();
                assert_eq!(result.best_move, None);
                assert_eq!(result.nodes_expanded, 1);
                assert_eq!(result.value, state.utility(ai).unwrap());
            }
        }
    }
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_searches_agree_except_for_time() {
        for state in non_terminal_states().into_iter().step_by(13) {
            for use_alpha_beta in [false, true] {
                let first = search(&state, Player::X, use_alpha_beta).unwrap();
                let second = search(&state, Player::X, use_alpha_beta).unwrap();
                assert_eq!(first.best_move, second.best_move);
                assert_eq!(first.value, second.value);
                assert_eq!(first.nodes_expanded, second.nodes_expanded);
            }
        }
    }
}
