//! Exhaustive play against every opponent line

mod common;

use noughts::{
    GameConfig, GameSession,
    analysis::verify_optimality,
    tictactoe::{GameOutcome, Player, UTILITY_DRAW},
};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

mod exhaustive {
    use super::*;

    fn assert_never_loses(config: GameConfig) {
        let report = verify_optimality(config).unwrap();
        assert!(report.games > 0);
        assert_eq!(report.ai_losses, 0, "engine lost with {config:?}");
        assert!(report.is_optimal());
        assert_eq!(report.games, report.ai_wins + report.draws);
    }

    #[test]
    fn engine_never_loses_moving_second() {
        for ai in [Player::X, Player::O] {
            assert_never_loses(GameConfig::new(ai));
        }
    }

    #[test]
    fn engine_never_loses_moving_first() {
        for ai in [Player::X, Player::O] {
            assert_never_loses(GameConfig::new(ai).with_human_first(false));
        }
    }

    #[test]
    fn plain_minimax_never_loses_moving_second() {
        assert_never_loses(GameConfig::new(Player::O).with_alpha_beta(false));
    }

    #[test]
    fn pruned_and_plain_engines_play_identical_games() {
        let pruned = verify_optimality(GameConfig::new(Player::O)).unwrap();
        let plain = verify_optimality(GameConfig::new(Player::O).with_alpha_beta(false)).unwrap();

        assert_eq!(pruned.games, plain.games);
        assert_eq!(pruned.ai_wins, plain.ai_wins);
        assert_eq!(pruned.draws, plain.draws);
        assert_eq!(pruned.ai_searches, plain.ai_searches);
        assert!(pruned.total_nodes < plain.total_nodes);
    }
}

mod random_opponents {
    use super::*;

    fn play_random_game(config: GameConfig, rng: &mut StdRng) -> GameSession {
        let mut session = GameSession::new(config);
        while !session.is_over() {
            if session.ai_to_move() {
                session.play_ai().unwrap();
            } else {
                let moves = session.state().legal_moves();
                let mv = *moves.choose(rng).unwrap();
                session.play_human(mv).unwrap();
            }
        }
        session
    }

    #[test]
    fn seeded_random_games_never_end_in_a_loss() {
        let mut rng = StdRng::seed_from_u64(42);
        for human_first in [true, false] {
            let config = GameConfig::new(Player::O).with_human_first(human_first);
            for _ in 0..50 {
                let session = play_random_game(config, &mut rng);
                assert_ne!(session.outcome(), Some(GameOutcome::Win(Player::X)));
                assert!(session.ai_utility().unwrap() >= UTILITY_DRAW);
            }
        }
    }

    #[test]
    fn session_history_alternates_marks() {
        let mut rng = StdRng::seed_from_u64(7);
        let session = play_random_game(GameConfig::default(), &mut rng);

        let history = session.history();
        assert_eq!(history[0].player, Player::X);
        for pair in history.windows(2) {
            assert_eq!(pair[1].player, pair[0].player.opponent());
        }
        for record in history {
            assert_eq!(record.by_ai, record.player == Player::O);
        }
        assert_eq!(session.metrics().moves_made, history.len());
        assert_eq!(
            session.metrics().ai_moves,
            history.iter().filter(|r| r.by_ai).count()
        );
    }
}
