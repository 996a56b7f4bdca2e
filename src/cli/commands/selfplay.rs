//! Selfplay command - Run sessions against a scripted opponent

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::Serialize;

use crate::{
    cli::{
        commands::build_config,
        output::{format_number, print_kv, print_section},
    },
    config::GameConfig,
    search::SearchEngine,
    session::{GameSession, SessionMetrics},
    tictactoe::{BoardState, GameOutcome, Move},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Another full-depth minimax searcher
    Optimal,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Play sessions against a scripted opponent")]
pub struct SelfplayArgs {
    /// Opponent standing in for the human
    #[arg(long, value_enum, default_value = "random")]
    pub opponent: OpponentKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mark the engine plays (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub ai: String,

    /// Let the engine make the opening move
    #[arg(long)]
    pub ai_first: bool,

    /// Disable alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// The scripted side of a session
enum Opponent {
    Optimal(SearchEngine),
    Random(StdRng),
}

impl Opponent {
    fn new(kind: OpponentKind, config: &GameConfig, seed: Option<u64>) -> Self {
        match kind {
            OpponentKind::Optimal => Opponent::Optimal(SearchEngine::new(config.human())),
            OpponentKind::Random => Opponent::Random(match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::seed_from_u64(rand::random::<u64>()),
            }),
        }
    }

    fn choose(&mut self, state: &BoardState) -> Result<Move> {
        match self {
            Opponent::Optimal(engine) => engine
                .search(state)?
                .best_move
                .ok_or_else(|| anyhow!("opponent asked to move in a finished game")),
            Opponent::Random(rng) => state
                .legal_moves()
                .choose(rng)
                .copied()
                .ok_or_else(|| anyhow!("opponent asked to move on a full board")),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct SelfplaySummary {
    games: usize,
    ai_wins: usize,
    draws: usize,
    ai_losses: usize,
    metrics: Vec<SessionMetrics>,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let config = build_config(&args.ai, args.ai_first, args.no_pruning)?;
    let mut opponent = Opponent::new(args.opponent, &config, args.seed);
    let mut summary = SelfplaySummary::default();
    let mut session = GameSession::new(config);

    for game in 1..=args.games {
        while !session.is_over() {
            if session.ai_to_move() {
                session.play_ai()?;
            } else {
                let mv = opponent.choose(session.state())?;
                session.play_human(mv)?;
            }
        }

        summary.games += 1;
        match session.outcome() {
            Some(GameOutcome::Win(winner)) if winner == config.ai => summary.ai_wins += 1,
            Some(GameOutcome::Win(_)) => summary.ai_losses += 1,
            _ => summary.draws += 1,
        }
        summary.metrics.push(*session.metrics());

        if !args.json {
            let moves: Vec<String> = session
                .history()
                .iter()
                .map(|record| format!("{}{}", record.player, record.mv))
                .collect();
            println!(
                "Game {game:>3}: {:<16} {}",
                session.state().result_message(),
                moves.join(" ")
            );
        }
        session.reset();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let total_nodes: usize = summary.metrics.iter().map(|m| m.total_nodes).sum();
    let ai_moves: usize = summary.metrics.iter().map(|m| m.ai_moves).sum();
    let total_ms: f64 = summary.metrics.iter().map(|m| m.total_ai_time_ms()).sum();

    print_section("Selfplay summary");
    print_kv("Opponent", &format!("{:?}", args.opponent));
    print_kv("Games", &summary.games.to_string());
    print_kv("Engine wins", &summary.ai_wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
    print_kv("Engine losses", &summary.ai_losses.to_string());
    print_kv("Nodes expanded", &format_number(total_nodes));
    if ai_moves > 0 {
        print_kv(
            "Avg nodes/move",
            &format!("{:.1}", total_nodes as f64 / ai_moves as f64),
        );
    }
    print_kv("AI time (ms)", &format!("{total_ms:.2}"));

    Ok(())
}
