//! Compare command - Plain minimax against alpha-beta on the same positions

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    analysis::{compare_pruning, reachable_states},
    cli::{
        commands::parse_player_token,
        output::{create_spinner, format_number, print_board, print_kv, print_section},
    },
    tictactoe::{BoardState, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compare node counts with and without alpha-beta pruning")]
pub struct CompareArgs {
    /// Board to compare on (defaults to the empty board)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Mark the AI plays (`x` or `o`); defaults to the side to move
    #[arg(long)]
    pub ai: Option<String>,

    /// Compare on every reachable non-terminal state instead of one board
    #[arg(long, conflicts_with = "board")]
    pub all: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.all {
        let ai = match &args.ai {
            Some(token) => parse_player_token(token, "--ai")?,
            None => Player::X,
        };
        return compare_all(ai);
    }

    let state = BoardState::from_string(&args.board)?;
    let ai = match &args.ai {
        Some(token) => parse_player_token(token, "--ai")?,
        None => state.to_move,
    };
    let comparison = compare_pruning(&state, ai)?;

    print_section("Pruning comparison");
    print_board(&state);
    println!();
    print_kv("AI plays", &ai.to_string());
    print_kv(
        "Minimax nodes",
        &format_number(comparison.minimax.nodes_expanded),
    );
    print_kv(
        "Alpha-beta nodes",
        &format_number(comparison.alpha_beta.nodes_expanded),
    );
    print_kv(
        "Reduction",
        &format!("{:.1}%", comparison.reduction() * 100.0),
    );
    print_kv(
        "Minimax time (ms)",
        &format!("{:.2}", comparison.minimax.elapsed_ms()),
    );
    print_kv(
        "Alpha-beta time (ms)",
        &format!("{:.2}", comparison.alpha_beta.elapsed_ms()),
    );
    print_kv("Same move/value", if comparison.agrees() { "yes" } else { "NO" });

    if !comparison.agrees() {
        bail!("pruned and unpruned search disagree on {}", state.encode());
    }
    Ok(())
}

fn compare_all(ai: Player) -> Result<()> {
    let spinner = create_spinner("Comparing every reachable state...");
    let mut positions = 0;
    let mut minimax_nodes = 0;
    let mut alpha_beta_nodes = 0;
    let mut disagreements = Vec::new();

    for first in [Player::X, Player::O] {
        for state in reachable_states(first) {
            if state.is_terminal() {
                continue;
            }
            let comparison = compare_pruning(&state, ai)?;
            positions += 1;
            minimax_nodes += comparison.minimax.nodes_expanded;
            alpha_beta_nodes += comparison.alpha_beta.nodes_expanded;
            if !comparison.agrees() {
                disagreements.push(state.encode());
            }
        }
    }
    spinner.finish_and_clear();

    print_section("Pruning comparison (all reachable states)");
    print_kv("AI plays", &ai.to_string());
    print_kv("Positions", &format_number(positions));
    print_kv("Minimax nodes", &format_number(minimax_nodes));
    print_kv("Alpha-beta nodes", &format_number(alpha_beta_nodes));
    print_kv("Disagreements", &disagreements.len().to_string());

    if let Some(first) = disagreements.first() {
        bail!(
            "{} positions disagree, first: {first}",
            disagreements.len()
        );
    }
    Ok(())
}
