//! Search command - Find the optimal move for a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        commands::parse_player_token,
        output::{print_board, print_kv, print_search_result, print_section},
    },
    search::search,
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct SearchArgs {
    /// Board in row-major order, e.g. "XX. OO. ..._X" (suffix names the side to move)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Mark the AI plays (`x` or `o`); defaults to the side to move
    #[arg(long)]
    pub ai: Option<String>,

    /// Disable alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let state = BoardState::from_string(&args.board)?;
    let ai = match &args.ai {
        Some(token) => parse_player_token(token, "--ai")?,
        None => state.to_move,
    };

    let result = search(&state, ai, !args.no_pruning)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_section("Search");
    print_board(&state);
    println!();
    print_kv("AI plays", &ai.to_string());
    print_kv("To move", &state.to_move.to_string());
    print_kv(
        "Algorithm",
        if args.no_pruning {
            "Minimax (no pruning)"
        } else {
            "Minimax + alpha-beta"
        },
    );
    print_search_result(&result);

    Ok(())
}
