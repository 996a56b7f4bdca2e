//! noughts CLI - Minimax analysis toolkit for tic-tac-toe
//!
//! This CLI provides a unified interface for:
//! - Finding the optimal move for any position
//! - Comparing plain minimax with alpha-beta pruning
//! - Verifying that the engine never loses
//! - Running self-play sessions against scripted opponents

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Minimax analysis toolkit for tic-tac-toe", long_about = None)]
struct Cli {
    /// Log search and session events to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    Search(noughts::cli::commands::search::SearchArgs),

    /// Compare node counts with and without pruning
    Compare(noughts::cli::commands::compare::CompareArgs),

    /// Check the engine against every opponent strategy
    Verify(noughts::cli::commands::verify::VerifyArgs),

    /// Play sessions against a scripted opponent
    Selfplay(noughts::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => noughts::cli::commands::search::execute(args),
        Commands::Compare(args) => noughts::cli::commands::compare::execute(args),
        Commands::Verify(args) => noughts::cli::commands::verify::execute(args),
        Commands::Selfplay(args) => noughts::cli::commands::selfplay::execute(args),
    }
}
