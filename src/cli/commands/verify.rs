//! Verify command - Check that the engine never loses

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    analysis::verify_optimality,
    cli::{
        commands::build_config,
        output::{create_spinner, format_number, print_kv, print_section},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against every opponent move sequence")]
pub struct VerifyArgs {
    /// Mark the engine plays (`x` or `o`)
    #[arg(long, default_value = "o")]
    pub ai: String,

    /// Let the engine make the opening move
    #[arg(long)]
    pub ai_first: bool,

    /// Disable alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let config = build_config(&args.ai, args.ai_first, args.no_pruning)?;

    let spinner = create_spinner("Enumerating opponent strategies...");
    let report = verify_optimality(config)?;
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_section("Optimality verification");
        print_kv("Engine plays", &config.ai.to_string());
        print_kv("First move", &config.first_player().to_string());
        print_kv("Pruning", if config.use_alpha_beta { "on" } else { "off" });
        print_kv("Games", &format_number(report.games));
        print_kv("Engine wins", &format_number(report.ai_wins));
        print_kv("Draws", &format_number(report.draws));
        print_kv("Engine losses", &format_number(report.ai_losses));
        print_kv("Searches", &format_number(report.ai_searches));
        print_kv("Nodes expanded", &format_number(report.total_nodes));
    }

    if !report.is_optimal() {
        bail!("engine lost {} of {} games", report.ai_losses, report.games);
    }
    Ok(())
}
