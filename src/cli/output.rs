//! Output formatting and progress indicators for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    search::SearchResult,
    tictactoe::{BoardState, UTILITY_LOSS, UTILITY_WIN},
};

/// Create a spinner for long-running analysis tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board indented under a heading
pub fn print_board(state: &BoardState) {
    for row in state.to_string().lines() {
        println!("    {row}");
    }
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Describe a utility value from the AI's side
pub fn describe_value(value: i32) -> &'static str {
    match value {
        UTILITY_WIN => "forced win",
        UTILITY_LOSS => "forced loss",
        _ => "draw",
    }
}

/// Print the instrumentation of one search
pub fn print_search_result(result: &SearchResult) {
    let best = result
        .best_move
        .map_or_else(|| "none (terminal)".to_string(), |mv| mv.to_string());
    print_kv("Best move", &best);
    print_kv(
        "Value",
        &format!("{} ({})", result.value, describe_value(result.value)),
    );
    print_kv("Nodes expanded", &format_number(result.nodes_expanded));
    print_kv("Time (ms)", &format!("{:.2}", result.elapsed_ms()));
}
