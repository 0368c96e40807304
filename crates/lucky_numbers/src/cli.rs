//! Command-line interface for lucky_numbers.

use clap::Parser;
use std::path::PathBuf;

/// Lucky Numbers - interactive number guessing game
#[derive(Parser, Debug)]
#[command(name = "lucky_numbers")]
#[command(about = "Interactive lucky number guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(short, long, default_value = "lucky_numbers.toml")]
    pub config: PathBuf,

    /// Fixed RNG seed for a reproducible session (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}
