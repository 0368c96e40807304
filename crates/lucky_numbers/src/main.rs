//! Lucky Numbers - interactive console game.

use anyhow::Result;
use clap::Parser;
use lucky_core::RngSource;
use lucky_numbers::{Cli, GameConfig, GameSession, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        GameConfig::from_file(&cli.config)?
    } else {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
        GameConfig::default()
    };

    let source = match cli.seed.or(*config.seed()) {
        Some(seed) => {
            info!(seed, "Using fixed RNG seed");
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };

    let mut session = GameSession::new(config, StdConsole, source);
    session.run()
}
