//! Lucky Numbers library - console driver for the lucky number game.
//!
//! The game rules live in `lucky_core`; this crate wires them to a
//! terminal.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags (config path, RNG seed)
//! - **GameConfig**: TOML-backed session settings
//! - **Console**: line-oriented I/O seam (std or scripted)
//! - **GameSession**: onboarding and the round loop
//!
//! # Example
//!
//! ```
//! use lucky_core::ScriptedSource;
//! use lucky_numbers::{GameConfig, GameSession, ScriptedConsole};
//!
//! # fn example() -> anyhow::Result<()> {
//! let console = ScriptedConsole::new(["John Doe", "19900101", "12", "n"]);
//! let source = ScriptedSource::new([5, 1, 20, 99, 70, 12, 22, 2, 89, 12]);
//!
//! let mut session = GameSession::new(GameConfig::default(), console, source);
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod session;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console seam
pub use console::{Console, ScriptedConsole, StdConsole};

// Crate-level exports - Session loop
pub use session::GameSession;
