//! Lucky number game core - player onboarding and round logic.
//!
//! This library holds the pure game rules with no console I/O attached.
//!
//! # Architecture
//!
//! - **Profile**: player name/birthdate validation and age derivation
//! - **Round**: the progressively-narrowing guessing state machine
//! - **Rng**: injectable source of lucky numbers (seeded or scripted)
//!
//! # Example
//!
//! ```
//! use lucky_core::{Round, RoundStatus, ScriptedSource};
//!
//! let mut source = ScriptedSource::new([5, 1, 20, 99, 70, 12, 22, 2, 89, 12]);
//! let mut round = Round::new(&mut source);
//!
//! assert_eq!(round.target(), 12);
//! assert_eq!(round.guess(12), Ok(RoundStatus::Won));
//! assert_eq!(round.attempts(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod profile;
mod rng;
mod round;

// Crate-level exports - Player onboarding
pub use profile::PlayerProfile;

// Crate-level exports - Randomness
pub use rng::{NumberSource, RngSource, ScriptedSource};

// Crate-level exports - Round state machine
pub use round::{Round, RoundError, RoundStatus};
