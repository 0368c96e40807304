//! Injectable randomness for lucky number draws.

use crate::round::{LUCKY_MAX, LUCKY_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::instrument;

/// Uniform source of integers in `0..=100`.
///
/// Round generation draws through this trait so rounds can be replayed
/// deterministically with a seed or a fixed script.
pub trait NumberSource {
    /// Draws the next number in `0..=100`.
    fn draw(&mut self) -> u8;
}

/// [`NumberSource`] backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Creates a source with a fixed seed for reproducible sessions.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberSource for RngSource<R> {
    fn draw(&mut self) -> u8 {
        self.rng.gen_range(LUCKY_MIN..=LUCKY_MAX)
    }
}

/// Replays a fixed script of draws.
///
/// Used by tests and documented examples; draws 0 once the script is
/// exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u8>,
}

impl ScriptedSource {
    /// Creates a source that yields the given values in order.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Returns how many scripted draws remain.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl NumberSource for ScriptedSource {
    fn draw(&mut self) -> u8 {
        self.values.pop_front().unwrap_or(LUCKY_MIN)
    }
}
