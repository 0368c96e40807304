//! Round state machine for the lucky number guessing game.

use crate::rng::NumberSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Smallest drawable lucky number.
pub(crate) const LUCKY_MIN: u8 = 0;
/// Largest drawable lucky number.
pub(crate) const LUCKY_MAX: u8 = 100;
/// Independent draws before the target is appended.
const POOL_DRAWS: usize = 9;
/// Half-width of the shortlist window around the target.
const SHORTLIST_WINDOW: u8 = 10;
/// Shortlist length at or below which the round is lost.
const EXHAUSTED_LEN: usize = 2;

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round is ongoing.
    InProgress,
    /// The lucky number was guessed.
    Won,
    /// The shortlist shrank to 2 or fewer entries.
    Lost,
}

/// Errors that can occur when guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The round has already ended.
    RoundOver,
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundError::RoundOver => write!(f, "Round is already over"),
        }
    }
}

impl std::error::Error for RoundError {}

/// One round of the guessing game.
///
/// A round starts with a 10-entry pool (9 independent draws plus the
/// target appended last) and narrows to a shortlist of pool values
/// within 10 of the target after the first miss. Wrong shortlist
/// guesses are removed one at a time until the target is found or the
/// shortlist is exhausted. State never persists across rounds.
#[derive(Debug, Clone)]
pub struct Round {
    pool: Vec<u8>,
    target: u8,
    shortlist: Option<Vec<u8>>,
    attempts: u32,
    status: RoundStatus,
}

impl Round {
    /// Generates a fresh round from the given source.
    ///
    /// Draws 9 pool values and an independent target, then appends the
    /// target, so the displayed pool always contains it (duplicates are
    /// possible).
    #[instrument(skip(source))]
    pub fn new(source: &mut dyn NumberSource) -> Self {
        let mut pool: Vec<u8> = (0..POOL_DRAWS).map(|_| source.draw()).collect();
        let target = source.draw();
        pool.push(target);

        debug!(?pool, target, "Generated round pool");
        Self {
            pool,
            target,
            shortlist: None,
            attempts: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Returns the full 10-entry pool (target last at generation time).
    pub fn pool(&self) -> &[u8] {
        &self.pool
    }

    /// Returns the hidden target.
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Returns the narrowed shortlist, once the first miss created it.
    pub fn shortlist(&self) -> Option<&[u8]> {
        self.shortlist.as_deref()
    }

    /// Returns the number of guesses made this round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Computes the shortlist: pool values within 10 of the target.
    ///
    /// Window bounds saturate at 0 and clamp at 100, so target 0 yields
    /// [0, 10] and target 100 yields [90, 100].
    #[instrument]
    pub fn shortlist_for(pool: &[u8], target: u8) -> Vec<u8> {
        let low = target.saturating_sub(SHORTLIST_WINDOW);
        let high = target.saturating_add(SHORTLIST_WINDOW).min(LUCKY_MAX);
        pool.iter().copied().filter(|v| (low..=high).contains(v)).collect()
    }

    /// Checks whether the shortlist is exhausted (2 or fewer entries).
    ///
    /// False before the first miss creates the shortlist. The target
    /// may or may not still be present.
    pub fn is_exhausted(&self) -> bool {
        self.shortlist
            .as_ref()
            .is_some_and(|shortlist| shortlist.len() <= EXHAUSTED_LEN)
    }

    /// Removes the first occurrence of a wrong guess from the shortlist.
    ///
    /// Silent no-op when the value is absent or the shortlist does not
    /// exist yet.
    pub fn remove_wrong_guess(&mut self, value: i64) {
        if let Some(shortlist) = &mut self.shortlist
            && let Some(idx) = shortlist.iter().position(|&v| i64::from(v) == value)
        {
            shortlist.remove(idx);
        }
    }

    /// Evaluates a guess and advances the round.
    ///
    /// Every call increments the attempt counter. A hit wins the round.
    /// The first miss narrows the pool to the shortlist (the missed
    /// value is not removed from it); later misses remove the guessed
    /// value. A shortlist of 2 or fewer entries loses the round.
    ///
    /// Guesses are plain integers: values outside the pool, including
    /// out-of-range ones, count as ordinary misses.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundOver`] if the round already ended.
    #[instrument(skip(self), fields(target = self.target))]
    pub fn guess(&mut self, value: i64) -> Result<RoundStatus, RoundError> {
        if self.status != RoundStatus::InProgress {
            return Err(RoundError::RoundOver);
        }

        self.attempts += 1;

        if value == i64::from(self.target) {
            info!(attempts = self.attempts, "Lucky number found");
            self.status = RoundStatus::Won;
            return Ok(self.status);
        }

        if self.shortlist.is_none() {
            let shortlist = Self::shortlist_for(&self.pool, self.target);
            debug!(?shortlist, "First miss, narrowing pool");
            self.shortlist = Some(shortlist);
        } else {
            self.remove_wrong_guess(value);
        }

        if self.is_exhausted() {
            info!(attempts = self.attempts, "Shortlist exhausted");
            self.status = RoundStatus::Lost;
        }

        Ok(self.status)
    }
}
