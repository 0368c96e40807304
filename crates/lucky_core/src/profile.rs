//! Player onboarding: name/birthdate validation and age derivation.

use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Year of the fixed reference date used for age computation.
const REFERENCE_YEAR: i32 = 2022;
/// Month of the fixed reference date.
const REFERENCE_MONTH: u32 = 12;
/// Day of the fixed reference date (deliberately Dec 1, not Dec 31).
const REFERENCE_DAY: u32 = 1;

/// Earliest accepted birth year.
const BIRTH_YEAR_MIN: i32 = 1900;
/// Latest accepted birth year.
const BIRTH_YEAR_MAX: i32 = 2022;

/// A player's validated identity.
///
/// The profile is set atomically: [`PlayerProfile::set_info`] either
/// commits name, birthdate and derived age together, or leaves the
/// previous state untouched. Malformed input is reported via `bool`
/// returns, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Full name: two alphabetic tokens separated by a single space.
    name: String,
    /// Raw birthdate in `YYYYMMDD` form.
    birthdate: String,
    /// Age at the reference date 2022-12-01.
    age: i32,
}

impl PlayerProfile {
    /// Creates an empty profile.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a player name.
    ///
    /// Accepts exactly two alphabetic tokens separated by a single
    /// whitespace character, with no leading or trailing whitespace and
    /// no digits or punctuation.
    #[instrument]
    pub fn validate_name(name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        if !name.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
            return false;
        }
        if name.chars().filter(|c| c.is_whitespace()).count() != 1 {
            return false;
        }
        !name.starts_with(char::is_whitespace) && !name.ends_with(char::is_whitespace)
    }

    /// Validates a raw birthdate in `YYYYMMDD` form.
    ///
    /// The year must fall in [1900, 2022], the month in [1, 12], the day
    /// in [1, 31], and the triple must form a real Gregorian calendar
    /// date (leap years honored, so 20210230 is rejected).
    #[instrument]
    pub fn validate_birthdate(raw: &str) -> bool {
        let Some((year, month, day)) = Self::split_ymd(raw) else {
            return false;
        };
        if !(BIRTH_YEAR_MIN..=BIRTH_YEAR_MAX).contains(&year) {
            return false;
        }
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return false;
        }
        NaiveDate::from_ymd_opt(year, month, day).is_some()
    }

    /// Computes the player's age at the reference date 2022-12-01.
    ///
    /// Returns 0 when the birthdate fails validation. A birthday that
    /// has not yet occurred by the reference date (month/day after
    /// Dec 1) subtracts one year.
    #[instrument]
    pub fn calculate_age(raw: &str) -> i32 {
        if !Self::validate_birthdate(raw) {
            debug!(raw, "Age requested for invalid birthdate");
            return 0;
        }
        let Some((year, month, day)) = Self::split_ymd(raw) else {
            return 0;
        };

        let mut age = REFERENCE_YEAR - year;
        if month > REFERENCE_MONTH || (month == REFERENCE_MONTH && day > REFERENCE_DAY) {
            age -= 1;
        }
        age
    }

    /// Commits name, birthdate and derived age if both validate.
    ///
    /// Returns false and leaves prior state unchanged when either field
    /// is rejected. No partial commits.
    #[instrument(skip(self))]
    pub fn set_info(&mut self, name: &str, birthdate: &str) -> bool {
        if !Self::validate_name(name) || !Self::validate_birthdate(birthdate) {
            warn!("Rejected player info");
            return false;
        }

        self.name = name.to_string();
        self.birthdate = birthdate.to_string();
        self.age = Self::calculate_age(birthdate);

        info!(name = %self.name, age = self.age, "Player info set");
        true
    }

    /// Splits `YYYYMMDD` into (year, month, day).
    ///
    /// Returns `None` unless the input is exactly 8 ASCII digits, so
    /// non-digit input fails here instead of surfacing a parse error.
    fn split_ymd(raw: &str) -> Option<(i32, u32, u32)> {
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = raw[0..4].parse().ok()?;
        let month = raw[4..6].parse().ok()?;
        let day = raw[6..8].parse().ok()?;
        Some((year, month, day))
    }
}
