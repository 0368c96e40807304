//! Interactive game session: onboarding, round loop, continuation.

use crate::config::GameConfig;
use crate::console::Console;
use anyhow::Result;
use lucky_core::{NumberSource, PlayerProfile, Round, RoundStatus};
use tracing::{debug, info, instrument, warn};

/// A console game session for a single player.
///
/// Owns the player profile and round state explicitly - no ambient
/// globals. The console and number source are injected so the whole
/// loop runs under test with scripted I/O and draws.
#[derive(Debug)]
pub struct GameSession<C, S> {
    config: GameConfig,
    console: C,
    source: S,
    profile: PlayerProfile,
}

impl<C: Console, S: NumberSource> GameSession<C, S> {
    /// Creates a new session.
    pub fn new(config: GameConfig, console: C, source: S) -> Self {
        Self {
            config,
            console,
            source,
            profile: PlayerProfile::new(),
        }
    }

    /// Returns the console (transcript access under test).
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Returns the onboarded player profile.
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Runs the full session: onboarding, then rounds until the player
    /// declines to continue.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        self.console.write_line("Welcome to the Lucky Number Game!")?;
        self.onboard()?;

        loop {
            self.play_round()?;

            let again = self
                .console
                .read_line("Do you like to play again? (Input y: Yes, and n: No): ")?;
            if again.trim().to_lowercase() != "y" {
                info!("Player declined to continue");
                self.console.write_line("Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    /// Prompts for name and birthdate until both validate and the
    /// player meets the minimum age.
    #[instrument(skip(self))]
    fn onboard(&mut self) -> Result<()> {
        loop {
            let name = self
                .console
                .read_line("Enter your full name (first and last name only): ")?;
            let birthdate = self.console.read_line("Enter your birthdate (yyyymmdd): ")?;

            if !self.profile.set_info(&name, &birthdate) {
                warn!("Invalid player info, re-prompting");
                self.console.write_line("Invalid input. Please try again.")?;
                continue;
            }

            let min_age = *self.config.min_age();
            if *self.profile.age() < min_age {
                warn!(age = self.profile.age(), min_age, "Player below minimum age");
                self.console.write_line(&format!(
                    "You must be at least {} years old to play. Please try again.",
                    min_age
                ))?;
                continue;
            }

            info!(name = %self.profile.name(), age = self.profile.age(), "Player onboarded");
            self.console.write_line(&format!(
                "Welcome {}, age {}!",
                self.profile.name(),
                self.profile.age()
            ))?;
            return Ok(());
        }
    }

    /// Plays one round to completion.
    ///
    /// Non-integer input is reported and re-prompted without consuming
    /// an attempt; everything else flows through [`Round::guess`].
    #[instrument(skip(self))]
    fn play_round(&mut self) -> Result<()> {
        let mut round = Round::new(&mut self.source);
        info!(pool = ?round.pool(), "Starting round");

        self.console
            .write_line(&format!("Lucky list: {:?}", round.pool()))?;

        let mut prompt = String::from("Pick the lucky number from the list: ");
        loop {
            let reply = self.console.read_line(&prompt)?;
            let Ok(value) = reply.trim().parse::<i64>() else {
                debug!(reply = %reply, "Rejected non-integer guess");
                self.console.write_line("Please enter a valid number.")?;
                continue;
            };

            match round.guess(value)? {
                RoundStatus::Won => {
                    self.console.write_line(&format!(
                        "Congratulations, game is over! You got the lucky number from try#{}",
                        round.attempts()
                    ))?;
                    return Ok(());
                }
                RoundStatus::Lost => {
                    self.console.write_line("Game over! The list is too short.")?;
                    return Ok(());
                }
                RoundStatus::InProgress => {
                    prompt = format!(
                        "This is try#{} and new list is: {:?}, choose the lucky number? ",
                        round.attempts(),
                        round.shortlist().unwrap_or(&[])
                    );
                }
            }
        }
    }
}
