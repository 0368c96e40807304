//! Line-oriented console seam so the session loop runs without a real terminal.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Blocking line-oriented console.
pub trait Console {
    /// Prints the prompt and reads one line of input (newline trimmed).
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Console backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt).context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read input")?;
        if bytes == 0 {
            anyhow::bail!("Input stream closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", line).context("Failed to write output")?;
        Ok(())
    }
}

/// Console that replays scripted replies and captures the transcript.
///
/// Prompts and output lines are recorded in order, so tests can assert
/// on the full conversation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with the given replies.
    pub fn new<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Returns every prompt and output line seen so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.replies
            .pop_front()
            .context("Console script ran out of replies")
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}
