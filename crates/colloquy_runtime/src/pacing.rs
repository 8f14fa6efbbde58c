//! Staggered output.
//!
//! Engine transitions are applied at once; the pacer only spaces out the
//! revealed dialogue lines so a conversation reads at a human pace. Menus,
//! prompts, and feedback print immediately.

use std::fmt;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// One line of terminal output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Printed immediately.
    Plain(String),
    /// A revealed dialogue line; waits for the pacer.
    Paced(String),
}

impl Output {
    /// The text of the line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Paced(text) => text,
        }
    }

    /// Whether the line waits for the pacer.
    #[must_use]
    pub const fn is_paced(&self) -> bool {
        matches!(self, Self::Paced(_))
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts rendered strings into plain output lines.
#[must_use]
pub fn plain(lines: Vec<String>) -> Vec<Output> {
    lines.into_iter().map(Output::Plain).collect()
}

/// Writes output lines, pausing before each paced line that follows
/// another line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    /// Creates a pacer; a zero delay writes everything at once.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The pause before a paced line.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of pauses [`Pacer::emit`] makes for `lines`.
    #[must_use]
    pub fn pauses(&self, lines: &[Output]) -> usize {
        if self.delay.is_zero() {
            return 0;
        }
        lines.iter().skip(1).filter(|line| line.is_paced()).count()
    }

    /// Writes `lines` to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn emit<W: Write>(&self, lines: &[Output], out: &mut W) -> io::Result<()> {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 && line.is_paced() && !self.delay.is_zero() {
                out.flush()?;
                thread::sleep(self.delay);
            }
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}
