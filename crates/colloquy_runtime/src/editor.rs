//! Line editing for the terminal front-end.
//!
//! The REPL reads through a [`LineEditor`], so tests can script input while
//! the binary uses rustyline with context-aware completion: command words at
//! the start of a line, mode names after `start <n>`, and paths after `add`.

use std::borrow::Cow;

use colloquy_foundation::{Error, ErrorKind, Mode, Result};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Context, Editor, Helper, Hinter, Validator};

/// Outcome of one read.
#[derive(Debug)]
pub enum ReadResult {
    /// A line of input.
    Line(String),
    /// Ctrl+C.
    Interrupted,
    /// Ctrl+D or end of input.
    Eof,
}

/// Source of input lines.
pub trait LineEditor {
    /// Reads one line after showing `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Records `line` in the history.
    fn add_history(&mut self, line: &str);
}

/// Words accepted at the start of a line.
pub const COMMANDS: &[&str] = &[
    "list", "modes", "start", "add", "help", "quit", "next", "submit", "restart", "back",
];

/// What the word under the cursor should complete to.
#[derive(Debug, PartialEq, Eq)]
enum Slot {
    Command,
    Mode,
    Path,
    Nothing,
}

/// Works out the slot for the word ending at the cursor.
fn slot(before_cursor: &str) -> Slot {
    let mut words: Vec<&str> = before_cursor.split_whitespace().collect();
    if !before_cursor.ends_with(char::is_whitespace) {
        words.pop();
    }
    match words.as_slice() {
        [] => Slot::Command,
        ["add", ..] => Slot::Path,
        ["start", _] => Slot::Mode,
        _ => Slot::Nothing,
    }
}

/// Candidates from `words` that extend `prefix`.
fn matching(words: impl IntoIterator<Item = &'static str>, prefix: &str) -> Vec<Pair> {
    words
        .into_iter()
        .filter(|word| word.starts_with(prefix))
        .map(|word| Pair {
            display: word.to_string(),
            replacement: word.to_string(),
        })
        .collect()
}

#[derive(Helper, Hinter, Validator)]
struct ColloquyHelper {
    files: FilenameCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Completer for ColloquyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let prefix = &before[start..];

        let candidates = match slot(before) {
            Slot::Path => return self.files.complete(line, pos, ctx),
            Slot::Command => matching(COMMANDS.iter().copied(), prefix),
            Slot::Mode => matching(Mode::ALL.iter().map(|mode| mode.name()), prefix),
            Slot::Nothing => Vec::new(),
        };
        Ok((start, candidates))
    }
}

impl Highlighter for ColloquyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }
}

/// Interactive editor with history, hints, and completion.
pub struct RustylineEditor {
    editor: Editor<ColloquyHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Sets up the terminal editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> Result<Self> {
        let internal = |e: ReadlineError| Error::new(ErrorKind::Internal(e.to_string()));
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(500)
            .map_err(internal)?
            .build();
        let mut editor = Editor::with_config(config).map_err(internal)?;
        editor.set_helper(Some(ColloquyHelper {
            files: FilenameCompleter::new(),
            hinter: HistoryHinter::new(),
        }));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(format!("failed to read input: {e}"))),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!(error = %e, "history entry dropped");
        }
    }
}
