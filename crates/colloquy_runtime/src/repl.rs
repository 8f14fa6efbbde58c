//! The interactive terminal front-end.
//!
//! Menu commands pick a dialogue and a mode; while an exercise runs, the
//! same prompt drives it. An empty line means `next`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use colloquy_exercise::{Event, Exercise, ModeEngine};
use colloquy_foundation::{Dialogue, Error, Mode, Result};
use colloquy_progress::{FileStore, ProgressStore};
use tracing::warn;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::pacing::{Output, Pacer, plain};
use crate::render;
use crate::session::Session;

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the command reference.
    Help,
    /// Leave the program.
    Quit,
    /// List loaded dialogues.
    List,
    /// Show mode cards for dialogue `n` (1-based).
    Modes(usize),
    /// Start a mode of dialogue `n` (1-based).
    Start(usize, Mode),
    /// Load a dialogue file.
    Add(PathBuf),
    /// Advance the running exercise.
    Next,
    /// Choose option `n` (1-based).
    Choose(usize),
    /// Toggle tile `n` (1-based, tray order).
    Tile(usize),
    /// Submit the tile arrangement.
    Submit,
    /// Start the running exercise over.
    Restart,
    /// Abandon the running exercise.
    Back,
    /// Input that matched nothing; carries a hint.
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let words: Vec<&str> = input.split_whitespace().collect();
        let number = |word: Option<&&str>| {
            word.and_then(|w| w.parse::<usize>().ok())
                .filter(|&n| n > 0)
        };

        match words.as_slice() {
            [] | ["next" | "n"] => Self::Next,
            ["help" | "?"] => Self::Help,
            ["quit" | "exit" | "q"] => Self::Quit,
            ["list" | "ls"] => Self::List,
            ["modes", rest @ ..] => match number(rest.first()) {
                Some(n) if rest.len() == 1 => Self::Modes(n),
                _ => Self::Unknown("usage: modes <dialogue number>".into()),
            },
            ["start", n, mode] => match (number(Some(n)), mode.parse::<Mode>()) {
                (Some(n), Ok(mode)) => Self::Start(n, mode),
                (None, _) => Self::Unknown("usage: start <dialogue number> <mode>".into()),
                (_, Err(e)) => Self::Unknown(e),
            },
            ["start", ..] => Self::Unknown("usage: start <dialogue number> <mode>".into()),
            ["add", ..] => match input.trim_start().strip_prefix("add").map(str::trim) {
                Some(path) if !path.is_empty() => Self::Add(PathBuf::from(path)),
                _ => Self::Unknown("usage: add <file>".into()),
            },
            ["t" | "tile", rest @ ..] => match number(rest.first()) {
                Some(n) if rest.len() == 1 => Self::Tile(n),
                _ => Self::Unknown("usage: t <tile number>".into()),
            },
            ["submit" | "s"] => Self::Submit,
            ["restart" | "r"] => Self::Restart,
            ["back" | "b"] => Self::Back,
            [word] => match number(Some(word)) {
                Some(n) => Self::Choose(n),
                None => Self::Unknown(format!("unknown command: {word} (type `help`)")),
            },
            _ => Self::Unknown(format!("unknown command: {} (type `help`)", input.trim())),
        }
    }
}

const IGNORED: &str = "Answer not taken. Pick a listed option, or type `next` to continue.";

/// An exercise in progress, and whether its result was recorded.
struct Active {
    exercise: Exercise,
    recorded: bool,
}

/// The interactive front-end.
pub struct Repl<E: LineEditor = RustylineEditor, S: ProgressStore = FileStore> {
    editor: E,
    session: Session<S>,
    active: Option<Active>,
    pacer: Pacer,
    show_banner: bool,
}

impl<S: ProgressStore> Repl<RustylineEditor, S> {
    /// Creates a REPL over `session` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session<S>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor, S: ProgressStore> Repl<E, S> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, session: Session<S>) -> Self {
        let pacer = Pacer::new(session.config().reveal_delay);
        Self {
            editor,
            session,
            active: None,
            pacer,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// The running exercise, if any.
    #[must_use]
    pub fn exercise(&self) -> Option<&Exercise> {
        self.active.as_ref().map(|active| &active.exercise)
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            let mut banner = plain(vec![
                "\x1b[1mColloquy\x1b[0m - dialogue practice".to_string(),
                format!(
                    "Practicing as {}. Type `help` for commands.",
                    self.session.config().exercise.learner_role
                ),
            ]);
            banner.extend(self.eval(&Command::List)?);
            self.print(&banner)?;
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let prompt = self.prompt();
        let input = match self.editor.read_line(&prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if !input.trim().is_empty() {
            self.editor.add_history(&input);
        } else if self.active.is_none() {
            return Ok(true);
        }

        let command = Command::parse(&input);
        if command == Command::Quit {
            return Ok(false);
        }

        let lines = self.eval(&command)?;
        self.print(&lines)?;
        Ok(true)
    }

    fn prompt(&self) -> String {
        match &self.active {
            Some(active) => format!("{}> ", active.exercise.mode()),
            None => "colloquy> ".to_string(),
        }
    }

    fn print(&self, lines: &[Output]) -> Result<()> {
        self.pacer
            .emit(lines, &mut io::stdout().lock())
            .map_err(|e| Error::io(format!("failed to write output: {e}")))
    }

    /// Applies one command and returns the lines to show.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown dialogues, locked modes, unreadable
    /// files, and invalid dialogue content.
    pub fn eval(&mut self, command: &Command) -> Result<Vec<Output>> {
        match command {
            Command::Help => Ok(plain(help())),
            Command::Quit => Ok(Vec::new()),
            Command::List => Ok(plain(self.list())),
            Command::Modes(n) => {
                let dialogue = self.nth_dialogue(*n)?;
                let cards = self.session.mode_cards(dialogue.id());
                Ok(plain(render::cards(&dialogue, &cards)))
            }
            Command::Start(n, mode) => {
                let dialogue = self.nth_dialogue(*n)?;
                let (exercise, events) = self.session.begin(dialogue.id(), *mode)?;
                let mut lines = vec![Output::Plain(format!(
                    "\x1b[1m{} - {mode}\x1b[0m",
                    dialogue.title()
                ))];
                self.active = Some(Active {
                    exercise,
                    recorded: false,
                });
                lines.extend(self.after_transition(&events)?);
                Ok(lines)
            }
            Command::Add(path) => {
                let dialogue = self.session.load_file(path)?;
                Ok(vec![Output::Plain(format!(
                    "Added \"{}\" ({} lines) as #{}.",
                    dialogue.title(),
                    dialogue.len(),
                    self.session.library().len()
                ))])
            }
            Command::Unknown(hint) => Ok(vec![Output::from(hint.as_str())]),
            Command::Next
            | Command::Choose(_)
            | Command::Tile(_)
            | Command::Submit
            | Command::Restart
            | Command::Back => self.eval_exercise(command),
        }
    }

    fn eval_exercise(&mut self, command: &Command) -> Result<Vec<Output>> {
        if self.active.is_none() {
            return Ok(vec![Output::from("No exercise is running. Use `start <n> <mode>`.")]);
        }
        if *command == Command::Back {
            self.active = None;
            return Ok(plain(self.list()));
        }
        let Some(active) = self.active.as_mut() else {
            return Ok(Vec::new());
        };

        let events: Vec<Event> = match (command, &mut active.exercise) {
            (Command::Restart, exercise) => {
                active.recorded = false;
                exercise.engine_mut().restart()
            }
            (Command::Next, exercise) => exercise.engine_mut().advance(),
            (Command::Choose(n), Exercise::Select(engine)) => {
                if n.checked_sub(1).and_then(|index| engine.select(index)).is_none() {
                    return Ok(vec![Output::from(IGNORED)]);
                }
                engine.answer_event().into_iter().collect()
            }
            (Command::Tile(n), Exercise::Structure(engine)) => {
                let id = n
                    .checked_sub(1)
                    .and_then(|index| engine.board().tiles().get(index))
                    .map(|tile| tile.id.clone());
                if let Some(id) = id {
                    engine.toggle(&id);
                }
                return Ok(plain(render::board(engine.board())));
            }
            (Command::Submit, Exercise::Structure(engine)) => {
                if engine.submit().is_none() {
                    return Ok(vec![Output::from(IGNORED)]);
                }
                engine.answer_event().into_iter().collect()
            }
            (_, exercise) => {
                return Ok(vec![Output::Plain(format!(
                    "Not available in {} mode.",
                    exercise.mode()
                ))]);
            }
        };

        self.after_transition(&events)
    }

    /// Renders `events` and records the result once the exercise finishes.
    fn after_transition(&mut self, events: &[Event]) -> Result<Vec<Output>> {
        let Some(active) = self.active.as_mut() else {
            return Ok(Vec::new());
        };
        let mut lines = render::events(&active.exercise, events, self.session.config());

        if active.exercise.engine().is_complete() && !active.recorded {
            active.recorded = true;
            let exercise = &active.exercise;
            if let Err(e) = self.session.finish(exercise) {
                warn!(error = %e, "completion not persisted");
                lines.push(Output::Plain(format!(
                    "\x1b[33mProgress could not be saved: {e}\x1b[0m"
                )));
            }
            let id = exercise.dialogue_id();
            let unlocked: Vec<&str> = Mode::ALL
                .iter()
                .filter(|&&mode| mode.prerequisite() == Some(exercise.mode()))
                .filter(|&&mode| self.session.tracker().is_mode_unlocked(id, mode))
                .map(|mode| mode.name())
                .collect();
            for mode in unlocked {
                lines.push(Output::Plain(format!("Unlocked {mode} mode.")));
            }
            lines.push(Output::from(
                "Type `restart` to try again or `back` for the dialogue list.",
            ));
        }
        Ok(lines)
    }

    fn list(&self) -> Vec<String> {
        if self.session.library().is_empty() {
            return vec!["No dialogues loaded. Use `add <file>`.".to_string()];
        }
        self.session
            .library()
            .iter()
            .enumerate()
            .map(|(i, dialogue)| {
                let progress = self.session.tracker().overall_progress(dialogue.id());
                render::library_entry(i + 1, dialogue, progress)
            })
            .collect()
    }

    fn nth_dialogue(&self, n: usize) -> Result<Arc<Dialogue>> {
        self.session
            .library()
            .get(n.saturating_sub(1))
            .cloned()
            .ok_or_else(|| Error::unknown_dialogue(format!("#{n}")))
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn help() -> Vec<String> {
    [
        "\x1b[1mMenu\x1b[0m",
        "  list                      List dialogues",
        "  modes <n>                 Show modes and progress for dialogue n",
        "  start <n> <mode>          Start practice, select, or structure mode",
        "  add <file>                Load a .json dialogue or an `A: ...` transcript",
        "  help                      Show this help",
        "  quit                      Exit",
        "\x1b[1mDuring an exercise\x1b[0m",
        "  next (or Enter)           Continue",
        "  <number>                  Choose an option (select mode)",
        "  t <number>                Place or return a tile (structure mode)",
        "  submit                    Check the arrangement (structure mode)",
        "  restart                   Start over",
        "  back                      Return to the dialogue list",
    ]
    .iter()
    .map(|&line| line.to_string())
    .collect()
}
