//! Colloquy CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colloquy_exercise::ExerciseConfig;
use colloquy_foundation::Role;
use colloquy_progress::LearnerIdentity;
use colloquy_runtime::{Repl, Session, SessionConfig};
use tracing_subscriber::EnvFilter;

/// Practice scripted two-party dialogues.
#[derive(Parser, Debug)]
#[command(name = "colloquy", version)]
#[command(about = "Practice scripted two-party dialogues in three modes")]
struct Cli {
    /// Study group the learner belongs to
    #[arg(long, default_value = "local")]
    group: String,

    /// Learner name
    #[arg(long, default_value = "learner")]
    name: String,

    /// Directory for progress files
    #[arg(long, default_value = ".colloquy")]
    data_dir: PathBuf,

    /// Seed for option and tile shuffles (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Role to practice: A/B (or staff/guest)
    #[arg(long, default_value = "A")]
    role: Role,

    /// Pause between revealed lines, in milliseconds
    #[arg(long, default_value_t = 600)]
    delay_ms: u64,

    /// Show translations next to each line
    #[arg(long)]
    translations: bool,

    /// Dialogue files to import (.json or `A: ...` transcripts); imported
    /// dialogues are kept in the data directory
    #[arg(long, num_args = 1..)]
    load: Vec<PathBuf>,

    /// Load files, print the library with progress, and exit
    #[arg(long, short = 'b')]
    batch: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("COLLOQUY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> colloquy_foundation::Result<()> {
    let mut config = SessionConfig::new()
        .with_exercise(ExerciseConfig::new().with_learner_role(cli.role))
        .with_data_dir(cli.data_dir)
        .with_reveal_delay(Duration::from_millis(cli.delay_ms))
        .with_translations(cli.translations);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let identity = LearnerIdentity::new(cli.group, cli.name);
    tracing::info!(learner = %identity, "starting session");
    let mut session = Session::open(config, identity)?;

    for path in &cli.load {
        session.load_file(path)?;
    }
    if session.library().is_empty() {
        session.load_samples()?;
    }

    if cli.batch {
        for (i, dialogue) in session.library().iter().enumerate() {
            let progress = session.tracker().overall_progress(dialogue.id());
            println!("{}", colloquy_runtime::render::library_entry(i + 1, dialogue, progress));
        }
        return Ok(());
    }

    Repl::new(session)?.run()
}
