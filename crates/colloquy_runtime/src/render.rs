//! Plain-text rendering of engine events, tiles, and mode cards.

use colloquy_exercise::{Event, Exercise, TileBoard, Verdict};
use colloquy_foundation::{Dialogue, DialogueLine, Role};

use crate::config::SessionConfig;
use crate::pacing::Output;
use crate::session::ModeCard;

/// Renders one dialogue line, marking the learner's role.
#[must_use]
pub fn line(line: &DialogueLine, config: &SessionConfig) -> String {
    let marker = if line.speaker == config.exercise.learner_role {
        " (you)"
    } else {
        ""
    };
    let mut out = format!("  {}{marker}: {}", line.speaker, line.primary_text);
    if config.show_translations {
        if let Some(secondary) = &line.secondary_text {
            out.push_str(&format!("\n      \x1b[2m{secondary}\x1b[0m"));
        }
    }
    out
}

/// Renders the events of one transition. Revealed lines are paced.
#[must_use]
pub fn events(exercise: &Exercise, events: &[Event], config: &SessionConfig) -> Vec<Output> {
    let dialogue = exercise.engine().dialogue();
    let mut out = Vec::new();
    for event in events {
        match event {
            Event::Revealed(index) => {
                if let Some(l) = dialogue.line(*index) {
                    out.push(Output::Paced(line(l, config)));
                }
            }
            Event::QuestionPosed { number, total, .. } => {
                out.push(Output::Plain(format!(
                    "\x1b[1mQuestion {number}/{total}\x1b[0m - what does {} say next?",
                    config.exercise.learner_role
                )));
                out.extend(prompt(exercise, config).into_iter().map(Output::Plain));
            }
            Event::Answered { line: index, verdict } => {
                out.push(Output::Plain(answered(dialogue, *index, *verdict)));
            }
            Event::Completed { score } => out.push(Output::Plain(completed(*score))),
        }
    }
    out
}

/// Renders what the learner acts on for the current question.
#[must_use]
pub fn prompt(exercise: &Exercise, config: &SessionConfig) -> Vec<String> {
    match exercise {
        Exercise::Practice(_) => Vec::new(),
        Exercise::Select(engine) => engine
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mut text = format!("    {}) {}", i + 1, option.text);
                if config.show_translations {
                    if let Some(secondary) = &option.secondary_text {
                        text.push_str(&format!(" \x1b[2m({secondary})\x1b[0m"));
                    }
                }
                text
            })
            .collect(),
        Exercise::Structure(engine) => board(engine.board()),
    }
}

/// Renders the arrangement and the numbered tray.
#[must_use]
pub fn board(board: &TileBoard) -> Vec<String> {
    let tray: Vec<String> = board
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, tile)| {
            if tile.is_placed {
                format!("{}) \x1b[2m[{}]\x1b[0m", i + 1, tile.text)
            } else {
                format!("{}) {}", i + 1, tile.text)
            }
        })
        .collect();
    vec![
        format!("    Answer: {}", board.assembled()),
        format!("    Tiles:  {}", tray.join("   ")),
    ]
}

fn answered(dialogue: &Dialogue, index: usize, verdict: Verdict) -> String {
    match verdict {
        Verdict::Correct => "\x1b[32mCorrect!\x1b[0m".to_string(),
        Verdict::Incorrect => {
            let expected = dialogue.line(index).map_or("", |l| l.primary_text.as_str());
            format!("\x1b[33mNot quite.\x1b[0m The answer was: {expected}")
        }
    }
}

fn completed(score: Option<u8>) -> String {
    match score {
        Some(score) => format!("\x1b[1mComplete!\x1b[0m Score: {score}%"),
        None => "\x1b[1mComplete!\x1b[0m".to_string(),
    }
}

/// Renders the mode selection cards for a dialogue.
#[must_use]
pub fn cards(dialogue: &Dialogue, cards: &[ModeCard]) -> Vec<String> {
    let mut out = vec![format!("\x1b[1m{}\x1b[0m", dialogue.title())];
    if let Some(description) = dialogue.description() {
        out.push(format!("  {description}"));
    }
    let completed = cards.iter().filter(|c| c.completed).count();
    out.push(format!("  Progress: {completed}/{}", cards.len()));
    for card in cards {
        let status = match (card.unlocked, card.completed) {
            (false, _) => "locked",
            (true, true) => "completed",
            (true, false) => "open",
        };
        let mut text = format!("  - {:<10} {status}", card.mode.name());
        if let Some(best) = card.best_score {
            text.push_str(&format!(" (best {best}%)"));
        }
        out.push(text);
    }
    out
}

/// Renders one library entry.
#[must_use]
pub fn library_entry(number: usize, dialogue: &Dialogue, progress: usize) -> String {
    let unit = dialogue.unit().map(|u| format!(" [{u}]")).unwrap_or_default();
    let roles = [Role::A, Role::B]
        .iter()
        .filter(|&&role| !dialogue.indices_for(role).is_empty())
        .count();
    format!(
        "  {number}. {}{unit} - {} lines, {roles} speakers, {progress}/3 modes",
        dialogue.title(),
        dialogue.len()
    )
}
