//! End-to-end session tests
//!
//! Tests the full practice -> select -> structure progression.

use std::fs;
use std::path::PathBuf;

use colloquy_exercise::{Exercise, ModeEngine};
use colloquy_foundation::{ErrorKind, Mode, Role};
use colloquy_progress::{LearnerIdentity, MemoryStore, ProgressStore};
use colloquy_runtime::{Session, SessionConfig};

fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("colloquy-it-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&root);
    root
}

fn memory_session() -> Session<MemoryStore> {
    let mut session = Session::with_store(
        SessionConfig::testing(12),
        LearnerIdentity::new("g", "a"),
        MemoryStore::new(),
    );
    session.load_samples().unwrap();
    session
}

/// Plays an exercise to the end, answering correctly when `perfect`.
fn play<S: ProgressStore>(
    session: &mut Session<S>,
    id: &str,
    mode: Mode,
    perfect: bool,
) -> Option<u8> {
    let (mut exercise, _) = session.begin(id, mode).unwrap();
    while !exercise.engine().is_complete() {
        match &mut exercise {
            Exercise::Practice(_) => {}
            Exercise::Select(engine) => {
                let index = engine
                    .options()
                    .iter()
                    .position(|o| o.is_correct == perfect)
                    .unwrap_or(0);
                engine.select(index);
            }
            Exercise::Structure(engine) => {
                let mut order = engine.board().solution().to_vec();
                if !perfect {
                    order.pop();
                }
                engine.submit_arrangement(&order);
            }
        }
        exercise.engine_mut().advance();
    }
    session.finish(&exercise).unwrap();
    exercise.engine().score()
}

#[test]
fn full_progression_unlocks_in_order() {
    let mut session = memory_session();
    let id = "room-service";

    assert!(matches!(
        session.begin(id, Mode::Select).unwrap_err().kind,
        ErrorKind::ModeLocked { .. }
    ));

    assert_eq!(play(&mut session, id, Mode::Practice, true), None);
    assert_eq!(play(&mut session, id, Mode::Select, false), Some(0));
    assert!(session.begin(id, Mode::Structure).is_err());

    assert_eq!(play(&mut session, id, Mode::Select, true), Some(100));
    let cards = session.mode_cards(id);
    assert!(cards.iter().all(|c| c.unlocked));
    assert_eq!(cards[1].best_score, Some(100));

    assert_eq!(play(&mut session, id, Mode::Structure, false), Some(0));
    assert_eq!(session.tracker().overall_progress(id), 3);
}

#[test]
fn progress_persists_between_sessions() {
    let root = temp_root("persist");
    let config = SessionConfig::testing(5).with_data_dir(&root);
    let identity = LearnerIdentity::new("class-2", "Hoa");

    {
        let mut session = Session::open(config.clone(), identity.clone()).unwrap();
        session.load_samples().unwrap();
        play(&mut session, "weather", Mode::Practice, true);
    }

    let session = Session::open(config, identity).unwrap();
    assert!(session.tracker().is_mode_unlocked("weather", Mode::Select));
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn transcript_file_becomes_playable_dialogue() {
    let root = temp_root("transcript");
    fs::create_dir_all(&root).unwrap();
    let path = root.join("late-checkout.txt");
    fs::write(
        &path,
        "A: Good morning, front desk.\n\
         B: Could I have a late checkout?\n\
         A: Of course, until two o'clock.\n\
         B: Thank you!\n",
    )
    .unwrap();

    let mut session = memory_session();
    let dialogue = session.load_file(&path).unwrap();
    assert_eq!(dialogue.title(), "late checkout");
    assert_eq!(dialogue.indices_for(Role::B), vec![1, 3]);

    let id = dialogue.id().to_string();
    play(&mut session, &id, Mode::Practice, true);
    assert_eq!(play(&mut session, &id, Mode::Select, true), Some(100));
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn added_dialogue_is_back_next_session() {
    let root = temp_root("library");
    let config = SessionConfig::testing(9).with_data_dir(&root);
    let identity = LearnerIdentity::new("class-2", "Hoa");
    let source = root.join("incoming");
    fs::create_dir_all(&source).unwrap();
    let path = source.join("lost-key.txt");
    fs::write(&path, "A: How can I help?\nB: I lost my room key.\n").unwrap();

    let id = {
        let mut session = Session::open(config.clone(), identity.clone()).unwrap();
        assert!(session.library().is_empty());
        let id = session.load_file(&path).unwrap().id().to_string();
        assert_eq!(session.load_file(&path).unwrap().id(), id);
        play(&mut session, &id, Mode::Practice, true);
        id
    };
    fs::remove_file(&path).unwrap();

    let mut session = Session::open(config, identity).unwrap();
    assert_eq!(session.library().len(), 1);
    let dialogue = session.dialogue(&id).unwrap();
    assert_eq!(dialogue.title(), "lost key");
    assert_eq!(dialogue.lines()[1].primary_text, "I lost my room key.");
    assert_eq!(play(&mut session, &id, Mode::Select, true), Some(100));
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn invalid_file_is_rejected_and_library_unchanged() {
    let root = temp_root("invalid");
    fs::create_dir_all(&root).unwrap();
    let path = root.join("broken.json");
    fs::write(&path, r#"{ "title": "Broken", "lines": [] }"#).unwrap();

    let mut session = memory_session();
    let before = session.library().len();
    let err = session.load_file(&path).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(session.library().len(), before);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_file_is_an_io_error() {
    let mut session = memory_session();
    let err = session.load_file(&temp_root("nothing").join("none.json")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
