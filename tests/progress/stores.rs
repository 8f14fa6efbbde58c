//! Integration tests for progress persistence
//!
//! Tests the file and memory stores and write-through tracking.

use std::fs;
use std::path::PathBuf;

use colloquy_foundation::{ErrorKind, Mode};
use colloquy_progress::{
    FileStore, LearnerIdentity, MemoryStore, ProgressLedger, ProgressStore, ProgressTracker,
};

fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!(
        "colloquy-progress-{name}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&root);
    root
}

#[test]
fn tracker_survives_reopen() {
    let root = temp_root("reopen");
    let identity = LearnerIdentity::new("class-1", "Minh");
    {
        let mut tracker = ProgressTracker::open(identity.clone(), FileStore::new(&root));
        tracker.complete_mode("check-in", Mode::Practice, None).unwrap();
        tracker.complete_mode("check-in", Mode::Select, Some(100)).unwrap();
    }

    let tracker = ProgressTracker::open(identity, FileStore::new(&root));
    assert!(tracker.is_mode_unlocked("check-in", Mode::Structure));
    assert_eq!(tracker.overall_progress("check-in"), 2);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn learners_do_not_share_progress() {
    let root = temp_root("learners");
    let mut a = ProgressTracker::open(LearnerIdentity::new("g", "a"), FileStore::new(&root));
    a.complete_mode("d", Mode::Practice, None).unwrap();

    let b = ProgressTracker::open(LearnerIdentity::new("g", "b"), FileStore::new(&root));
    assert_eq!(b.overall_progress("d"), 0);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn similar_names_do_not_share_a_file() {
    let root = temp_root("similar");
    let open = |name: &str| {
        ProgressTracker::open(LearnerIdentity::new("g1", name), FileStore::new(&root))
    };
    open("Minh Thu").complete_mode("d", Mode::Practice, None).unwrap();

    assert_eq!(open("Minh_Thu").overall_progress("d"), 0);
    assert_eq!(open("Minh Thu").overall_progress("d"), 1);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn corrupt_progress_file_does_not_block_the_learner() {
    let root = temp_root("corrupt");
    let identity = LearnerIdentity::new("g", "a");
    let store = FileStore::new(&root);
    fs::create_dir_all(&root).unwrap();
    fs::write(store.path_for(&identity.key()), [0x81]).unwrap();

    let mut tracker = ProgressTracker::open(identity.clone(), store);
    assert_eq!(tracker.overall_progress("d"), 0);
    tracker.complete_mode("d", Mode::Practice, None).unwrap();

    let reopened = ProgressTracker::open(identity, FileStore::new(&root));
    assert_eq!(reopened.overall_progress("d"), 1);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn failed_write_keeps_session_state() {
    let mut tracker =
        ProgressTracker::open(LearnerIdentity::new("g", "a"), MemoryStore::rejecting_writes());
    let err = tracker.complete_mode("d", Mode::Practice, None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Persistence(_)));
    assert!(tracker.get_progress("d").practice.completed);
}

#[test]
fn unknown_learner_loads_empty() {
    let store = FileStore::new(temp_root("empty"));
    assert_eq!(store.load("nobody:here").unwrap(), ProgressLedger::new());
}

#[test]
fn memory_store_keeps_each_key() {
    let mut store = MemoryStore::new();
    let mut ledger = ProgressLedger::new();
    ledger.complete_mode("d", Mode::Practice, None);
    store.save("g:a", &ledger).unwrap();
    store.save("g:b", &ProgressLedger::new()).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.load("g:a").unwrap(), ledger);
}
