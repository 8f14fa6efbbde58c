//! Integration tests for the mode engines
//!
//! Tests full runs through practice, select, and structure modes.

use std::sync::Arc;

use colloquy_exercise::{
    Event, Exercise, ExerciseConfig, ModeEngine, PracticeEngine, SelectEngine, StructureEngine,
    Verdict,
};
use colloquy_foundation::{Dialogue, DialogueLine, Mode, Role, rng};

fn greeting() -> Arc<Dialogue> {
    Arc::new(
        Dialogue::new(
            "greeting",
            "Greeting",
            vec![
                DialogueLine::new(Role::A, "Hi"),
                DialogueLine::new(Role::B, "Hello"),
                DialogueLine::new(Role::A, "How are you?"),
                DialogueLine::new(Role::B, "Fine, thanks."),
            ],
        )
        .unwrap(),
    )
}

fn as_b() -> ExerciseConfig {
    ExerciseConfig::new().with_learner_role(Role::B)
}

fn pick(engine: &SelectEngine, correct: bool) -> usize {
    engine
        .options()
        .iter()
        .position(|o| o.is_correct == correct)
        .unwrap()
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn select_scenario_two_questions_perfect_score() {
    let mut engine = SelectEngine::new(greeting(), as_b(), rng::seeded(21));
    let events = engine.start();
    assert_eq!(engine.question_count(), 2);
    assert_eq!(
        events,
        vec![
            Event::Revealed(0),
            Event::QuestionPosed {
                line: 1,
                number: 1,
                total: 2
            },
        ]
    );

    let right = pick(&engine, true);
    assert_eq!(engine.select(right), Some(Verdict::Correct));
    engine.advance();
    assert_eq!(engine.state().cursor, 3);

    let right = pick(&engine, true);
    assert_eq!(engine.select(right), Some(Verdict::Correct));
    let events = engine.advance();
    assert_eq!(
        events,
        vec![Event::Revealed(3), Event::Completed { score: Some(100) }]
    );
    assert!(engine.is_complete());
    assert_eq!(engine.score(), Some(100));
}

#[test]
fn select_scenario_options_come_from_other_role() {
    let mut engine = SelectEngine::new(greeting(), as_b(), rng::seeded(8));
    engine.start();
    let mut texts: Vec<&str> = engine.options().iter().map(|o| o.text.as_str()).collect();
    texts.sort_unstable();
    assert_eq!(texts, vec!["Hello", "Hi", "How are you?"]);
}

#[test]
fn select_one_question_all_correct_or_all_wrong() {
    let dialogue = Arc::new(
        Dialogue::new(
            "short",
            "Short",
            vec![
                DialogueLine::new(Role::A, "Hi"),
                DialogueLine::new(Role::B, "Hello"),
            ],
        )
        .unwrap(),
    );

    for (correct, expected) in [(true, 100), (false, 0)] {
        let mut engine = SelectEngine::new(Arc::clone(&dialogue), as_b(), rng::seeded(1));
        engine.start();
        let index = pick(&engine, correct);
        engine.select(index);
        engine.advance();
        assert_eq!(engine.score(), Some(expected));
    }
}

#[test]
fn select_no_questions_for_role() {
    let dialogue = Arc::new(
        Dialogue::new("mono", "Mono", vec![DialogueLine::new(Role::A, "Announcement.")]).unwrap(),
    );
    let mut engine = SelectEngine::new(dialogue, as_b(), rng::seeded(1));
    engine.start();
    assert!(engine.is_complete());
    assert_eq!(engine.score(), Some(0));
}

#[test]
fn select_same_seed_same_options() {
    let mut a = SelectEngine::new(greeting(), as_b(), rng::seeded(77));
    let mut b = SelectEngine::new(greeting(), as_b(), rng::seeded(77));
    a.start();
    b.start();
    assert_eq!(a.options(), b.options());
}

// =============================================================================
// Practice
// =============================================================================

#[test]
fn practice_reveals_every_line_then_completes() {
    let mut engine = PracticeEngine::new(greeting());
    assert_eq!(engine.start(), vec![Event::Revealed(0)]);
    for i in 1..4 {
        assert_eq!(engine.advance(), vec![Event::Revealed(i)]);
    }
    assert!(!engine.is_complete());
    assert_eq!(engine.advance(), vec![Event::Completed { score: None }]);
    assert!(engine.is_complete());
    assert_eq!(engine.score(), None);
    assert!(engine.advance().is_empty());
}

#[test]
fn practice_progress_fraction() {
    let mut engine = PracticeEngine::new(greeting());
    engine.start();
    engine.advance();
    assert!((engine.progress_fraction() - 0.5).abs() < f64::EPSILON);
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn structure_scenario_full_marks() {
    let mut engine = StructureEngine::new(greeting(), as_b(), rng::seeded(2));
    engine.start();
    while !engine.is_complete() {
        let solution = engine.board().solution().to_vec();
        assert_eq!(engine.submit_arrangement(&solution), Some(Verdict::Correct));
        engine.advance();
    }
    assert_eq!(engine.score(), Some(100));
    assert_eq!(engine.state().revealed, vec![0, 1, 2, 3]);
}

#[test]
fn structure_tiles_rebuild_question_line() {
    let mut engine = StructureEngine::new(greeting(), as_b(), rng::seeded(2));
    engine.start();
    assert!(engine.advance().is_empty());
    engine.submit();
    engine.advance();
    let mut texts: Vec<String> = engine.board().tiles().iter().map(|t| t.text.clone()).collect();
    texts.sort();
    assert_eq!(texts, vec!["Fine,", "thanks."]);
}

#[test]
fn structure_imperfect_run_scores_fraction() {
    let mut engine = StructureEngine::new(greeting(), as_b(), rng::seeded(6));
    engine.start();
    engine.submit();
    engine.advance();
    let solution = engine.board().solution().to_vec();
    engine.submit_arrangement(&solution);
    engine.advance();
    assert_eq!(engine.score(), Some(50));
}

#[test]
fn structure_wrong_then_restart() {
    let mut engine = StructureEngine::new(greeting(), as_b(), rng::seeded(4));
    engine.start();
    let first = engine.board().solution()[0].clone();
    assert!(engine.toggle(&first));
    assert!(engine.toggle(&first));
    assert!(engine.board().placed().is_empty());
    assert_eq!(engine.submit(), Some(Verdict::Incorrect));

    engine.restart();
    assert_eq!(engine.correct_count(), 0);
    assert!(engine.state().awaiting_answer);
}

// =============================================================================
// Exercise
// =============================================================================

#[test]
fn exercise_dispatches_by_mode() {
    for mode in Mode::ALL {
        let exercise = Exercise::new(mode, greeting(), as_b(), rng::seeded(0));
        assert_eq!(exercise.mode(), mode);
        assert_eq!(exercise.engine().mode(), mode);
    }
}
