//! Integration tests for distractor generation
//!
//! Tests option set size, exclusivity, and the empty-pool case.

use colloquy_exercise::{build_options, generate_distractors};
use colloquy_foundation::{Dialogue, DialogueLine, Role, rng};
use proptest::prelude::*;

fn front_desk() -> Dialogue {
    Dialogue::new(
        "front-desk",
        "Front Desk",
        vec![
            DialogueLine::new(Role::A, "Good evening.").with_translation("Chào buổi tối."),
            DialogueLine::new(Role::B, "Hi, I have a booking."),
            DialogueLine::new(Role::A, "May I have your name?"),
            DialogueLine::new(Role::B, "It's Tran."),
            DialogueLine::new(Role::A, "Good evening."),
            DialogueLine::new(Role::A, "Here is your key."),
            DialogueLine::new(Role::B, "Thank you."),
        ],
    )
    .unwrap()
}

#[test]
fn option_set_has_three_with_one_correct() {
    let dialogue = front_desk();
    let correct = &dialogue.lines()[1];
    let options = build_options(correct, &dialogue, Role::A, 2, &mut rng::seeded(3));
    assert_eq!(options.len(), 3);
    assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
    let right = options.iter().find(|o| o.is_correct).unwrap();
    assert_eq!(right.text, correct.primary_text);
}

#[test]
fn translations_follow_the_text() {
    let dialogue = front_desk();
    for seed in 0..20 {
        let mut rng = rng::seeded(seed);
        let options = build_options(&dialogue.lines()[1], &dialogue, Role::A, 2, &mut rng);
        for option in options.iter().filter(|o| o.text == "Good evening.") {
            assert_eq!(option.secondary_text.as_deref(), Some("Chào buổi tối."));
        }
    }
}

#[test]
fn empty_pool_gives_single_option() {
    let dialogue = Dialogue::new(
        "solo",
        "Solo",
        vec![
            DialogueLine::new(Role::A, "Hello?"),
            DialogueLine::new(Role::B, "Hi."),
        ],
    )
    .unwrap();
    let correct = &dialogue.lines()[1];
    assert!(generate_distractors(correct, &dialogue, Role::B, 2, &mut rng::seeded(0)).is_empty());

    let options = build_options(correct, &dialogue, Role::B, 2, &mut rng::seeded(0));
    assert_eq!(options.len(), 1);
    assert!(options[0].is_correct);
}

#[test]
fn duplicate_pool_texts_appear_once() {
    let dialogue = front_desk();
    for seed in 0..20 {
        let mut rng = rng::seeded(seed);
        let picks = generate_distractors(&dialogue.lines()[1], &dialogue, Role::A, 3, &mut rng);
        assert_eq!(picks.len(), 3);
        let mut unique = picks.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), picks.len());
    }
}

#[test]
fn every_pool_entry_can_be_picked() {
    let dialogue = front_desk();
    let mut seen = std::collections::HashSet::new();
    for seed in 0..200 {
        seen.extend(generate_distractors(
            &dialogue.lines()[1],
            &dialogue,
            Role::A,
            1,
            &mut rng::seeded(seed),
        ));
    }
    assert_eq!(seen.len(), 3);
}

proptest! {
    #[test]
    fn distractors_come_from_pool_role(seed in any::<u64>(), question in 0usize..7) {
        let dialogue = front_desk();
        let correct = &dialogue.lines()[question];
        let pool_role = correct.speaker.opposite();
        let picks = generate_distractors(correct, &dialogue, pool_role, 2, &mut rng::seeded(seed));
        for text in &picks {
            prop_assert_ne!(text, &correct.primary_text);
            prop_assert!(dialogue
                .lines()
                .iter()
                .any(|l| l.speaker == pool_role && &l.primary_text == text));
        }
    }
}
