//! Integration tests for the tile chunker
//!
//! Tests bounds, text preservation, and merge spreading on real sentences.

use colloquy_exercise::{DEFAULT_MAX_TILES, chunk};
use proptest::prelude::*;

#[test]
fn sample_sentence_one_tile_per_word() {
    let sentence = "Breakfast is served from six to ten in the lobby restaurant.";
    let tiles = chunk(sentence, DEFAULT_MAX_TILES);
    assert_eq!(tiles.len(), 11);
    assert_eq!(tiles.join(" "), sentence);
}

#[test]
fn long_sentence_merges_stay_short() {
    let sentence = (0..30).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let tiles = chunk(&sentence, 12);
    assert_eq!(tiles.len(), 12);
    assert_eq!(tiles.join(" "), sentence);
    for tile in &tiles {
        let words = tile.split(' ').count();
        assert!((2..=4).contains(&words), "tile {tile:?} has {words} words");
    }
}

#[test]
fn zero_bound_acts_as_one() {
    assert_eq!(chunk("a b c", 0), vec!["a b c"]);
}

#[test]
fn punctuation_stays_attached() {
    assert_eq!(
        chunk("Good morning, Ma'am!", DEFAULT_MAX_TILES),
        vec!["Good", "morning,", "Ma'am!"]
    );
}

proptest! {
    #[test]
    fn word_count_at_or_below_bound_is_identity(
        words in prop::collection::vec("[a-z]{1,6}", 1..12),
    ) {
        let sentence = words.join(" ");
        prop_assert_eq!(chunk(&sentence, 12), words);
    }
}
