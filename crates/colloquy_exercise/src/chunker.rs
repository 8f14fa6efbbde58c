//! Splits a sentence into a bounded number of reorderable tiles.
//!
//! Short and medium sentences get one tile per word. Longer sentences have
//! neighbouring tiles merged until the bound is met, with the merge cursor
//! sweeping left to right and wrapping, so merged chunks stay at two or
//! three words instead of piling onto the first tile.

/// Tile bound used when none is configured.
pub const DEFAULT_MAX_TILES: usize = 12;

/// Chunks `sentence` into at most `max_tiles` tiles (a bound of 0 acts as 1).
///
/// Joining the result with single spaces reproduces the sentence whenever
/// its words are separated by single spaces. A sentence with no words
/// yields no tiles.
#[must_use]
pub fn chunk(sentence: &str, max_tiles: usize) -> Vec<String> {
    let max_tiles = max_tiles.max(1);
    let mut tiles: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
    if tiles.len() <= max_tiles {
        return tiles;
    }

    let mut cursor = 0;
    while tiles.len() > max_tiles {
        if cursor >= tiles.len() - 1 {
            cursor = 0;
        }
        let right = tiles.remove(cursor + 1);
        let left = &mut tiles[cursor];
        left.push(' ');
        left.push_str(&right);
        cursor += 1;
    }

    tiles
}
