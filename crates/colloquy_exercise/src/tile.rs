//! Reorderable tiles and the board that tracks their placement.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// Identifier of a tile, stable within one exercise instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileId(String);

impl TileId {
    /// Builds the id for the chunk at `index` in reading order.
    #[must_use]
    pub fn new(index: usize, text: &str) -> Self {
        Self(format!("{index}-{text}"))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word or phrase tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Stable id.
    pub id: TileId,
    /// Chunk text; never modified after chunking.
    pub text: String,
    /// Whether the tile is in the learner's arrangement.
    pub is_placed: bool,
}

/// The tiles of one question: a shuffled tray plus the learner's
/// arrangement, with no tile placed twice.
#[derive(Clone, Debug, Default)]
pub struct TileBoard {
    tiles: Vec<Tile>,
    placed: Vec<TileId>,
    solution: Vec<TileId>,
}

impl TileBoard {
    /// Creates a board from chunks in reading order, shuffling the tray.
    pub fn new<R: Rng + ?Sized>(chunks: Vec<String>, rng: &mut R) -> Self {
        let mut tiles: Vec<Tile> = chunks
            .into_iter()
            .enumerate()
            .map(|(index, text)| Tile {
                id: TileId::new(index, &text),
                text,
                is_placed: false,
            })
            .collect();
        let solution = tiles.iter().map(|tile| tile.id.clone()).collect();
        tiles.shuffle(rng);
        Self {
            tiles,
            placed: Vec::new(),
            solution,
        }
    }

    /// All tiles in tray (presentation) order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles not yet placed, in tray order.
    pub fn available(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| !tile.is_placed)
    }

    /// Placed tiles, in arrangement order.
    #[must_use]
    pub fn placed(&self) -> Vec<&Tile> {
        self.placed.iter().filter_map(|id| self.find(id)).collect()
    }

    /// The arrangement joined with single spaces.
    #[must_use]
    pub fn assembled(&self) -> String {
        self.placed()
            .iter()
            .map(|tile| tile.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Moves a tile between the tray and the arrangement.
    ///
    /// Returns false if no tile has this id.
    pub fn toggle(&mut self, id: &TileId) -> bool {
        let Some(tile) = self.tiles.iter_mut().find(|tile| &tile.id == id) else {
            return false;
        };
        if tile.is_placed {
            tile.is_placed = false;
            self.placed.retain(|placed| placed != id);
        } else {
            tile.is_placed = true;
            self.placed.push(id.clone());
        }
        true
    }

    /// Replaces the arrangement with `order`, skipping unknown and repeated ids.
    pub fn arrange(&mut self, order: &[TileId]) {
        self.clear();
        for id in order {
            if !self.placed.contains(id) {
                self.toggle(id);
            }
        }
    }

    /// Returns every tile to the tray.
    pub fn clear(&mut self) {
        self.placed.clear();
        for tile in &mut self.tiles {
            tile.is_placed = false;
        }
    }

    /// Tile ids in reading order; arranging these reproduces the sentence.
    #[must_use]
    pub fn solution(&self) -> &[TileId] {
        &self.solution
    }

    fn find(&self, id: &TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| &tile.id == id)
    }
}
