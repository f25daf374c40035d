//! Game history for repetition avoidance.

use std::collections::HashMap;

use penguin_core::{Position, ZobristKeys};

/// Zobrist keys plus a count of how often each position hash occurred in the game.
///
/// Created once per engine and kept across searches; [`clear`](Self::clear)
/// forgets the counts but keeps the keys, so hashes stay comparable.
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    keys: ZobristKeys,
    counts: HashMap<u64, u32>,
}

impl GameHistory {
    pub fn new() -> GameHistory {
        GameHistory::with_keys(ZobristKeys::new())
    }

    pub fn with_keys(keys: ZobristKeys) -> GameHistory {
        GameHistory {
            keys,
            counts: HashMap::new(),
        }
    }

    pub fn keys(&self) -> &ZobristKeys {
        &self.keys
    }

    #[inline]
    pub fn hash(&self, position: &Position) -> u64 {
        position.hash(&self.keys)
    }

    /// Count one more occurrence of `position` and return the new count.
    pub fn record(&mut self, position: &Position) -> u32 {
        let count = self.counts.entry(self.hash(position)).or_insert(0);
        *count += 1;
        *count
    }

    /// Number of times a position with this hash has occurred.
    pub fn count(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    /// Number of distinct positions recorded.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Replace the counts with one occurrence per position in `positions`.
    pub fn set_positions<'a>(&mut self, positions: impl IntoIterator<Item = &'a Position>) {
        self.counts.clear();
        for position in positions {
            self.record(position);
        }
    }
}
