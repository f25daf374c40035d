//! Zobrist hashing keys for repetition tracking.

use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;

const SEED: u64 = 0x5a4f_4252_4953_5421; // "ZOBRIST!"

/// Xorshift64 PRNG step. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Random keys for every (square, piece) pair and for Black to move.
///
/// Keys are drawn from one xorshift stream with a fixed seed, so the same
/// position hashes identically across runs and processes.
#[derive(Clone)]
pub struct ZobristKeys {
    piece_square: [[u64; Piece::COUNT]; 64],
    black_to_move: u64,
}

impl ZobristKeys {
    pub fn new() -> ZobristKeys {
        ZobristKeys::with_seed(SEED)
    }

    /// Draw a key table from the stream starting at `seed`; a zero seed is replaced by the default.
    pub fn with_seed(seed: u64) -> ZobristKeys {
        let mut state = if seed == 0 { SEED } else { seed };
        let mut draw = || {
            let (value, next) = xorshift64(state);
            state = next;
            value
        };

        let mut piece_square = [[0u64; Piece::COUNT]; 64];
        for row in &mut piece_square {
            for key in row.iter_mut() {
                *key = draw();
            }
        }
        let black_to_move = draw();

        ZobristKeys {
            piece_square,
            black_to_move,
        }
    }

    /// Hash placement and side to move by scanning all 64 squares.
    ///
    /// Castling rights and the en-passant target do not contribute.
    pub fn hash(&self, position: &Position) -> u64 {
        let mut hash = 0u64;
        if position.side_to_move() == Color::Black {
            hash ^= self.black_to_move;
        }
        for (index, keys) in self.piece_square.iter().enumerate() {
            if let Some(piece) = position.piece_at_index(index) {
                hash ^= keys[piece.index()];
            }
        }
        hash
    }

    fn all_keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.piece_square
            .iter()
            .flatten()
            .copied()
            .chain(std::iter::once(self.black_to_move))
    }

    /// Whether every key in the table is distinct and non-zero.
    pub fn keys_are_distinct(&self) -> bool {
        let mut keys: Vec<u64> = self.all_keys().collect();
        let count = keys.len();
        keys.sort_unstable();
        keys.dedup();
        keys.len() == count && keys.first().is_some_and(|&k| k != 0)
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ZobristKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZobristKeys")
            .field("black_to_move", &format_args!("{:#018x}", self.black_to_move))
            .finish_non_exhaustive()
    }
}
