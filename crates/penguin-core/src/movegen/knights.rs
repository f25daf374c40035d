//! Knight destinations.

use crate::bitboard::Bitboard;
use crate::square::Square;

use super::tables::KNIGHT_TARGETS;

/// Squares a knight on `sq` may move to: empty or enemy-occupied, never off the board.
#[inline]
pub fn knight_moves(sq: Square, empty: Bitboard, enemy: Bitboard) -> Bitboard {
    KNIGHT_TARGETS[sq.index()] & (empty | enemy)
}
