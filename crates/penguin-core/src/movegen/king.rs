//! King destinations, including castling.

use crate::bitboard::Bitboard;
use crate::castle_rights::{king_home, CastleSide};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::tables::KING_TARGETS;

/// One-step king destinations: empty or enemy-occupied neighbours.
#[inline]
pub fn king_moves(sq: Square, empty: Bitboard, enemy: Bitboard) -> Bitboard {
    KING_TARGETS[sq.index()] & (empty | enemy)
}

/// Two-file castling destinations for the king of `color` standing on `sq`.
///
/// A side is offered when its right is held, its rook is home, every square
/// between king and rook is empty, and neither the king's square, the square
/// it crosses, nor the square it lands on is attacked.
pub fn castling_moves(position: &Position, sq: Square, color: Color) -> Bitboard {
    if sq != king_home(color) {
        return Bitboard::EMPTY;
    }
    let them = color.flip();
    if position.is_attacked(sq, them) {
        return Bitboard::EMPTY;
    }

    let occupied = position.occupied();
    let rook = Piece::new(PieceKind::Rook, color);
    let mut targets = Bitboard::EMPTY;
    for side in CastleSide::ALL {
        if !position.castling().has(color, side) {
            continue;
        }
        let (rook_home, _) = side.rook_move(color);
        if position.piece_at(rook_home) != Some(rook) {
            continue;
        }
        if (side.between(color) & occupied).is_nonempty() {
            continue;
        }
        let to = side.king_to(color);
        if position.is_attacked(side.king_transit(color), them) || position.is_attacked(to, them) {
            continue;
        }
        targets = targets.with(to);
    }
    targets
}
