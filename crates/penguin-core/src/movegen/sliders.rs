//! Ray-casting destinations for bishops, rooks and queens.

use crate::bitboard::Bitboard;
use crate::square::Square;

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each `(file, rank)` direction until the first occupied square.
///
/// Empty squares are included; the blocker is included only when it is an enemy.
fn cast_rays(sq: Square, empty: Bitboard, enemy: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    for &(df, dr) in directions {
        let mut cursor = sq;
        while let Some(next) = cursor.offset(df, dr) {
            if empty.contains(next) {
                targets = targets.with(next);
                cursor = next;
                continue;
            }
            if enemy.contains(next) {
                targets = targets.with(next);
            }
            break;
        }
    }
    targets
}

pub fn rook_moves(sq: Square, empty: Bitboard, enemy: Bitboard) -> Bitboard {
    cast_rays(sq, empty, enemy, &ORTHOGONAL)
}

pub fn bishop_moves(sq: Square, empty: Bitboard, enemy: Bitboard) -> Bitboard {
    cast_rays(sq, empty, enemy, &DIAGONAL)
}

pub fn queen_moves(sq: Square, empty: Bitboard, enemy: Bitboard) -> Bitboard {
    rook_moves(sq, empty, enemy) | bishop_moves(sq, empty, enemy)
}
