//! Move ordering by captured-piece value.

use std::cmp::Reverse;

use penguin_core::{Move, MoveList, Position};

/// Material value of the piece standing on the move's destination, or zero.
///
/// En-passant captures land on an empty square and score zero.
#[inline]
pub fn captured_value(position: &Position, mv: Move) -> i32 {
    position.piece_at(mv.to()).map_or(0, |victim| victim.value())
}

/// Sort `moves` so the most valuable captures come first.
///
/// The sort is stable: moves of equal value keep generation order, which
/// keeps the search deterministic.
pub fn order_moves(position: &Position, moves: &mut MoveList) {
    moves
        .as_mut_slice()
        .sort_by_key(|&mv| Reverse(captured_value(position, mv)));
}
