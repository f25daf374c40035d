//! Static evaluation.
//!
//! An [`Evaluator`] scores a position from one side's point of view. Search
//! only relies on the score being deterministic and far below the mate sentinel.

pub mod pst;

use penguin_core::{Color, PieceKind, Position};

use self::pst::pst_value;

/// Material values for evaluation, indexed by [`PieceKind::index()`].
///
/// Both kings are always on the board, so the king carries no material.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    0,   // King
    900, // Queen
    500, // Rook
    330, // Bishop
    320, // Knight
    100, // Pawn
];

/// Static position scorer.
pub trait Evaluator {
    /// Score `position` in centipawns, positive when good for `color`.
    fn evaluate(&self, position: &Position, color: Color) -> i32;
}

/// Material plus piece-square bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareEvaluator;

impl PieceSquareEvaluator {
    /// Balance from White's perspective (positive = White ahead).
    pub fn white_balance(position: &Position) -> i32 {
        position
            .occupied()
            .filter_map(|sq| position.piece_at(sq).map(|piece| (sq, piece)))
            .map(|(sq, piece)| {
                let kind = piece.kind();
                let value = MATERIAL_VALUE[kind.index()] + pst_value(kind, piece.color(), sq);
                value * piece.color().sign()
            })
            .sum()
    }
}

impl Evaluator for PieceSquareEvaluator {
    fn evaluate(&self, position: &Position, color: Color) -> i32 {
        Self::white_balance(position) * color.sign()
    }
}
