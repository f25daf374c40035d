//! Moves and their long-algebraic text form.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move from one square to another, with an optional promotion.
///
/// Moves order by origin, then destination, then promotion. A move is only
/// pseudo-legal until checked against the position it is played in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Placeholder used to fill fixed-size buffers.
    pub const NULL: Move = Move {
        from: Square::A1,
        to: Square::A1,
        promotion: None,
    };

    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Move {
        Move {
            from,
            to,
            promotion,
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Parse long-algebraic text such as `e2e4` or `e7e8q`.
    ///
    /// Returns `None` for the wrong length, an unknown square, or a promotion
    /// letter other than `n`, `b`, `r`, `q`.
    pub fn from_uci(text: &str) -> Option<Move> {
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return None;
        }

        let from = Square::from_algebraic(&text[0..2])?;
        let to = Square::from_algebraic(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PieceKind::from_promotion_char(c)?),
            None => None,
        };
        Some(Move::new(from, to, promotion))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
