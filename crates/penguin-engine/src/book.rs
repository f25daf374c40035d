//! Opening replies played without searching.

use penguin_core::{Color, Move, Position, Square};
use tracing::debug;

const WHITE_REPLY: Move = Move::new(Square::E2, Square::E4, None);
const BLACK_REPLY: Move = Move::new(Square::E7, Square::E5, None);

/// A source of moves the engine plays instead of searching.
pub trait OpeningBook {
    /// A move to play in `position`, if the book has one.
    fn reply(&mut self, position: &Position) -> Option<Move>;

    /// Called on `ucinewgame`.
    fn reset(&mut self) {}
}

/// Answers the first search of a game with the king-pawn double push.
///
/// The book stays armed until it is asked about a starting position, so a
/// game that starts from a custom FEN keeps it for later.
#[derive(Debug, Clone)]
pub struct FirstMoveBook {
    armed: bool,
}

impl FirstMoveBook {
    pub fn new() -> FirstMoveBook {
        FirstMoveBook { armed: true }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for FirstMoveBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OpeningBook for FirstMoveBook {
    fn reply(&mut self, position: &Position) -> Option<Move> {
        if !self.armed || !position.is_starting_position() {
            return None;
        }
        self.armed = false;
        let reply = match position.side_to_move() {
            Color::White => WHITE_REPLY,
            Color::Black => BLACK_REPLY,
        };
        debug!(%reply, "first-move book hit");
        Some(reply)
    }

    fn reset(&mut self) {
        self.armed = true;
    }
}

/// A book that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBook;

impl OpeningBook for NoBook {
    fn reply(&mut self, _position: &Position) -> Option<Move> {
        None
    }
}
