//! Pseudo-legal destination generators.
//!
//! Every generator is a pure function of the origin square and the empty and
//! enemy masks (plus color or en-passant target where needed). Only castling
//! reads the position, to ask whether squares are attacked.

mod king;
mod knights;
mod pawns;
mod sliders;
mod tables;

use crate::chess_move::Move;

pub use self::king::{castling_moves, king_moves};
pub use self::knights::knight_moves;
pub use self::pawns::{pawn_attacks, pawn_moves};
pub use self::sliders::{bishop_moves, queen_moves, rook_moves};

/// Maximum number of moves a [`MoveList`] holds.
const CAPACITY: usize = 256;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; CAPACITY],
    len: usize,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < CAPACITY);
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Mutable view of the stored moves, for in-place ordering.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            let mv = self.moves[i];
            if keep(mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::MoveList;
    use crate::chess_move::Move;

    #[test]
    fn push_and_retain() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        for text in ["e2e4", "d2d4", "g1f3"] {
            list.push(Move::from_uci(text).unwrap());
        }
        assert_eq!(list.len(), 3);

        list.retain(|mv| mv.to_string() != "d2d4");
        let texts: Vec<String> = list.as_slice().iter().map(|mv| mv.to_string()).collect();
        assert_eq!(texts, vec!["e2e4", "g1f3"]);
        assert!(list.contains(Move::from_uci("g1f3").unwrap()));
    }
}
