//! Pawn destinations.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

use super::tables::PAWN_ATTACKS;

/// Diagonal squares a pawn of `color` on `sq` attacks, regardless of occupancy.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Squares a pawn of `color` on `sq` may move to.
///
/// Single push onto an empty square, double push from the home rank through two
/// empty squares, and diagonal captures onto an enemy or the en-passant target.
pub fn pawn_moves(
    sq: Square,
    empty: Bitboard,
    enemy: Bitboard,
    color: Color,
    en_passant: Option<Square>,
) -> Bitboard {
    let mut targets = Bitboard::EMPTY;

    if let Some(one) = sq.offset(0, color.forward()) {
        if empty.contains(one) {
            targets = targets.with(one);
            if sq.rank() == color.pawn_rank() {
                if let Some(two) = one.offset(0, color.forward()) {
                    if empty.contains(two) {
                        targets = targets.with(two);
                    }
                }
            }
        }
    }

    let capturable = match en_passant {
        Some(ep) => enemy.with(ep),
        None => enemy,
    };
    targets | (pawn_attacks(sq, color) & capturable)
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, pawn_moves};
    use crate::bitboard::Bitboard;
    use crate::color::Color;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn all_empty_but(occupied: &[Square]) -> Bitboard {
        !occupied.iter().copied().collect::<Bitboard>()
    }

    #[test]
    fn single_and_double_push_from_home() {
        let targets = pawn_moves(Square::E2, all_empty_but(&[Square::E2]), Bitboard::EMPTY, Color::White, None);
        let squares: Vec<_> = targets.collect();
        assert_eq!(squares, vec![sq("e3"), Square::E4]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let blocked = all_empty_but(&[Square::E7, sq("e6")]);
        assert!(pawn_moves(Square::E7, blocked, Bitboard::EMPTY, Color::Black, None).is_empty());

        let far_blocked = all_empty_but(&[Square::E7, Square::E5]);
        let targets = pawn_moves(Square::E7, far_blocked, Bitboard::EMPTY, Color::Black, None);
        assert_eq!(targets, sq("e6").bitboard());
    }

    #[test]
    fn no_double_push_off_home_rank() {
        let e3 = sq("e3");
        let targets = pawn_moves(e3, all_empty_but(&[e3]), Bitboard::EMPTY, Color::White, None);
        assert_eq!(targets, Square::E4.bitboard());
    }

    #[test]
    fn captures_enemy_and_en_passant() {
        let e5 = Square::E5;
        let enemy = sq("f6").bitboard();
        let empty = all_empty_but(&[e5, sq("f6"), sq("e6")]);
        let targets = pawn_moves(e5, empty, enemy, Color::White, Some(sq("d6")));
        assert!(targets.contains(sq("f6")));
        assert!(targets.contains(sq("d6")));
        assert!(!targets.contains(sq("e6")));
    }

    #[test]
    fn attacks_ignore_occupancy() {
        let attacks = pawn_attacks(Square::E4, Color::Black);
        assert_eq!(attacks, sq("d3").bitboard() | sq("f3").bitboard());
    }
}
