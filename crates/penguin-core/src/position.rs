//! The position model: piece placement, side to move, castling and en passant.
//!
//! Positions are small `Copy` values. Search explores a branch by copying the
//! parent and applying one move to the copy.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::PositionError;
use crate::movegen::{
    bishop_moves, castling_moves, king_moves, knight_moves, pawn_attacks, pawn_moves, queen_moves,
    rook_moves, MoveList,
};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::zobrist::ZobristKeys;

/// Complete state of a game at one moment.
///
/// Placement is held as 12 masks, one per colored piece, in scan order
/// (White K,Q,R,B,N,P then Black K,Q,R,B,N,P). A square is set in at most one mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    masks: [Bitboard; Piece::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    /// Square skipped by a double push, set only while an enemy pawn can take it.
    en_passant: Option<Square>,
}

impl Position {
    /// A board with no pieces, White to move and no castling rights.
    pub fn empty() -> Position {
        Position {
            masks: [Bitboard::EMPTY; Piece::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
        }
    }

    /// The standard initial layout.
    pub fn starting_position() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut position = Position::empty();
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                if let Some(sq) = Square::from_coords(file, color.back_rank()) {
                    position.set_piece(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::from_coords(file, color.pawn_rank()) {
                    position.set_piece(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        position.castling = CastleRights::ALL;
        position
    }

    // --- Placement ---

    /// Place `piece` on `sq`, replacing whatever stood there. `None` leaves the board unchanged.
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(piece) = piece {
            self.remove_piece(sq);
            self.masks[piece.index()] = self.masks[piece.index()].with(sq);
        }
    }

    /// Clear `sq` in every mask.
    pub fn remove_piece(&mut self, sq: Square) {
        for mask in &mut self.masks {
            *mask = mask.without(sq);
        }
    }

    /// Builder form of [`set_piece`](Self::set_piece).
    pub fn with_piece(mut self, sq: Square, piece: Option<Piece>) -> Position {
        self.set_piece(sq, piece);
        self
    }

    /// The piece on `sq`, found by scanning the masks in scan order.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|piece| self.masks[piece.index()].contains(sq))
    }

    /// Like [`piece_at`](Self::piece_at) for a raw index; out-of-range indices hold nothing.
    pub fn piece_at_index(&self, index: usize) -> Option<Piece> {
        let sq = Square::from_index(u8::try_from(index).ok()?)?;
        self.piece_at(sq)
    }

    // --- Accessors ---

    /// Mask of one colored piece.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        self.masks[piece.index()]
    }

    /// Every square occupied by `color`.
    pub fn side(&self, color: Color) -> Bitboard {
        PieceKind::ALL
            .into_iter()
            .fold(Bitboard::EMPTY, |acc, kind| acc | self.pieces(Piece::new(kind, color)))
    }

    pub fn occupied(&self) -> Bitboard {
        self.masks.iter().fold(Bitboard::EMPTY, |acc, &mask| acc | mask)
    }

    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    /// Squares held by the opponent of `color`.
    pub fn enemy_squares(&self, color: Color) -> Bitboard {
        self.side(color.flip())
    }

    /// Square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(Piece::new(PieceKind::King, color)).lsb()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Zobrist hash of placement and side to move under `keys`.
    #[inline]
    pub fn hash(&self, keys: &ZobristKeys) -> u64 {
        keys.hash(self)
    }

    // --- Move application ---

    /// Play `mv` on this position.
    ///
    /// The move must be legal here; this is not checked. Side effects are applied
    /// in order, each reading the board as it stood before the move: castling
    /// rights, rook relocation for castling, en-passant capture, en-passant
    /// target, the move itself, promotion, and finally the turn change. A move
    /// from an empty square leaves the position untouched.
    pub fn apply_move(&mut self, mv: Move) {
        let (from, to) = (mv.from(), mv.to());
        let Some(mover) = self.piece_at(from) else {
            debug_assert!(false, "no piece on {from} for {mv}");
            return;
        };
        let color = mover.color();
        let captured = self.piece_at(to);

        // Castling rights.
        match mover.kind() {
            PieceKind::King => self.castling = self.castling.remove_color(color),
            PieceKind::Rook => self.castling = self.castling.remove(CastleRights::for_rook_corner(from)),
            _ => {}
        }
        if captured.is_some_and(|piece| piece.kind() == PieceKind::Rook) {
            self.castling = self.castling.remove(CastleRights::for_rook_corner(to));
        }

        // Rook follows a castling king.
        if mover.kind() == PieceKind::King {
            if let Some(side) = CastleSide::from_king_step(from, to) {
                let (rook_from, rook_to) = side.rook_move(color);
                let rook = self.piece_at(rook_from);
                self.remove_piece(rook_from);
                self.set_piece(rook_to, rook);
            }
        }

        // En-passant capture removes the pawn behind the target.
        let is_pawn = mover.kind() == PieceKind::Pawn;
        if is_pawn && self.en_passant == Some(to) {
            if let Some(victim) = to.offset(0, -color.forward()) {
                self.remove_piece(victim);
            }
        }

        // New en-passant target only when an enemy pawn could use it.
        self.en_passant = None;
        if is_pawn && from.rank() == color.pawn_rank() && to.file() == from.file() {
            let skipped = from.offset(0, color.forward());
            if skipped.and_then(|sq| sq.offset(0, color.forward())) == Some(to) {
                let enemy_pawns = self.pieces(Piece::new(PieceKind::Pawn, color.flip()));
                let beside = [to.offset(-1, 0), to.offset(1, 0)];
                if beside.into_iter().flatten().any(|sq| enemy_pawns.contains(sq)) {
                    self.en_passant = skipped;
                }
            }
        }

        self.remove_piece(from);
        self.set_piece(to, Some(mover));

        if let Some(kind) = mv.promotion() {
            self.set_piece(to, Some(Piece::new(kind, color)));
        }

        self.side_to_move = self.side_to_move.flip();
    }

    /// Copy of this position with `mv` applied.
    #[must_use]
    pub fn after(&self, mv: Move) -> Position {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    // --- Attacks and game state ---

    /// Every destination of `piece` standing on `sq`, with or without castling.
    fn destinations(&self, sq: Square, piece: Piece, castling: bool) -> Bitboard {
        let color = piece.color();
        let empty = self.empty_squares();
        let enemy = self.enemy_squares(color);
        match piece.kind() {
            PieceKind::King if castling => {
                king_moves(sq, empty, enemy) | castling_moves(self, sq, color)
            }
            PieceKind::King => king_moves(sq, empty, enemy),
            PieceKind::Queen => queen_moves(sq, empty, enemy),
            PieceKind::Rook => rook_moves(sq, empty, enemy),
            PieceKind::Bishop => bishop_moves(sq, empty, enemy),
            PieceKind::Knight => knight_moves(sq, empty, enemy),
            PieceKind::Pawn => pawn_moves(sq, empty, enemy, color, self.en_passant),
        }
    }

    /// Squares `color` occupies or could move to, castling excluded.
    ///
    /// Pawns contribute only their diagonal attacks.
    pub fn controlled_squares(&self, color: Color) -> Bitboard {
        let own = self.side(color);
        own.fold(own, |acc, sq| {
            let Some(piece) = self.piece_at(sq) else {
                return acc;
            };
            let reach = match piece.kind() {
                PieceKind::Pawn => pawn_attacks(sq, color),
                _ => self.destinations(sq, piece, false),
            };
            acc | reach
        })
    }

    /// Whether `by` attacks `sq`, found by casting each piece pattern back from `sq`.
    ///
    /// Agrees with [`controlled_squares`](Self::controlled_squares) on every square
    /// `by` does not occupy.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let theirs = |kind| self.pieces(Piece::new(kind, by));
        let empty = self.empty_squares();
        let anything = !empty;

        (knight_moves(sq, empty, anything) & theirs(PieceKind::Knight)).is_nonempty()
            || (king_moves(sq, empty, anything) & theirs(PieceKind::King)).is_nonempty()
            || (pawn_attacks(sq, by.flip()) & theirs(PieceKind::Pawn)).is_nonempty()
            || (rook_moves(sq, empty, anything) & (theirs(PieceKind::Rook) | theirs(PieceKind::Queen)))
                .is_nonempty()
            || (bishop_moves(sq, empty, anything) & (theirs(PieceKind::Bishop) | theirs(PieceKind::Queen)))
                .is_nonempty()
    }

    /// Whether `color`'s king stands on a square the opponent controls.
    pub fn is_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| self.is_attacked(sq, color.flip()))
    }

    /// `color` is in check and every move of the side to move leaves it in check.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.no_escape(color, true)
    }

    /// `color` is not in check but every move of the side to move would put it in check.
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.no_escape(color, false)
    }

    fn no_escape(&self, color: Color, in_check: bool) -> bool {
        if self.is_check(color) != in_check {
            return false;
        }
        self.pseudo_legal_moves()
            .as_slice()
            .iter()
            .all(|&mv| self.after(mv).is_check(color))
    }

    // --- Move generation ---

    /// Pseudo-legal moves of the piece on `sq`, if it belongs to the side to move.
    ///
    /// Pawn moves onto the last rank expand into Queen, Rook, Bishop and Knight
    /// promotions, in that order.
    pub fn pseudo_legal_moves_from(&self, sq: Square, list: &mut MoveList) {
        let Some(piece) = self.piece_at(sq) else {
            return;
        };
        if piece.color() != self.side_to_move {
            return;
        }

        let promotes = piece.kind() == PieceKind::Pawn;
        for to in self.destinations(sq, piece, true) {
            if promotes && to.rank() == piece.color().promotion_rank() {
                for kind in PieceKind::PROMOTIONS {
                    list.push(Move::new(sq, to, Some(kind)));
                }
            } else {
                list.push(Move::new(sq, to, None));
            }
        }
    }

    /// Pseudo-legal moves for the side to move: may leave the mover's king in check.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        for sq in self.side(self.side_to_move) {
            self.pseudo_legal_moves_from(sq, &mut list);
        }
        list
    }

    /// Pseudo-legal moves that do not leave the mover in check.
    pub fn legal_moves(&self) -> MoveList {
        let us = self.side_to_move;
        let mut list = self.pseudo_legal_moves();
        list.retain(|mv| !self.after(mv).is_check(us));
        list
    }

    // --- Layout queries ---

    /// Whether the side to move still has its whole army on its starting squares.
    pub fn is_starting_position(&self) -> bool {
        let start = Position::starting_position();
        Piece::ALL
            .into_iter()
            .filter(|piece| piece.color() == self.side_to_move)
            .all(|piece| self.pieces(piece) == start.pieces(piece))
    }

    /// Check structural sanity: one king per side and no pawns on the back ranks.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let count = self.pieces(Piece::new(PieceKind::King, color)).count();
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(PositionError::InvalidKingCount { color, count });
            }
        }

        let pawns = self.pieces(Piece::WHITE_PAWN) | self.pieces(Piece::BLACK_PAWN);
        if (pawns & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(PositionError::PawnsOnBackRank);
        }
        Ok(())
    }

    /// Eight rows of eight characters, rank 8 first; `.` marks an empty square.
    pub fn board_text(&self) -> String {
        let mut text = String::with_capacity(72);
        for rank in (0u8..8).rev() {
            for file in 0u8..8 {
                let piece = Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq));
                text.push(piece.map_or('.', Piece::fen_char));
            }
            text.push('\n');
        }
        text
    }

    /// Grid with rank and file labels, for logs and debugging.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

/// Labelled 8x8 rendering of a [`Position`].
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.0.board_text();
        for (row, rank) in rows.lines().zip((1..=8).rev()) {
            write!(f, "  {rank} ")?;
            for c in row.chars() {
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")?;
        write!(f, "  {} to move", match self.0.side_to_move() {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::castle_rights::CastleRights;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn mv(text: &str) -> Move {
        Move::from_uci(text).unwrap()
    }

    fn position(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    fn play(position: &mut Position, moves: &[&str]) {
        for text in moves {
            position.apply_move(mv(text));
        }
    }

    // ── Placement ──

    #[test]
    fn set_piece_replaces_occupant() {
        let mut pos = Position::empty();
        pos.set_piece(Square::E4, Some(Piece::WHITE_KNIGHT));
        pos.set_piece(Square::E4, Some(Piece::BLACK_QUEEN));
        assert_eq!(pos.piece_at(Square::E4), Some(Piece::BLACK_QUEEN));
        assert!(pos.pieces(Piece::WHITE_KNIGHT).is_empty());
    }

    #[test]
    fn set_piece_none_is_a_no_op() {
        let mut pos = Position::starting_position();
        pos.set_piece(Square::E1, None);
        assert_eq!(pos.piece_at(Square::E1), Some(Piece::WHITE_KING));
    }

    #[test]
    fn remove_piece_is_idempotent() {
        let mut pos = Position::starting_position();
        pos.remove_piece(Square::D1);
        pos.remove_piece(Square::D1);
        assert_eq!(pos.piece_at(Square::D1), None);
        assert_eq!(pos.occupied().count(), 31);
    }

    #[test]
    fn piece_at_index_bounds() {
        let pos = Position::starting_position();
        assert_eq!(pos.piece_at_index(4), Some(Piece::WHITE_KING));
        assert_eq!(pos.piece_at_index(60), Some(Piece::BLACK_KING));
        assert_eq!(pos.piece_at_index(64), None);
    }

    #[test]
    fn masks_never_overlap() {
        let pos = Position::starting_position();
        let total: u32 = Piece::ALL.iter().map(|&p| pos.pieces(p).count()).sum();
        assert_eq!(total, pos.occupied().count());
    }

    // ── Move generation ──

    #[test]
    fn twenty_quiet_moves_from_start() {
        let pos = Position::starting_position();
        let moves = pos.pseudo_legal_moves();
        assert_eq!(moves.len(), 20);
        let enemy = pos.enemy_squares(Color::White);
        assert!(moves.as_slice().iter().all(|m| !enemy.contains(m.to())));
    }

    #[test]
    fn promotions_expand_in_order() {
        let pos = position("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        let mut list = crate::movegen::MoveList::new();
        pos.pseudo_legal_moves_from(sq("e7"), &mut list);
        let texts: Vec<String> = list.as_slice().iter().map(|m| m.to_string()).collect();
        assert_eq!(texts, vec!["e7e8q", "e7e8r", "e7e8b", "e7e8n"]);
    }

    #[test]
    fn moves_only_for_side_to_move() {
        let pos = Position::starting_position();
        let mut list = crate::movegen::MoveList::new();
        pos.pseudo_legal_moves_from(sq("g8"), &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn controlled_squares_include_own_pieces_and_pawn_diagonals() {
        let pos = Position::starting_position();
        let controlled = pos.controlled_squares(Color::White);
        assert!(controlled.contains(Square::E1));
        assert!(controlled.contains(sq("f3")));
        assert!(controlled.contains(sq("d3")));
        assert!(!controlled.contains(Square::E4));
    }

    #[test]
    fn is_attacked_matches_controlled_squares() {
        let pos = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for color in Color::ALL {
            let controlled = pos.controlled_squares(color);
            let own = pos.side(color);
            for square in Square::all().filter(|s| !own.contains(*s)) {
                assert_eq!(
                    pos.is_attacked(square, color),
                    controlled.contains(square),
                    "disagreement on {square} for {color:?}"
                );
            }
        }
    }

    // ── Check, mate, stalemate ──

    #[test]
    fn back_rank_mate() {
        let pos = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(pos.is_check(Color::Black));
        assert!(pos.is_checkmate(Color::Black));
        assert!(!pos.is_stalemate(Color::Black));
    }

    #[test]
    fn king_only_stalemate() {
        let pos = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!pos.is_check(Color::Black));
        assert!(pos.is_stalemate(Color::Black));
        assert!(!pos.is_checkmate(Color::Black));
    }

    #[test]
    fn start_is_neither() {
        let pos = Position::starting_position();
        for color in Color::ALL {
            assert!(!pos.is_check(color));
            assert!(!pos.is_checkmate(color));
        }
        assert!(!pos.is_stalemate(Color::White));
    }

    #[test]
    fn legal_moves_drop_self_check() {
        // The e-file pin leaves the e2 rook only moves along the file.
        let pos = position("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let legal = pos.legal_moves();
        assert!(legal.as_slice().iter().filter(|m| m.from() == Square::E2).all(|m| m.to().file() == 4));
        assert!(legal.contains(mv("e2e8")));
    }

    // ── En passant ──

    #[test]
    fn en_passant_target_needs_adjacent_enemy_pawn() {
        let mut pos = Position::starting_position();
        play(&mut pos, &["e2e4"]);
        assert_eq!(pos.en_passant(), None);

        let mut pos = position("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        play(&mut pos, &["e2e4"]);
        assert_eq!(pos.en_passant(), Some(sq("e3")));
    }

    #[test]
    fn en_passant_capture_and_clear() {
        let mut pos = position("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        play(&mut pos, &["e2e4"]);
        assert!(pos.pseudo_legal_moves().contains(mv("d4e3")));

        let mut taken = pos;
        play(&mut taken, &["d4e3"]);
        assert_eq!(taken.piece_at(Square::E4), None);
        assert_eq!(taken.piece_at(sq("e3")), Some(Piece::BLACK_PAWN));
        assert_eq!(taken.en_passant(), None);

        let mut ignored = pos;
        play(&mut ignored, &["e8e7"]);
        assert_eq!(ignored.en_passant(), None);
    }

    // ── Castling ──

    #[test]
    fn castling_moves_the_rook() {
        let mut pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(pos.pseudo_legal_moves().contains(mv("e1g1")));
        play(&mut pos, &["e1g1"]);
        assert_eq!(pos.piece_at(Square::G1), Some(Piece::WHITE_KING));
        assert_eq!(pos.piece_at(Square::F1), Some(Piece::WHITE_ROOK));
        assert_eq!(pos.piece_at(Square::H1), None);
        assert_eq!(pos.castling(), CastleRights::BLACK_BOTH);

        play(&mut pos, &["e8c8"]);
        assert_eq!(pos.piece_at(Square::C8), Some(Piece::BLACK_KING));
        assert_eq!(pos.piece_at(Square::D8), Some(Piece::BLACK_ROOK));
        assert_eq!(pos.piece_at(Square::A8), None);
        assert!(pos.castling().is_empty());
    }

    #[test]
    fn rook_move_and_capture_revoke_rights() {
        let mut pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        play(&mut pos, &["a1a8"]);
        assert!(!pos.castling().contains(CastleRights::WHITE_QUEEN));
        assert!(!pos.castling().contains(CastleRights::BLACK_QUEEN));
        assert!(pos.castling().contains(CastleRights::WHITE_KING));
        assert!(pos.castling().contains(CastleRights::BLACK_KING));
    }

    #[test]
    fn king_step_revokes_both_rights() {
        let mut pos = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        play(&mut pos, &["e1f1", "e8d8"]);
        assert!(pos.castling().is_empty());
        assert!(!pos.pseudo_legal_moves().contains(mv("f1h1")));
    }

    // ── Promotion & turn ──

    #[test]
    fn promotion_replaces_pawn() {
        let mut pos = position("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        play(&mut pos, &["e7e8n"]);
        assert_eq!(pos.piece_at(Square::E8), Some(Piece::WHITE_KNIGHT));
        assert_eq!(pos.side_to_move(), Color::Black);
    }

    // ── Layout ──

    #[test]
    fn starting_position_recognised_per_side() {
        let mut pos = Position::starting_position();
        assert!(pos.is_starting_position());
        play(&mut pos, &["e2e4"]);
        assert!(pos.is_starting_position(), "black army is untouched");
        play(&mut pos, &["e7e5"]);
        assert!(!pos.is_starting_position());
        assert!(!Position::empty().is_starting_position());
    }

    #[test]
    fn board_text_layout() {
        let text = Position::starting_position().board_text();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "rnbqkbnr");
        assert_eq!(rows[1], "pppppppp");
        assert_eq!(rows[4], "........");
        assert_eq!(rows[7], "RNBQKBNR");
    }

    #[test]
    fn pretty_labels_ranks_and_files() {
        let mut pos = Position::starting_position();
        pos.apply_move(Move::new(Square::E2, Square::E4, None));
        let text = pos.pretty().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], "  8 r n b q k b n r ");
        assert_eq!(rows[4], "  4 . . . . P . . . ");
        assert_eq!(rows[8], "    a b c d e f g h");
        assert_eq!(rows[9], "  black to move");
    }
}
