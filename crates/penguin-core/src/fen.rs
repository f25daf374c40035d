//! FEN import and export for [`Position`].
//!
//! The position model keeps no move clocks, so the halfmove clock and fullmove
//! number are validated on input but dropped, and written back as `0 1`.

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut position = Position::empty();
        parse_placement(fields[0], &mut position)?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        position.set_side_to_move(side_to_move);
        position.set_castling(CastleRights::from_fen(fields[2])?);

        let en_passant = match fields[3] {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: text.to_string(),
                }
            })?),
        };
        position.set_en_passant(en_passant);

        for (field, name) in fields.iter().skip(4).zip(["halfmove clock", "fullmove number"]) {
            field.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
                field: name,
                found: field.to_string(),
            })?;
        }

        position.validate()?;
        Ok(position)
    }
}

fn parse_placement(placement: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;

        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                let next = file as usize + skip as usize;
                if next > 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: next,
                    });
                }
                file = next as u8;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file as usize + 1,
            })?;
            position.set_piece(sq, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file as usize,
            });
        }
    }
    Ok(())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.board_text().lines().enumerate() {
            if row_index > 0 {
                write!(f, "/")?;
            }
            let mut empty_run = 0;
            for c in row.chars() {
                if c == '.' {
                    empty_run += 1;
                    continue;
                }
                if empty_run > 0 {
                    write!(f, "{empty_run}")?;
                    empty_run = 0;
                }
                write!(f, "{c}")?;
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " 0 1")
    }
}
