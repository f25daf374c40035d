//! Core chess types: squares, pieces, the position model and move generation.

mod bitboard;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
pub mod movegen;
mod piece;
mod piece_kind;
mod position;
mod square;
mod zobrist;

pub use bitboard::Bitboard;
pub use castle_rights::{CastleRights, CastleSide, king_home};
pub use chess_move::Move;
pub use color::Color;
pub use error::{FenError, PositionError};
pub use fen::STARTING_FEN;
pub use movegen::MoveList;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition};
pub use square::Square;
pub use zobrist::ZobristKeys;
