//! Chess rules core: board, per-piece attack and move generation, check,
//! castling and checkmate detection.

pub mod attacks;
mod bitboard;
mod board;
mod castle;
mod color;
mod direction;
mod error;
mod file;
mod make_move;
mod movegen;
mod piece;
mod piece_kind;
mod rank;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use castle::CastleSide;
pub use color::Color;
pub use direction::Direction;
pub use error::{BoardError, IllegalMove};
pub use file::File;
pub use piece::{Piece, PieceRef};
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::{IntoSquare, Square};
