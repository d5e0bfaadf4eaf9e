//! Legal move sets, check and checkmate, per piece.
//!
//! Every function takes the board explicitly and reads it without caching:
//! any mutation invalidates earlier results.

mod check;
mod king;
mod pawns;

use crate::attacks::piece_attacks;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(crate) use self::check::{in_check, is_checkmated};
pub(crate) use self::king::can_castle;

/// Squares `piece` on `sq` attacks.
#[inline]
pub(crate) fn attacks(board: &Board, sq: Square, piece: Piece) -> Bitboard {
    piece_attacks(board, sq, piece)
}

/// Squares `piece` on `sq` may move to.
pub(crate) fn legal_moves(board: &Board, sq: Square, piece: Piece) -> Bitboard {
    match piece.kind() {
        PieceKind::Pawn => pawns::pawn_moves(board, sq, piece),
        PieceKind::King => king::king_moves(board, sq, piece),
        _ => attacks(board, sq, piece) - board.occupied_squares(piece.color()),
    }
}
