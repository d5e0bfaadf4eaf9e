//! Pawn moves: diagonal captures plus forward pushes.

use crate::attacks::{piece_attacks, trace_ray};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::square::Square;

/// Forward pushes: one square, or two before the pawn's first move.
/// Any occupant blocks, and the blocked square is never a destination.
pub(super) fn pawn_pushes(board: &Board, sq: Square, piece: Piece) -> Bitboard {
    let color = piece.color();
    let range = if piece.has_moved() { 1 } else { 2 };
    trace_ray(board, sq, color, Direction::forward(color), range, false)
}

/// Pushes, plus diagonal attacks that land on an opposing piece.
pub(super) fn pawn_moves(board: &Board, sq: Square, piece: Piece) -> Bitboard {
    let captures = piece_attacks(board, sq, piece) & board.occupied_squares(piece.color().flip());
    captures | pawn_pushes(board, sq, piece)
}
