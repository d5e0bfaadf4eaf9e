//! Check and checkmate detection.

use crate::attacks::between;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::king::king_moves;

/// Whether a king of `color` on `sq` stands on a square the opponent attacks.
pub(crate) fn in_check(board: &Board, sq: Square, color: Color) -> bool {
    board.attacked_squares(color).contains(sq)
}

/// Squares on which a piece would block a check against the king on `king_sq`.
///
/// Knights jump, so their checks contribute nothing.
fn interposition_squares(board: &Board, king_sq: Square, color: Color) -> Bitboard {
    board
        .pieces(color.flip())
        .filter(|attacker| attacker.kind() != PieceKind::Knight)
        .filter(|attacker| attacker.attacks().contains(king_sq))
        .fold(Bitboard::EMPTY, |acc, attacker| {
            acc | between(attacker.square(), king_sq)
        })
}

/// Whether the king `piece` on `sq` is checkmated: in check, with no legal
/// move, and no friendly piece able to step between it and a checker.
pub(crate) fn is_checkmated(board: &Board, sq: Square, piece: Piece) -> bool {
    let color = piece.color();
    if !in_check(board, sq, color) || king_moves(board, sq, piece).is_nonempty() {
        return false;
    }

    let blocks = interposition_squares(board, sq, color);
    if blocks.is_empty() {
        return true;
    }
    !board
        .pieces(color)
        .filter(|defender| defender.kind() != PieceKind::King)
        .any(|defender| (defender.legal_moves() & blocks).is_nonempty())
}
