//! King moves and castling.

use crate::attacks::{between, piece_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castle::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Single steps onto squares the opponent does not attack, plus any castling
/// destinations.
pub(super) fn king_moves(board: &Board, sq: Square, piece: Piece) -> Bitboard {
    let color = piece.color();
    let steps = piece_attacks(board, sq, piece)
        - board.occupied_squares(color)
        - board.attacked_squares(color);
    CastleSide::ALL
        .into_iter()
        .filter(|&side| can_castle(board, sq, piece, side))
        .fold(steps, |acc, side| acc.with(side.king_target(color)))
}

/// Whether the king `piece` on `sq` may castle toward `side`.
///
/// The king must be unmoved, on its home square and not in check; the rook
/// file must hold a rook; and every square the king crosses, destination
/// included, must be empty and unattacked. Squares the rook crosses beyond
/// the king's path are not inspected.
pub(crate) fn can_castle(board: &Board, sq: Square, piece: Piece, side: CastleSide) -> bool {
    let color = piece.color();
    if piece.kind() != PieceKind::King
        || piece.has_moved()
        || sq != CastleSide::king_home(color)
    {
        return false;
    }

    let (rook_sq, _) = side.rook_squares(color);
    if board.piece_at(rook_sq).map(Piece::kind) != Some(PieceKind::Rook) {
        return false;
    }

    let attacked = board.attacked_squares(color);
    if attacked.contains(sq) {
        return false;
    }

    let target = side.king_target(color);
    let path = between(sq, target).with(target);
    (path & board.occupied()).is_empty() && (path & attacked).is_empty()
}
