//! Move execution.

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle::CastleSide;
use crate::error::{BoardError, IllegalMove};
use crate::movegen;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Play `piece`, standing on `from`, to `to`.
    ///
    /// Legality is decided before anything is touched; once it passes, the
    /// capture, castling rook, relocation and promotion all happen here with
    /// no further failure point.
    pub(crate) fn make_move(
        &mut self,
        from: Square,
        piece: Piece,
        to: Square,
    ) -> Result<(), BoardError> {
        if !movegen::legal_moves(self, from, piece).contains(to) {
            let reason = self.refusal(from, piece, to);
            trace!(from = %from, to = %to, %reason, "move refused");
            return Err(BoardError::MoveNotAllowed { from, to, reason });
        }

        let color = piece.color();
        if let Some(target) = self.piece_at(to).filter(|target| target.color() != color) {
            self.take(to);
            self.record_capture(color, target);
            debug!(square = %to, captured = %target, "captured piece");
        }

        if piece.kind() == PieceKind::King {
            self.castle_rook(piece, from, to);
        }

        let mut moved = piece;
        moved.mark_moved();
        self.take(from);
        self.put(to, moved);
        trace!(from = %from, to = %to, piece = %moved, "moved piece");

        if moved.kind() == PieceKind::Pawn && to.rank() == color.promotion_rank() {
            let mut queen = Piece::new(PieceKind::Queen, color);
            queen.mark_moved();
            self.take(to);
            self.put(to, queen);
            debug!(square = %to, "promoted pawn to queen");
        }

        Ok(())
    }

    /// When a king goes from its home square to a castling square, bring the
    /// rook across to the square the king passed over.
    fn castle_rook(&mut self, king: Piece, from: Square, to: Square) {
        let Some(side) = CastleSide::from_king_move(king.color(), from, to) else {
            return;
        };
        let (rook_from, rook_to) = side.rook_squares(king.color());
        if let Some(mut rook) = self.take(rook_from) {
            rook.mark_moved();
            self.put(rook_to, rook);
            debug!(?side, from = %rook_from, to = %rook_to, "castled rook");
        }
    }

    /// Classify why `to` is not a legal destination for `piece` on `from`.
    fn refusal(&self, from: Square, piece: Piece, to: Square) -> IllegalMove {
        if from == to {
            return IllegalMove::SameSquare;
        }
        if self.piece_at(to).is_some_and(|occupant| occupant.color() == piece.color()) {
            return IllegalMove::OwnPiece;
        }
        if piece.kind() == PieceKind::King
            && movegen::attacks(self, from, piece).contains(to)
            && self.attacked_squares(piece.color()).contains(to)
        {
            return IllegalMove::IntoCheck;
        }
        IllegalMove::Unreachable
    }
}
