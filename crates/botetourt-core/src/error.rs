//! Rule violations reported by board operations.

use crate::square::Square;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// Origin and destination are the same square.
    #[error("origin and destination are the same square")]
    SameSquare,
    /// The destination holds a piece of the mover's own color.
    #[error("destination is occupied by a piece of the same color")]
    OwnPiece,
    /// A king tried to step onto a square the opponent attacks.
    #[error("king would move into check")]
    IntoCheck,
    /// The piece cannot reach the destination from where it stands.
    #[error("destination is out of reach")]
    Unreachable,
}

/// Errors from board mutations and validated lookups.
///
/// None of these are transient: the board is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// File or rank outside the 8x8 board.
    #[error("not a valid square: {square}")]
    InvalidSquare {
        /// The rejected input, as given.
        square: String,
    },
    /// The operation needs a piece on a square that is empty.
    #[error("no piece on {square}")]
    NoPieceThere {
        /// The empty square.
        square: Square,
    },
    /// The destination is not among the mover's legal moves.
    #[error("move {from}-{to} not allowed: {reason}")]
    MoveNotAllowed {
        /// Square the piece stands on.
        from: Square,
        /// Requested destination.
        to: Square,
        /// Why the destination was refused.
        reason: IllegalMove,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, IllegalMove};
    use crate::square::Square;

    #[test]
    fn invalid_square_display() {
        let err = BoardError::InvalidSquare { square: "i2".to_owned() };
        assert_eq!(format!("{err}"), "not a valid square: i2");
    }

    #[test]
    fn no_piece_display() {
        let err = BoardError::NoPieceThere { square: Square::E4 };
        assert_eq!(format!("{err}"), "no piece on e4");
    }

    #[test]
    fn move_not_allowed_display() {
        let err = BoardError::MoveNotAllowed {
            from: Square::E1,
            to: Square::E2,
            reason: IllegalMove::IntoCheck,
        };
        assert_eq!(format!("{err}"), "move e1-e2 not allowed: king would move into check");
    }
}
