//! Castling geometry.

use crate::color::Color;
use crate::file::File;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king-side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File the king starts castling from.
    pub const KING_FILE: File = File::FileE;

    /// File the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileG,
            CastleSide::QueenSide => File::FileC,
        }
    }

    /// File the rook starts on.
    #[inline]
    pub const fn rook_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileH,
            CastleSide::QueenSide => File::FileA,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_target_file(self) -> File {
        match self {
            CastleSide::KingSide => File::FileF,
            CastleSide::QueenSide => File::FileD,
        }
    }

    /// The king's home square for `color`.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        Square::new(color.back_rank(), Self::KING_FILE)
    }

    /// The king's destination square when `color` castles on this side.
    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        Square::new(color.back_rank(), self.king_target_file())
    }

    /// The rook's `(origin, destination)` when `color` castles on this side.
    #[inline]
    pub const fn rook_squares(self, color: Color) -> (Square, Square) {
        let rank = color.back_rank();
        (
            Square::new(rank, self.rook_file()),
            Square::new(rank, self.rook_target_file()),
        )
    }

    /// Recognize a king move from its home square to a castling destination.
    pub fn from_king_move(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        if from != Self::king_home(color) {
            return None;
        }
        CastleSide::ALL
            .into_iter()
            .find(|side| side.king_target(color) == to)
    }
}

#[cfg(test)]
mod tests {
    use super::CastleSide;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn white_squares() {
        assert_eq!(CastleSide::king_home(Color::White), Square::E1);
        assert_eq!(CastleSide::KingSide.king_target(Color::White), Square::G1);
        assert_eq!(CastleSide::QueenSide.king_target(Color::White), Square::C1);
        assert_eq!(CastleSide::KingSide.rook_squares(Color::White), (Square::H1, Square::F1));
        assert_eq!(CastleSide::QueenSide.rook_squares(Color::White), (Square::A1, Square::D1));
    }

    #[test]
    fn black_squares() {
        assert_eq!(CastleSide::king_home(Color::Black), Square::E8);
        assert_eq!(CastleSide::KingSide.rook_squares(Color::Black), (Square::H8, Square::F8));
        assert_eq!(CastleSide::QueenSide.king_target(Color::Black), Square::C8);
    }

    #[test]
    fn recognizes_castling_moves() {
        assert_eq!(
            CastleSide::from_king_move(Color::White, Square::E1, Square::G1),
            Some(CastleSide::KingSide)
        );
        assert_eq!(
            CastleSide::from_king_move(Color::Black, Square::E8, Square::C8),
            Some(CastleSide::QueenSide)
        );
        assert_eq!(CastleSide::from_king_move(Color::White, Square::E1, Square::F1), None);
        assert_eq!(CastleSide::from_king_move(Color::White, Square::E8, Square::G8), None);
    }
}
