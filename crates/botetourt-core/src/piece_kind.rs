//! Piece kinds and their static movement descriptors.

use std::fmt;

use crate::color::Color;
use crate::direction::Direction;

const WHITE_PAWN_DIRECTIONS: [Direction; 2] = [Direction::NorthEast, Direction::NorthWest];
const BLACK_PAWN_DIRECTIONS: [Direction; 2] = [Direction::SouthEast, Direction::SouthWest];

/// The kind of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Range of a sliding piece: far enough to cross the whole board.
    pub const UNBOUNDED: u8 = 7;

    /// Return the glyph for this kind (uppercase).
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a glyph (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_symbol(c: char) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.symbol() == c.to_ascii_uppercase())
    }

    /// Maximum number of squares this kind travels along one direction.
    ///
    /// Knights report 1: a single jump from their offset table.
    #[inline]
    pub const fn range(self) -> u8 {
        match self {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => 1,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => Self::UNBOUNDED,
        }
    }

    /// Directions this kind attacks along. Pawns only attack diagonally
    /// forward; knights have no directions and jump instead.
    pub const fn directions(self, color: Color) -> &'static [Direction] {
        match self {
            PieceKind::Pawn => match color {
                Color::White => &WHITE_PAWN_DIRECTIONS,
                Color::Black => &BLACK_PAWN_DIRECTIONS,
            },
            PieceKind::Knight => &[],
            PieceKind::Bishop => &Direction::DIAGONAL,
            PieceKind::Rook => &Direction::ORTHOGONAL,
            PieceKind::Queen | PieceKind::King => &Direction::ALL,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
