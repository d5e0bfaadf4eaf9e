//! Pieces: the value stored in a board cell, and a view of one in place.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castle::CastleSide;
use crate::color::Color;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A colored piece together with its "has moved" flag.
///
/// A piece does not know its square: the board cell holding it does. Pieces
/// in a captured list are detached values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    moved: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color, moved: false }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` once the piece has made a move.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.moved
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.moved = true;
    }

    /// Return the glyph: uppercase for White, lowercase for Black.
    #[inline]
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base,
            Color::Black => base.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind.symbol())?;
        if self.moved {
            write!(f, "*")?;
        }
        Ok(())
    }
}

/// A piece standing on a board, borrowed from it.
///
/// Every rule query resolves through the borrowed board, so a view is only
/// valid for the board state it was taken from.
#[derive(Clone, Copy)]
pub struct PieceRef<'a> {
    board: &'a Board,
    square: Square,
    piece: Piece,
}

impl<'a> PieceRef<'a> {
    pub(crate) fn new(board: &'a Board, square: Square, piece: Piece) -> PieceRef<'a> {
        PieceRef { board, square, piece }
    }

    /// The square this piece stands on.
    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// The piece value in the cell.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.piece.kind()
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.piece.has_moved()
    }

    /// Squares this piece attacks, truncated at the first occupant along each direction.
    pub fn attacks(&self) -> Bitboard {
        movegen::attacks(self.board, self.square, self.piece)
    }

    /// Squares this piece may move to.
    pub fn legal_moves(&self) -> Bitboard {
        movegen::legal_moves(self.board, self.square, self.piece)
    }

    /// Whether this piece is a king standing on a square the opponent attacks.
    pub fn in_check(&self) -> bool {
        self.kind() == PieceKind::King && movegen::in_check(self.board, self.square, self.color())
    }

    /// Whether this piece is a king that may castle toward `side` right now.
    pub fn can_castle(&self, side: CastleSide) -> bool {
        movegen::can_castle(self.board, self.square, self.piece, side)
    }

    /// Whether this piece is a checkmated king.
    pub fn is_checkmated(&self) -> bool {
        self.kind() == PieceKind::King
            && movegen::is_checkmated(self.board, self.square, self.piece)
    }
}

impl fmt::Debug for PieceRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.piece, self.square)
    }
}
