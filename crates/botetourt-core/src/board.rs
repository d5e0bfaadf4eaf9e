//! The board: an 8x8 grid of optional pieces plus each side's captures.

use std::fmt;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::file::File;
use crate::piece::{Piece, PieceRef};
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::{IntoSquare, Square};

/// Back-file layout used by [`Board::setup_pieces`], from rank 1 to rank 8.
const BACK_FILE: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board state. The board owns every piece standing on it; a piece's square
/// is the index of the cell holding it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    /// Pieces each side has captured, in capture order, indexed by [`Color::index()`].
    captured: [Vec<Piece>; Color::COUNT],
}

impl Board {
    /// Return an empty board.
    pub fn new() -> Board {
        Board {
            squares: [None; Square::COUNT],
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Return a board holding the starting layout of [`Board::setup_pieces`].
    pub fn with_setup() -> Board {
        let mut board = Board::new();
        board.setup_pieces();
        board
    }

    /// Remove every piece and forget all captures.
    pub fn clear(&mut self) {
        self.squares = [None; Square::COUNT];
        for list in &mut self.captured {
            list.clear();
        }
    }

    /// Place the starting layout: White pawns fill file b and Black pawns
    /// file g, while each side's officers stand on file a (White) or h
    /// (Black), rooks on ranks 1 and 8, king on rank 5.
    ///
    /// Occupied squares are overwritten.
    pub fn setup_pieces(&mut self) {
        for rank in Rank::ALL {
            self.put(Square::new(rank, File::FileB), Piece::new(PieceKind::Pawn, Color::White));
            self.put(Square::new(rank, File::FileG), Piece::new(PieceKind::Pawn, Color::Black));
        }
        for (file, color) in [(File::FileA, Color::White), (File::FileH, Color::Black)] {
            for (rank, kind) in Rank::ALL.into_iter().zip(BACK_FILE) {
                self.put(Square::new(rank, file), Piece::new(kind, color));
            }
        }
        debug!("placed starting layout");
    }

    /// Create a piece on `square`, replacing whatever stood there.
    pub fn set_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: impl IntoSquare,
    ) -> Result<Piece, BoardError> {
        let square = square.into_square()?;
        let piece = Piece::new(kind, color);
        self.put(square, piece);
        debug!(square = %square, piece = %piece, "set piece");
        Ok(piece)
    }

    /// Take the piece off `square` and return it.
    pub fn remove_piece(&mut self, square: impl IntoSquare) -> Result<Piece, BoardError> {
        let square = square.into_square()?;
        let piece = self.take(square).ok_or(BoardError::NoPieceThere { square })?;
        debug!(square = %square, piece = %piece, "removed piece");
        Ok(piece)
    }

    /// Move the piece on `from` to `to`, capturing, castling and promoting as
    /// the rules require. On error the board is unchanged.
    pub fn move_piece(
        &mut self,
        from: impl IntoSquare,
        to: impl IntoSquare,
    ) -> Result<(), BoardError> {
        let from = from.into_square()?;
        let to = to.into_square()?;
        let piece = self
            .piece_at(from)
            .ok_or(BoardError::NoPieceThere { square: from })?;
        self.make_move(from, piece, to)
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return a view of the piece on `sq`, if any.
    pub fn piece(&self, sq: Square) -> Option<PieceRef<'_>> {
        self.piece_at(sq).map(|piece| PieceRef::new(self, sq, piece))
    }

    /// Validate `square` and return a view of its occupant, if any.
    pub fn lookup(&self, square: impl IntoSquare) -> Result<Option<PieceRef<'_>>, BoardError> {
        Ok(self.piece(square.into_square()?))
    }

    /// Iterate over the pieces of `color`, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = PieceRef<'_>> + '_ {
        Square::all()
            .filter_map(move |sq| self.piece(sq))
            .filter(move |piece| piece.color() == color)
    }

    /// Return the square of the first king of `color`, if there is one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(|king| king.square())
    }

    /// Return all squares holding a piece of `color`.
    pub fn occupied_squares(&self, color: Color) -> Bitboard {
        self.pieces(color).map(|piece| piece.square()).collect()
    }

    /// Return all occupied squares.
    pub fn occupied(&self) -> Bitboard {
        Square::all().filter(|&sq| self.piece_at(sq).is_some()).collect()
    }

    /// Return every square attacked by the opponents of `color`.
    ///
    /// Computed afresh on every call.
    pub fn attacked_squares(&self, color: Color) -> Bitboard {
        self.pieces(color.flip())
            .fold(Bitboard::EMPTY, |acc, piece| acc | piece.attacks())
    }

    /// Return the pieces `color` has captured, oldest first.
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Return the occupants row by row, rank 8 first, each row from file a to h.
    pub fn grid(&self) -> [[Option<Piece>; File::COUNT]; Rank::COUNT] {
        let mut rows = [[None; File::COUNT]; Rank::COUNT];
        for (row, rank) in rows.iter_mut().zip(Rank::ALL.into_iter().rev()) {
            for (cell, file) in row.iter_mut().zip(File::ALL) {
                *cell = self.piece_at(Square::new(rank, file));
            }
        }
        rows
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    pub(crate) fn record_capture(&mut self, by: Color, piece: Piece) {
        self.captured[by.index()].push(piece);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self.pretty())?;
        write!(f, ")")
    }
}

/// Wrapper for printing a board as a grid of `[X]` cells, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.grid().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "[{piece}]")?,
                    None => write!(f, "[ ]")?,
                }
            }
        }
        Ok(())
    }
}
