//! Attack vectors: directional rays with blocking, and knight jumps.

mod tables;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::tables::KNIGHT_ATTACKS;

/// Trace from `from` along `direction` for at most `range` squares.
///
/// Empty squares are included and tracing continues. The first occupied
/// square stops the trace; it is included only when `captures` is set and it
/// holds a piece of the opposite color to `color`.
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    direction: Direction,
    range: u8,
    captures: bool,
) -> Bitboard {
    let mut squares = Bitboard::EMPTY;
    let mut current = from;
    for _ in 0..range {
        let Some(next) = current.step(direction) else {
            break;
        };
        match board.piece_at(next) {
            None => squares = squares.with(next),
            Some(occupant) => {
                if captures && occupant.color() != color {
                    squares = squares.with(next);
                }
                break;
            }
        }
        current = next;
    }
    squares
}

/// Return the squares a knight on `sq` attacks, whatever stands on them.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares `piece`, standing on `sq`, attacks.
pub fn piece_attacks(board: &Board, sq: Square, piece: Piece) -> Bitboard {
    let kind = piece.kind();
    if kind == PieceKind::Knight {
        return knight_attacks(sq);
    }
    kind.directions(piece.color())
        .iter()
        .fold(Bitboard::EMPTY, |acc, &direction| {
            acc | trace_ray(board, sq, piece.color(), direction, kind.range(), true)
        })
}

/// Return squares strictly between `from` and `to`.
///
/// Empty unless the two squares share a rank, file or diagonal.
pub fn between(from: Square, to: Square) -> Bitboard {
    let Some(direction) = Direction::towards(from, to) else {
        return Bitboard::EMPTY;
    };
    let mut squares = Bitboard::EMPTY;
    let mut current = from;
    while let Some(next) = current.step(direction) {
        if next == to {
            break;
        }
        squares = squares.with(next);
        current = next;
    }
    squares
}
