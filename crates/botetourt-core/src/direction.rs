//! The eight compass directions pieces attack along.

use crate::color::Color;
use crate::square::Square;

/// A compass direction, north being towards rank 8 and east towards file h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Rank and file directions.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Return the `(file, rank)` step of this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// The direction a pawn of `color` pushes in.
    #[inline]
    pub const fn forward(color: Color) -> Direction {
        match color {
            Color::White => Direction::North,
            Color::Black => Direction::South,
        }
    }

    /// Return the direction leading from `from` to `to`, if the two squares
    /// share a rank, file or diagonal.
    pub fn towards(from: Square, to: Square) -> Option<Direction> {
        let file_delta = to.file().index() as i8 - from.file().index() as i8;
        let rank_delta = to.rank().index() as i8 - from.rank().index() as i8;
        if from == to
            || (file_delta != 0 && rank_delta != 0 && file_delta.abs() != rank_delta.abs())
        {
            return None;
        }
        let step = (file_delta.signum(), rank_delta.signum());
        Direction::ALL.into_iter().find(|d| d.delta() == step)
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn deltas_are_unit_steps() {
        for direction in Direction::ALL {
            let (df, dr) = direction.delta();
            assert!(df.abs() <= 1 && dr.abs() <= 1 && (df, dr) != (0, 0));
        }
    }

    #[test]
    fn subsets_partition_all() {
        for direction in Direction::ALL {
            let orthogonal = Direction::ORTHOGONAL.contains(&direction);
            let diagonal = Direction::DIAGONAL.contains(&direction);
            assert!(orthogonal ^ diagonal, "{direction:?}");
        }
    }

    #[test]
    fn forward_depends_on_color() {
        assert_eq!(Direction::forward(Color::White), Direction::North);
        assert_eq!(Direction::forward(Color::Black), Direction::South);
    }

    #[test]
    fn towards_aligned_squares() {
        assert_eq!(Direction::towards(Square::A1, Square::H8), Some(Direction::NorthEast));
        assert_eq!(Direction::towards(Square::E4, Square::E1), Some(Direction::South));
        assert_eq!(Direction::towards(Square::H1, Square::A1), Some(Direction::West));
        assert_eq!(Direction::towards(Square::C2, Square::A1), None);
        assert_eq!(Direction::towards(Square::D4, Square::D4), None);
    }
}
