//! Grid positions.

use core::fmt;

/// A cell position on a board. `x` is the column, `y` the row.
///
/// Coordinates are signed so that neighbourhood arithmetic and off-board
/// input can be represented; whether a coordinate lies on a particular board
/// is decided by [`Board::is_within_bounds`](crate::Board::is_within_bounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the 3×3 block around (and including) a cell.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The 3×3 block centred on this coordinate, the coordinate itself
    /// included. Cells may lie off the board.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURHOOD
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Whether `other` touches this coordinate horizontally, vertically or
    /// diagonally. A coordinate is not adjacent to itself.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
