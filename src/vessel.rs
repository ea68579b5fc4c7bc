//! Vessel definitions: a straight line of cells with hit tracking.

use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cells extend along increasing `x`.
    Horizontal,
    /// Cells extend along increasing `y`.
    Vertical,
}

impl Orientation {
    /// Unit step from one cell to the next.
    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A vessel anchored at `origin`, `length` cells long.
///
/// The board owning the vessel is the only thing that records hits on it;
/// from the outside a vessel can only be inspected.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Build an undamaged vessel. Whether it fits anywhere is checked by
    /// [`Board::place`](crate::Board::place).
    pub const fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Ordered cells covered by the vessel, starting at the origin. Lengths
    /// past `i32::MAX` are clamped.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dx, dy) = self.orientation.step();
        let origin = self.origin;
        let length = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..length).map(move |i| origin.offset(dx * i, dy * i))
    }

    /// Whether `target` lands on one of the vessel's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Record a hit. Returns `true` if the hit sank the vessel.
    ///
    /// A sunk vessel is left untouched.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells the vessel covers.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Undamaged cells left.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ origin: {}, length: {}, orientation: {:?}, remaining: {} }}",
            self.origin, self.length, self.orientation, self.remaining_hits,
        )
    }
}
