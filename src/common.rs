//! Common types: shot outcomes and board errors.

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// The shot found open water.
    Miss,
    /// The shot damaged the vessel at this index in [`Board::vessels`](crate::Board::vessels).
    Hit { vessel: usize },
    /// The shot took the last cell of the vessel at this index.
    Sunk { vessel: usize },
}

impl ShotOutcome {
    /// Whether the shot struck a vessel. Such a shot earns the shooter
    /// another turn.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Index of the struck vessel, if any.
    pub fn vessel(&self) -> Option<usize> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit { vessel } | ShotOutcome::Sunk { vessel } => Some(vessel),
        }
    }
}

/// Recoverable errors returned by [`Board`](crate::Board) operations.
///
/// Shot errors are retried by the turn loop, placement errors by the fleet
/// generator; neither ever changes board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The target lies outside the board.
    #[error("shot at {0} is outside the board")]
    OutOfBounds(Coordinate),
    /// The target was fired upon before.
    #[error("cell {0} has already been targeted")]
    AlreadyTargeted(Coordinate),
    /// The vessel would leave the board, overlap or touch another vessel,
    /// or the board is already sealed for play.
    #[error("a vessel cannot be placed at {0}")]
    InvalidPlacement(Coordinate),
}

/// Random fleet generation gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no valid board could be generated after {restarts} restarts")]
pub struct LayoutError {
    pub restarts: usize,
}
