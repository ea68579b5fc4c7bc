//! Random fleet layout.
//!
//! Vessels are dropped at random origins and orientations until each one
//! fits. There is no backtracking: a board that burns through its attempt
//! budget is thrown away and generation starts again from an empty board.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::LayoutError;
use crate::config::{MAX_LAYOUT_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::vessel::{Orientation, Vessel};

/// A vessel of `length` at a random origin on a `size` board with a random
/// orientation. It may not fit.
///
/// Panics if `size` is not positive.
pub fn random_vessel<R: Rng>(rng: &mut R, size: i32, length: usize) -> Vessel {
    let origin = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(origin, length, orientation)
}

/// Try to lay out `lengths` on a fresh board, sharing
/// [`MAX_PLACEMENT_ATTEMPTS`] between all vessels. Returns `None` when the
/// budget runs out.
pub fn try_random_board<R: Rng>(rng: &mut R, size: i32, lengths: &[usize]) -> Option<Board> {
    if size <= 0 {
        return None;
    }
    let mut board = Board::new(size);
    let mut attempts = 0;
    for &length in lengths {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return None;
            }
            if board.place(random_vessel(rng, size, length)).is_ok() {
                break;
            }
        }
    }
    Some(board)
}

/// Lay out `lengths` on a `size` board, restarting from scratch whenever an
/// attempt is abandoned.
pub fn random_board<R: Rng>(
    rng: &mut R,
    size: i32,
    lengths: &[usize],
) -> Result<Board, LayoutError> {
    for restart in 0..=MAX_LAYOUT_RESTARTS {
        if let Some(board) = try_random_board(rng, size, lengths) {
            if restart > 0 {
                debug!("fleet laid out after {} restarts", restart);
            }
            return Ok(board);
        }
        debug!("abandoned fleet layout attempt {}", restart + 1);
    }
    Err(LayoutError {
        restarts: MAX_LAYOUT_RESTARTS,
    })
}
