//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AutomatedParticipant, Board, BoardError, Coordinate, HumanParticipant, Match,
    MatchStatus, Orientation, Participant, ShotOutcome, Vessel, BOARD_SIZE, FLEET,
};

#[cfg(feature = "std")]
pub use crate::console::{Console, ConsoleOptions};
