//! Participant trait and implementations
//!
//! A participant chooses where to fire and is told what happened:
//! - AutomatedParticipant: fires at uniformly random cells
//! - HumanParticipant: asks a [`Frontend`] for each target

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
};

/// Interface implemented by both sides of a match.
pub trait Participant {
    /// Short label used in logs and summaries.
    fn name(&self) -> &str;

    /// Choose the next cell to fire at on `opponent`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> anyhow::Result<Coordinate>;

    /// The board refused a target; another will be requested.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Inform the participant of the result of its own shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome, _opponent: &Board) {}

    /// The opponent picked a target on this participant's board that the
    /// board refused.
    fn handle_opponent_rejected_shot(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Inform the participant of a shot fired at its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome, _own: &Board) {}

    /// The match is over.
    fn handle_match_end(&mut self, _won: bool, _own: &Board, _opponent: &Board) {}
}

pub mod automated;
pub use automated::AutomatedParticipant;

pub mod human;
pub use human::{Frontend, HumanParticipant};
