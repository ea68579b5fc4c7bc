use rand::rngs::SmallRng;

use super::Participant;
use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
};

/// Input and presentation surface for a human player.
///
/// `read_target` must only return coordinates it has already parsed and
/// validated; malformed input is the front end's business and never reaches
/// the board.
pub trait Frontend {
    /// Block until the player names a target on `opponent`.
    fn read_target(&mut self, opponent: &Board) -> anyhow::Result<Coordinate>;

    fn shot_rejected(&mut self, _target: Coordinate, _error: &BoardError) {}

    fn shot_resolved(&mut self, _target: Coordinate, _outcome: ShotOutcome, _opponent: &Board) {}

    fn incoming_rejected(&mut self, _target: Coordinate, _error: &BoardError) {}

    fn incoming_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome, _own: &Board) {}

    fn match_over(&mut self, _won: bool, _own: &Board, _opponent: &Board) {}
}

/// Participant driven by a person through a [`Frontend`].
pub struct HumanParticipant<F> {
    frontend: F,
}

impl<F: Frontend> HumanParticipant<F> {
    pub fn new(frontend: F) -> Self {
        Self { frontend }
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }
}

impl<F: Frontend> Participant for HumanParticipant<F> {
    fn name(&self) -> &str {
        "player"
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        self.frontend.read_target(opponent)
    }

    fn handle_rejected_shot(&mut self, target: Coordinate, error: &BoardError) {
        self.frontend.shot_rejected(target, error);
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome, opponent: &Board) {
        self.frontend.shot_resolved(target, outcome, opponent);
    }

    fn handle_opponent_rejected_shot(&mut self, target: Coordinate, error: &BoardError) {
        self.frontend.incoming_rejected(target, error);
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome, own: &Board) {
        self.frontend.incoming_shot(target, outcome, own);
    }

    fn handle_match_end(&mut self, won: bool, own: &Board, opponent: &Board) {
        self.frontend.match_over(won, own, opponent);
    }
}
