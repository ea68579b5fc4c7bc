use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use super::Participant;
use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
};

/// Opponent that fires at uniformly random cells and remembers nothing.
///
/// Repeats are possible; the board rejects them and the turn loop asks
/// again.
pub struct AutomatedParticipant {
    name: &'static str,
}

impl AutomatedParticipant {
    pub fn new() -> Self {
        Self::named("computer")
    }

    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AutomatedParticipant {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for AutomatedParticipant {
    fn name(&self) -> &str {
        self.name
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        let size = opponent.size();
        if size <= 0 {
            anyhow::bail!("cannot target an empty board");
        }
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }

    fn handle_rejected_shot(&mut self, target: Coordinate, error: &BoardError) {
        debug!("{} retargeting after {}: {}", self.name, target, error);
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome, _opponent: &Board) {
        debug!("{} fired at {} -> {:?}", self.name, target, outcome);
    }
}
