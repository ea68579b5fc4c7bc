use alloc::boxed::Box;
use alloc::string::String;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::ShotOutcome,
    config::MAX_TURN_ATTEMPTS,
    coordinate::Coordinate,
    participant::Participant,
};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    /// One fleet is gone; `winner` is the index of the side still afloat.
    Finished { winner: usize },
}

/// What happened during one call to [`Match::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub shooter: usize,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets the board refused before this one was accepted.
    pub rejected: usize,
}

/// Final tally of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: usize,
    pub winner_name: String,
    /// Accepted shots fired by each side.
    pub shots: [usize; 2],
    /// Vessels sunk on each side's board.
    pub sunk: [usize; 2],
    /// The turn that decided the match, if any turn was played.
    pub final_turn: Option<TurnReport>,
}

struct Side {
    board: Board,
    participant: Box<dyn Participant>,
}

/// A match between two sides, each with its own board and participant.
///
/// Side 0 moves first. A side keeps the turn for as long as it keeps
/// hitting and hands it over on a miss.
pub struct Match {
    sides: [Side; 2],
    active: usize,
    shots: [usize; 2],
    last_turn: Option<TurnReport>,
}

impl Match {
    /// Pit `participant_a`, defending `board_a`, against `participant_b`,
    /// defending `board_b`. Both boards are sealed against further placement.
    pub fn new(
        mut board_a: Board,
        participant_a: Box<dyn Participant>,
        mut board_b: Board,
        participant_b: Box<dyn Participant>,
    ) -> Self {
        board_a.seal();
        board_b.seal();
        Self {
            sides: [
                Side {
                    board: board_a,
                    participant: participant_a,
                },
                Side {
                    board: board_b,
                    participant: participant_b,
                },
            ],
            active: 0,
            shots: [0; 2],
            last_turn: None,
        }
    }

    /// Index of the side whose turn it is.
    pub fn active(&self) -> usize {
        self.active
    }

    /// The board defended by `side`.
    pub fn board(&self, side: usize) -> Option<&Board> {
        self.sides.get(side).map(|s| &s.board)
    }

    /// Accepted shots fired by `side` so far.
    pub fn shots(&self, side: usize) -> usize {
        self.shots.get(side).copied().unwrap_or(0)
    }

    /// The most recent accepted shot.
    pub fn last_turn(&self) -> Option<TurnReport> {
        self.last_turn
    }

    /// Evaluate the current match status.
    ///
    /// A side loses once every vessel on its board is sunk. A board that
    /// never carried a vessel is not defeated, so a match between two empty
    /// boards stays [`MatchStatus::InProgress`] and [`Match::take_turn`]
    /// fails once the cells run out.
    pub fn status(&self) -> MatchStatus {
        match self.sides.iter().position(|s| s.board.all_sunk()) {
            Some(loser) => MatchStatus::Finished { winner: 1 - loser },
            None => MatchStatus::InProgress,
        }
    }

    /// Let the active side fire until the opposing board accepts a shot.
    ///
    /// Rejected targets are reported to both participants and a new one is
    /// requested. Fails if the opposing board has nothing left to fire at,
    /// if the shooter keeps picking refused cells for
    /// [`MAX_TURN_ATTEMPTS`] tries, or if the shooter itself fails.
    pub fn take_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        if let MatchStatus::Finished { .. } = self.status() {
            anyhow::bail!("match is already over");
        }

        let shooter = self.active;
        let [a, b] = &mut self.sides;
        let (own, foe) = if shooter == 0 { (a, b) } else { (b, a) };

        let mut rejected = 0;
        let (target, outcome) = loop {
            if foe.board.untargeted_count() == 0 {
                anyhow::bail!(
                    "no untargeted cells remain on {}'s board",
                    foe.participant.name()
                );
            }
            if rejected >= MAX_TURN_ATTEMPTS {
                anyhow::bail!(
                    "{} failed to pick a valid target in {} attempts",
                    own.participant.name(),
                    rejected
                );
            }
            let target = own.participant.select_target(rng, &foe.board)?;
            match foe.board.resolve_shot(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    rejected += 1;
                    debug!("{} rejected: {}", own.participant.name(), err);
                    own.participant.handle_rejected_shot(target, &err);
                    foe.participant.handle_opponent_rejected_shot(target, &err);
                }
            }
        };

        own.participant.handle_shot_result(target, outcome, &foe.board);
        foe.participant.handle_opponent_shot(target, outcome, &foe.board);

        self.shots[shooter] += 1;
        if !outcome.is_hit() {
            self.active = 1 - shooter;
        }

        let report = TurnReport {
            shooter,
            target,
            outcome,
            rejected,
        };
        self.last_turn = Some(report);
        Ok(report)
    }

    /// Play turns until one fleet is sunk, then tell both participants.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<MatchSummary> {
        info!(
            "match started: {} vs {}",
            self.sides[0].participant.name(),
            self.sides[1].participant.name()
        );
        let winner = loop {
            if let MatchStatus::Finished { winner } = self.status() {
                break winner;
            }
            self.take_turn(rng)?;
        };

        let [a, b] = &mut self.sides;
        a.participant.handle_match_end(winner == 0, &a.board, &b.board);
        b.participant.handle_match_end(winner == 1, &b.board, &a.board);

        let summary = MatchSummary {
            winner,
            winner_name: String::from(self.sides[winner].participant.name()),
            shots: self.shots,
            sunk: [
                self.sides[0].board.sunk_count(),
                self.sides[1].board.sunk_count(),
            ],
            final_turn: self.last_turn,
        };
        info!(
            "match over: {} won after {} shots",
            summary.winner_name,
            summary.shots[winner]
        );
        Ok(summary)
    }
}
