#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod coordinate;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod participant;
pub mod prelude;
mod vessel;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use fleet::{random_board, random_vessel, try_random_board};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use participant::{AutomatedParticipant, Frontend, HumanParticipant, Participant};
pub use vessel::*;
