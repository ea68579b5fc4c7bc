#![cfg(feature = "std")]

//! Terminal front end for the human player: target parsing, board printing
//! and pacing.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;
use std::time::Duration;

use log::warn;
use thiserror::Error;

use crate::{
    board::{column_letter, Board, Style},
    common::{BoardError, ShotOutcome},
    config::{BOARD_SIZE, FLAGSHIP_LENGTH},
    coordinate::Coordinate,
    participant::Frontend,
};

const RULE: &str = "---------------------------";

/// Reasons a typed move is refused before it reaches the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter two coordinates separated by a space, e.g. `c 4`.")]
    WrongTokenCount,
    #[error("The column must be a letter.")]
    ColumnNotLetter,
    #[error("The row must be a number.")]
    RowNotNumber,
    #[error("Column `{0}` is not on the board.")]
    ColumnOutOfRange(String),
}

/// Parse `"<column letter> <row number>"` into a coordinate on a `size`
/// board. Letters are case-insensitive and rows are 1-indexed.
///
/// Only the column is range-checked here; a row past the edge is passed on
/// so the board can report it as off the board.
pub fn parse_target(line: &str, size: i32) -> Result<Coordinate, InputError> {
    let mut tokens = line.split_whitespace();
    let (Some(col), Some(row), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(InputError::WrongTokenCount);
    };

    if !col.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InputError::ColumnNotLetter);
    }
    let mut letters = col.bytes().map(|b| b.to_ascii_lowercase());
    let x = match (letters.next(), letters.next()) {
        (Some(letter), None) => i32::from(letter - b'a'),
        _ => return Err(InputError::ColumnOutOfRange(col.to_string())),
    };
    if x >= size {
        return Err(InputError::ColumnOutOfRange(col.to_string()));
    }

    if row.is_empty() || !row.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::RowNotNumber);
    }
    let y: i32 = row.parse().map_err(|_| InputError::RowNotNumber)?;
    Ok(Coordinate::new(x, y - 1))
}

/// Human-readable cell name such as `c4`.
pub fn cell_label(c: Coordinate) -> String {
    format!("{}{}", column_letter(c.x), c.y + 1)
}

/// Presentation settings for a [`Console`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub style: Style,
    /// Delay before each board is shown. Zero disables pacing.
    pub pace: Duration,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            style: Style::Ansi,
            pace: Duration::ZERO,
        }
    }
}

/// Line-oriented terminal reading moves from `R` and writing to `W`.
pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Title and input instructions shown before the first move.
    pub fn print_intro(&mut self) -> io::Result<()> {
        let last_col = column_letter(BOARD_SIZE - 1);
        writeln!(self.output, "{:^27}", "~ SEA BATTLE ~")?;
        self.pause();
        writeln!(self.output)?;
        writeln!(self.output, "Columns are the letters a-{}.", last_col)?;
        writeln!(self.output, "Rows are the numbers 1-{}.", BOARD_SIZE)?;
        writeln!(
            self.output,
            "Enter a move as column and row separated by a space, e.g. `c 4`."
        )?;
        writeln!(self.output)?;
        self.output.flush()
    }

    fn pause(&self) {
        if !self.options.pace.is_zero() {
            std::thread::sleep(self.options.pace);
        }
    }

    // Presentation hooks cannot fail the match, so write errors are logged.
    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self
            .output
            .write_fmt(args)
            .and_then(|()| self.output.flush())
        {
            warn!("console write failed: {}", e);
        }
    }

    fn show_board(&mut self, title: &str, board: &Board) {
        self.pause();
        let grid = board.display(self.options.style);
        self.say(format_args!("{}\n{:>23}\n{}\n{}\n", RULE, title, grid, RULE));
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit { .. } => "Hit!",
        ShotOutcome::Sunk { .. } => "Vessel sunk!",
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn read_target(&mut self, opponent: &Board) -> anyhow::Result<Coordinate> {
        self.show_board("Opponent's board:", opponent);
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                anyhow::bail!("input closed before a move was entered");
            };
            match parse_target(&line, opponent.size()) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn shot_rejected(&mut self, target: Coordinate, error: &BoardError) {
        match error {
            BoardError::OutOfBounds(_) => self.say(format_args!("That shot is off the board!\n")),
            BoardError::AlreadyTargeted(_) => self.say(format_args!(
                "You have already fired at {}!\n",
                cell_label(target)
            )),
            other => self.say(format_args!("{}\n", other)),
        }
    }

    fn incoming_rejected(&mut self, target: Coordinate, error: &BoardError) {
        match error {
            BoardError::AlreadyTargeted(_) => self.say(format_args!(
                "Opponent fires at {} again and aims anew.\n",
                cell_label(target)
            )),
            BoardError::OutOfBounds(_) => {
                self.say(format_args!("Opponent's shot is off the board!\n"))
            }
            other => self.say(format_args!("Opponent: {}\n", other)),
        }
    }

    fn shot_resolved(&mut self, _target: Coordinate, outcome: ShotOutcome, _opponent: &Board) {
        self.say(format_args!("{}\n", outcome_message(outcome)));
    }

    fn incoming_shot(&mut self, target: Coordinate, outcome: ShotOutcome, own: &Board) {
        self.pause();
        self.say(format_args!(
            "Opponent fires at {} {}\n",
            column_letter(target.x),
            target.y + 1
        ));
        let flagship = outcome
            .vessel()
            .and_then(|i| own.vessels().get(i))
            .is_some_and(|v| v.len() == FLAGSHIP_LENGTH);
        if flagship {
            self.say(format_args!("Your flagship is under attack!\n"));
        }
        self.say(format_args!("{}\n", outcome_message(outcome)));
        self.show_board("Your board:", own);
    }

    fn match_over(&mut self, won: bool, own: &Board, opponent: &Board) {
        if won {
            self.show_board("Opponent's board:", opponent);
            self.say(format_args!("You won!\n"));
        } else {
            self.show_board("Your board:", own);
            self.say(format_args!("You lost!\n"));
        }
    }
}
