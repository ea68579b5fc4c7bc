//! Board state: vessel placement, shot resolution and rendering.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::trace;

use crate::common::{BoardError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// Part of an undamaged vessel section.
    Ship,
    Hit,
    Miss,
    /// Open water around a sunk vessel. Shown like a miss but still
    /// targetable.
    Contour,
}

impl CellState {
    /// Glyph for this cell. Ships are blanked on concealed boards.
    pub fn glyph(self, concealed: bool) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Ship if concealed => ' ',
            CellState::Ship => '■',
            CellState::Hit => 'X',
            CellState::Miss | CellState::Contour => 'o',
        }
    }

    fn colour(self, concealed: bool) -> Option<&'static str> {
        match self {
            CellState::Empty => None,
            CellState::Ship if concealed => None,
            CellState::Ship => Some("\x1b[33m"),
            CellState::Hit => Some("\x1b[31m"),
            CellState::Miss | CellState::Contour => Some("\x1b[34m"),
        }
    }
}

/// Decoration applied when rendering a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    /// Colour glyphs with ANSI escape sequences.
    Ansi,
}

const ANSI_RESET: &str = "\x1b[0m";

/// One side's fleet and the shots fired at it.
pub struct Board {
    size: i32,
    concealed: bool,
    sealed: bool,
    sunk_count: usize,
    cells: Vec<CellState>,
    // Vessel cells plus their one-cell buffer, consulted only by `place`.
    reserved: BTreeSet<Coordinate>,
    fired: BTreeSet<Coordinate>,
    vessels: Vec<Vessel>,
}

impl Board {
    /// Create an empty `size`×`size` board. Negative sizes yield an empty
    /// grid.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let side = size as usize;
        Board {
            size,
            concealed: false,
            sealed: false,
            sunk_count: 0,
            cells: vec![CellState::Empty; side * side],
            reserved: BTreeSet::new(),
            fired: BTreeSet::new(),
            vessels: Vec::new(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// `(0 <= x < size) && (0 <= y < size)`.
    pub fn is_within_bounds(&self, c: Coordinate) -> bool {
        (0..self.size).contains(&c.x) && (0..self.size).contains(&c.y)
    }

    /// Place a vessel, reserving a one-cell buffer around it so that no
    /// later vessel can touch it.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        let fits = usize::try_from(self.size).is_ok_and(|side| vessel.len() <= side);
        if self.sealed || vessel.is_empty() || !fits {
            return Err(BoardError::InvalidPlacement(vessel.origin()));
        }
        if let Some(blocked) = vessel
            .cells()
            .find(|&c| !self.is_within_bounds(c) || self.reserved.contains(&c))
        {
            return Err(BoardError::InvalidPlacement(blocked));
        }

        for c in vessel.cells() {
            let i = self.index(c);
            self.cells[i] = CellState::Ship;
        }
        self.vessels.push(vessel);
        self.reserve_around(&vessel);
        Ok(())
    }

    /// Fire at `target`. Failed shots leave the board untouched.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !self.is_within_bounds(target) {
            return Err(BoardError::OutOfBounds(target));
        }
        if !self.fired.insert(target) {
            return Err(BoardError::AlreadyTargeted(target));
        }

        let i = self.index(target);
        let Some(vessel) = self.vessels.iter().position(|v| v.is_hit_by(target)) else {
            self.cells[i] = CellState::Miss;
            trace!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[i] = CellState::Hit;
        if self.vessels[vessel].register_hit() {
            self.sunk_count += 1;
            let sunk = self.vessels[vessel];
            self.mark_contour(&sunk);
            trace!("shot at {} sank vessel {}", target, vessel);
            Ok(ShotOutcome::Sunk { vessel })
        } else {
            trace!("shot at {} hit vessel {}", target, vessel);
            Ok(ShotOutcome::Hit { vessel })
        }
    }

    /// Close the board to further placement.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Hide vessels from rendering.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Returns `true` once the board carries vessels and every one is sunk.
    /// A board without vessels is never defeated.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.sunk_count == self.vessels.len()
    }

    /// State of the cell at `c`, or `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        self.is_within_bounds(c).then(|| self.cells[self.index(c)])
    }

    /// Whether `c` is a vessel cell or lies in a vessel's buffer.
    pub fn is_reserved(&self, c: Coordinate) -> bool {
        self.reserved.contains(&c)
    }

    /// Whether `c` has been fired upon.
    pub fn is_targeted(&self, c: Coordinate) -> bool {
        self.fired.contains(&c)
    }

    /// Cells that can still be fired upon.
    pub fn untargeted_count(&self) -> usize {
        self.cells.len() - self.fired.len()
    }

    /// Render the grid with the given decoration.
    pub fn display(&self, style: Style) -> BoardDisplay<'_> {
        BoardDisplay { board: self, style }
    }

    fn index(&self, c: Coordinate) -> usize {
        (c.y * self.size + c.x) as usize
    }

    fn reserve_around(&mut self, vessel: &Vessel) {
        for cell in vessel.cells() {
            for c in cell.neighbourhood() {
                if self.is_within_bounds(c) {
                    self.reserved.insert(c);
                }
            }
        }
    }

    // Marks untouched water around a sunk vessel. The cells are not added to
    // the fired set, so they stay targetable.
    fn mark_contour(&mut self, vessel: &Vessel) {
        for cell in vessel.cells() {
            for c in cell.neighbourhood() {
                if self.cell(c) == Some(CellState::Empty) {
                    let i = self.index(c);
                    self.cells[i] = CellState::Contour;
                }
            }
        }
    }
}

/// Renders a [`Board`] as a lettered grid. Created by [`Board::display`].
pub struct BoardDisplay<'a> {
    board: &'a Board,
    style: Style,
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board;
        write!(f, "  |")?;
        for col in 0..board.size {
            write!(f, " {} |", column_letter(col))?;
        }
        for y in 0..board.size {
            write!(f, "\n{:<2}|", y + 1)?;
            for x in 0..board.size {
                let state = board.cells[board.index(Coordinate::new(x, y))];
                let glyph = state.glyph(board.concealed);
                match (self.style, state.colour(board.concealed)) {
                    (Style::Ansi, Some(colour)) => {
                        write!(f, " {}{}{} |", colour, glyph, ANSI_RESET)?
                    }
                    _ => write!(f, " {} |", glyph)?,
                }
            }
        }
        Ok(())
    }
}

/// Column header letter, `a` for column 0. Columns without a letter render
/// as `?`.
pub fn column_letter(col: i32) -> char {
    u32::try_from(col)
        .ok()
        .and_then(|c| c.checked_add('a' as u32))
        .and_then(char::from_u32)
        .unwrap_or('?')
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(Style::Plain), f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  concealed: {},\n  sealed: {},\n  sunk: {},\n  fired: {:?},\n  vessels: {:?}\n}}",
            self.size, self.concealed, self.sealed, self.sunk_count, self.fired, self.vessels
        )
    }
}
