//! Grid cells and their occupants.

use crossgrid_core::{InvariantViolation, Orientation, Position, WordId};
use smallvec::SmallVec;

/// A word claiming a cell, with the direction it runs through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Occupant {
    /// The claiming word.
    pub word: WordId,
    /// Direction of that word.
    pub orientation: Orientation,
}

/// One occupied lattice cell.
///
/// Holds at most two occupants. A two-occupant cell is an intersection
/// and its occupants run in opposite directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    letter: char,
    occupants: SmallVec<[Occupant; 2]>,
}

impl Cell {
    /// Maximum number of words that may share a cell.
    pub const MAX_OCCUPANTS: usize = 2;

    /// A cell claimed by a single word.
    pub fn new(position: Position, letter: char, occupant: Occupant) -> Self {
        let mut occupants = SmallVec::new();
        occupants.push(occupant);
        Self {
            position,
            letter,
            occupants,
        }
    }

    /// Where the cell is.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The letter it holds.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Words claiming the cell, in claim order.
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Whether two words cross here.
    pub fn is_intersection(&self) -> bool {
        self.occupants.len() == Self::MAX_OCCUPANTS
    }

    /// Whether `word` already claims the cell.
    pub fn contains(&self, word: WordId) -> bool {
        self.occupants.iter().any(|o| o.word == word)
    }

    /// Whether some occupant runs along `orientation`.
    pub fn has_orientation(&self, orientation: Orientation) -> bool {
        self.occupants.iter().any(|o| o.orientation == orientation)
    }

    /// Orientation of the first claimant.
    pub fn primary_orientation(&self) -> Orientation {
        self.occupants[0].orientation
    }

    /// Add a second claimant.
    ///
    /// A third claimant is an [`InvariantViolation::CellOverflow`].
    pub fn add_occupant(&mut self, occupant: Occupant) -> Result<(), InvariantViolation> {
        if self.occupants.len() >= Self::MAX_OCCUPANTS {
            return Err(InvariantViolation::CellOverflow {
                position: self.position,
                word: occupant.word,
            });
        }
        self.occupants.push(occupant);
        Ok(())
    }

    /// The same cell moved by `(dx, dy)`.
    pub(crate) fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            letter: self.letter,
            occupants: self.occupants.clone(),
        }
    }
}
