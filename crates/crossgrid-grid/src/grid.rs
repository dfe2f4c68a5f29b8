//! The sparse letter lattice and staged word insertion.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crossgrid_core::{
    InvariantViolation, Orientation, Placement, PlacementConflict, Position, WordId,
};

use crate::cell::{Cell, Occupant};

/// Inclusive bounding box of the occupied cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest occupied x and y.
    pub min: Position,
    /// Largest occupied x and y.
    pub max: Position,
}

impl Bounds {
    /// Columns spanned.
    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x + 1) as u32
    }

    /// Rows spanned.
    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y + 1) as u32
    }
}

/// Result of a successful [`Grid::insert`] call that did not break an
/// invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Every letter was written.
    Placed,
    /// Nothing was written.
    Conflict(PlacementConflict),
}

/// Whether a word may run directly alongside a parallel word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdjacencyRule {
    /// Reject a word whose cells touch a non-intersection cell of a word
    /// running the same direction.
    #[default]
    Strict,
    /// Only letters and shared cells are checked; parallel words may touch.
    Relaxed,
}

/// One pending cell write of a word being inserted.
#[derive(Clone, Copy, Debug)]
struct StagedCell {
    position: Position,
    letter: char,
    /// `true` when the cell is empty in the committed grid.
    fresh: bool,
}

/// Occupied cells keyed by position.
///
/// Cells iterate in the order they were first written, which keeps every
/// derived output independent of hashing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    cells: IndexMap<Position, Cell>,
    adjacency: AdjacencyRule,
}

impl Grid {
    /// An empty grid with the strict adjacency rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty grid checking insertions with `adjacency`.
    pub fn with_adjacency(adjacency: AdjacencyRule) -> Self {
        Self {
            cells: IndexMap::new(),
            adjacency,
        }
    }

    /// The adjacency rule applied by [`insert`](Self::insert).
    pub fn adjacency(&self) -> AdjacencyRule {
        self.adjacency
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `position`, if occupied.
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells.get(&position)
    }

    /// The letter at `position`, if occupied.
    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.cells.get(&position).map(Cell::letter)
    }

    /// Occupied cells in write order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values()
    }

    /// Bounding box of the occupied cells, `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.cells.keys();
        let first = *positions.next()?;
        let (min, max) = positions.fold((first, first), |(min, max), p| {
            (
                Position::new(min.x.min(p.x), min.y.min(p.y)),
                Position::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Bounds { min, max })
    }

    /// Write the root word at the origin, running across.
    ///
    /// The root is written without conflict checks; on an empty grid it
    /// cannot conflict.
    pub fn place_root(
        &mut self,
        word: WordId,
        letters: &[char],
    ) -> Result<Placement, InvariantViolation> {
        let placement = Placement::new(Position::ORIGIN, Orientation::Across);
        let occupant = Occupant {
            word,
            orientation: placement.orientation,
        };
        for (offset, &letter) in letters.iter().enumerate() {
            let position = placement.cell(offset);
            match self.cells.get_mut(&position) {
                Some(cell) => cell.add_occupant(occupant)?,
                None => {
                    self.cells
                        .insert(position, Cell::new(position, letter, occupant));
                }
            }
        }
        Ok(placement)
    }

    /// Insert `word` at `placement` as a single unit.
    ///
    /// All cells are staged against the committed grid first. Any
    /// conflict returns [`InsertOutcome::Conflict`] and leaves the grid
    /// untouched. Otherwise the staged cells are committed together.
    pub fn insert(
        &mut self,
        word: WordId,
        letters: &[char],
        placement: Placement,
    ) -> Result<InsertOutcome, InvariantViolation> {
        match self.stage(word, letters, placement) {
            Ok(staged) => {
                self.commit(word, placement.orientation, &staged)?;
                Ok(InsertOutcome::Placed)
            }
            Err(conflict) => Ok(InsertOutcome::Conflict(conflict)),
        }
    }

    /// Check every cell `word` needs and collect the writes.
    fn stage(
        &self,
        word: WordId,
        letters: &[char],
        placement: Placement,
    ) -> Result<SmallVec<[StagedCell; 16]>, PlacementConflict> {
        let orientation = placement.orientation;
        let mut staged = SmallVec::new();

        for (offset, &letter) in letters.iter().enumerate() {
            let position = placement.cell(offset);

            let fresh = match self.cells.get(&position) {
                Some(cell) => {
                    if cell.letter() != letter {
                        return Err(PlacementConflict::LetterMismatch {
                            position,
                            existing: cell.letter(),
                            attempted: letter,
                        });
                    }
                    if cell.has_orientation(orientation) {
                        return Err(PlacementConflict::ParallelOverlap { position });
                    }
                    false
                }
                None => true,
            };

            if self.adjacency == AdjacencyRule::Strict {
                self.check_neighbours(word, orientation, position)?;
            }

            staged.push(StagedCell {
                position,
                letter,
                fresh,
            });
        }

        Ok(staged)
    }

    /// Reject `position` if a neighbour belongs to a parallel word that
    /// does not cross anything there.
    fn check_neighbours(
        &self,
        word: WordId,
        orientation: Orientation,
        position: Position,
    ) -> Result<(), PlacementConflict> {
        for neighbour in position.neighbours() {
            let Some(cell) = self.cells.get(&neighbour) else {
                continue;
            };
            if cell.primary_orientation() == orientation
                && !cell.is_intersection()
                && !cell.contains(word)
            {
                return Err(PlacementConflict::ParallelNeighbour {
                    position,
                    neighbour,
                });
            }
        }
        Ok(())
    }

    /// Apply staged writes. Capacity is verified before any cell changes.
    fn commit(
        &mut self,
        word: WordId,
        orientation: Orientation,
        staged: &[StagedCell],
    ) -> Result<(), InvariantViolation> {
        for s in staged.iter().filter(|s| !s.fresh) {
            if let Some(cell) = self.cells.get(&s.position) {
                if cell.occupants().len() >= Cell::MAX_OCCUPANTS {
                    return Err(InvariantViolation::CellOverflow {
                        position: s.position,
                        word,
                    });
                }
            }
        }

        let occupant = Occupant { word, orientation };
        for s in staged {
            match self.cells.get_mut(&s.position) {
                Some(cell) => cell.add_occupant(occupant)?,
                None => {
                    self.cells
                        .insert(s.position, Cell::new(s.position, s.letter, occupant));
                }
            }
        }
        Ok(())
    }

    /// Copy of the grid moved by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let cells = self
            .cells
            .values()
            .map(|cell| {
                let moved = cell.translated(dx, dy);
                (moved.position(), moved)
            })
            .collect();
        Self {
            cells,
            adjacency: self.adjacency,
        }
    }

    /// Shift that moves the bounding box's minimum corner to the origin.
    pub fn normalization_offset(&self) -> (i32, i32) {
        match self.bounds() {
            Some(b) => (-b.min.x, -b.min.y),
            None => (0, 0),
        }
    }

    /// Copy of the grid with its minimum corner at `(0, 0)`.
    pub fn normalized(&self) -> Self {
        let (dx, dy) = self.normalization_offset();
        self.translated(dx, dy)
    }
}
