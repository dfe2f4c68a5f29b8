//! Lattice positions, orientations, and word placements.

use std::fmt;

/// A cell coordinate on the unbounded integer lattice.
///
/// `x` grows to the right (the [`Orientation::Across`] direction) and
/// `y` grows downwards (the [`Orientation::Down`] direction). Positions
/// are plain values: equality, ordering and hashing are by `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// The lattice origin `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its column and row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The position `steps` cells further along `orientation`.
    #[inline]
    pub fn advance(self, orientation: Orientation, steps: i32) -> Self {
        let (dx, dy) = orientation.delta();
        self.offset(dx * steps, dy * steps)
    }

    /// The four orthogonal neighbours: north, south, west, east.
    pub fn neighbours(self) -> [Position; 4] {
        let offsets: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        offsets.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The two mutually perpendicular directions a word may run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Left to right, along increasing `x`.
    Across,
    /// Top to bottom, along increasing `y`.
    Down,
}

impl Orientation {
    /// The perpendicular orientation.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Unit step `(dx, dy)` along this orientation.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Across => (1, 0),
            Self::Down => (0, 1),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Where a word sits on the lattice: the cell of its first letter and
/// the direction it runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Position of the word's first character.
    pub anchor: Position,
    /// Direction of the run.
    pub orientation: Orientation,
}

impl Placement {
    /// Create a placement.
    pub fn new(anchor: Position, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// Cell occupied by the character at `offset`.
    #[inline]
    pub fn cell(&self, offset: usize) -> Position {
        self.anchor.advance(self.orientation, offset as i32)
    }

    /// The same placement shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            anchor: self.anchor.offset(dx, dy),
            orientation: self.orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flipped_alternates() {
        assert_eq!(Orientation::Across.flipped(), Orientation::Down);
        assert_eq!(Orientation::Down.flipped(), Orientation::Across);
    }

    #[test]
    fn advance_follows_orientation() {
        let p = Position::new(2, -1);
        assert_eq!(p.advance(Orientation::Across, 3), Position::new(5, -1));
        assert_eq!(p.advance(Orientation::Down, 3), Position::new(2, 2));
    }

    #[test]
    fn neighbours_are_orthogonal() {
        let n = Position::new(0, 0).neighbours();
        assert!(n.contains(&Position::new(0, -1)));
        assert!(n.contains(&Position::new(0, 1)));
        assert!(n.contains(&Position::new(-1, 0)));
        assert!(n.contains(&Position::new(1, 0)));
    }

    #[test]
    fn placement_cells_are_contiguous() {
        let p = Placement::new(Position::new(1, -1), Orientation::Down);
        assert_eq!(p.cell(0), Position::new(1, -1));
        assert_eq!(p.cell(1), Position::new(1, 0));
        assert_eq!(p.cell(2), Position::new(1, 1));
    }

    proptest! {
        #[test]
        fn neighbour_relation_is_symmetric(x in -100i32..100, y in -100i32..100) {
            let p = Position::new(x, y);
            for nb in p.neighbours() {
                prop_assert!(nb.neighbours().contains(&p));
            }
        }

        #[test]
        fn translation_preserves_cell_spacing(
            x in -50i32..50, y in -50i32..50,
            dx in -50i32..50, dy in -50i32..50,
            across in any::<bool>(),
            i in 0usize..20,
        ) {
            let o = if across { Orientation::Across } else { Orientation::Down };
            let p = Placement::new(Position::new(x, y), o);
            prop_assert_eq!(p.translated(dx, dy).cell(i), p.cell(i).offset(dx, dy));
        }
    }
}
