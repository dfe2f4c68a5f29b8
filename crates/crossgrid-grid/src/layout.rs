//! The normalized output of one attempt.

use crossgrid_core::{DropReason, InvariantViolation, Placement, Position, WordId, WordSet};

use crate::cell::Cell;
use crate::embed::Embedding;
use crate::grid::Grid;

/// A word written into the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    /// Id inside the attempt's word set.
    pub id: WordId,
    /// Normalized text.
    pub text: String,
    /// Anchor and orientation in layout coordinates.
    pub placement: Placement,
}

/// A word left out of the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedWord {
    /// Id inside the attempt's word set.
    pub id: WordId,
    /// Normalized text.
    pub text: String,
    /// Why it was left out.
    pub reason: DropReason,
}

/// A finished grid with its minimum corner at `(0, 0)`.
///
/// Placed words are listed in placement order, dropped words in the order
/// they were dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    width: u32,
    height: u32,
    root: WordId,
    seed: u64,
    placed: Vec<PlacedWord>,
    dropped: Vec<DroppedWord>,
    input_count: usize,
}

impl Layout {
    /// Normalize `embedding` and attach word texts from `words`.
    ///
    /// Every id in `embedding.placed` must carry a placement in `words`.
    pub fn from_embedding(
        embedding: Embedding,
        words: &WordSet,
        seed: u64,
    ) -> Result<Self, InvariantViolation> {
        let (dx, dy) = embedding.grid.normalization_offset();
        let grid = embedding.grid.translated(dx, dy);
        let (width, height) = grid
            .bounds()
            .map_or((0, 0), |b| (b.width(), b.height()));

        let mut placed = Vec::with_capacity(embedding.placed.len());
        for id in embedding.placed {
            let word = words
                .get(id)
                .ok_or(InvariantViolation::UnknownWord { word: id })?;
            let placement = word
                .placement()
                .ok_or(InvariantViolation::UnplacedBase { word: id })?;
            placed.push(PlacedWord {
                id,
                text: word.text().to_string(),
                placement: placement.translated(dx, dy),
            });
        }

        let dropped = embedding
            .dropped
            .into_iter()
            .map(|(id, reason)| {
                let word = words
                    .get(id)
                    .ok_or(InvariantViolation::UnknownWord { word: id })?;
                Ok(DroppedWord {
                    id,
                    text: word.text().to_string(),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, InvariantViolation>>()?;

        Ok(Self {
            grid,
            width,
            height,
            root: embedding.root,
            seed,
            placed,
            dropped,
            input_count: words.input_count(),
        })
    }

    /// Copy with the minimum corner moved to `(0, 0)`. A layout built by
    /// [`from_embedding`](Self::from_embedding) is already normalized, so
    /// this returns an equal value.
    pub fn normalized(&self) -> Self {
        let (dx, dy) = self.grid.normalization_offset();
        let mut out = self.clone();
        if (dx, dy) == (0, 0) {
            return out;
        }
        out.grid = self.grid.translated(dx, dy);
        for word in &mut out.placed {
            word.placement = word.placement.translated(dx, dy);
        }
        out
    }

    /// Columns spanned by the occupied cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rows spanned by the occupied cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width * height`.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// The letter at `position`, if occupied.
    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.grid.letter_at(position)
    }

    /// The normalized grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Occupied cells in write order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.grid.cells()
    }

    /// Rows top to bottom, each `width` entries long.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<char>>> + '_ {
        (0..self.height as i32).map(move |y| {
            (0..self.width as i32)
                .map(|x| self.grid.letter_at(Position::new(x, y)))
                .collect()
        })
    }

    /// Words written into the grid.
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Words left out, with reasons.
    pub fn dropped(&self) -> &[DroppedWord] {
        &self.dropped
    }

    /// Raw inputs given to the attempt, duplicates included.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of placed words.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// The word written first, at the origin before normalization.
    pub fn root(&self) -> WordId {
        self.root
    }

    /// Seed of the attempt that produced the layout.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::embed_plan;
    use crate::grid::AdjacencyRule;
    use crossgrid_core::Orientation;
    use crossgrid_graph::{IntersectionGraph, SpanningTree, TraversalPlan};

    fn cat_car() -> Layout {
        let mut set = WordSet::from_inputs(&["cat", "car", "Car"]);
        let graph = IntersectionGraph::build(&mut set);
        let tree = SpanningTree::from_edges(graph.edges().iter().copied(), set.len());
        let plan = TraversalPlan::from_root(&tree, WordId(0), set.len());
        let embedding = embed_plan(&mut set, &plan, AdjacencyRule::Strict).unwrap();
        Layout::from_embedding(embedding, &set, 42).unwrap()
    }

    #[test]
    fn placements_are_shifted_with_the_grid() {
        let layout = cat_car();
        assert_eq!((layout.width(), layout.height()), (3, 3));
        assert_eq!(layout.area(), 9);
        let placed = layout.placed();
        assert_eq!(placed[0].text, "CAT");
        assert_eq!(placed[0].placement.anchor, Position::new(0, 1));
        assert_eq!(placed[1].text, "CAR");
        assert_eq!(placed[1].placement.anchor, Position::new(1, 0));
        assert_eq!(placed[1].placement.orientation, Orientation::Down);
        assert_eq!(layout.letter_at(Position::new(1, 2)), Some('R'));
    }

    #[test]
    fn counts_include_duplicate_inputs() {
        let layout = cat_car();
        assert_eq!(layout.input_count(), 3);
        assert_eq!(layout.placed_count(), 2);
        assert!(layout.dropped().is_empty());
        assert_eq!(layout.root(), WordId(0));
        assert_eq!(layout.seed(), 42);
    }

    #[test]
    fn rows_cover_the_bounding_box() {
        let layout = cat_car();
        let rows: Vec<_> = layout.rows().collect();
        assert_eq!(
            rows,
            vec![
                vec![None, Some('C'), None],
                vec![Some('C'), Some('A'), Some('T')],
                vec![None, Some('R'), None],
            ]
        );
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let layout = cat_car();
        assert_eq!(layout.normalized(), layout);
        assert_eq!(layout.normalized().normalized(), layout);
    }
}
