//! Tree-guided embedding of words into a [`Grid`].
//!
//! The root word is written at the origin running across. Every further
//! word is positioned from the tree edge that joins it to an already
//! placed word: it runs perpendicular to that word, and its anchor is
//! chosen so the shared letter lands on the same cell.
//!
//! A word whose insertion conflicts is dropped, together with every word
//! the tree reaches only through it. Dropping never fails the attempt;
//! only a broken invariant does.

use crossgrid_core::{
    DropReason, InvariantViolation, Orientation, Placement, PlacementConflict, Position, WordId,
    WordSet,
};
use crossgrid_graph::{SpanningTree, TraversalPlan};
use rand::Rng;
use tracing::{debug, trace};

use crate::grid::{AdjacencyRule, Grid, InsertOutcome};

/// Counters gathered while embedding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedStats {
    /// Steps that ended in [`PlacementConflict::LetterMismatch`].
    pub letter_mismatches: u32,
    /// Steps that ended in [`PlacementConflict::ParallelNeighbour`].
    pub parallel_neighbours: u32,
    /// Steps that ended in [`PlacementConflict::ParallelOverlap`].
    pub parallel_overlaps: u32,
    /// Words skipped because their tree parent was dropped.
    pub parent_unplaced: u32,
    /// Words outside the root's component.
    pub disconnected: u32,
}

impl EmbedStats {
    /// Total conflicting insertions.
    pub fn conflicts(&self) -> u32 {
        self.letter_mismatches + self.parallel_neighbours + self.parallel_overlaps
    }

    fn record(&mut self, reason: &DropReason) {
        match reason {
            DropReason::Conflict(PlacementConflict::LetterMismatch { .. }) => {
                self.letter_mismatches += 1
            }
            DropReason::Conflict(PlacementConflict::ParallelNeighbour { .. }) => {
                self.parallel_neighbours += 1
            }
            DropReason::Conflict(PlacementConflict::ParallelOverlap { .. }) => {
                self.parallel_overlaps += 1
            }
            DropReason::ParentUnplaced { .. } => self.parent_unplaced += 1,
            DropReason::Disconnected => self.disconnected += 1,
        }
    }
}

/// Raw result of embedding, before normalization.
#[derive(Clone, Debug)]
pub struct Embedding {
    /// The grid in attempt coordinates (root anchored at the origin).
    pub grid: Grid,
    /// The root word.
    pub root: WordId,
    /// Placed words in placement order.
    pub placed: Vec<WordId>,
    /// Dropped words with their reasons, in the order they were dropped.
    pub dropped: Vec<(WordId, DropReason)>,
    /// Counters.
    pub stats: EmbedStats,
}

/// Anchor and orientation of a word crossing `base`.
///
/// `base_offset` and `new_offset` index the shared letter in the base
/// word and the new word. The new word runs perpendicular to the base.
pub fn anchor_for(base: Placement, base_offset: usize, new_offset: usize) -> Placement {
    let (b, n) = (base_offset as i32, new_offset as i32);
    let anchor = match base.orientation {
        Orientation::Across => Position::new(base.anchor.x + b, base.anchor.y - n),
        Orientation::Down => Position::new(base.anchor.x - n, base.anchor.y + b),
    };
    Placement::new(anchor, base.orientation.flipped())
}

/// Choose a root with `rng` and embed the whole tree.
///
/// An edgeless tree (a single word) uses the first word as root.
pub fn embed<R: Rng + ?Sized>(
    words: &mut WordSet,
    tree: &SpanningTree,
    adjacency: AdjacencyRule,
    rng: &mut R,
) -> Result<Embedding, InvariantViolation> {
    let root = tree.choose_root(rng).unwrap_or(WordId(0));
    let plan = TraversalPlan::from_root(tree, root, words.len());
    embed_plan(words, &plan, adjacency)
}

/// Embed words following a prepared traversal plan.
pub fn embed_plan(
    words: &mut WordSet,
    plan: &TraversalPlan,
    adjacency: AdjacencyRule,
) -> Result<Embedding, InvariantViolation> {
    let root = plan.root();
    let mut grid = Grid::with_adjacency(adjacency);
    let mut dropped_flags = vec![false; words.len()];
    let mut placed = Vec::with_capacity(plan.steps().len() + 1);
    let mut dropped = Vec::new();
    let mut stats = EmbedStats::default();

    let root_word = words
        .get(root)
        .ok_or(InvariantViolation::UnknownWord { word: root })?;
    let placement = grid.place_root(root, root_word.letters())?;
    trace!(word = %root_word, "root placed");
    set_placement(words, root, placement)?;
    placed.push(root);

    for step in plan.steps() {
        let base = words
            .get(step.base)
            .ok_or(InvariantViolation::UnknownWord { word: step.base })?;

        let base_placement = match base.placement() {
            Some(p) => p,
            None if dropped_flags[step.base.index()] => {
                let reason = DropReason::ParentUnplaced { parent: step.base };
                debug!(word = %step.new, parent = %step.base, "parent dropped, skipping subtree");
                stats.record(&reason);
                dropped_flags[step.new.index()] = true;
                dropped.push((step.new, reason));
                continue;
            }
            None => return Err(InvariantViolation::UnplacedBase { word: step.base }),
        };

        let placement = anchor_for(base_placement, step.base_offset(), step.new_offset());
        let new_word = words
            .get(step.new)
            .ok_or(InvariantViolation::UnknownWord { word: step.new })?;

        match grid.insert(step.new, new_word.letters(), placement)? {
            InsertOutcome::Placed => {
                trace!(
                    word = %new_word,
                    x = placement.anchor.x,
                    y = placement.anchor.y,
                    orientation = %placement.orientation,
                    "word placed"
                );
                set_placement(words, step.new, placement)?;
                placed.push(step.new);
            }
            InsertOutcome::Conflict(conflict) => {
                debug!(word = %new_word, %conflict, "word dropped");
                let reason = DropReason::Conflict(conflict);
                stats.record(&reason);
                dropped_flags[step.new.index()] = true;
                dropped.push((step.new, reason));
            }
        }
    }

    for &word in plan.unreached() {
        let reason = DropReason::Disconnected;
        stats.record(&reason);
        dropped.push((word, reason));
    }

    Ok(Embedding {
        grid,
        root,
        placed,
        dropped,
        stats,
    })
}

fn set_placement(
    words: &mut WordSet,
    word: WordId,
    placement: Placement,
) -> Result<(), InvariantViolation> {
    words
        .get_mut(word)
        .ok_or(InvariantViolation::UnknownWord { word })?
        .set_placement(placement);
    Ok(())
}
