//! Per-attempt counters and timings.

/// Counters and timings collected during one attempt.
///
/// All durations are in microseconds. Timings vary between runs; the
/// counters do not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttemptMetrics {
    /// Distinct words after normalization.
    pub words: u32,
    /// Word pairs tested for an intersection.
    pub pairs_examined: u64,
    /// Intersection edges found.
    pub edges: u32,
    /// Edges accepted into the spanning tree.
    pub tree_edges: u32,
    /// Connected components of the spanning forest.
    pub components: u32,
    /// Words placed.
    pub placed: u32,
    /// Insertions rejected for a letter mismatch.
    pub letter_mismatches: u32,
    /// Insertions rejected for touching a parallel word.
    pub parallel_neighbours: u32,
    /// Insertions rejected for sharing a cell with a parallel word.
    pub parallel_overlaps: u32,
    /// Words dropped because their tree parent was dropped.
    pub parent_unplaced: u32,
    /// Words outside the root's component.
    pub disconnected: u32,
    /// Time building the intersection graph.
    pub graph_us: u64,
    /// Time choosing the spanning tree and traversal order.
    pub tree_us: u64,
    /// Time embedding and normalizing.
    pub embed_us: u64,
    /// Wall-clock time for the whole attempt.
    pub total_us: u64,
}

impl AttemptMetrics {
    /// Total rejected insertions.
    pub fn conflicts(&self) -> u32 {
        self.letter_mismatches + self.parallel_neighbours + self.parallel_overlaps
    }

    /// Copy with every timing zeroed, for comparing runs.
    pub fn without_timings(&self) -> Self {
        Self {
            graph_us: 0,
            tree_us: 0,
            embed_us: 0,
            total_us: 0,
            ..self.clone()
        }
    }
}
