//! The full intersection graph of an attempt.

use crossgrid_core::{WordId, WordSet};

use crate::intersection::{find_intersection, IntersectionEdge};

/// Every crossing found between the words of one attempt.
///
/// Built by scanning all unordered pairs `(i, j)` with `i < j` in input
/// order. Because each accepted crossing consumes an offset on both words,
/// pair order affects which edges exist; the fixed scan order keeps the
/// graph a pure function of the input list.
#[derive(Clone, Debug, Default)]
pub struct IntersectionGraph {
    edges: Vec<IntersectionEdge>,
    degree: Vec<u32>,
    pairs_examined: usize,
}

impl IntersectionGraph {
    /// Scan every pair of `words`, consuming offsets as edges are accepted.
    pub fn build(words: &mut WordSet) -> Self {
        let n = words.len() as u32;
        let mut edges = Vec::new();
        let mut degree = vec![0u32; n as usize];
        let mut pairs_examined = 0;

        for i in 0..n {
            for j in (i + 1)..n {
                pairs_examined += 1;
                if let Some(edge) = find_intersection(words, WordId(i), WordId(j)) {
                    degree[i as usize] += 1;
                    degree[j as usize] += 1;
                    edges.push(edge);
                }
            }
        }

        Self {
            edges,
            degree,
            pairs_examined,
        }
    }

    /// All edges, in discovery order.
    pub fn edges(&self) -> &[IntersectionEdge] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no pair of words intersects.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of word pairs examined while building.
    pub fn pairs_examined(&self) -> usize {
        self.pairs_examined
    }

    /// Number of words the graph was built over.
    pub fn word_count(&self) -> usize {
        self.degree.len()
    }

    /// Edges incident to `word`.
    pub fn degree(&self, word: WordId) -> u32 {
        self.degree.get(word.index()).copied().unwrap_or(0)
    }

    /// Words with at least one edge.
    pub fn connected_words(&self) -> usize {
        self.degree.iter().filter(|&&d| d > 0).count()
    }

    /// Edges incident to `word`, in discovery order.
    pub fn edges_of(&self, word: WordId) -> impl Iterator<Item = &IntersectionEdge> + '_ {
        self.edges.iter().filter(move |e| e.touches(word))
    }
}
