//! Random spanning trees over the intersection graph.

use crossgrid_core::WordId;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::IntersectionGraph;
use crate::intersection::IntersectionEdge;

/// Disjoint-set forest over word ids with path compression and union by
/// size.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<u32>,
    size: Vec<u32>,
    components: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = x;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns `false` if already merged.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra as usize] >= self.size[rb as usize] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small as usize] = big;
        self.size[big as usize] += self.size[small as usize];
        self.components -= 1;
        true
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }
}

/// An acyclic subset of the intersection edges.
///
/// Edges are kept in acceptance order. When the graph is connected the
/// tree spans every word; otherwise it is a spanning forest and
/// [`is_spanning`](Self::is_spanning) is `false`.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    edges: Vec<IntersectionEdge>,
    sets: UnionFind,
}

impl SpanningTree {
    /// Build a random spanning tree (or forest) of `graph`.
    ///
    /// Candidate edges are shuffled with `rng`, then accepted one by one
    /// whenever they join two different components. Stops once every word
    /// that has an edge is joined, or when candidates run out.
    pub fn random<R: Rng + ?Sized>(graph: &IntersectionGraph, rng: &mut R) -> Self {
        let mut candidates: Vec<IntersectionEdge> = graph.edges().to_vec();
        candidates.shuffle(rng);

        let target = graph.connected_words().saturating_sub(1);
        let mut sets = UnionFind::new(graph.word_count());
        let mut edges = Vec::with_capacity(target);

        for edge in candidates {
            if edges.len() == target {
                break;
            }
            if sets.union(edge.word_a.0, edge.word_b.0) {
                edges.push(edge);
            }
        }

        Self { edges, sets }
    }

    /// Build a tree from `candidates` in the given order, skipping any
    /// edge that would close a cycle.
    pub fn from_edges<I>(candidates: I, word_count: usize) -> Self
    where
        I: IntoIterator<Item = IntersectionEdge>,
    {
        let mut sets = UnionFind::new(word_count);
        let edges = candidates
            .into_iter()
            .filter(|e| sets.union(e.word_a.0, e.word_b.0))
            .collect();
        Self { edges, sets }
    }

    /// Accepted edges, in acceptance order.
    pub fn edges(&self) -> &[IntersectionEdge] {
        &self.edges
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of connected components, counting isolated words.
    pub fn component_count(&self) -> usize {
        self.sets.components()
    }

    /// Whether every word of the attempt is in one component.
    pub fn is_spanning(&self) -> bool {
        self.sets.components() <= 1
    }

    /// Whether `a` and `b` are connected through accepted edges.
    pub fn connected(&mut self, a: WordId, b: WordId) -> bool {
        self.sets.find(a.0) == self.sets.find(b.0)
    }

    /// Pick the root word: the first endpoint of a uniformly chosen edge.
    ///
    /// `None` for an edgeless tree.
    pub fn choose_root<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<WordId> {
        if self.edges.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.edges.len());
        Some(self.edges[i].word_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossgrid_core::WordSet;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tree_for(words: &[&str], seed: u64) -> (IntersectionGraph, SpanningTree) {
        let mut set = WordSet::from_inputs(words);
        let graph = IntersectionGraph::build(&mut set);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let tree = SpanningTree::random(&graph, &mut rng);
        (graph, tree)
    }

    #[test]
    fn union_find_merges_and_counts() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.components(), 4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.components(), 2);
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.components(), 1);
    }

    #[test]
    fn triangle_yields_two_edges() {
        let (_, tree) = tree_for(&["CAT", "CAR", "ART"], 7);
        assert_eq!(tree.len(), 2);
        assert!(tree.is_spanning());
    }

    #[test]
    fn isolated_word_breaks_spanning() {
        let (_, mut tree) = tree_for(&["CAT", "CAR", "HP"], 1);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_spanning());
        assert_eq!(tree.component_count(), 2);
        assert!(tree.connected(WordId(0), WordId(1)));
        assert!(!tree.connected(WordId(0), WordId(2)));
    }

    #[test]
    fn same_seed_same_tree() {
        let words = ["SACHIN", "BIRYANI", "SIMBA", "SANTA", "KINDLE", "MESSI"];
        let (_, a) = tree_for(&words, 99);
        let (_, b) = tree_for(&words, 99);
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn root_comes_from_an_edge() {
        let (_, tree) = tree_for(&["CAT", "CAR", "ART"], 3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let root = tree.choose_root(&mut rng).unwrap();
        assert!(tree.edges().iter().any(|e| e.word_a == root));
    }

    #[test]
    fn fixed_order_skips_cycle_edges() {
        let mut set = WordSet::from_inputs(&["CAT", "CAR", "ART"]);
        let graph = IntersectionGraph::build(&mut set);
        let tree = SpanningTree::from_edges(graph.edges().iter().copied(), graph.word_count());
        assert_eq!(tree.edges(), &graph.edges()[..2]);
        assert!(tree.is_spanning());
    }

    #[test]
    fn edgeless_tree_has_no_root() {
        let (_, tree) = tree_for(&["HP"], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(tree.choose_root(&mut rng).is_none());
        assert!(tree.is_spanning());
    }

    proptest! {
        #[test]
        fn tree_is_acyclic_and_maximal(
            words in prop::collection::vec("[A-F]{2,6}", 1..10),
            seed in any::<u64>(),
        ) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let (graph, tree) = tree_for(&refs, seed);

            // Acyclic: replaying the accepted edges never closes a cycle.
            let mut uf = UnionFind::new(graph.word_count());
            for e in tree.edges() {
                prop_assert!(uf.union(e.word_a.0, e.word_b.0));
            }

            // Maximal: every graph edge lies inside one tree component.
            for e in graph.edges() {
                prop_assert_eq!(uf.find(e.word_a.0), uf.find(e.word_b.0));
            }

            prop_assert_eq!(tree.len() + tree.component_count(), graph.word_count());
        }
    }
}
