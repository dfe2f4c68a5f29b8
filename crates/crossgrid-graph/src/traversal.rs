//! Breadth-first embedding order over a spanning tree.

use std::collections::VecDeque;

use crossgrid_core::WordId;
use smallvec::SmallVec;

use crate::intersection::IntersectionEdge;
use crate::tree::SpanningTree;

/// One embedding step: place `new` by crossing the already-visited `base`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Word visited before this step.
    pub base: WordId,
    /// Word positioned by this step.
    pub new: WordId,
    /// The tree edge joining them.
    pub edge: IntersectionEdge,
}

impl Step {
    /// Offset of the shared letter inside `base`.
    pub fn base_offset(&self) -> usize {
        if self.base == self.edge.word_a {
            self.edge.offset_a
        } else {
            self.edge.offset_b
        }
    }

    /// Offset of the shared letter inside `new`.
    pub fn new_offset(&self) -> usize {
        if self.new == self.edge.word_a {
            self.edge.offset_a
        } else {
            self.edge.offset_b
        }
    }
}

/// The order in which the embedder visits tree edges.
///
/// Every step's `base` is either the root or the `new` word of an
/// earlier step. Words in other components of the forest are listed in
/// [`unreached`](Self::unreached).
#[derive(Clone, Debug)]
pub struct TraversalPlan {
    root: WordId,
    steps: Vec<Step>,
    unreached: Vec<WordId>,
}

impl TraversalPlan {
    /// Breadth-first expansion of `tree` from `root` over `word_count`
    /// words. Neighbours are visited in tree acceptance order.
    pub fn from_root(tree: &SpanningTree, root: WordId, word_count: usize) -> Self {
        let mut adjacency: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); word_count];
        for (i, edge) in tree.edges().iter().enumerate() {
            if let Some(list) = adjacency.get_mut(edge.word_a.index()) {
                list.push(i);
            }
            if let Some(list) = adjacency.get_mut(edge.word_b.index()) {
                list.push(i);
            }
        }

        let mut visited = vec![false; word_count];
        let mut steps = Vec::with_capacity(tree.len());
        let mut queue = VecDeque::new();
        if let Some(v) = visited.get_mut(root.index()) {
            *v = true;
            queue.push_back(root);
        }

        while let Some(base) = queue.pop_front() {
            for &i in &adjacency[base.index()] {
                let edge = tree.edges()[i];
                let Some(new) = edge.other(base) else {
                    continue;
                };
                if visited[new.index()] {
                    continue;
                }
                visited[new.index()] = true;
                steps.push(Step { base, new, edge });
                queue.push_back(new);
            }
        }

        let unreached = visited
            .iter()
            .enumerate()
            .filter(|(_, &seen)| !seen)
            .map(|(i, _)| WordId(i as u32))
            .collect();

        Self {
            root,
            steps,
            unreached,
        }
    }

    /// The root word.
    pub fn root(&self) -> WordId {
        self.root
    }

    /// Steps in visiting order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Words outside the root's component, in id order.
    pub fn unreached(&self) -> &[WordId] {
        &self.unreached
    }
}
