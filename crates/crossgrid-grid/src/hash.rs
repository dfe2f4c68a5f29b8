//! Layout fingerprints for determinism checks.
//!
//! FNV-1a over the layout's dimensions, its cells in row-major order, and
//! its placements. Not cryptographic; two runs that should agree are
//! compared by hash instead of by full layout.

use crossgrid_core::{Orientation, Position};

use crate::layout::Layout;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_i32(hash: u64, v: i32) -> u64 {
    fnv1a_u32(hash, v as u32)
}

/// Hash of everything a layout shows.
///
/// Empty cells contribute a zero so that shifting letters between rows
/// changes the hash. The attempt seed is not included: equal layouts
/// from different seeds hash equal.
pub fn layout_hash(layout: &Layout) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, layout.width());
    hash = fnv1a_u32(hash, layout.height());

    for y in 0..layout.height() as i32 {
        for x in 0..layout.width() as i32 {
            let letter = layout.letter_at(Position::new(x, y)).map_or(0, u32::from);
            hash = fnv1a_u32(hash, letter);
        }
    }

    for word in layout.placed() {
        hash = fnv1a_u32(hash, word.id.0);
        hash = fnv1a_i32(hash, word.placement.anchor.x);
        hash = fnv1a_i32(hash, word.placement.anchor.y);
        hash = fnv1a_byte(
            hash,
            match word.placement.orientation {
                Orientation::Across => 0,
                Orientation::Down => 1,
            },
        );
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::embed_plan;
    use crate::grid::AdjacencyRule;
    use crossgrid_core::{WordId, WordSet};
    use crossgrid_graph::{IntersectionGraph, SpanningTree, TraversalPlan};

    fn layout(words: &[&str], root: u32, seed: u64) -> Layout {
        let mut set = WordSet::from_inputs(words);
        let graph = IntersectionGraph::build(&mut set);
        let tree = SpanningTree::from_edges(graph.edges().iter().copied(), set.len());
        let plan = TraversalPlan::from_root(&tree, WordId(root), set.len());
        let embedding = embed_plan(&mut set, &plan, AdjacencyRule::Strict).unwrap();
        Layout::from_embedding(embedding, &set, seed).unwrap()
    }

    #[test]
    fn equal_layouts_hash_equal() {
        let a = layout(&["CAT", "CAR"], 0, 1);
        let b = layout(&["CAT", "CAR"], 0, 2);
        assert_eq!(layout_hash(&a), layout_hash(&b));
    }

    #[test]
    fn different_root_changes_hash() {
        let a = layout(&["CAT", "CAR"], 0, 0);
        let b = layout(&["CAT", "CAR"], 1, 0);
        assert_ne!(layout_hash(&a), layout_hash(&b));
    }

    #[test]
    fn hash_is_not_the_offset_basis() {
        let a = layout(&["HP"], 0, 0);
        assert_ne!(layout_hash(&a), FNV_OFFSET);
    }
}
