//! Word connectivity for crossgrid.
//!
//! Turns a [`WordSet`](crossgrid_core::WordSet) into a traversal plan for
//! the embedder in three steps:
//!
//! 1. [`find_intersection`] pairs two words through one shared letter,
//!    consuming the chosen offsets.
//! 2. [`IntersectionGraph::build`] runs that over every unordered pair.
//! 3. [`SpanningTree::random`] picks a random acyclic subset of the edges
//!    with union-find, and [`TraversalPlan::from_root`] orders it
//!    breadth-first from a root word.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod graph;
pub mod intersection;
pub mod traversal;
pub mod tree;

pub use graph::IntersectionGraph;
pub use intersection::{find_intersection, IntersectionEdge};
pub use traversal::{Step, TraversalPlan};
pub use tree::{SpanningTree, UnionFind};
