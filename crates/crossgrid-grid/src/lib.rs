//! Grid embedding and layout output for crossgrid.
//!
//! [`Grid`] is the sparse letter lattice of one attempt. Words enter it
//! through staged insertion: every cell a word needs is checked against
//! the committed grid first, and only a conflict-free word is written.
//! [`embed`] walks a spanning tree breadth-first and inserts each word
//! across its parent; [`Layout`] is the normalized result handed to
//! presentation code, and [`snapshot`] renders it as text.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod embed;
pub mod grid;
pub mod hash;
pub mod layout;
pub mod snapshot;

pub use cell::{Cell, Occupant};
pub use embed::{anchor_for, embed, embed_plan, EmbedStats, Embedding};
pub use grid::{AdjacencyRule, Bounds, Grid, InsertOutcome};
pub use hash::layout_hash;
pub use layout::{DroppedWord, Layout, PlacedWord};
pub use snapshot::{render_snapshot, write_snapshot, DIVIDER};
