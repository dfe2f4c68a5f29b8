//! crossgrid: a crossword-style letter grid generator.
//!
//! Words are laid out on an integer lattice so that they interlock
//! through shared letters. Every attempt is driven by one seed, so the
//! same words and seed always give the same layout.
//!
//! This is the facade crate that re-exports the public API of the
//! crossgrid sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use crossgrid::prelude::*;
//!
//! let config = AttemptConfig::builder()
//!     .words(["Cat", "Car"])
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let report = run_attempt(&config).unwrap();
//! let layout = &report.layout;
//! assert_eq!(layout.placed_count(), 2);
//! assert_eq!((layout.width(), layout.height()), (3, 3));
//!
//! let text = render_snapshot(layout);
//! assert!(text.starts_with("  C   \nC A T \n  R   \n"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `crossgrid-core` | Positions, words, ids, error types |
//! | [`graph`] | `crossgrid-graph` | Intersection graph, spanning tree, traversal order |
//! | [`grid`] | `crossgrid-grid` | Grid, embedding, layouts, snapshot text, layout hash |
//! | [`engine`] | `crossgrid-engine` | Configuration, attempts, batches, summaries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`crossgrid-core`).
pub use crossgrid_core as types;

/// Intersection discovery and spanning trees (`crossgrid-graph`).
pub use crossgrid_graph as graph;

/// Grid embedding and layout output (`crossgrid-grid`).
///
/// [`grid::Layout`] is the result handed to presentation code;
/// [`grid::render_snapshot`] turns it into text.
pub use crossgrid_grid as grid;

/// Attempt pipeline and batch driver (`crossgrid-engine`).
pub use crossgrid_engine as engine;

/// Common imports for typical crossgrid usage.
pub mod prelude {
    // Core types
    pub use crossgrid_core::{Orientation, Placement, Position, WordId};

    // Errors
    pub use crossgrid_core::{AttemptError, DropReason, InvariantViolation, PlacementConflict};

    // Output
    pub use crossgrid_grid::{
        layout_hash, render_snapshot, write_snapshot, AdjacencyRule, DroppedWord, Layout,
        PlacedWord,
    };

    // Engine
    pub use crossgrid_engine::{
        render_summary, run_attempt, run_batch, write_summary, AttemptConfig, AttemptMetrics,
        AttemptReport, BatchConfig, BatchReport, ConfigError,
    };
}
