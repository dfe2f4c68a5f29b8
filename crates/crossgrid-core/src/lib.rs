//! Core types for the crossgrid crossword layout generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by every other crate in the workspace:
//! lattice positions and orientations, word identifiers, normalized
//! words with their letter indices, and the error taxonomy of a
//! generation attempt.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod position;
pub mod word;

pub use error::{AttemptError, DropReason, InvariantViolation, PlacementConflict};
pub use id::WordId;
pub use position::{Orientation, Placement, Position};
pub use word::{LetterOffsets, Word, WordSet};
