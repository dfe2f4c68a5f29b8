//! Test fixtures and layout invariant checks for crossgrid development.
//!
//! [`fixtures`] holds word lists shared by unit tests, integration tests
//! and benchmarks. [`invariants`] holds assertion helpers every finished
//! [`Layout`](crossgrid_grid::Layout) must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod invariants;

pub use invariants::assert_layout_invariants;
