//! Attempt pipeline and multi-attempt driver for crossgrid.
//!
//! [`run_attempt`] runs one seeded generation: intersection graph, random
//! spanning tree, tree-guided embedding, normalization. [`run_batch`]
//! repeats it over derived seeds, sequentially or on a small worker pool,
//! and keeps every outcome so callers can pick the best layout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attempt;
pub mod batch;
pub mod config;
pub mod metrics;
pub mod summary;

pub use attempt::{run_attempt, AttemptReport};
pub use batch::{run_batch, AttemptRecord, BatchReport};
pub use config::{AttemptConfig, AttemptConfigBuilder, BatchConfig, ConfigError};
pub use metrics::AttemptMetrics;
pub use summary::{render_summary, write_layout_summary, write_summary};
