//! Benchmark profiles for the crossgrid generator.
//!
//! - [`reference_profile`]: the fifteen sample words, strict adjacency
//! - [`stress_profile`]: 200 synthetic eight-letter words, partial layouts allowed
//! - [`batch_profile`]: 100 attempts of the reference words on `workers` threads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use crossgrid_engine::{AttemptConfig, BatchConfig};
use crossgrid_grid::AdjacencyRule;
use crossgrid_test_utils::fixtures::{synthetic_words, SAMPLE_WORDS};

/// One attempt over the sample words.
pub fn reference_profile(seed: u64) -> AttemptConfig {
    AttemptConfig {
        words: SAMPLE_WORDS.iter().map(|w| w.to_string()).collect(),
        seed,
        allow_partial: true,
        adjacency: AdjacencyRule::Strict,
    }
}

/// One attempt over 200 synthetic words sharing an eight-letter alphabet.
///
/// Almost every pair intersects, so the graph is close to complete.
pub fn stress_profile(seed: u64) -> AttemptConfig {
    AttemptConfig {
        words: synthetic_words(200, 8),
        seed,
        allow_partial: true,
        adjacency: AdjacencyRule::Strict,
    }
}

/// The default 100-attempt batch over the sample words.
pub fn batch_profile(base_seed: u64, workers: usize) -> BatchConfig {
    BatchConfig {
        base_seed,
        workers,
        allow_partial: true,
        ..BatchConfig::new(SAMPLE_WORDS.iter().copied())
    }
}
