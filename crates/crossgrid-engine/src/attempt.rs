//! One seeded generation attempt.

use std::time::Instant;

use crossgrid_core::{AttemptError, WordId, WordSet};
use crossgrid_graph::{IntersectionGraph, SpanningTree, TraversalPlan};
use crossgrid_grid::{embed_plan, Layout};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, debug_span};

use crate::config::AttemptConfig;
use crate::metrics::AttemptMetrics;

/// A finished attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptReport {
    /// The normalized layout.
    pub layout: Layout,
    /// Counters and timings.
    pub metrics: AttemptMetrics,
}

fn micros(since: Instant) -> u64 {
    since.elapsed().as_micros() as u64
}

/// Run the full pipeline once.
///
/// The RNG is seeded from `config.seed` and drives the tree shuffle and
/// the root choice, in that order, so equal configs give equal layouts.
/// `config` is expected to have passed [`AttemptConfig::validate`]; an
/// empty word list surfaces as an invariant violation.
///
/// Fails with [`AttemptError::StructuralFailure`] when some words cannot
/// be reached from the root and `config.allow_partial` is off.
pub fn run_attempt(config: &AttemptConfig) -> Result<AttemptReport, AttemptError> {
    let span = debug_span!("attempt", seed = config.seed, words = config.words.len());
    let _guard = span.enter();

    let started = Instant::now();
    let mut metrics = AttemptMetrics::default();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut words = WordSet::from_inputs(&config.words);
    metrics.words = words.len() as u32;

    let phase = Instant::now();
    let graph = IntersectionGraph::build(&mut words);
    metrics.pairs_examined = graph.pairs_examined() as u64;
    metrics.edges = graph.len() as u32;
    metrics.graph_us = micros(phase);

    let phase = Instant::now();
    let tree = SpanningTree::random(&graph, &mut rng);
    let root = tree.choose_root(&mut rng).unwrap_or(WordId(0));
    let plan = TraversalPlan::from_root(&tree, root, words.len());
    metrics.tree_edges = tree.len() as u32;
    metrics.components = tree.component_count() as u32;
    metrics.tree_us = micros(phase);

    if !plan.unreached().is_empty() && !config.allow_partial {
        let unreached: Vec<String> = plan
            .unreached()
            .iter()
            .filter_map(|&id| words.get(id))
            .map(|w| w.text().to_string())
            .collect();
        debug!(
            components = tree.component_count(),
            unreached = unreached.len(),
            "words do not form one component"
        );
        return Err(AttemptError::StructuralFailure {
            components: tree.component_count(),
            unreached,
        });
    }

    let phase = Instant::now();
    let embedding = embed_plan(&mut words, &plan, config.adjacency)?;
    let stats = embedding.stats.clone();
    let layout = Layout::from_embedding(embedding, &words, config.seed)?;
    metrics.embed_us = micros(phase);

    metrics.placed = layout.placed_count() as u32;
    metrics.letter_mismatches = stats.letter_mismatches;
    metrics.parallel_neighbours = stats.parallel_neighbours;
    metrics.parallel_overlaps = stats.parallel_overlaps;
    metrics.parent_unplaced = stats.parent_unplaced;
    metrics.disconnected = stats.disconnected;
    metrics.total_us = micros(started);

    debug!(
        placed = metrics.placed,
        dropped = layout.dropped().len(),
        width = layout.width(),
        height = layout.height(),
        "attempt finished"
    );

    Ok(AttemptReport { layout, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossgrid_core::{DropReason, Orientation, Position};
    use crossgrid_grid::{layout_hash, AdjacencyRule};

    fn config(words: &[&str], seed: u64) -> AttemptConfig {
        AttemptConfig::builder()
            .words(words.iter().copied())
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn same_seed_same_layout() {
        let words = ["Sachin", "Biryani", "Simba", "Santa", "Kindle", "Messi"];
        let a = run_attempt(&config(&words, 17));
        let b = run_attempt(&config(&words, 17));
        match (a, b) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.layout, b.layout);
                assert_eq!(layout_hash(&a.layout), layout_hash(&b.layout));
                assert_eq!(a.metrics.without_timings(), b.metrics.without_timings());
            }
            (Err(a), Err(b)) => assert_eq!(a, b),
            (a, b) => panic!("diverged: {a:?} vs {b:?}"),
        }
    }

    #[test]
    fn cat_car_layout() {
        let report = run_attempt(&config(&["cat", "car"], 0)).unwrap();
        let layout = &report.layout;
        // The only edge is CAT-CAR, so CAT is the root.
        assert_eq!(layout.root(), WordId(0));
        assert_eq!((layout.width(), layout.height()), (3, 3));
        assert_eq!(layout.placed()[1].placement.orientation, Orientation::Down);
        assert_eq!(layout.letter_at(Position::new(1, 0)), Some('C'));
        assert_eq!(report.metrics.edges, 1);
        assert_eq!(report.metrics.pairs_examined, 1);
        assert_eq!(report.metrics.placed, 2);
    }

    #[test]
    fn relaxed_rule_places_all_three() {
        for seed in 0..8 {
            let config = AttemptConfig::builder()
                .words(["CAT", "CAR", "ART"])
                .seed(seed)
                .adjacency(AdjacencyRule::Relaxed)
                .build()
                .unwrap();
            let report = run_attempt(&config).unwrap();
            assert_eq!(report.layout.placed_count(), 3, "seed {seed}");
            assert_eq!(report.metrics.tree_edges, 2);
        }
    }

    #[test]
    fn isolated_word_is_structural_failure() {
        let err = run_attempt(&config(&["CAT", "CAR", "HP"], 3)).unwrap_err();
        assert_eq!(
            err,
            AttemptError::StructuralFailure {
                components: 2,
                unreached: vec!["HP".to_string()],
            }
        );
    }

    #[test]
    fn partial_layout_drops_isolated_word() {
        let config = AttemptConfig::builder()
            .words(["CAT", "CAR", "HP"])
            .seed(3)
            .allow_partial(true)
            .build()
            .unwrap();
        let report = run_attempt(&config).unwrap();
        assert_eq!(report.layout.placed_count(), 2);
        assert_eq!(report.layout.dropped()[0].text, "HP");
        assert_eq!(report.layout.dropped()[0].reason, DropReason::Disconnected);
        assert_eq!(report.metrics.disconnected, 1);
        assert_eq!(report.layout.input_count(), 3);
    }

    #[test]
    fn single_word_is_placed_alone() {
        let report = run_attempt(&config(&["Kindle"], 5)).unwrap();
        assert_eq!(report.layout.placed_count(), 1);
        assert_eq!((report.layout.width(), report.layout.height()), (6, 1));
        assert_eq!(report.metrics.tree_edges, 0);
    }

    #[test]
    fn empty_words_is_invariant_violation() {
        let config = AttemptConfig {
            words: Vec::new(),
            seed: 0,
            allow_partial: false,
            adjacency: AdjacencyRule::Strict,
        };
        assert!(matches!(
            run_attempt(&config),
            Err(AttemptError::InvariantViolation(_))
        ));
    }
}
