//! Criterion micro-benchmarks for the pipeline stages.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use crossgrid_core::{WordId, WordSet};
use crossgrid_graph::{IntersectionGraph, SpanningTree, TraversalPlan};
use crossgrid_grid::{embed_plan, AdjacencyRule};
use crossgrid_test_utils::fixtures::synthetic_words;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: full pair scan over 200 words (19,900 pairs).
fn bench_graph_build_200(c: &mut Criterion) {
    let words = synthetic_words(200, 8);
    c.bench_function("graph_build_200", |b| {
        b.iter(|| {
            let mut set = WordSet::from_inputs(&words);
            let graph = IntersectionGraph::build(&mut set);
            black_box(graph.len());
        });
    });
}

/// Benchmark: shuffle and union-find acceptance over a prebuilt graph.
fn bench_spanning_tree_200(c: &mut Criterion) {
    let words = synthetic_words(200, 8);
    let mut set = WordSet::from_inputs(&words);
    let graph = IntersectionGraph::build(&mut set);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("spanning_tree_200", |b| {
        b.iter(|| {
            let tree = SpanningTree::random(&graph, &mut rng);
            black_box(tree.len());
        });
    });
}

/// Benchmark: embedding a fixed plan; the word set is rebuilt each
/// iteration because embedding records placements on it.
fn bench_embed_200(c: &mut Criterion) {
    let words = synthetic_words(200, 8);
    let mut template = WordSet::from_inputs(&words);
    let graph = IntersectionGraph::build(&mut template);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let tree = SpanningTree::random(&graph, &mut rng);
    let root = tree.choose_root(&mut rng).unwrap_or(WordId(0));
    let plan = TraversalPlan::from_root(&tree, root, template.len());

    c.bench_function("embed_200", |b| {
        b.iter(|| {
            let mut set = template.clone();
            let embedding = embed_plan(&mut set, &plan, AdjacencyRule::Strict).unwrap();
            black_box(embedding.placed.len());
        });
    });
}

criterion_group!(
    benches,
    bench_graph_build_200,
    bench_spanning_tree_200,
    bench_embed_200
);
criterion_main!(benches);
