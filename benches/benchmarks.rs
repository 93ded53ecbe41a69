//! Benchmarks for Lernmatrix operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lernmatrix::{evaluate, recall, train, PatternPair, TrainingSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// =============================================================================
// Synthetic training set
// =============================================================================

fn synthetic_set(pairs: usize, inputs: usize, classes: usize) -> TrainingSet {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let set: Vec<PatternPair> = (0..pairs)
        .map(|i| {
            let input: Vec<u8> = (0..inputs).map(|_| rng.gen_range(0..=1u8)).collect();
            let mut output = vec![0u8; classes];
            output[i % classes] = 1;
            PatternPair::from_raw(&input, &output).unwrap()
        })
        .collect();
    TrainingSet::new(set).unwrap()
}

fn benchmark_train(c: &mut Criterion) {
    let set = synthetic_set(256, 512, 16);

    c.bench_function("train_256x512", |b| b.iter(|| train(black_box(&set))));
}

fn benchmark_recall(c: &mut Criterion) {
    let set = synthetic_set(256, 512, 16);
    let m = train(&set).unwrap();
    let x = &set.pairs()[0].input;

    c.bench_function("recall_16x512", |b| {
        b.iter(|| recall(black_box(&m), black_box(x)))
    });
}

fn benchmark_evaluate(c: &mut Criterion) {
    let set = synthetic_set(256, 512, 16);
    let m = train(&set).unwrap();

    c.bench_function("evaluate_256", |b| {
        b.iter(|| evaluate(black_box(&m), black_box(set.pairs())))
    });
}

criterion_group!(benches, benchmark_train, benchmark_recall, benchmark_evaluate);
criterion_main!(benches);
