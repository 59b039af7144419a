//! Benchmarks for board generation.
//!
//! # Benchmarks
//!
//! - **`generator`**: Generates one board per difficulty from fixed seeds,
//!   covering seed derivation, shuffling, and the solvability correction.
//!
//! # Test Data
//!
//! Uses three fixed seeds to keep runs reproducible:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use tileslide_core::Difficulty;
use tileslide_generator::{BoardGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        let generator = BoardGenerator::for_difficulty(difficulty);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{}", difficulty.name()), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets = bench_generator
);
criterion_main!(benches);
