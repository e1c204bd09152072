//! Criterion benchmarks for deferred-acceptance runs.
//! Focus sizes: n in {4, 16, 64, 128} pairs per side.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use vizcore::api::{draw_preferences, MatchingState, PairCount, PrefsCfg, ReplayToken};

fn seeded_instance(n: usize) -> MatchingState {
    let (pp, rp) = draw_preferences(
        PrefsCfg {
            pairs: PairCount::Fixed(n),
        },
        ReplayToken {
            seed: 43,
            index: n as u64,
        },
    );
    MatchingState::new(&pp, &rp).expect("drawn instance is valid")
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");
    for &n in &[4usize, 16, 64, 128] {
        group.bench_with_input(BenchmarkId::new("run_to_completion", n), &n, |b, &n| {
            b.iter_batched(
                || seeded_instance(n),
                |mut s| {
                    let _steps = s.run_to_completion();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("blocking_pairs", n), &n, |b, &n| {
            let mut s = seeded_instance(n);
            s.run_to_completion();
            b.iter(|| vizcore::api::blocking_pairs(&s))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
