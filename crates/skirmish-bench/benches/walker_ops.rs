//! Criterion micro-benchmarks for the list-walker primitive.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skirmish_engine::ListWalker;

/// Benchmark: promote a 10K-element list one full pass, 8 elements at a
/// time (a plausible per-tick quantum).
fn bench_walk_10k_forward(c: &mut Criterion) {
    let items: Vec<u32> = (0..10_000).collect();

    c.bench_function("walk_10k_forward", |b| {
        b.iter(|| {
            let mut w = ListWalker::new();
            w.set_direction(true);
            while w.more(items.len()) {
                for _ in 0..8 {
                    if let Some(v) = w.next(&items) {
                        black_box(v);
                    }
                }
            }
        });
    });
}

/// Benchmark: full promote-then-demote round trip over 10K elements.
fn bench_walk_10k_round_trip(c: &mut Criterion) {
    let items: Vec<u32> = (0..10_000).collect();

    c.bench_function("walk_10k_round_trip", |b| {
        b.iter(|| {
            let mut w = ListWalker::new();
            w.set_direction(true);
            while let Some(v) = w.next(&items) {
                black_box(v);
            }
            w.set_direction(false);
            while let Some(v) = w.next(&items) {
                black_box(v);
            }
        });
    });
}

/// Benchmark: interleave promotion with removals at the divider, the
/// worst-case mutation pattern for a walk.
fn bench_walk_with_removals(c: &mut Criterion) {
    c.bench_function("walk_1k_with_removals", |b| {
        b.iter(|| {
            let mut items: Vec<u32> = (0..1000).collect();
            let mut w = ListWalker::new();
            w.set_direction(true);
            while w.more(items.len()) {
                w.next(&items);
                if w.divider() < items.len() {
                    w.check_remove(w.divider(), items.len());
                    items.remove(w.divider());
                }
            }
            black_box(items.len());
        });
    });
}

criterion_group!(
    benches,
    bench_walk_10k_forward,
    bench_walk_10k_round_trip,
    bench_walk_with_removals
);
criterion_main!(benches);
