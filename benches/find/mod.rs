use std::hint::black_box;

use commonwords::RedBlackTree;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    bench: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}_values_{}_n_lookups", v.n_values, v.bench),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("find");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Number of key lookups
        for n_lookups in [100, 1_000] {
            bench_param(&mut g, n_values, n_lookups)
        }
    }
}

/// For a tree containing `n_values`, perform two benchmarks that each perform
/// `n_lookups`, one run causing all hits, one run causing all misses.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_lookups: usize)
where
    M: Measurement,
{
    // The tree must be at least as big as the number of lookups.
    assert!(n_values >= n_lookups);

    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = RedBlackTree::default();

    for _i in 0..n_values {
        let _ = t.insert(rand.next_word(), 42_u64);
    }

    // Hits replay the same PRNG sequence used to populate the tree.
    let hits = {
        let mut rand = Lfsr::default();
        (0..n_lookups).map(|_| rand.next_word()).collect::<Vec<_>>()
    };

    // Misses continue the sequence past the inserted values.
    let misses = (0..n_lookups).map(|_| rand.next_word()).collect::<Vec<_>>();

    for (bench, keys) in [("hit", hits), ("miss", misses)] {
        let bench_name = BenchName {
            bench,
            n_values,
            n_lookups,
        };

        g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
        g.bench_function(BenchmarkId::from(bench_name), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    for k in keys {
                        black_box(t.find(k.as_str()));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
}
