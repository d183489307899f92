use commonwords::RedBlackTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::{word, Lfsr};

#[derive(Debug, Clone, Copy)]
struct BenchName {
    order: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.order), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_random(&mut g, n_values);
        bench_ascending(&mut g, n_values);
        bench_descending(&mut g, n_values);
    }
}

macro_rules! insert_bench {
    (
        $order:ident,
        $keys:expr
    ) => {
        paste::paste! {
            /// Measure the time needed to insert `n_values` keys into an
            /// empty tree.
            fn [<bench_ $order>]<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
            where
                M: Measurement,
            {
                let keys: Vec<String> = ($keys)(n_values);

                let bench_name = BenchName {
                    order: stringify!($order),
                    n_values,
                };
                g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        || (RedBlackTree::default(), keys.clone()),
                        |(mut t, keys)| {
                            for k in keys {
                                let _ = t.insert(k, 42_u64);
                            }
                            t
                        },
                        criterion::BatchSize::PerIteration,
                    );
                });
            }
        }
    };
}

insert_bench!(random, |n| {
    let mut rand = Lfsr::default();
    (0..n).map(|_| rand.next_word()).collect()
});
insert_bench!(ascending, |n| (0..n).map(|v| word(v as u16)).collect());
insert_bench!(descending, |n| (0..n).rev().map(|v| word(v as u16)).collect());
