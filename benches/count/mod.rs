use std::hint::black_box;

use commonwords::Pipeline;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    n_words: usize,
    n_distinct: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}_distinct/n_words", v.n_distinct), v.n_words)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("count");

    for n_words in [1_000, 50_000] {
        for n_distinct in [10, 1_000] {
            bench_param(&mut g, n_words, n_distinct)
        }
    }
}

/// Measure a full pipeline run over a text of `n_words` words drawn from a
/// vocabulary of `n_distinct` words.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_words: usize, n_distinct: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let vocab = (0..n_distinct).map(|_| rand.next_word()).collect::<Vec<_>>();

    let text = (0..n_words)
        .map(|_| vocab[rand.next() as usize % n_distinct].as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let bench_name = BenchName {
        n_words,
        n_distinct,
    };

    g.throughput(Throughput::Bytes(text.len() as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| black_box(Pipeline::default().run(text.as_bytes())))
    });
}
