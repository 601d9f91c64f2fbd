use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use kata::fan_in::{merge, source};
use tokio::runtime::Builder;

// Number of values pushed through the merge per benchmark iteration.
const TOTAL_VALUES: usize = 4096;

/// Benchmarks draining `num_sources` pre-filled sources through a single
/// merged channel.
fn bench_merge(c: &mut Criterion, num_sources: usize) {
    let runtime = Builder::new_multi_thread().enable_all().build().unwrap();
    let per_source = TOTAL_VALUES / num_sources;

    let mut group = c.benchmark_group(format!("merge/sources/{num_sources}"));
    group.throughput(Throughput::Elements((per_source * num_sources) as u64));

    group.bench_function(format!("elems/{}", per_source * num_sources), |b| {
        b.to_async(&runtime).iter(move || async move {
            let sources = (0..num_sources).map(|s| source((0..per_source).map(move |i| s + i)));
            let mut merged = merge(sources);
            while let Some(value) = merged.recv().await {
                black_box(value);
            }
        });
    });

    group.finish();
}

fn benches(c: &mut Criterion) {
    for num_sources in [1, 4, 16, 64] {
        bench_merge(c, num_sources);
    }
}

criterion_group!(merge_benches, benches);
criterion_main!(merge_benches);
