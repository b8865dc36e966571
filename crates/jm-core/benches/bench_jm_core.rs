use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jm_core::{group_thousands, min_path_for, SizeReport};
use std::path::Path;

fn bench_report(c: &mut Criterion) {
    c.bench_function("group_thousands_10000", |b| {
        b.iter(|| {
            for i in 0..10_000usize {
                black_box(group_thousands(black_box(i * 7919)));
            }
        })
    });
    c.bench_function("reduction_pct_10000", |b| {
        b.iter(|| {
            for i in 1..10_000usize {
                black_box(SizeReport::new(i * 3, i).reduction_pct());
            }
        })
    });
}

fn bench_paths(c: &mut Criterion) {
    c.bench_function("min_path_for", |b| {
        b.iter(|| black_box(min_path_for(black_box(Path::new("web/script.js")))))
    });
}

criterion_group!(benches, bench_report, bench_paths);
criterion_main!(benches);
