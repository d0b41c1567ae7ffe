use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lhsopt::{Ese, Lhd};
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

fn criterion_ese(c: &mut Criterion) {
    let dim = 5;
    let sizes = [10, 50];

    let mut group = c.benchmark_group("lhsopt");
    group.sample_size(10);
    for size in sizes {
        let design = Lhd::new()
            .with_rng(Xoshiro256Plus::seed_from_u64(42))
            .sample::<f64>(size, dim);
        group.bench_function(format!("ese-{size}-pt-{dim}-dim"), |b| {
            b.iter(|| {
                black_box(
                    Ese::new()
                        .with_rng(Xoshiro256Plus::seed_from_u64(0))
                        .outer_iters(2)
                        .optimize(&design)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_ese);
criterion_main!(benches);
