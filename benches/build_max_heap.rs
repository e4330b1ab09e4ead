use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use heap_tree::BinaryTree;
use rand::prelude::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    for n in [1_000, 100_000] {
        let tree: BinaryTree<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
        c.bench_function(&format!("build_max_heap {n}"), |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    tree.build_max_heap();
                    tree
                },
                BatchSize::LargeInput,
            )
        });
    }

    let mut tree: BinaryTree<f64> = (0..10_000).map(|_| rng.gen::<f64>()).collect();
    c.bench_function("edges 10000", |b| b.iter(|| tree.edges()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
