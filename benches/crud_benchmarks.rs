use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linked_tree::LinkedTree;
use std::collections::BTreeMap;
use std::hint::black_box;

// Unbalanced inserts of sorted keys build a chain, so keep N modest.
const N: usize = 2_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

fn random_keys(n: usize) -> Vec<i32> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i32);
    }
    keys
}

fn random_tree(keys: &[i32]) -> LinkedTree<i32> {
    let mut tree = LinkedTree::new();
    for &k in keys {
        tree.insert(k, k);
    }
    tree
}

// ─── Construction ───────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    let ordered = ordered_keys(N);
    let random = random_keys(N);
    let mut group = c.benchmark_group("insert");

    group.bench_function(BenchmarkId::new("LinkedTree/ordered", N), |b| {
        b.iter(|| {
            let mut tree = LinkedTree::new();
            for &k in &ordered {
                tree.insert(k, k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("LinkedTree/random", N), |b| b.iter(|| random_tree(&random)));

    group.bench_function(BenchmarkId::new("BTreeMap/random", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &random {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_bulk_build(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("bulk_build");

    group.bench_function(BenchmarkId::new("from_parallel", N), |b| {
        b.iter(|| LinkedTree::from_parallel(keys.clone(), keys.clone()).unwrap());
    });

    group.bench_function(BenchmarkId::new("from_iter/ordered", N), |b| {
        b.iter(|| (0..N as i32).map(|k| (k, k)).collect::<LinkedTree<i32>>());
    });

    group.finish();
}

// ─── Lookup and removal ─────────────────────────────────────────────────────

fn bench_search(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = random_tree(&keys);
    let map: BTreeMap<i32, i32> = keys.iter().map(|&k| (k, k)).collect();
    let mut group = c.benchmark_group("search");

    group.bench_function(BenchmarkId::new("LinkedTree", N), |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &k in &keys {
                found += tree.search(black_box(k)).map_or(0, |values| values.len());
            }
            found
        });
    });

    group.bench_function(BenchmarkId::new("LinkedTree/depth_iter", N), |b| {
        b.iter(|| keys.iter().filter_map(|&k| tree.depth_iter(black_box(k))).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| keys.iter().filter(|&&k| map.contains_key(&black_box(k))).count());
    });

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = random_tree(&keys);
    let mut group = c.benchmark_group("delete");

    group.bench_function(BenchmarkId::new("LinkedTree/delete", N), |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for &k in &keys {
                    tree.delete(k);
                }
                tree
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("LinkedTree/delete_max", N), |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                while tree.delete_max().is_some() {}
                tree
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Traversal ──────────────────────────────────────────────────────────────

fn bench_iterate(c: &mut Criterion) {
    let tree = random_tree(&random_keys(N));
    let mut group = c.benchmark_group("iterate");

    group.bench_function(BenchmarkId::new("preorder_iter", N), |b| b.iter(|| tree.preorder_iter().map(i64::from).sum::<i64>()));
    group.bench_function(BenchmarkId::new("inorder_iter", N), |b| b.iter(|| tree.inorder_iter().map(i64::from).sum::<i64>()));
    group.bench_function(BenchmarkId::new("write_level_order", N), |b| {
        b.iter(|| {
            let mut out = String::new();
            tree.write_level_order(&mut out).unwrap();
            out
        });
    });
    group.bench_function(BenchmarkId::new("sum_evens", N), |b| b.iter(|| tree.sum_evens()));

    group.finish();
}

criterion_group!(build_benches, bench_insert, bench_bulk_build);

criterion_group!(query_benches, bench_search, bench_delete, bench_iterate);

criterion_main!(build_benches, query_benches);
