use std::collections::BTreeSet;
use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_runtime_config, seeded_rng};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use rand::seq::SliceRandom;

use rbtree::RbTree;

const SIZES: [usize; 4] = [1_000, 16_000, 64_000, 256_000];
const MIXED_OPS: usize = 10_000;

trait KeySet {
    fn new() -> Self;
    fn insert(&mut self, key: i64) -> bool;
    fn delete(&mut self, key: i64) -> bool;
    fn contains(&self, key: i64) -> bool;
}

impl KeySet for RbTree<i64> {
    fn new() -> Self {
        RbTree::new()
    }

    fn insert(&mut self, key: i64) -> bool {
        RbTree::insert(self, key).is_ok()
    }

    fn delete(&mut self, key: i64) -> bool {
        RbTree::delete(self, &key)
    }

    fn contains(&self, key: i64) -> bool {
        RbTree::contains(self, &key)
    }
}

impl KeySet for BTreeSet<i64> {
    fn new() -> Self {
        BTreeSet::new()
    }

    fn insert(&mut self, key: i64) -> bool {
        BTreeSet::insert(self, key)
    }

    fn delete(&mut self, key: i64) -> bool {
        self.remove(&key)
    }

    fn contains(&self, key: i64) -> bool {
        BTreeSet::contains(self, &key)
    }
}

#[derive(Clone, Copy)]
enum Op {
    Insert(i64),
    Delete(i64),
    Contains(i64),
}

fn shuffled_keys(size: usize, salt: u64) -> Vec<i64> {
    let mut keys = (0..size as i64).collect::<Vec<_>>();
    keys.shuffle(&mut seeded_rng(salt));
    keys
}

fn mixed_ops(size: usize) -> Vec<Op> {
    let mut rng = seeded_rng(size as u64 ^ 0xA5);
    let span = 2 * size as i64;
    (0..MIXED_OPS)
        .map(|_| {
            let key = rng.random_range(0..span);
            match rng.random_range(0..10) {
                0..=3 => Op::Insert(key),
                4..=6 => Op::Delete(key),
                _ => Op::Contains(key),
            }
        })
        .collect()
}

fn fill<S: KeySet>(keys: &[i64]) -> S {
    let mut set = S::new();
    for &k in keys {
        black_box(set.insert(k));
    }
    set
}

fn time_insert<S: KeySet>(keys: &[i64], iters: u64) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let start = Instant::now();
        let set = fill::<S>(keys);
        total += start.elapsed();
        drop(black_box(set));
    }
    total
}

fn time_delete<S: KeySet>(keys: &[i64], order: &[i64], iters: u64) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut set = fill::<S>(keys);
        let start = Instant::now();
        for &k in order {
            black_box(set.delete(k));
        }
        total += start.elapsed();
    }
    total
}

fn time_mixed<S: KeySet>(keys: &[i64], ops: &[Op], iters: u64) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut set = fill::<S>(keys);
        let start = Instant::now();
        for &op in ops {
            match op {
                Op::Insert(k) => black_box(set.insert(k)),
                Op::Delete(k) => black_box(set.delete(k)),
                Op::Contains(k) => black_box(set.contains(k)),
            };
        }
        total += start.elapsed();
    }
    total
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree/insert");
    for &size in &SIZES {
        apply_runtime_config(size, &mut group);
        let keys = shuffled_keys(size, 1);
        group.bench_function(BenchmarkId::new("rbtree", size), |b| {
            b.iter_custom(|iters| time_insert::<RbTree<i64>>(&keys, iters))
        });
        group.bench_function(BenchmarkId::new("std_btree", size), |b| {
            b.iter_custom(|iters| time_insert::<BTreeSet<i64>>(&keys, iters))
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree/delete");
    for &size in &SIZES {
        apply_runtime_config(size, &mut group);
        let keys = shuffled_keys(size, 2);
        let order = shuffled_keys(size, 3);
        group.bench_function(BenchmarkId::new("rbtree", size), |b| {
            b.iter_custom(|iters| time_delete::<RbTree<i64>>(&keys, &order, iters))
        });
        group.bench_function(BenchmarkId::new("std_btree", size), |b| {
            b.iter_custom(|iters| time_delete::<BTreeSet<i64>>(&keys, &order, iters))
        });
    }
    group.finish();
}

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("rbtree/mixed");
    for &size in &SIZES {
        apply_runtime_config(size, &mut group);
        let keys = shuffled_keys(size, 4);
        let ops = mixed_ops(size);
        group.bench_function(BenchmarkId::new("rbtree", size), |b| {
            b.iter_custom(|iters| time_mixed::<RbTree<i64>>(&keys, &ops, iters))
        });
        group.bench_function(BenchmarkId::new("std_btree", size), |b| {
            b.iter_custom(|iters| time_mixed::<BTreeSet<i64>>(&keys, &ops, iters))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_delete, bench_mixed);
criterion_main!(benches);
