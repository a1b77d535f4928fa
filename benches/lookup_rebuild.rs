use ahash::RandomState;
use compiled_lookup::CompiledLookupTable;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;
use std::collections::HashMap;

const COUNTS: &[usize] = &[10, 100, 1_000, 10_000, 100_000];

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key_{}", i)).collect()
}

pub fn lookup_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for &count in COUNTS {
        let keys = keys(count);
        group.throughput(criterion::Throughput::Elements(count as u64));
        group.bench_function(&format!("HashMap ({})", count), |b| {
            let mut table = HashMap::<String, usize, RandomState>::default();
            for (i, key) in keys.iter().enumerate() {
                table.insert(key.clone(), i);
            }
            b.iter(|| {
                for (i, key) in keys.iter().enumerate() {
                    assert_eq!(table.get(black_box(key.as_str())), Some(&i));
                }
            });
        });
        group.bench_function(&format!("IndexMap ({})", count), |b| {
            let mut table = IndexMap::<String, usize, RandomState>::default();
            for (i, key) in keys.iter().enumerate() {
                table.insert(key.clone(), i);
            }
            b.iter(|| {
                for (i, key) in keys.iter().enumerate() {
                    assert_eq!(table.get(black_box(key.as_str())), Some(&i));
                }
            });
        });
        group.bench_function(&format!("CompiledLookupTable ({})", count), |b| {
            let mut table = CompiledLookupTable::<String, usize>::new();
            for (i, key) in keys.iter().enumerate() {
                table.write(key.clone(), i);
            }
            table.rebuild();
            b.iter(|| {
                for (i, key) in keys.iter().enumerate() {
                    assert_eq!(table.lookup(black_box(key.as_str())), Ok(&i));
                }
            });
        });
    }
}

fn rebuild_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for &count in COUNTS {
        group.throughput(criterion::Throughput::Elements(count as u64));
        group.bench_function(&format!("CompiledLookupTable ({})", count), |b| {
            let mut table: CompiledLookupTable<usize, usize> =
                (0..count).map(|key| (key, key)).collect();
            b.iter(|| {
                table.rebuild();
                black_box(table.stats());
            });
        });
    }
}

criterion_group!(benches, lookup_benchmarks, rebuild_benchmarks);
criterion_main!(benches);
