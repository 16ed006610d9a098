use criterion::{
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
    Throughput,
};
use rand::{
    seq::SliceRandom,
    Rng,
};
use skipset::SkipList;

static SIZES: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 18];

fn shuffled_keys(size: usize) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..size as i64).collect();
    keys.shuffle(&mut rand::thread_rng());
    keys
}

fn filled(size: usize) -> SkipList {
    let mut list = SkipList::new(18).unwrap();
    list.extend(shuffled_keys(size));
    list
}

pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES.iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || shuffled_keys(size),
                |keys| {
                    let mut list = SkipList::new(18).unwrap();
                    list.extend(keys);
                    list
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in SIZES.iter() {
        let list = filled(*size);
        let mut rng = rand::thread_rng();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| list.search(rng.gen_range(0..size as i64)));
        });
    }
}

pub fn delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for size in SIZES.iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || (filled(size), shuffled_keys(size)),
                |(mut list, keys)| {
                    for key in keys {
                        list.delete(key);
                    }
                    list
                },
                BatchSize::LargeInput,
            );
        });
    }
}

criterion_group!(benches, insert, search, delete);
criterion_main!(benches);
