// Ranking throughput benchmarks over generated vendor pools
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use vendx_core::{rank, Candidate};

const NAME_WORDS: &[&str] = &[
    "office", "steel", "fresh", "global", "prime", "united", "metro", "alpha", "catering",
    "logistics", "supply", "tech", "industrial", "furniture", "electronics", "paper",
];

const CATEGORIES: &[&str] = &[
    "Furniture",
    "Electronics",
    "Catering",
    "Logistics",
    "Office Supplies",
    "Industrial Equipment",
];

fn generate_pool(size: usize) -> Vec<Candidate> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            let a = NAME_WORDS[rng.random_range(0..NAME_WORDS.len())];
            let b = NAME_WORDS[rng.random_range(0..NAME_WORDS.len())];
            let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
            Candidate::new(i as i64, format!("{a} {b} {i}"), category)
        })
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let query = "Supply and delivery of office chairs, desks and filing cabinets";

    for size in [10, 100, 1000].iter() {
        let pool = generate_pool(*size);
        group.bench_with_input(BenchmarkId::new("vendx", size), size, |b, _| {
            b.iter(|| {
                let result = rank(1, black_box(query), black_box(&pool)).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rank);
criterion_main!(benches);
