use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizshow_core::loader::parse_problems_str;
use quizshow_core::shuffle::{seeded_rng, shuffle_problems};

fn problem_csv(rows: usize) -> String {
    let mut s = String::new();
    for i in 0..rows {
        s.push_str(&format!("{i}+{i}, {} \n", i * 2));
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_problems");

    let small = problem_csv(12);
    let large = problem_csv(10_000);
    let quoted = {
        let mut s = String::new();
        for i in 0..500 {
            s.push_str(&format!("\"what is {i}, doubled?\",\"{}\"\n", i * 2));
        }
        s
    };

    group.bench_function("small", |b| {
        b.iter(|| parse_problems_str(black_box(&small)))
    });

    group.bench_function("large", |b| {
        b.iter(|| parse_problems_str(black_box(&large)))
    });

    group.bench_function("quoted", |b| {
        b.iter(|| parse_problems_str(black_box(&quoted)))
    });

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let problems = parse_problems_str(&problem_csv(10_000)).unwrap();

    c.bench_function("shuffle_10k", |b| {
        let mut rng = seeded_rng(7);
        b.iter(|| {
            let mut batch = problems.clone();
            shuffle_problems(black_box(&mut batch), &mut rng);
            batch
        })
    });
}

criterion_group!(benches, bench_parse, bench_shuffle);
criterion_main!(benches);
