use criterion::{BenchmarkId, black_box, criterion_group, criterion_main, Criterion};

use subanagram::*;
use subanagram::test::*;

pub fn frequencies_benchmark(c: &mut Criterion) {
    c.bench_function("frequencies_word_6_chars", |b| b.iter(|| {
        frequencies(black_box("houses"))
    }));

    c.bench_function("frequencies_word_12_chars", |b| b.iter(|| {
        frequencies(black_box("benchmarking"))
    }));
}

pub fn build_benchmark(c: &mut Criterion) {
    let dictionary = get_test_dictionary();
    for strategy in Strategy::ALL {
        c.bench_with_input(BenchmarkId::new("build", strategy), &dictionary, |b, dictionary| b.iter(|| {
            AnyIndex::build(strategy, dictionary).expect("build")
        }));
    }
}

pub fn find_benchmark(c: &mut Criterion) {
    let dictionary = get_test_dictionary();
    for strategy in Strategy::ALL {
        let solver = Solver::new(AnyIndex::build(strategy, &dictionary).expect("build"));
        for query in ["cat", "listen", "stressed"] {
            c.bench_with_input(BenchmarkId::new(format!("find_{}", strategy), query), &query, |b, query| b.iter(|| {
                solver.find(black_box(query)).expect("lookup")
            }));
        }
    }
}

criterion_group!(benches, frequencies_benchmark, build_benchmark, find_benchmark);
criterion_main!(benches);
