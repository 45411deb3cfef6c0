use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use tally_eval::evaluate;
use tally_lexer::tokenize;
use tally_parser::to_postfix;

// Mix of every token kind, nested parentheses and unary minus
const TERM: &str = "(12.5*(3-1)+-4/2)%*7";

fn long_expression(terms: usize) -> String {
    vec![TERM; terms].join("+")
}

fn bench_pipeline(c: &mut Criterion) {
    let source = long_expression(500);

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("tokenize", |b| {
        b.iter(|| black_box(tokenize(black_box(&source))))
    });

    let tokens = tokenize(&source).expect("benchmark expression tokenizes");
    group.bench_function("to_postfix", |b| {
        b.iter(|| black_box(to_postfix(black_box(&tokens))))
    });

    group.bench_function("evaluate", |b| {
        b.iter_batched(
            || source.clone(),
            |s| black_box(evaluate(&s)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
