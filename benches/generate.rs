use bnf_gen::{Generator, Grammar};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const RULES: &[&str] = &[
    "<s>::=<np> <vp>",
    "<np>::=<dp> <adjp> <n>|<pn>",
    "<dp>::=the|a",
    "<adjp>::=<adj>|<adj> <adjp>",
    "<adj>::=big|fat|green|wonderful|faulty|subliminal|pretentious",
    "<n>::=dog|cat|man|university|father|mother|child|television",
    "<pn>::=John|Jane|Sally|Spot|Fred|Elmo",
    "<vp>::=<tv> <np>|<iv>",
    "<tv>::=hit|honored|kissed|helped",
    "<iv>::=died|collapsed|laughed|wept",
];

fn bench_build(c: &mut Criterion) {
    c.bench_function("grammar_new", |b| {
        b.iter(|| Grammar::new(black_box(RULES)).unwrap())
    });
}

fn bench_generate(c: &mut Criterion) {
    let grammar = Grammar::new(RULES).unwrap();
    let mut generator = Generator::seeded(&grammar, 42);

    c.bench_function("generate_100_sentences", |b| {
        b.iter(|| generator.generate(black_box("<s>"), 100).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_generate);
criterion_main!(benches);
