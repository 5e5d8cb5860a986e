use criterion::{criterion_group, criterion_main, Criterion};
use newsgrep_core::tokenizer::tokenize;

fn bench_tokenize(c: &mut Criterion) {
    let paragraph = "Lawmakers reached a tentative agreement late Tuesday on a \
        spending package that would avert a shutdown, capping weeks of tense \
        negotiation over border funding and disaster relief. ";
    let text = paragraph.repeat(200);
    c.bench_function("tokenize_article_body", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
