use std::hint::black_box;

use arpa_kana::KanaTransliterator;
use criterion::{Criterion, criterion_group, criterion_main};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("build", |b| b.iter(KanaTransliterator::default));

    let kana = KanaTransliterator::default();

    assert_eq!(kana.transliterate("HH AH0 L OW1"), "ハロウ");
    c.bench_function("word_4", |b| {
        b.iter(|| kana.transliterate(black_box("HH AH0 L OW1")))
    });

    let long = "F AO1 R TH K W AO1 R T ER0 AH0 M IY1 L Y ER0 EY2 T B EH1 NG T S AH0 N K Y UW1 Z AA K W AH M ER IY N";
    c.bench_function("word_34", |b| b.iter(|| kana.transliterate(black_box(long))));

    let tokens: Vec<&str> = long.split_whitespace().collect();
    c.bench_function("tokens_34", |b| {
        b.iter(|| kana.transliterate_tokens(black_box(&tokens)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
