use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tf_idf_similarity::{Corpus, TFIDFVectorizer};

/// deterministic synthetic documents built from a small word pool
fn synthetic_texts(doc_num: usize, words_per_doc: usize) -> Vec<String> {
    let pool = [
        "artificial", "intelligence", "deep", "learning", "neural", "network", "black", "hole",
        "gravity", "light", "newton", "law", "motion", "orbital", "resonance", "planet", "moon",
        "the", "of", "and", "a", "is", "in", "to",
    ];
    let mut state: u32 = 0x9e37_79b9;
    (0..doc_num)
        .map(|_| {
            (0..words_per_doc)
                .map(|_| {
                    // xorshift32
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    pool[state as usize % pool.len()]
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn pipeline_benchmark(c: &mut Criterion) {
    let texts = synthetic_texts(50, 200);

    c.bench_function("build_vectorizer", |b| {
        b.iter(|| {
            let v: TFIDFVectorizer = TFIDFVectorizer::new(Corpus::from_texts(black_box(texts.clone())));
            v
        });
    });

    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::from_texts(texts.clone());
    c.bench_function("similarity_pairs", |b| {
        b.iter(|| black_box(&vectorizer).similarity_pairs());
    });
}

criterion_group!(benches, pipeline_benchmark);
criterion_main!(benches);
