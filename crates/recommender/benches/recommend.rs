//! Benchmarks for the recommend operation
//!
//! Run with: cargo bench --package recommender
//!
//! Uses a synthetic catalog so the benchmark needs no on-disk artifacts.

use catalog::{CatalogEntry, CatalogStore, SimilarityMatrix};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recommender::Recommender;
use std::sync::Arc;

/// Build a synthetic engine over `n` movies with deterministic
/// pseudo-random similarity scores.
fn synthetic_engine(n: usize) -> Recommender {
    let entries = (0..n)
        .map(|i| CatalogEntry {
            index: i,
            title: format!("Movie {i}"),
            genres: Some("Drama".to_string()),
            overview: None,
            vote_average: Some(6.5),
        })
        .collect();
    let catalog = Arc::new(CatalogStore::from_entries(entries));

    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        ((i * 31 + j * 17) % 1000) as f32 / 1000.0
                    }
                })
                .collect()
        })
        .collect();
    let similarity = Arc::new(SimilarityMatrix::from_rows(rows).unwrap());

    Recommender::new(catalog, similarity).expect("synthetic dimensions match")
}

fn bench_recommend_exact_title(c: &mut Criterion) {
    let engine = synthetic_engine(1000);

    c.bench_function("recommend_top10_of_1000", |b| {
        b.iter(|| {
            let set = engine.recommend(black_box("Movie 500"), black_box(10));
            black_box(set)
        })
    });
}

fn bench_recommend_fuzzy_query(c: &mut Criterion) {
    let engine = synthetic_engine(1000);

    c.bench_function("recommend_fuzzy_of_1000", |b| {
        b.iter(|| {
            let set = engine.recommend(black_box("movi 500"), black_box(10));
            black_box(set)
        })
    });
}

criterion_group!(benches, bench_recommend_exact_title, bench_recommend_fuzzy_query);
criterion_main!(benches);
