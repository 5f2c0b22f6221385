//! Integration tests for the recommender.
//!
//! These run the full path the binary takes: write artifacts to disk,
//! load them through the catalog loader, and recommend against the
//! resulting bundle.

use catalog::ModelBundle;
use recommender::{RecommendError, Recommender, TitleMatch, TitleMatcher};
use std::path::PathBuf;
use std::sync::Arc;

const MOVIES_CSV: &str = "\
title,genres,overview,vote_average
Toy Story,\"Animation, Comedy\",\"A cowboy doll is profoundly threatened when a new spaceman figure supplants him.\",8.3
Toy Story 2,\"Animation, Comedy\",Woody is stolen by a toy collector.,7.9
Up,\"Animation, Adventure\",,8.2
Heat,\"Crime, Thriller\",A cat-and-mouse game across Los Angeles.,
";

const SIMILARITY_JSON: &str = "[
    [1.0, 0.82, 0.35, 0.02],
    [0.82, 1.0, 0.31, 0.01],
    [0.35, 0.31, 1.0, 0.05],
    [0.02, 0.01, 0.05, 1.0]
]";

fn load_bundle(name: &str) -> ModelBundle {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("recommender-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(catalog::loader::MOVIES_FILE), MOVIES_CSV).unwrap();
    std::fs::write(dir.join(catalog::loader::SIMILARITY_FILE), SIMILARITY_JSON).unwrap();
    let bundle = ModelBundle::load_from_dir(&dir).unwrap();
    let _ = std::fs::remove_dir_all(dir);
    bundle
}

fn engine(name: &str) -> Recommender {
    let bundle = load_bundle(name);
    Recommender::new(Arc::new(bundle.catalog), Arc::new(bundle.similarity)).unwrap()
}

#[test]
fn test_end_to_end_recommend() {
    let engine = engine("e2e");
    let set = engine.recommend("toy story", 2).unwrap();

    assert_eq!(set.matched_title, "Toy Story");
    assert_eq!(set.matched_index, 0);
    assert_eq!(set.items.len(), 2);

    assert_eq!(set.items[0].title, "Toy Story 2");
    assert_eq!(set.items[0].similarity_score, 0.82);
    assert_eq!(set.items[0].genres.as_deref(), Some("Animation, Comedy"));
    assert_eq!(set.items[0].vote_average, Some(7.9));

    assert_eq!(set.items[1].title, "Up");
    // Missing CSV fields stay missing in the output record.
    assert_eq!(set.items[1].overview, None);
}

#[test]
fn test_end_to_end_no_match() {
    let engine = engine("nomatch");
    let err = engine.recommend("zzz-nonexistent-qqq", 5).unwrap_err();
    assert!(matches!(err, RecommendError::NoMatch { .. }));
}

#[test]
fn test_result_set_serializes() {
    let engine = engine("json");
    let set = engine.recommend("Heat", 1).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    assert!(json.contains("\"matched_title\":\"Heat\""));
    assert!(json.contains("\"source_index\""));
}

/// A matcher that only accepts exact equality, to prove the seam is
/// actually pluggable.
struct ExactMatcher;

impl TitleMatcher for ExactMatcher {
    fn name(&self) -> &str {
        "exact"
    }

    fn best_match(
        &self,
        query: &str,
        candidates: &mut dyn Iterator<Item = &str>,
        _cutoff: f64,
    ) -> Option<TitleMatch> {
        for candidate in candidates {
            if candidate == query {
                return Some(TitleMatch {
                    title: candidate.to_string(),
                    score: 1.0,
                });
            }
        }
        None
    }
}

#[test]
fn test_custom_matcher_swaps_resolution() {
    let engine = engine("exact").with_matcher(ExactMatcher);

    // The fuzzy default would resolve this; the exact matcher refuses.
    let err = engine.recommend("toy story", 2).unwrap_err();
    assert!(matches!(err, RecommendError::NoMatch { .. }));

    let set = engine.recommend("Toy Story", 2).unwrap();
    assert_eq!(set.matched_title, "Toy Story");
}
