//! Core traits for the recommendation engine.
//!
//! Both seams of the engine are traits so the backing implementation can
//! be swapped without touching the ranking logic: the approximate string
//! matcher, and the source of precomputed similarity rows.

use catalog::{MovieIdx, SimilarityMatrix};

/// The winning candidate of a fuzzy title resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleMatch {
    /// Canonical catalog title, exactly as stored.
    pub title: String,
    /// Normalized similarity between query and title, on a 0-1 scale.
    pub score: f64,
}

/// Approximate string matching over catalog titles.
pub trait TitleMatcher: Send + Sync {
    /// Returns the name of this matcher (for logging/debugging)
    fn name(&self) -> &str;

    /// Find the single best candidate scoring at least `cutoff` against
    /// `query`, on a 0-1 scale. Ties go to the first candidate seen, so
    /// the result is deterministic for a fixed candidate order.
    ///
    /// Returns `None` when no candidate clears the cutoff.
    fn best_match(
        &self,
        query: &str,
        candidates: &mut dyn Iterator<Item = &str>,
        cutoff: f64,
    ) -> Option<TitleMatch>;
}

/// Source of precomputed pairwise similarity scores.
///
/// Abstracting the row lookup keeps the engine independent of the storage
/// layout; a sparse or memory-mapped backend only has to produce the same
/// `(candidate_index, score)` pairs.
pub trait SimilaritySource: Send + Sync {
    /// Number of catalog rows this source covers.
    fn cardinality(&self) -> usize;

    /// Every `(candidate_index, score)` pair for the given row, including
    /// the self-similarity entry. `None` if `index` is out of range.
    fn row(&self, index: MovieIdx) -> Option<Vec<(MovieIdx, f32)>>;
}

impl SimilaritySource for SimilarityMatrix {
    fn cardinality(&self) -> usize {
        SimilarityMatrix::cardinality(self)
    }

    fn row(&self, index: MovieIdx) -> Option<Vec<(MovieIdx, f32)>> {
        SimilarityMatrix::row(self, index).map(|scores| scores.iter().copied().enumerate().collect())
    }
}
