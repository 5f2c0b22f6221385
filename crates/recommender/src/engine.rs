//! # Recommendation Engine
//!
//! Resolves a free-text movie name to a catalog entry and returns the
//! top-N entries most similar to it, in order:
//! 1. Fuzzy title resolution over all catalog titles
//! 2. Title -> catalog index (lowest index on duplicate titles)
//! 3. Read the full similarity row for that index
//! 4. Sort by score descending, ties by ascending index
//! 5. Walk the ranking, skipping every row whose title equals the
//!    matched title, and keep the first N survivors
//! 6. Assemble output records from the surviving catalog entries
//!
//! The engine holds only shared read-only state, so a call is a pure
//! function of `(query, limit)` and the loaded data; concurrent calls
//! need no locking.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use catalog::{CatalogStore, MovieIdx};

use crate::error::{RecommendError, Result};
use crate::matcher::DiceTitleMatcher;
use crate::traits::{SimilaritySource, TitleMatcher};
use crate::types::{Recommendation, RecommendationSet};

/// Minimum acceptable fuzzy-match score, on a 0-1 scale. Queries whose
/// best candidate falls below this resolve to `NoMatch`.
pub const MATCH_CUTOFF: f64 = 0.1;

/// The recommend operation over a loaded catalog and similarity source.
pub struct Recommender {
    catalog: Arc<CatalogStore>,
    similarity: Arc<dyn SimilaritySource>,
    matcher: Box<dyn TitleMatcher>,
}

impl Recommender {
    /// Create an engine over a catalog/similarity pair, with the default
    /// bigram-ratio matcher.
    ///
    /// Cardinality is revalidated here: a mismatched pair is rejected
    /// with `DimensionMismatch` so no request can ever be served from
    /// inconsistent state.
    pub fn new(
        catalog: Arc<CatalogStore>,
        similarity: Arc<dyn SimilaritySource>,
    ) -> Result<Self> {
        if catalog.len() != similarity.cardinality() {
            return Err(RecommendError::DimensionMismatch {
                movies: catalog.len(),
                rows: similarity.cardinality(),
            });
        }
        Ok(Self {
            catalog,
            similarity,
            matcher: Box::new(DiceTitleMatcher),
        })
    }

    /// Swap the fuzzy matcher (builder pattern).
    pub fn with_matcher(mut self, matcher: impl TitleMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Resolve `query` to a catalog title and return up to `limit`
    /// recommendations ranked by similarity.
    ///
    /// Fewer than `limit` surviving candidates is a short result, not an
    /// error. All failures come back as tagged [`RecommendError`] values.
    pub fn recommend(&self, query: &str, limit: usize) -> Result<RecommendationSet> {
        if limit == 0 {
            return Err(RecommendError::InvalidRequest { limit });
        }
        let start = Instant::now();

        // 1. Fuzzy title resolution
        let mut titles = self.catalog.titles();
        let matched = self
            .matcher
            .best_match(query, &mut titles, MATCH_CUTOFF)
            .ok_or_else(|| RecommendError::NoMatch {
                query: query.to_string(),
            })?;
        debug!(
            "Matcher '{}' resolved '{}' to '{}' (score {:.3})",
            self.matcher.name(),
            query,
            matched.title,
            matched.score
        );

        // 2. Index resolution. The title came from the catalog itself, so
        // a miss here means the loaded state is inconsistent.
        let query_index = self
            .catalog
            .first_index_with_title(&matched.title)
            .ok_or_else(|| {
                warn!(
                    "Matched title '{}' missing from the catalog index",
                    matched.title
                );
                RecommendError::TitleNotFound {
                    title: matched.title.clone(),
                }
            })?;

        // 3. Score extraction
        let mut scored = self.similarity.row(query_index).ok_or_else(|| {
            warn!("No similarity row for catalog index {}", query_index);
            RecommendError::TitleNotFound {
                title: matched.title.clone(),
            }
        })?;

        // 4. Ranking: score descending, ties by ascending catalog index
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        // 5 & 6. Selection and record assembly. Exclusion is by title,
        // so the matched movie and any duplicate-titled rows are all
        // skipped.
        let items = self.select(&scored, &matched.title, limit)?;

        info!(
            "Returning {} recommendations for '{}' (matched '{}') in {:.2?}",
            items.len(),
            query,
            matched.title,
            start.elapsed()
        );
        Ok(RecommendationSet {
            matched_title: matched.title,
            matched_index: query_index,
            items,
        })
    }

    fn select(
        &self,
        ranked: &[(MovieIdx, f32)],
        matched_title: &str,
        limit: usize,
    ) -> Result<Vec<Recommendation>> {
        let mut items = Vec::with_capacity(limit.min(ranked.len()));
        for &(index, score) in ranked {
            let entry = self.catalog.entry_at(index)?;
            if entry.title == matched_title {
                continue;
            }
            items.push(Recommendation::from_entry(entry, score));
            if items.len() == limit {
                break;
            }
        }
        Ok(items)
    }
}
