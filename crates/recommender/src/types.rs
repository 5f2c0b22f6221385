//! Output records produced by the recommendation engine.

use catalog::{CatalogEntry, MovieIdx};
use serde::{Deserialize, Serialize};

/// One recommended movie.
///
/// Metadata fields are copied from the candidate's catalog entry;
/// `similarity_score` is the raw matrix value between the matched movie
/// and this candidate, and `source_index` is the candidate's catalog
/// index, kept for traceability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub genres: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f32>,
    pub similarity_score: f32,
    pub source_index: MovieIdx,
}

impl Recommendation {
    pub fn from_entry(entry: &CatalogEntry, similarity_score: f32) -> Self {
        Self {
            title: entry.title.clone(),
            genres: entry.genres.clone(),
            overview: entry.overview.clone(),
            vote_average: entry.vote_average,
            similarity_score,
            source_index: entry.index,
        }
    }
}

/// Successful result of a recommend call: the canonical title the query
/// resolved to, its catalog index, and the ranked recommendations
/// (descending similarity, ties by ascending index, matched title
/// excluded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub matched_title: String,
    pub matched_index: MovieIdx,
    pub items: Vec<Recommendation>,
}
