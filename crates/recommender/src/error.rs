//! Error types for the recommender crate.
//!
//! Every per-request failure is a value returned to the caller, tagged by
//! kind and carrying the offending input. Only construction-time dimension
//! mismatches are fatal: a `Recommender` is never handed out over a
//! mismatched catalog/matrix pair.

use catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// No catalog title cleared the fuzzy-match cutoff for this query.
    /// Recoverable; surface the query back to the user with a retry hint.
    #[error("No close match found for '{query}'")]
    NoMatch { query: String },

    /// The matched title is missing from the catalog index. Defensive
    /// path: the title came from the catalog itself, so hitting this
    /// signals an internal consistency problem and is logged as such.
    #[error("Matched title '{title}' not found in catalog")]
    TitleNotFound { title: String },

    /// Caller asked for a non-positive number of recommendations.
    #[error("Requested count must be positive (got {limit})")]
    InvalidRequest { limit: usize },

    /// Catalog and similarity source disagree on cardinality; raised once
    /// at construction, never per request.
    #[error("Dimension mismatch: {movies} catalog entries vs {rows} similarity rows")]
    DimensionMismatch { movies: usize, rows: usize },

    /// Catalog access failed while assembling result records.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
