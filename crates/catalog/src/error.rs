//! Error types for the catalog crate.

use thiserror::Error;

/// Errors raised while loading or querying the catalog and its
/// similarity matrix.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading an artifact file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line in the catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value that couldn't be interpreted
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The similarity artifact wasn't valid JSON
    #[error("Failed to decode similarity artifact: {0}")]
    SimilarityDecode(#[from] serde_json::Error),

    /// A row index outside the catalog was requested
    #[error("Index {index} out of range for catalog of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// Catalog and similarity matrix disagree on cardinality.
    /// Fatal at load time; no bundle is handed out on mismatch.
    #[error("Dimension mismatch: {movies} catalog entries vs {rows} similarity rows ({detail})")]
    DimensionMismatch {
        movies: usize,
        rows: usize,
        detail: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
