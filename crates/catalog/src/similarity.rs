//! Dense pairwise similarity matrix.
//!
//! Entry `(i, j)` is the precomputed similarity between catalog rows `i`
//! and `j`, in a bounded range (cosine-type scores, typically `[0, 1]`).
//! The diagonal is the self-similarity and exists only to be excluded by
//! the recommender; it is never surfaced. The matrix is read-only after
//! construction and quadratic in catalog size, an accepted ceiling.

use crate::error::{CatalogError, Result};

/// Square, row-major score matrix over catalog indices.
#[derive(Debug)]
pub struct SimilarityMatrix {
    scores: Vec<f32>,
    size: usize,
}

impl SimilarityMatrix {
    /// Build from row vectors, rejecting ragged input.
    ///
    /// Every row must have exactly as many columns as there are rows;
    /// anything else is a `DimensionMismatch` (fatal at load time).
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let size = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(CatalogError::DimensionMismatch {
                    movies: size,
                    rows: size,
                    detail: format!("row {} has {} columns, expected {}", i, row.len(), size),
                });
            }
        }
        let mut scores = Vec::with_capacity(size * size);
        for row in rows {
            scores.extend(row);
        }
        Ok(Self { scores, size })
    }

    /// Number of rows (and columns).
    pub fn cardinality(&self) -> usize {
        self.size
    }

    /// Full score row for `index`, or `None` if out of range.
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_access() {
        let matrix =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.8], vec![0.8, 1.0]]).unwrap();
        assert_eq!(matrix.cardinality(), 2);
        assert_eq!(matrix.row(0).unwrap(), &[1.0, 0.8]);
        assert_eq!(matrix.row(1).unwrap(), &[0.8, 1.0]);
        assert!(matrix.row(2).is_none());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]).unwrap_err();
        assert!(matches!(err, CatalogError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::from_rows(vec![]).unwrap();
        assert_eq!(matrix.cardinality(), 0);
        assert!(matrix.row(0).is_none());
    }
}
