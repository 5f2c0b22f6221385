//! Core domain types for the movie catalog.
//!
//! The catalog is an immutable, row-indexed table. The row position of an
//! entry (`MovieIdx`) is the identity shared with the similarity matrix:
//! row `i` of the matrix scores the movie at catalog index `i`.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable row position in the catalog, assigned at load time and never
/// reused. Also the row/column index into the similarity matrix.
pub type MovieIdx = usize;

/// One row of the catalog.
///
/// `title` is the only required column. The metadata fields are
/// independently optional: `None` means the source had no value, which is
/// deliberately distinct from an empty string or a zero rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub index: MovieIdx,
    pub title: String,
    pub genres: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f32>,
}

/// Immutable table of [`CatalogEntry`] values with index-addressed and
/// title-addressed access.
///
/// Titles are not guaranteed unique; when several rows share a title, the
/// lowest index wins every title lookup (deterministic across runs).
#[derive(Debug)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    /// Maps each title to the lowest index carrying it.
    title_index: HashMap<String, MovieIdx>,
}

impl CatalogStore {
    /// Build a store from entries in row order, reassigning `index` from
    /// the row position so the two can never disagree.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut entries = entries;
        let mut title_index = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.index = idx;
            // First-seen index wins for duplicate titles.
            title_index.entry(entry.title.clone()).or_insert(idx);
        }
        Self {
            entries,
            title_index,
        }
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All titles in catalog index order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    /// Entry at `index`, or `IndexOutOfRange`.
    pub fn entry_at(&self, index: MovieIdx) -> Result<&CatalogEntry> {
        self.entries
            .get(index)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Lowest index whose title equals `title` exactly (case-sensitive).
    pub fn first_index_with_title(&self, title: &str) -> Option<MovieIdx> {
        self.title_index.get(title).copied()
    }
}
