//! # Catalog Crate
//!
//! This crate handles loading and indexing the movie catalog and its
//! precomputed similarity matrix.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogEntry, CatalogStore)
//! - **similarity**: Dense pairwise similarity matrix
//! - **loader**: Parse the on-disk artifacts into a validated ModelBundle
//! - **error**: Error types for catalog access and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::ModelBundle;
//! use std::path::Path;
//!
//! // Load and cross-validate both artifacts
//! let bundle = ModelBundle::load_from_dir(Path::new("data"))?;
//!
//! let entry = bundle.catalog.entry_at(0)?;
//! let scores = bundle.similarity.row(0).unwrap();
//!
//! println!("{} has {} scored neighbors", entry.title, scores.len());
//! ```
//!
//! The bundle is loaded once, validated once, and read-only afterwards;
//! requests never mutate it, so it can be shared behind `Arc` with no
//! locking.

// Public modules
pub mod error;
pub mod loader;
pub mod similarity;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::ModelBundle;
pub use similarity::SimilarityMatrix;
pub use types::{CatalogEntry, CatalogStore, MovieIdx};
