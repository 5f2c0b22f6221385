//! # Recommender Crate
//!
//! This crate implements the lookup-and-rank core: resolve a free-text
//! movie name to a catalog entry, rank every other entry by precomputed
//! similarity, and return the top N.
//!
//! ## Components
//!
//! - **engine**: the `recommend(query, limit)` operation
//! - **matcher**: fuzzy title resolution (default: Sørensen-Dice bigram
//!   ratio via `strsim`), pluggable through the `TitleMatcher` trait
//! - **traits**: the matcher and similarity-source seams
//! - **types**: output records
//! - **error**: tagged per-request failures
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::ModelBundle;
//! use recommender::Recommender;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let bundle = ModelBundle::load_from_dir(Path::new("data"))?;
//! let engine = Recommender::new(
//!     Arc::new(bundle.catalog),
//!     Arc::new(bundle.similarity),
//! )?;
//!
//! let set = engine.recommend("toy story", 10)?;
//! println!("Movies similar to {}:", set.matched_title);
//! for rec in &set.items {
//!     println!("  {} ({:.1}% match)", rec.title, rec.similarity_score * 100.0);
//! }
//! ```
//!
//! ## Guarantees
//!
//! - Deterministic: identical inputs over identical loaded state produce
//!   bit-identical orderings (score descending, ties by ascending index).
//! - The matched title never appears in the results, duplicate-titled
//!   rows included.
//! - Every failure is a tagged [`RecommendError`] value, never a panic.

// Public modules
pub mod engine;
pub mod error;
pub mod matcher;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use engine::{MATCH_CUTOFF, Recommender};
pub use error::{RecommendError, Result};
pub use matcher::DiceTitleMatcher;
pub use traits::{SimilaritySource, TitleMatch, TitleMatcher};
pub use types::{Recommendation, RecommendationSet};
