//! Loading the catalog and similarity artifacts from disk.
//!
//! Two files make up a model bundle:
//! - `movies.csv`: one catalog row per line, columns addressed by header
//!   name (`title` required; `genres`, `overview`, `vote_average` optional)
//! - `similarity.json`: a JSON 2-D array of floats, one row per catalog
//!   entry, in the same row order as the CSV
//!
//! Both are parsed in parallel and cross-validated before a bundle is
//! handed out: a cardinality mismatch is fatal here, never a per-request
//! concern.

use crate::error::{CatalogError, Result};
use crate::similarity::SimilarityMatrix;
use crate::types::{CatalogEntry, CatalogStore};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Catalog file name inside the data directory.
pub const MOVIES_FILE: &str = "movies.csv";
/// Similarity artifact file name inside the data directory.
pub const SIMILARITY_FILE: &str = "similarity.json";

/// The loaded, validated, read-only pair of catalog and similarity matrix.
///
/// Constructed once at startup and shared (behind `Arc`) for the life of
/// the process; nothing mutates it afterwards.
#[derive(Debug)]
pub struct ModelBundle {
    pub catalog: CatalogStore,
    pub similarity: SimilarityMatrix,
}

impl ModelBundle {
    /// Load `movies.csv` and `similarity.json` from `data_dir`.
    ///
    /// The two artifacts are parsed in parallel. Fails with
    /// `DimensionMismatch` if the matrix row count or any row length
    /// disagrees with the catalog length.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let movies_path = data_dir.join(MOVIES_FILE);
        let similarity_path = data_dir.join(SIMILARITY_FILE);

        let (entries, rows) = rayon::join(
            || parse_catalog(&movies_path),
            || parse_similarity(&similarity_path),
        );
        let entries = entries?;
        let rows = rows?;

        if rows.len() != entries.len() {
            return Err(CatalogError::DimensionMismatch {
                movies: entries.len(),
                rows: rows.len(),
                detail: "similarity row count differs from catalog length".to_string(),
            });
        }

        let catalog = CatalogStore::from_entries(entries);
        let similarity = SimilarityMatrix::from_rows(rows)?;
        info!(
            "Loaded {n} movies with a {n}x{n} similarity matrix",
            n = catalog.len()
        );

        Ok(Self {
            catalog,
            similarity,
        })
    }
}

/// Parse the catalog CSV file.
pub fn parse_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = std::fs::read_to_string(path)?;
    let file_label = path.display().to_string();
    parse_catalog_str(&file_label, &content)
}

/// Parse the similarity artifact: a JSON array of equal-length float rows.
pub fn parse_similarity(path: &Path) -> Result<Vec<Vec<f32>>> {
    let file = File::open(path)?;
    let rows: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))?;
    Ok(rows)
}

fn parse_catalog_str(file: &str, content: &str) -> Result<Vec<CatalogEntry>> {
    let mut lines = content.lines().enumerate();

    let (_, header) = lines.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line: 1,
        reason: "missing header row".to_string(),
    })?;
    let columns = Columns::from_header(file, header.strip_suffix('\r').unwrap_or(header))?;

    let mut entries = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(line);

        let title = columns
            .get(&fields, columns.title)
            .ok_or_else(|| CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "missing title field".to_string(),
            })?;
        if title.is_empty() {
            return Err(CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "empty title".to_string(),
            });
        }

        let vote_average = match columns.vote_average.and_then(|c| columns.get(&fields, c)) {
            None | Some("") => None,
            Some(raw) => {
                Some(
                    raw.parse::<f32>()
                        .map_err(|_| CatalogError::InvalidValue {
                            field: "vote_average".to_string(),
                            value: raw.to_string(),
                        })?,
                )
            }
        };

        entries.push(CatalogEntry {
            // Reassigned by CatalogStore::from_entries; row order is the truth.
            index: entries.len(),
            title: title.to_string(),
            genres: columns.optional(&fields, columns.genres),
            overview: columns.optional(&fields, columns.overview),
            vote_average,
        });
    }

    Ok(entries)
}

/// Column positions resolved from the CSV header.
struct Columns {
    title: usize,
    genres: Option<usize>,
    overview: Option<usize>,
    vote_average: Option<usize>,
}

impl Columns {
    fn from_header(file: &str, header: &str) -> Result<Self> {
        let names = split_csv_line(header);
        let find = |name: &str| names.iter().position(|n| n == name);

        let title = find("title").ok_or_else(|| CatalogError::ParseError {
            file: file.to_string(),
            line: 1,
            reason: "header has no 'title' column".to_string(),
        })?;

        Ok(Self {
            title,
            genres: find("genres"),
            overview: find("overview"),
            vote_average: find("vote_average"),
        })
    }

    fn get<'a>(&self, fields: &'a [String], column: usize) -> Option<&'a str> {
        fields.get(column).map(|s| s.as_str())
    }

    /// Optional column value: absent column or empty field is `None`.
    fn optional(&self, fields: &[String], column: Option<usize>) -> Option<String> {
        match column.and_then(|c| self.get(fields, c)) {
            None | Some("") => None,
            Some(value) => Some(value.to_string()),
        }
    }
}

/// Split one CSV line into fields, honoring RFC-4180 quoting
/// (embedded commas and `""` escapes inside quoted fields).
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}
