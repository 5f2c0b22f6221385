//! Default fuzzy title matcher.
//!
//! Scores candidates with the Sørensen-Dice bigram ratio from `strsim`,
//! a normalized 0-1 measure in the same family as matching-blocks ratios:
//! it rewards shared character runs and is cheap over a few thousand
//! titles. Comparison is case-sensitive against the canonical titles.

use crate::traits::{TitleMatch, TitleMatcher};

/// Bigram-ratio matcher backed by `strsim::sorensen_dice`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceTitleMatcher;

impl TitleMatcher for DiceTitleMatcher {
    fn name(&self) -> &str {
        "sorensen-dice"
    }

    fn best_match(
        &self,
        query: &str,
        candidates: &mut dyn Iterator<Item = &str>,
        cutoff: f64,
    ) -> Option<TitleMatch> {
        let mut best: Option<TitleMatch> = None;
        for candidate in candidates {
            let score = strsim::sorensen_dice(query, candidate);
            if score < cutoff {
                continue;
            }
            // Strictly-greater comparison keeps the first seen on ties.
            let improved = best.as_ref().map_or(true, |b| score > b.score);
            if improved {
                best = Some(TitleMatch {
                    title: candidate.to_string(),
                    score,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(query: &str, candidates: &[&str], cutoff: f64) -> Option<TitleMatch> {
        DiceTitleMatcher.best_match(query, &mut candidates.iter().copied(), cutoff)
    }

    #[test]
    fn test_exact_title_wins_with_full_score() {
        let m = best("Up", &["Toy Story", "Up", "Heat"], 0.1).unwrap();
        assert_eq!(m.title, "Up");
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_misspelled_query_resolves_to_closest() {
        let m = best("toy story", &["Toy Story", "Toy Story 2", "Up"], 0.1).unwrap();
        assert_eq!(m.title, "Toy Story");
        assert!(m.score > 0.1 && m.score < 1.0);
    }

    #[test]
    fn test_no_overlap_falls_below_cutoff() {
        assert!(best("zzz-nonexistent-qqq", &["Up", "Heat"], 0.1).is_none());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(best("", &["Toy Story", "Up"], 0.1).is_none());
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        // Both candidates share exactly one bigram with the query and
        // have equal length, so the scores are identical.
        let m = best("ab", &["abx", "aby"], 0.1).unwrap();
        assert_eq!(m.title, "abx");
    }
}
