//! Three-tier matcher
//!
//! Every candidate is tested by each tier independently:
//!
//! 1. Substring - the full query is contained in the candidate
//! 2. Permuted tokens - every query token is contained, in any order
//! 3. Fuzzy - edit distance to the query is within `flexibility`
//!
//! A candidate accepted by several tiers appears once per tier in the raw
//! output. Deduplication and ordering belong to [`crate::rank`].

pub mod strategies;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Which tier accepted a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Substring,
    Permuted,
    Fuzzy,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Substring => "substring",
            MatchTier::Permuted => "permuted",
            MatchTier::Fuzzy => "fuzzy",
        }
    }
}

/// A candidate accepted by one tier, by position in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    pub index: usize,
    pub tier: MatchTier,
}

/// Runs the three tiers over a normalized candidate set
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    flexibility: usize,
}

impl Matcher {
    pub fn new(flexibility: usize) -> Self {
        Self { flexibility }
    }

    /// Collect every (candidate, tier) acceptance.
    ///
    /// Tiers 1 and 2 run in a single pass over the source; the fuzzy tier
    /// appends its acceptances afterwards, in source order. With `fold_fuzzy`
    /// the fuzzy tier compares lower-cased text regardless of the case mode
    /// (keyed sources).
    pub fn run<S: AsRef<str>>(
        &self,
        query: &str,
        tokens: &[String],
        candidates: &[S],
        fold_fuzzy: bool,
    ) -> Vec<RawMatch> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut raw = Vec::new();

        for (index, candidate) in candidates.iter().enumerate() {
            let candidate = candidate.as_ref();
            if strategies::substring_match(query, candidate) {
                raw.push(RawMatch {
                    index,
                    tier: MatchTier::Substring,
                });
            }
            if strategies::permuted_match(tokens, candidate) {
                raw.push(RawMatch {
                    index,
                    tier: MatchTier::Permuted,
                });
            }
        }

        if self.flexibility > 0 {
            let query = fold(query, fold_fuzzy);
            for (index, candidate) in candidates.iter().enumerate() {
                let candidate = fold(candidate.as_ref(), fold_fuzzy);
                if strategies::fuzzy_match(&query, &candidate, self.flexibility).is_some() {
                    raw.push(RawMatch {
                        index,
                        tier: MatchTier::Fuzzy,
                    });
                }
            }
        }

        raw
    }
}

fn fold(text: &str, lower: bool) -> Cow<'_, str> {
    if lower {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{tokenize, DEFAULT_DELIMITER};

    fn run(query: &str, flexibility: usize, candidates: &[&str]) -> Vec<RawMatch> {
        let tokens = tokenize(query, DEFAULT_DELIMITER);
        Matcher::new(flexibility).run(query, &tokens, candidates, false)
    }

    #[test]
    fn test_candidate_pushed_once_per_tier() {
        let raw = run("apple pie", 2, &["apple pie"]);
        let tiers: Vec<MatchTier> = raw.iter().map(|m| m.tier).collect();
        assert_eq!(
            tiers,
            vec![MatchTier::Substring, MatchTier::Permuted, MatchTier::Fuzzy]
        );
        assert!(raw.iter().all(|m| m.index == 0));
    }

    #[test]
    fn test_permuted_only() {
        let raw = run("pie apple", 0, &["apple pie", "banana split", "cherry tart"]);
        assert_eq!(
            raw,
            vec![RawMatch {
                index: 0,
                tier: MatchTier::Permuted
            }]
        );
    }

    #[test]
    fn test_fuzzy_appended_after_exact_tiers() {
        let raw = run("tart", 1, &["tarts", "cherry tart"]);
        assert_eq!(
            raw,
            vec![
                RawMatch { index: 0, tier: MatchTier::Substring },
                RawMatch { index: 0, tier: MatchTier::Permuted },
                RawMatch { index: 1, tier: MatchTier::Substring },
                RawMatch { index: 1, tier: MatchTier::Permuted },
                RawMatch { index: 0, tier: MatchTier::Fuzzy },
            ]
        );
    }

    #[test]
    fn test_zero_flexibility_disables_fuzzy() {
        let raw = run("aple", 0, &["apple"]);
        assert!(raw.is_empty());
        let raw = run("aple", 1, &["apple"]);
        assert_eq!(raw[0].tier, MatchTier::Fuzzy);
    }

    #[test]
    fn test_fold_fuzzy_ignores_case() {
        let tokens = tokenize("KITTEN", DEFAULT_DELIMITER);
        let matcher = Matcher::new(2);

        assert!(matcher.run("KITTEN", &tokens, &["kitten"], false).is_empty());
        assert_eq!(
            matcher.run("KITTEN", &tokens, &["kitten"], true),
            vec![RawMatch {
                index: 0,
                tier: MatchTier::Fuzzy
            }]
        );
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(run("", 2, &["apple", ""]).is_empty());
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(MatchTier::Permuted.as_str(), "permuted");
        assert_eq!(
            serde_json::to_string(&MatchTier::Fuzzy).unwrap(),
            r#""fuzzy""#
        );
    }
}
