//! Deduplication and distance ranking

use std::collections::HashSet;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::distance::edit_distance;
use crate::matcher::{MatchTier, RawMatch};
use crate::source::Candidates;

/// A ranked search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// Candidate string as supplied by the caller
    pub value: String,
    /// Mapping key, for keyed sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Edit distance between the normalized candidate and the normalized query
    pub distance: usize,
    /// First tier that accepted the candidate
    pub tier: MatchTier,
}

/// Drop repeated candidates by value, keeping the first occurrence.
pub fn dedup_by_value(raw: &[RawMatch], source: &Candidates) -> Vec<RawMatch> {
    let mut seen: HashSet<&str, RandomState> = HashSet::with_hasher(RandomState::new());
    let mut unique = Vec::new();

    for m in raw {
        if seen.insert(source.value(m.index)) {
            unique.push(*m);
        }
    }

    unique
}

/// Order matches by ascending distance to `query`.
///
/// Distances are measured on the normalized candidate text. The sort is
/// stable, so equal distances keep their dedup order.
pub fn rank_by_distance<S: AsRef<str>>(
    matches: &[RawMatch],
    query: &str,
    source: &Candidates,
    normalized: &[S],
) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = matches
        .iter()
        .map(|m| RankedMatch {
            value: source.value(m.index).to_string(),
            key: source.key(m.index).map(str::to_string),
            distance: edit_distance(normalized[m.index].as_ref(), query),
            tier: m.tier,
        })
        .collect();

    ranked.sort_by_key(|m| m.distance);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(index: usize, tier: MatchTier) -> RawMatch {
        RawMatch { index, tier }
    }

    #[test]
    fn test_dedup_keeps_first_seen() {
        let source = Candidates::ordered(["pie", "tart", "pie"]);
        let unique = dedup_by_value(
            &[
                raw(1, MatchTier::Substring),
                raw(0, MatchTier::Substring),
                raw(1, MatchTier::Permuted),
                raw(2, MatchTier::Fuzzy),
            ],
            &source,
        );
        assert_eq!(
            unique,
            vec![raw(1, MatchTier::Substring), raw(0, MatchTier::Substring)]
        );
    }

    #[test]
    fn test_dedup_is_by_value_across_keys() {
        let source = Candidates::keyed([("a", "kitten"), ("b", "kitten")]);
        let unique = dedup_by_value(
            &[raw(0, MatchTier::Fuzzy), raw(1, MatchTier::Fuzzy)],
            &source,
        );
        assert_eq!(unique.len(), 1);
    }

    #[test]
    fn test_rank_ascending_distance() {
        let source = Candidates::keyed([("b", "sitting"), ("a", "kitten")]);
        let ranked = rank_by_distance(
            &[raw(0, MatchTier::Fuzzy), raw(1, MatchTier::Substring)],
            "kitten",
            &source,
            &["sitting", "kitten"],
        );
        let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["kitten", "sitting"]);
        assert_eq!(ranked[0].key.as_deref(), Some("a"));
        assert_eq!(ranked[1].distance, 3);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let source = Candidates::ordered(["cat", "bat", "hat"]);
        let ranked = rank_by_distance(
            &[
                raw(2, MatchTier::Fuzzy),
                raw(0, MatchTier::Fuzzy),
                raw(1, MatchTier::Fuzzy),
            ],
            "mat",
            &source,
            &["cat", "bat", "hat"],
        );
        let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["hat", "cat", "bat"]);
    }

    #[test]
    fn test_rank_uses_normalized_text_but_returns_original() {
        let source = Candidates::ordered(["APPLE"]);
        let ranked =
            rank_by_distance(&[raw(0, MatchTier::Substring)], "apple", &source, &["apple"]);
        assert_eq!(ranked[0].value, "APPLE");
        assert_eq!(ranked[0].distance, 0);
    }

    #[test]
    fn test_ranked_match_json_omits_missing_key() {
        let m = RankedMatch {
            value: "apple pie".to_string(),
            key: None,
            distance: 0,
            tier: MatchTier::Substring,
        };
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"value":"apple pie","distance":0,"tier":"substring"}"#
        );
    }
}
