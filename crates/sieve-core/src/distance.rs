//! Levenshtein edit distance
//!
//! Character-level (Unicode scalar) distance used both as the fuzzy-tier
//! threshold test and as the ranking key.

use strsim::levenshtein;

/// Minimum number of single-character insertions, deletions, or substitutions
/// needed to turn `a` into `b`.
///
/// Distance to or from the empty string is the other string's length in chars.
///
/// ```rust
/// use sieve_core::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "café"), 4);
/// ```
#[inline]
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(edit_distance("kitten", "kitten"), 0);
    }

    #[test]
    fn test_classic_examples() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("apple", "apply"),
            ("banana split", "banana"),
            ("pie apple", "apple pie"),
            ("x", "yz"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                edit_distance(a, b),
                edit_distance(b, a),
                "distance should be symmetric for {:?} / {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_empty_input_is_clamped() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // é is two bytes in UTF-8 but one substitution
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("東京", "京都"), 2);
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["", "a", "cherry tart", "cherry", "tart", "banana split", "bandana"];
        for a in words {
            for b in words {
                for c in words {
                    assert!(
                        edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c),
                        "{:?} / {:?} / {:?}",
                        a,
                        b,
                        c
                    );
                }
            }
        }
    }
}
