//! Matching strategies
//!
//! Platform-specific implementations:
//! - Native: SIMD substring via memchr
//! - WASM: Pure Rust fallbacks

use crate::distance::edit_distance;

/// Substring test using SIMD via memchr
#[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
#[inline]
pub fn contains(haystack: &str, needle: &str) -> bool {
    use memchr::memmem;
    memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

/// Pure Rust substring test when the simd feature is disabled
#[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
#[inline]
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Tier 1: the whole query appears contiguously in the candidate
#[inline]
pub fn substring_match(query: &str, candidate: &str) -> bool {
    contains(candidate, query)
}

/// Tier 2: every query token appears somewhere in the candidate, in any order.
///
/// An empty token list never matches.
pub fn permuted_match<S: AsRef<str>>(tokens: &[S], candidate: &str) -> bool {
    !tokens.is_empty() && tokens.iter().all(|token| contains(candidate, token.as_ref()))
}

/// Tier 3: edit distance within `flexibility`. Returns the distance on success.
///
/// A flexibility of 0 disables the tier.
#[inline]
pub fn fuzzy_match(query: &str, candidate: &str, flexibility: usize) -> Option<usize> {
    if flexibility == 0 {
        return None;
    }
    let distance = edit_distance(candidate, query);
    (distance <= flexibility).then_some(distance)
}
