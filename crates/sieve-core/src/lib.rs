//! Sieve Core Engine
//!
//! Small fuzzy text matcher for search-as-you-type, designed to run
//! identically in browser (WASM) and native environments.
//!
//! A query is normalized (stop words, exclusions, case folding, stemming),
//! tokenized, and matched against a candidate set by three tiers: substring,
//! permuted tokens, and edit distance. Matches are deduplicated and ranked by
//! ascending edit distance to the normalized query.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations
//! - `simd` - SIMD-accelerated substring search via memchr
//!
//! # Example
//!
//! ```rust
//! use sieve_core::{Candidates, SearchEngine, SearchOptions};
//!
//! let engine = SearchEngine::default();
//! let source = Candidates::ordered(["apple pie", "banana split", "cherry tart"]);
//! assert_eq!(
//!     engine.search("pie apple", &source, 1),
//!     Some(vec!["apple pie".to_string()])
//! );
//!
//! let engine = SearchEngine::new(SearchOptions {
//!     flexibility: 3,
//!     ..SearchOptions::default()
//! })
//! .unwrap();
//! let source = Candidates::keyed([("a", "kitten"), ("b", "sitting")]);
//! assert_eq!(
//!     engine.search("kitten", &source, 2),
//!     Some(vec!["kitten".to_string(), "sitting".to_string()])
//! );
//! ```

pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod json;
pub mod matcher;
pub mod normalize;
pub mod rank;
pub mod source;
pub mod tokenize;

// Re-export main types at crate root
pub use config::SearchOptions;
pub use distance::edit_distance;
pub use engine::{SearchEngine, SearchState, DEFAULT_LIMIT};
pub use error::{Result, SearchError};
pub use json::{search_json, tokenize_json};
pub use matcher::{MatchTier, Matcher, RawMatch};
pub use normalize::{Normalizer, STOP_WORDS};
pub use rank::RankedMatch;
pub use source::Candidates;
pub use tokenize::{tokenize, DEFAULT_DELIMITER};
