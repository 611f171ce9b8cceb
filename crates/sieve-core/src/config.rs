//! Engine options
//!
//! `SearchOptions` is the caller-facing record. Every field has a default, so
//! overrides are a shallow merge: struct-update syntax in Rust, or a partial
//! JSON object through serde.
//!
//! ```rust
//! use sieve_core::SearchOptions;
//!
//! let options = SearchOptions {
//!     flexibility: 3,
//!     ..SearchOptions::default()
//! };
//! assert!(!options.case_sensitive);
//!
//! let options: SearchOptions = serde_json::from_str(r#"{"ignoreStopWords":true}"#).unwrap();
//! assert!(options.ignore_stop_words);
//! assert_eq!(options.flexibility, 2);
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Default maximum edit distance for fuzzy matches
pub const DEFAULT_FLEXIBILITY: usize = 2;

/// Matching options, fixed for the lifetime of an engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Compare without lower-casing query and candidates
    pub case_sensitive: bool,
    /// Maximum edit distance accepted by the fuzzy tier; 0 disables it
    pub flexibility: usize,
    /// Strip one trailing "s" from every query token
    pub stemming: bool,
    /// Regex whose matches are removed from the query
    pub exclusions: Option<String>,
    /// Drop stop words from the query
    pub ignore_stop_words: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            flexibility: DEFAULT_FLEXIBILITY,
            stemming: false,
            exclusions: None,
            ignore_stop_words: false,
        }
    }
}

impl SearchOptions {
    /// Compile the exclusion pattern, if any.
    pub(crate) fn compile_exclusions(&self) -> Result<Option<Regex>> {
        match self.exclusions.as_deref() {
            None => Ok(None),
            Some(pattern) => Regex::new(pattern)
                .map(Some)
                .map_err(|e| SearchError::InvalidExclusion {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                }),
        }
    }
}
