//! Query and candidate normalization
//!
//! The query goes through, in order: stop-word removal, exclusion stripping,
//! trimming with optional case folding, and optional stemming. Candidates are
//! only ever case-folded, and always into a fresh copy.

use std::borrow::Cow;

use regex::Regex;

use crate::config::SearchOptions;
use crate::error::Result;
use crate::source::Candidates;
use crate::tokenize::{tokenize, DEFAULT_DELIMITER};

/// Words dropped from the query when `ignore_stop_words` is set
pub const STOP_WORDS: [&str; 7] = ["the", "a", "to", "on", "in", "is", "and"];

/// Applies an engine's options to queries and candidate sets
#[derive(Debug, Clone)]
pub struct Normalizer {
    case_sensitive: bool,
    stemming: bool,
    ignore_stop_words: bool,
    exclusions: Option<Regex>,
}

impl Normalizer {
    /// Build a normalizer, compiling the exclusion pattern.
    pub fn new(options: &SearchOptions) -> Result<Self> {
        Ok(Self {
            case_sensitive: options.case_sensitive,
            stemming: options.stemming,
            ignore_stop_words: options.ignore_stop_words,
            exclusions: options.compile_exclusions()?,
        })
    }

    /// Normalizer for default options, which need no compilation.
    pub fn with_defaults() -> Self {
        let options = SearchOptions::default();
        Self {
            case_sensitive: options.case_sensitive,
            stemming: options.stemming,
            ignore_stop_words: options.ignore_stop_words,
            exclusions: None,
        }
    }

    /// Run the full query pipeline and return the final query string.
    pub fn normalize_query(&self, query: &str) -> String {
        let mut text = if self.ignore_stop_words {
            remove_stop_words(query)
        } else {
            query.to_string()
        };

        if let Some(re) = &self.exclusions {
            text = re.replace_all(&text, "").into_owned();
        }

        text = if self.case_sensitive {
            text.trim().to_string()
        } else {
            text.to_lowercase().trim().to_string()
        };

        if self.stemming {
            text = stem(&text);
        }

        text
    }

    /// Candidate strings as they are compared against the query.
    ///
    /// Borrows the caller's strings when no folding is needed.
    pub fn normalize_candidates<'a>(&self, source: &'a Candidates) -> Vec<Cow<'a, str>> {
        if self.case_sensitive {
            source.values().map(Cow::Borrowed).collect()
        } else {
            source
                .values()
                .map(|value| Cow::Owned(value.to_lowercase()))
                .collect()
        }
    }
}

/// Drop stop words (case-insensitively) and rejoin with single spaces.
pub fn remove_stop_words(query: &str) -> String {
    query
        .split(' ')
        .filter(|word| !is_stop_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.iter().any(|stop| stop.eq_ignore_ascii_case(word))
}

/// Strip a single trailing "s" from every token.
pub fn stem(query: &str) -> String {
    tokenize(query, DEFAULT_DELIMITER)
        .iter()
        .map(|token| token.strip_suffix('s').unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}
