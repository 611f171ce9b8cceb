//! SearchEngine - the search facade
//!
//! A search runs synchronously through
//! `Idle -> Normalizing -> Tokenizing -> Matching -> Ranking -> Done`.
//! Nothing is carried between calls; the engine only holds its options.

use tracing::{debug, trace};

use crate::config::SearchOptions;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::normalize::Normalizer;
use crate::rank::{dedup_by_value, rank_by_distance, RankedMatch};
use crate::source::Candidates;
use crate::tokenize::{tokenize, DEFAULT_DELIMITER};

/// Result count when the caller does not ask for more
pub const DEFAULT_LIMIT: usize = 1;

/// Stages of a single search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Normalizing,
    Tokenizing,
    Matching,
    Ranking,
    Done,
}

fn enter(state: &mut SearchState, next: SearchState) {
    let from = *state;
    trace!(?from, to = ?next, "search state");
    *state = next;
}

/// Fuzzy search engine with immutable options
///
/// Holds no per-search state, so one engine can serve any number of calls.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    options: SearchOptions,
    normalizer: Normalizer,
    matcher: Matcher,
}

impl Default for SearchEngine {
    fn default() -> Self {
        let options = SearchOptions::default();
        Self {
            matcher: Matcher::new(options.flexibility),
            normalizer: Normalizer::with_defaults(),
            options,
        }
    }
}

impl SearchEngine {
    /// Create an engine; fails only if the exclusion pattern does not compile.
    pub fn new(options: SearchOptions) -> Result<Self> {
        let normalizer = Normalizer::new(&options)?;
        debug!(?options, "search engine configured");
        Ok(Self {
            matcher: Matcher::new(options.flexibility),
            normalizer,
            options,
        })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search `source` for `query`, returning at most `limit` candidate strings.
    ///
    /// Returns `None` when the query is empty or nothing matched (including a
    /// `limit` of 0).
    pub fn search(&self, query: &str, source: &Candidates, limit: usize) -> Option<Vec<String>> {
        let ranked = self.search_ranked(query, source, limit);
        if ranked.is_empty() {
            None
        } else {
            Some(ranked.into_iter().map(|m| m.value).collect())
        }
    }

    /// Same pipeline as [`search`](Self::search), keeping distance, tier, and key.
    pub fn search_ranked(
        &self,
        query: &str,
        source: &Candidates,
        limit: usize,
    ) -> Vec<RankedMatch> {
        let mut state = SearchState::Idle;

        if query.is_empty() {
            return Vec::new();
        }

        enter(&mut state, SearchState::Normalizing);
        let text = self.normalizer.normalize_query(query);
        if text.is_empty() {
            debug!(query, "query is empty after normalization");
            return Vec::new();
        }
        let normalized = self.normalizer.normalize_candidates(source);

        enter(&mut state, SearchState::Tokenizing);
        let tokens = tokenize(&text, DEFAULT_DELIMITER);

        enter(&mut state, SearchState::Matching);
        let keyed = matches!(source, Candidates::Keyed(_));
        let raw = self.matcher.run(&text, &tokens, &normalized, keyed);

        enter(&mut state, SearchState::Ranking);
        let unique = dedup_by_value(&raw, source);
        let mut ranked = rank_by_distance(&unique, &text, source, &normalized);
        ranked.truncate(limit);

        enter(&mut state, SearchState::Done);
        debug!(
            query = %text,
            candidates = source.len(),
            raw = raw.len(),
            unique = unique.len(),
            returned = ranked.len(),
            "search complete"
        );

        ranked
    }
}
