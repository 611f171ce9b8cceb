//! JSON entry points
//!
//! String in, string out, for hosts that cannot hold Rust values (WASM
//! runtimes, FFI). Errors come back as `{"error":"..."}`.
//!
//! ```rust
//! use sieve_core::json::search_json;
//!
//! let out = search_json(r#"{"query":"pie apple","source":["apple pie","cherry tart"]}"#);
//! assert_eq!(
//!     out,
//!     r#"{"results":["apple pie"],"matches":[{"value":"apple pie","distance":6,"tier":"permuted"}]}"#
//! );
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::config::SearchOptions;
use crate::engine::{SearchEngine, DEFAULT_LIMIT};
use crate::error::{Result, SearchError};
use crate::rank::RankedMatch;
use crate::source::Candidates;
use crate::tokenize::{tokenize, DEFAULT_DELIMITER};

/// Input for `search_json`
#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub query: String,
    /// Array or object of strings; any other shape matches nothing
    #[serde(default)]
    pub source: Value,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub options: SearchOptions,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Output of `search_json`
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    /// `null` when there is no result
    pub results: Option<Vec<String>>,
    pub matches: Vec<RankedMatch>,
}

/// Input for `tokenize_json`
#[derive(Debug, Deserialize)]
pub struct TokenizeInput {
    pub input: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Output of `tokenize_json`
#[derive(Debug, Serialize)]
pub struct TokenizeOutput {
    pub tokens: Vec<String>,
}

/// Run a search described by a parsed input.
///
/// An unsupported source shape is not an error here: it is logged and the
/// search reports no result.
pub fn run_search(input: &SearchInput) -> Result<SearchOutput> {
    let engine = SearchEngine::new(input.options.clone())?;

    let source = match Candidates::from_json(&input.source) {
        Ok(source) => source,
        Err(e) => {
            warn!(error = %e, "search source ignored");
            return Ok(SearchOutput {
                results: None,
                matches: Vec::new(),
            });
        }
    };

    let matches = engine.search_ranked(&input.query, &source, input.limit);
    let results = if matches.is_empty() {
        None
    } else {
        Some(matches.iter().map(|m| m.value.clone()).collect())
    };

    Ok(SearchOutput { results, matches })
}

/// JSON entry point: deserialize input, search, serialize output.
pub fn search_json(input: &str) -> String {
    let result = serde_json::from_str::<SearchInput>(input)
        .map_err(|e| SearchError::InvalidInput(e.to_string()))
        .and_then(|parsed| run_search(&parsed));

    match result {
        Ok(output) => to_json(&output),
        Err(e) => error_json(&e.to_string()),
    }
}

/// JSON entry point for the tokenizer.
pub fn tokenize_json(input: &str) -> String {
    match serde_json::from_str::<TokenizeInput>(input) {
        Ok(parsed) => to_json(&TokenizeOutput {
            tokens: tokenize(&parsed.input, &parsed.delimiter),
        }),
        Err(e) => error_json(&SearchError::InvalidInput(e.to_string()).to_string()),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| error_json(&format!("serialization failed: {}", e)))
}

/// `{"error": msg}`, escaped properly.
pub fn error_json(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}
