//! Browser WASM bindings using wasm-bindgen
//!
//! Unlike the raw-memory exports in the crate root, these functions use
//! wasm-bindgen for JavaScript interop. The engine is configured once with
//! [`configure`] and then reused by every [`search`] call, which is the
//! search-as-you-type pattern: options fixed, query changes per keystroke.

use std::cell::RefCell;

use sieve_core::{tokenize as split, Candidates, SearchEngine, SearchOptions, DEFAULT_DELIMITER};
use tracing::warn;
use wasm_bindgen::prelude::*;

// WASM is single-threaded; one engine per module instance
thread_local! {
    static ENGINE: RefCell<SearchEngine> = RefCell::new(SearchEngine::default());
}

fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

/// Runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    // Route Rust panics to console.error instead of "RuntimeError: unreachable"
    console_error_panic_hook::set_once();
}

/// Replace the engine with one built from JSON options.
/// Unspecified options keep their defaults: `{"flexibility":3}`.
#[wasm_bindgen]
pub fn configure(options_json: &str) -> Result<(), JsValue> {
    let options: SearchOptions =
        serde_json::from_str(options_json).map_err(|e| js_err("Invalid options", e))?;
    let engine = SearchEngine::new(options).map_err(|e| js_err("Failed to configure engine", e))?;

    ENGINE.with(|cell| *cell.borrow_mut() = engine);
    Ok(())
}

/// Current engine options as JSON.
#[wasm_bindgen]
pub fn engine_options() -> Result<String, JsValue> {
    ENGINE.with(|cell| {
        serde_json::to_string(cell.borrow().options())
            .map_err(|e| js_err("Failed to serialize options", e))
    })
}

fn parse_source(source_json: &str) -> Result<Option<Candidates>, JsValue> {
    let value: serde_json::Value =
        serde_json::from_str(source_json).map_err(|e| js_err("Invalid source JSON", e))?;
    match Candidates::from_json(&value) {
        Ok(source) => Ok(Some(source)),
        Err(e) => {
            warn!(error = %e, "search source ignored");
            Ok(None)
        }
    }
}

/// Search a JSON array or object of strings.
/// Returns a JSON array of matches, or `null` when there is no result.
#[wasm_bindgen]
pub fn search(query: &str, source_json: &str, limit: Option<u32>) -> Result<String, JsValue> {
    let limit = limit.map_or(sieve_core::DEFAULT_LIMIT, |l| l as usize);
    let results = match parse_source(source_json)? {
        Some(source) => ENGINE.with(|cell| cell.borrow().search(query, &source, limit)),
        None => None,
    };
    serde_json::to_string(&results).map_err(|e| js_err("Failed to serialize results", e))
}

/// Like [`search`], but returns `[{"value","key"?,"distance","tier"}, ...]`.
#[wasm_bindgen]
pub fn search_ranked(
    query: &str,
    source_json: &str,
    limit: Option<u32>,
) -> Result<String, JsValue> {
    let limit = limit.map_or(sieve_core::DEFAULT_LIMIT, |l| l as usize);
    let matches = match parse_source(source_json)? {
        Some(source) => ENGINE.with(|cell| cell.borrow().search_ranked(query, &source, limit)),
        None => Vec::new(),
    };
    serde_json::to_string(&matches).map_err(|e| js_err("Failed to serialize matches", e))
}

/// Split `input` on `delimiter` (default: a single space).
/// Returns a JSON array of tokens.
#[wasm_bindgen]
pub fn tokenize(input: &str, delimiter: Option<String>) -> Result<String, JsValue> {
    let delimiter = delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER);
    serde_json::to_string(&split(input, delimiter))
        .map_err(|e| js_err("Failed to serialize tokens", e))
}
