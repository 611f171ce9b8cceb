//! Candidate collections
//!
//! A search runs over exactly one of two shapes: an ordered list of strings, or
//! a keyed mapping whose values are the strings matched against. The shape is
//! fixed when the `Candidates` value is built and never re-detected.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, SearchError};

/// The set of strings a query is matched against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// Ordered sequence of candidate strings
    Ordered(Vec<String>),
    /// Key/value pairs in insertion order; values are matched, keys are carried along
    Keyed(Vec<(String, String)>),
}

impl Candidates {
    /// Build an ordered source.
    pub fn ordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Candidates::Ordered(items.into_iter().map(Into::into).collect())
    }

    /// Build a keyed source, preserving the iteration order of `entries`.
    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Candidates::Keyed(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Resolve a JSON value into a source.
    ///
    /// Arrays of strings become `Ordered`, objects of strings become `Keyed`.
    /// Anything else is rejected with `SearchError::UnsupportedSource`.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        SearchError::UnsupportedSource(format!("array containing {}", kind(item)))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Candidates::Ordered),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| {
                    v.as_str()
                        .map(|s| (k.clone(), s.to_string()))
                        .ok_or_else(|| {
                            SearchError::UnsupportedSource(format!(
                                "object with {} value at key '{}'",
                                kind(v),
                                k
                            ))
                        })
                })
                .collect::<Result<Vec<_>>>()
                .map(Candidates::Keyed),
            other => Err(SearchError::UnsupportedSource(kind(other).to_string())),
        }
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        match self {
            Candidates::Ordered(items) => items.len(),
            Candidates::Keyed(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate string at `idx`.
    ///
    /// Panics if `idx` is out of bounds.
    pub fn value(&self, idx: usize) -> &str {
        match self {
            Candidates::Ordered(items) => &items[idx],
            Candidates::Keyed(entries) => &entries[idx].1,
        }
    }

    /// Mapping key at `idx`; `None` for ordered sources.
    pub fn key(&self, idx: usize) -> Option<&str> {
        match self {
            Candidates::Ordered(_) => None,
            Candidates::Keyed(entries) => entries.get(idx).map(|(k, _)| k.as_str()),
        }
    }

    /// Candidate strings in source order
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len()).map(move |idx| self.value(idx))
    }
}

impl From<Vec<String>> for Candidates {
    fn from(items: Vec<String>) -> Self {
        Candidates::Ordered(items)
    }
}

impl From<Vec<&str>> for Candidates {
    fn from(items: Vec<&str>) -> Self {
        Candidates::ordered(items)
    }
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for Candidates {
    fn from(map: BTreeMap<K, V>) -> Self {
        Candidates::keyed(map)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
