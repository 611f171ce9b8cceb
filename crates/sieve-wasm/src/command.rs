//! Command protocol for the WASI runner
//!
//! One JSON command in, one JSON response out:
//!
//! ```json
//! {"cmd":"Search","query":"pie apple","source":["apple pie"],"limit":1}
//! {"cmd":"Tokenize","input":"a,b,c","delimiter":","}
//! ```

use serde::{Deserialize, Serialize};
use sieve_core::json::{run_search, SearchInput, TokenizeInput};
use sieve_core::tokenize;

/// Command for the WASI runner
#[derive(Deserialize, Debug)]
#[serde(tag = "cmd")]
pub enum Command {
    Search(SearchInput),
    Tokenize(TokenizeInput),
}

/// Response from WASI execution
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "status")]
pub enum Response {
    Success { result: serde_json::Value },
    Error { message: String },
}

impl Response {
    fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    fn success<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(result) => Response::Success { result },
            Err(e) => Response::error(format!("Failed to serialize result: {}", e)),
        }
    }

    /// Serialize for stdout; falls back to a fixed error line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"status":"Error","message":"Failed to serialize response"}"#.to_string()
        })
    }
}

/// Execute a parsed command
pub fn execute(command: Command) -> Response {
    match command {
        Command::Search(input) => match run_search(&input) {
            Ok(output) => Response::success(&output),
            Err(e) => Response::error(e.to_string()),
        },
        Command::Tokenize(input) => Response::success(&serde_json::json!({
            "tokens": tokenize(&input.input, &input.delimiter)
        })),
    }
}

/// Parse and execute a raw JSON command
pub fn handle(input: &str) -> Response {
    match serde_json::from_str::<Command>(input) {
        Ok(command) => execute(command),
        Err(e) => Response::error(format!("Failed to parse command: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_search_command() {
        let response = handle(
            r#"{"cmd":"Search","query":"pie apple","source":["apple pie","banana split","cherry tart"]}"#,
        );
        match response {
            Response::Success { result } => {
                assert_eq!(result["results"], json!(["apple pie"]));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_search_command_keyed_limit() {
        let response = handle(
            r#"{"cmd":"Search","query":"kitten","source":{"a":"kitten","b":"sitting"},"limit":2,"options":{"flexibility":3}}"#,
        );
        match response {
            Response::Success { result } => {
                assert_eq!(result["results"], json!(["kitten", "sitting"]));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_tokenize_command() {
        let response = handle(r#"{"cmd":"Tokenize","input":"a,b,c","delimiter":","}"#);
        assert_eq!(
            response,
            Response::Success {
                result: json!({"tokens": ["a", "b", "c"]})
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        let response = handle(r#"{"cmd":"Index","items":[]}"#);
        assert!(matches!(response, Response::Error { .. }));
    }

    #[test]
    fn test_bad_options_reported() {
        let response = handle(
            r#"{"cmd":"Search","query":"a","source":["a"],"options":{"exclusions":"["}}"#,
        );
        match response {
            Response::Error { message } => assert!(message.contains("invalid exclusion pattern")),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_response_json_shape() {
        let json = Response::error("boom").to_json();
        assert_eq!(json, r#"{"status":"Error","message":"boom"}"#);
    }
}
