//! WASI (server-side) entry point for sieve
//!
//! Lets the same search run under any WASI host (wasmtime, wasmer, Node.js,
//! Deno) or natively: one JSON command on stdin, one JSON response on stdout.

use std::io::{self, Read};

use sieve_wasm::command::{handle, Response};
use sieve_wasm::logging;
use tracing::debug;

fn main() {
    logging::init();

    let mut input = String::new();
    let response = match io::stdin().read_to_string(&mut input) {
        Ok(bytes) => {
            debug!(bytes, "command received");
            handle(&input)
        }
        Err(e) => Response::Error {
            message: format!("Failed to read input: {}", e),
        },
    };

    println!("{}", response.to_json());
}
