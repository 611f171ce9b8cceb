//! Sieve WASM bridge
//!
//! Exposes sieve-core search through a WASM-compatible ABI for hosts that
//! embed the module directly (wazero, wasmtime). No WASI imports are needed:
//! every export is pure computation with shared memory string passing.
//!
//! # Memory Protocol
//!
//! Strings cross the WASM boundary as (ptr, len) pairs in linear memory.
//! The host allocates via [`wasm_alloc`], writes bytes, calls the function,
//! reads the result, then frees via [`wasm_free`].
//!
//! Return values pack pointer and length into a single u64:
//! `(ptr << 32) | len`

pub mod command;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(feature = "wasi")]
pub mod logging;

use sieve_core::json::{error_json, search_json, tokenize_json};

// ============================================================================
// Memory management
// ============================================================================

/// Allocate `size` bytes in WASM linear memory. Returns a pointer.
/// The host must call `wasm_free` to release.
#[no_mangle]
pub extern "C" fn wasm_alloc(size: u32) -> u32 {
    let layout = match std::alloc::Layout::from_size_align(size as usize, 1) {
        Ok(l) => l,
        Err(_) => return 0,
    };
    if layout.size() == 0 {
        return 0;
    }
    let ptr = unsafe { std::alloc::alloc(layout) };
    if ptr.is_null() {
        return 0;
    }
    ptr as u32
}

/// Free a buffer previously allocated by `wasm_alloc` or returned by an
/// export function.
#[no_mangle]
pub extern "C" fn wasm_free(ptr: u32, size: u32) {
    if ptr == 0 || size == 0 {
        return;
    }
    let layout = match std::alloc::Layout::from_size_align(size as usize, 1) {
        Ok(l) => l,
        Err(_) => return,
    };
    unsafe {
        std::alloc::dealloc(ptr as *mut u8, layout);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read a UTF-8 string from WASM linear memory at (ptr, len).
///
/// # Safety
/// `ptr` must point to `len` readable bytes that outlive the returned slice.
unsafe fn read_str<'a>(ptr: u32, len: u32) -> Result<&'a str, std::str::Utf8Error> {
    if len == 0 {
        return Ok("");
    }
    let slice = std::slice::from_raw_parts(ptr as *const u8, len as usize);
    std::str::from_utf8(slice)
}

/// Write a string into newly allocated WASM memory and return packed u64.
/// The caller (host) is responsible for freeing via `wasm_free`.
fn write_result(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let len = bytes.len() as u32;
    let ptr = wasm_alloc(len);
    if ptr == 0 {
        return 0;
    }
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr as *mut u8, len as usize);
    }
    ((ptr as u64) << 32) | (len as u64)
}

/// Decode the input string, run `f`, and write its JSON output.
fn call_json(ptr: u32, len: u32, f: fn(&str) -> String) -> u64 {
    match unsafe { read_str(ptr, len) } {
        Ok(input) => write_result(&f(input)),
        Err(e) => write_result(&error_json(&format!("input is not valid UTF-8: {}", e))),
    }
}

// ============================================================================
// Version info
// ============================================================================

/// Get the sieve-core version. Returns a packed u64 (ptr << 32 | len) pointing
/// to a string containing the version (e.g., "0.1.0").
#[no_mangle]
pub extern "C" fn sieve_core_version() -> u64 {
    write_result(env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Search
// ============================================================================

/// Run a search. Takes (ptr, len) pointing to a UTF-8 JSON request in WASM
/// memory and returns a packed u64 pointing to the JSON response.
///
/// Request: `{"query":"pie apple","source":["apple pie"],"limit":1,"options":{"flexibility":2}}`
/// On success: `{"results":["apple pie"],"matches":[{"value":"apple pie","distance":6,"tier":"permuted"}]}`
/// No result: `{"results":null,"matches":[]}`
/// On error: `{"error":"description"}`
#[no_mangle]
pub extern "C" fn sieve_search(ptr: u32, len: u32) -> u64 {
    call_json(ptr, len, search_json)
}

/// Tokenize a string. Request: `{"input":"a,b,c","delimiter":","}`;
/// response: `{"tokens":["a","b","c"]}`.
#[no_mangle]
pub extern "C" fn sieve_tokenize(ptr: u32, len: u32) -> u64 {
    call_json(ptr, len, tokenize_json)
}
