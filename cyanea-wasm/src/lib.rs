//! WASM bindings for the Cyanea feature-extraction crates.
//!
//! This crate provides in-memory, JSON-based wrappers around
//! `cyanea-featurize`, designed for environments where a native extension
//! is unavailable (browsers, sandboxed workers). Every public function
//! accepts simple types (`&str`) and returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>"}`
//!
//! `#[wasm_bindgen]` annotations are only applied with the `wasm` feature.
//!
//! # Modules
//!
//! - [`featurize`] — classical protein encodings
//!
//! # Example
//!
//! ```
//! let json = cyanea_wasm::encode_sequence("AAC", "bow");
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"][0], 2.0);
//! ```

pub mod error;
pub mod featurize;

pub use featurize::*;
