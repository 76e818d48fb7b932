//! JSON result wrapper for WASM boundary.
//!
//! Success → `{"ok": <value>}`. Failure → `{"error": "<message>"}`; residue
//! errors also carry `"residue"` and `"position"` so callers can highlight
//! the offending character.

use std::fmt::Display;

use cyanea_core::CyaneaError;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    residue: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
}

/// Serialize a success value as `{"ok": val}`.
pub fn wasm_ok<T: Serialize>(val: &T) -> String {
    #[derive(Serialize)]
    struct Ok<'a, T: Serialize> {
        ok: &'a T,
    }
    serde_json::to_string(&Ok { ok: val }).unwrap_or_else(|e| wasm_err(e))
}

/// Serialize an error as `{"error": "msg"}`.
pub fn wasm_err(msg: impl Display) -> String {
    to_json(&ErrorBody {
        error: msg.to_string(),
        residue: None,
        position: None,
    })
}

/// Serialize a `CyaneaError`, keeping residue details for unknown residues.
pub fn wasm_error(e: &CyaneaError) -> String {
    let (residue, position) = match *e {
        CyaneaError::UnknownResidue { residue, position } => (Some(residue), Some(position)),
        CyaneaError::InvalidInput(_) => (None, None),
    };
    to_json(&ErrorBody {
        error: e.to_string(),
        residue,
        position,
    })
}

/// Map a `cyanea_core::Result<T>` into the JSON envelope.
pub fn wasm_result<T: Serialize>(r: cyanea_core::Result<T>) -> String {
    match r {
        Ok(val) => wasm_ok(&val),
        Err(e) => wasm_error(&e),
    }
}

fn to_json(body: &ErrorBody) -> String {
    // A struct of strings and integers cannot practically fail to serialize.
    serde_json::to_string(body)
        .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.into())
}
