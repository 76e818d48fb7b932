//! Classical protein encodings with JSON input/output.
//!
//! The default encoder is built on first use and shared for the lifetime of
//! the module.

use std::sync::OnceLock;

use serde::Serialize;

use cyanea_core::{CyaneaError, Result, Summarizable};
use cyanea_featurize::{ClassicEncoder, EncoderConfig, EncodingScheme, DEFAULT_LENGTH};

use crate::error::{wasm_error, wasm_ok, wasm_result};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

static ENCODER: OnceLock<Result<ClassicEncoder>> = OnceLock::new();

fn shared_encoder() -> Result<&'static ClassicEncoder> {
    ENCODER
        .get_or_init(ClassicEncoder::new)
        .as_ref()
        .map_err(Clone::clone)
}

// ── Wrapper types ────────────────────────────────────────────────────────

/// Serializable description of one encoding scheme.
#[derive(Debug, Serialize)]
pub struct JsScheme {
    pub name: &'static str,
    pub resized: bool,
}

/// Serializable description of the default encoder.
#[derive(Debug, Serialize)]
pub struct JsEncoderInfo {
    pub alphabet: String,
    pub default_length: usize,
    pub schemes: Vec<JsScheme>,
    pub summary: String,
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// Encode a protein sequence with the named scheme and default lengths.
///
/// Returns JSON `{"ok": [f64, ...]}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn encode_sequence(seq: &str, scheme: &str) -> String {
    wasm_result(shared_encoder().and_then(|enc| {
        let scheme: EncodingScheme = scheme.parse()?;
        enc.encode(scheme, seq)
    }))
}

/// Encode with target lengths from a JSON `EncoderConfig`.
///
/// Missing fields keep their 1024 default; `null` disables resizing,
/// e.g. `{"one_hot_length": 512, "tfidf_length": null}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn encode_sequence_with_config(seq: &str, scheme: &str, config_json: &str) -> String {
    let config: EncoderConfig = match serde_json::from_str(config_json) {
        Ok(c) => c,
        Err(e) => {
            return wasm_error(&CyaneaError::InvalidInput(format!(
                "invalid encoder config: {e}"
            )))
        }
    };
    wasm_result(ClassicEncoder::with_config(config).and_then(|enc| {
        let scheme: EncodingScheme = scheme.parse()?;
        enc.encode(scheme, seq)
    }))
}

/// Describe the default encoder: alphabet, default length and schemes.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn encoder_info() -> String {
    let enc = match shared_encoder() {
        Ok(enc) => enc,
        Err(e) => return wasm_error(&e),
    };
    let info = JsEncoderInfo {
        alphabet: String::from_utf8_lossy(enc.alphabet().symbols()).into_owned(),
        default_length: DEFAULT_LENGTH,
        schemes: EncodingScheme::ALL
            .iter()
            .map(|s| JsScheme {
                name: s.name(),
                resized: s.is_resized(),
            })
            .collect(),
        summary: enc.summary(),
    };
    wasm_ok(&info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn encode_one_hot() {
        let v = parse(&encode_sequence("A", "one_hot"));
        let arr = v["ok"].as_array().unwrap();
        assert_eq!(arr.len(), 1024);
        assert_eq!(arr[0], 1.0);
        assert_eq!(arr[1], 0.0);
    }

    #[test]
    fn encode_binary_not_resized() {
        let v = parse(&encode_sequence("AC", "binary"));
        assert_eq!(v["ok"].as_array().unwrap().len(), 40);
    }

    #[test]
    fn encode_unknown_residue() {
        let v = parse(&encode_sequence("MKZ", "label"));
        assert_eq!(v["residue"], "Z");
        assert_eq!(v["position"], 2);
    }

    #[test]
    fn encode_unknown_scheme() {
        let v = parse(&encode_sequence("MK", "word2vec"));
        assert!(v["error"].as_str().unwrap().contains("word2vec"));
    }

    #[test]
    fn encode_with_config_lengths() {
        let v = parse(&encode_sequence_with_config(
            "MKV",
            "label",
            r#"{"label_length": 5}"#,
        ));
        let arr: Vec<f64> = serde_json::from_value(v["ok"].clone()).unwrap();
        assert_eq!(arr, vec![10.0, 8.0, 17.0, 0.0, 0.0]);

        let v = parse(&encode_sequence_with_config(
            "MKV",
            "tfidf",
            r#"{"tfidf_length": null}"#,
        ));
        assert_eq!(v["ok"].as_array().unwrap().len(), 20);
    }

    #[test]
    fn encode_with_bad_config() {
        let v = parse(&encode_sequence_with_config("MKV", "label", "{"));
        assert!(v["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid input: invalid encoder config"));
    }

    #[test]
    fn info_lists_schemes() {
        let v = parse(&encoder_info());
        assert_eq!(v["ok"]["alphabet"], "ACDEFGHIKLMNPQRSTVWY");
        assert_eq!(v["ok"]["default_length"], 1024);
        assert_eq!(v["ok"]["schemes"].as_array().unwrap().len(), 6);
        assert_eq!(v["ok"]["schemes"][2]["name"], "binary_mask");
        assert_eq!(v["ok"]["schemes"][2]["resized"], false);
    }
}
