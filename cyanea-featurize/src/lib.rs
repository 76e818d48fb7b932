//! Classical feature extraction for protein sequences.
//!
//! Turns a residue string into fixed-dimension numeric vectors for
//! downstream classifiers:
//!
//! - **Alphabet** — [`Alphabet`] with case-insensitive residue lookup
//! - **Per-residue encodings** — one-hot, label and binary-mask vectors
//! - **Vocabulary tables** — bag-of-words counts, smoothed TF-IDF weights
//!   and character n-gram counts via [`CountTable`] / [`TfidfTable`]
//! - **Resizing** — zero-pad or truncate to a fixed length with [`fixed_size`]
//! - **Encoder** — [`ClassicEncoder`] bundling all six schemes
//!
//! # Example
//!
//! ```
//! use cyanea_featurize::{ClassicEncoder, EncodingScheme};
//!
//! let enc = ClassicEncoder::new().unwrap();
//! let one_hot = enc.encode(EncodingScheme::OneHot, "MKV").unwrap();
//! assert_eq!(one_hot.len(), 1024);
//! assert_eq!(one_hot[10], 1.0); // M is residue 10
//! ```

pub mod alphabet;
pub mod classic;
pub mod encoding;
pub mod ngram;
pub mod resize;
pub mod vectorize;

pub use alphabet::Alphabet;
pub use classic::{ClassicEncoder, EncoderConfig, EncodingScheme, DEFAULT_LENGTH};
pub use encoding::{label_encode, one_hot_encode, BinaryMasks};
pub use ngram::{NgramCounter, NgramCounts, NgramRange};
pub use resize::fixed_size;
pub use vectorize::{CountTable, TfidfTable, Vocabulary};
