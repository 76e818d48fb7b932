//! Structured error types for the Cyanea ecosystem.

use thiserror::Error;

/// Unified error type for all Cyanea operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CyaneaError {
    /// A sequence contains a byte outside the encoder's alphabet.
    #[error("unknown residue '{}' at position {position}", .residue.escape_default())]
    UnknownResidue {
        /// The offending character, as it appeared in the input.
        residue: char,
        /// Zero-based position of the residue in the sequence.
        position: usize,
    },

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the Cyanea ecosystem.
pub type Result<T> = std::result::Result<T, CyaneaError>;
