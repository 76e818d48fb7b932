//! Shared primitives and traits for the Cyanea feature-extraction crates.
//!
//! `cyanea-core` provides the foundation that the other workspace crates build on:
//!
//! - **Error types** — [`CyaneaError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`] for anything that can be read as residues,
//!   [`Summarizable`] for one-line descriptions

pub mod error;
pub mod traits;

pub use error::{CyaneaError, Result};
pub use traits::*;
