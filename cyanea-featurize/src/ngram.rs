//! Character n-gram extraction from residue sequences.

use cyanea_core::{CyaneaError, Result};

use std::collections::HashMap;

/// Inclusive range of n-gram lengths to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NgramRange {
    min: usize,
    max: usize,
}

impl NgramRange {
    /// Create a range of n-gram lengths `min..=max` (1 <= min <= max <= 12).
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || max > 12 || min > max {
            return Err(CyaneaError::InvalidInput(format!(
                "n-gram range {min}..={max} must satisfy 1 <= min <= max <= 12"
            )));
        }
        Ok(Self { min, max })
    }

    /// Single-residue terms only.
    pub fn unigrams() -> Self {
        Self { min: 1, max: 1 }
    }

    /// Single residues and adjacent residue pairs.
    pub fn up_to_bigrams() -> Self {
        Self { min: 1, max: 2 }
    }

    /// Shortest n-gram length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Longest n-gram length.
    pub fn max(&self) -> usize {
        self.max
    }
}

/// Counts every n-gram whose length falls in an [`NgramRange`].
#[derive(Debug, Clone)]
pub struct NgramCounter {
    range: NgramRange,
}

impl NgramCounter {
    pub fn new(range: NgramRange) -> Self {
        Self { range }
    }

    /// The n-gram lengths this counter extracts.
    pub fn range(&self) -> NgramRange {
        self.range
    }

    /// Count all n-grams in the sequence, shortest lengths first.
    ///
    /// N-grams are uppercased; lengths longer than the sequence yield nothing.
    pub fn count_sequence(&self, seq: &[u8]) -> NgramCounts {
        let mut counts = HashMap::new();
        for n in self.range.min..=self.range.max {
            if seq.len() < n {
                break;
            }
            for window in seq.windows(n) {
                let gram: Vec<u8> = window.iter().map(|b| b.to_ascii_uppercase()).collect();
                *counts.entry(gram).or_insert(0usize) += 1;
            }
        }
        NgramCounts { counts }
    }
}

/// N-gram occurrence counts for a single sequence.
#[derive(Debug, Clone)]
pub struct NgramCounts {
    counts: HashMap<Vec<u8>, usize>,
}

impl NgramCounts {
    /// Iterate over observed (n-gram, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_slice(), v))
    }
}
