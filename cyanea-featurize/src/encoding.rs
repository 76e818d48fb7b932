//! Per-residue encodings over an [`Alphabet`].
//!
//! These functions work on residue indices as returned by
//! [`Alphabet::residue_indices`], so validation happens once per sequence.

use crate::alphabet::Alphabet;

/// One-hot encode residue indices.
///
/// Each position produces `alphabet_size` values: 1.0 at the residue's index,
/// 0.0 elsewhere. The output is a flat vector of length
/// `indices.len() * alphabet_size`.
pub fn one_hot_encode(indices: &[usize], alphabet_size: usize) -> Vec<f64> {
    let mut out = vec![0.0; indices.len() * alphabet_size];
    for (i, &idx) in indices.iter().enumerate() {
        debug_assert!(idx < alphabet_size);
        out[i * alphabet_size + idx] = 1.0;
    }
    out
}

/// Label-encode residue indices: one value per position, its 0-based index.
pub fn label_encode(indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&idx| idx as f64).collect()
}

/// Per-residue binary masks.
///
/// Mask `i` has `alphabet.size()` entries with a single 1 at position `i`.
/// Encoding appends each residue's mask in sequence order, which yields the
/// same values as [`one_hot_encode`].
#[derive(Debug, Clone)]
pub struct BinaryMasks {
    masks: Vec<Vec<f64>>,
}

impl BinaryMasks {
    pub fn new(alphabet: &Alphabet) -> Self {
        let n = alphabet.size();
        let masks = (0..n)
            .map(|i| {
                let mut mask = vec![0.0; n];
                mask[i] = 1.0;
                mask
            })
            .collect();
        Self { masks }
    }

    /// The mask for the residue at alphabet index `idx`.
    pub fn mask(&self, idx: usize) -> Option<&[f64]> {
        self.masks.get(idx).map(Vec::as_slice)
    }

    /// Concatenate the masks of `indices`.
    pub fn encode(&self, indices: &[usize]) -> Vec<f64> {
        let width = self.masks.len();
        let mut out = Vec::with_capacity(indices.len() * width);
        for &idx in indices {
            out.extend_from_slice(&self.masks[idx]);
        }
        out
    }
}
