//! Fixed-length resizing of encoded vectors.

/// Pad or truncate `encoded` to exactly `fixed_size` elements.
///
/// Shorter vectors are right-padded with zeros, longer ones keep their first
/// `fixed_size` elements. `None` returns the vector unchanged.
pub fn fixed_size(mut encoded: Vec<f64>, fixed_size: Option<usize>) -> Vec<f64> {
    if let Some(n) = fixed_size {
        encoded.resize(n, 0.0);
    }
    encoded
}
