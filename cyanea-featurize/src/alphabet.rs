//! Residue alphabets with constant-time symbol lookup.

use cyanea_core::{CyaneaError, Result};

const PROTEIN_SYMBOLS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Sentinel for bytes that are not part of the alphabet.
const ABSENT: u8 = u8::MAX;

/// An ordered set of residue symbols.
///
/// Symbol order is significant: a residue's position in the alphabet is its
/// label and its one-hot column. Lookups are exact: only the uppercase
/// symbols are members. The byte index table is built once when the
/// alphabet is created.
#[derive(Clone)]
pub struct Alphabet {
    symbols: Vec<u8>,
    index: [u8; 256],
}

impl Alphabet {
    /// The 20 standard amino acids, `ACDEFGHIKLMNPQRSTVWY`.
    pub fn protein() -> Self {
        Self::build(PROTEIN_SYMBOLS.to_vec())
    }

    /// Create an alphabet from an ordered list of symbols.
    ///
    /// Symbols are uppercased. Fails if the list is empty, longer than 255,
    /// contains a non-graphic ASCII byte, or repeats a symbol.
    pub fn new(symbols: &[u8]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(CyaneaError::InvalidInput("alphabet is empty".into()));
        }
        if symbols.len() >= ABSENT as usize {
            return Err(CyaneaError::InvalidInput(format!(
                "alphabet has {} symbols, at most {} are supported",
                symbols.len(),
                ABSENT as usize - 1
            )));
        }
        let mut upper = Vec::with_capacity(symbols.len());
        for &b in symbols {
            if !b.is_ascii_graphic() {
                return Err(CyaneaError::InvalidInput(format!(
                    "alphabet symbol {:?} is not a printable ASCII character",
                    b as char
                )));
            }
            let u = b.to_ascii_uppercase();
            if upper.contains(&u) {
                return Err(CyaneaError::InvalidInput(format!(
                    "alphabet symbol '{}' appears more than once",
                    u as char
                )));
            }
            upper.push(u);
        }
        Ok(Self::build(upper))
    }

    fn build(symbols: Vec<u8>) -> Self {
        let mut index = [ABSENT; 256];
        for (i, &s) in symbols.iter().enumerate() {
            index[s as usize] = i as u8;
        }
        Self { symbols, index }
    }

    /// The ordered symbols of this alphabet (uppercase).
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// The number of symbols in this alphabet.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Position of `b` in the alphabet.
    #[inline]
    pub fn index_of(&self, b: u8) -> Option<usize> {
        match self.index[b as usize] {
            ABSENT => None,
            i => Some(i as usize),
        }
    }

    /// Whether `b` belongs to the alphabet.
    pub fn contains(&self, b: u8) -> bool {
        self.index_of(b).is_some()
    }

    /// Map every residue of `seq` to its alphabet index.
    ///
    /// # Errors
    ///
    /// Returns [`CyaneaError::UnknownResidue`] for the first byte that is not
    /// in the alphabet, with its zero-based position.
    pub fn residue_indices(&self, seq: &[u8]) -> Result<Vec<usize>> {
        seq.iter()
            .enumerate()
            .map(|(position, &b)| {
                self.index_of(b).ok_or_else(|| unknown_residue(seq, position))
            })
            .collect()
    }

    /// Check that every byte of `seq` belongs to the alphabet.
    pub fn validate(&self, seq: &[u8]) -> Result<()> {
        match seq.iter().position(|&b| !self.contains(b)) {
            Some(position) => Err(unknown_residue(seq, position)),
            None => Ok(()),
        }
    }

    /// Like [`validate`](Self::validate), but lowercase symbols also pass.
    ///
    /// The error reports the residue as it appears in `seq`.
    pub fn validate_ignore_case(&self, seq: &[u8]) -> Result<()> {
        match seq
            .iter()
            .position(|&b| !self.contains(b.to_ascii_uppercase()))
        {
            Some(position) => Err(unknown_residue(seq, position)),
            None => Ok(()),
        }
    }
}

/// Every byte before `position` is an ASCII residue, so `position` starts a
/// character whenever the input is UTF-8.
fn unknown_residue(seq: &[u8], position: usize) -> CyaneaError {
    let residue = String::from_utf8_lossy(&seq[position..seq.len().min(position + 4)])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    CyaneaError::UnknownResidue { residue, position }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl Default for Alphabet {
    fn default() -> Self {
        Self::protein()
    }
}
