//! Classical protein sequence encoder.
//!
//! [`ClassicEncoder`] turns one residue sequence into one numeric vector per
//! call, using one of six schemes:
//!
//! | Scheme | Output | Default length |
//! |---|---|---|
//! | one-hot | `20 × len` indicators | 1024 |
//! | label | `len` alphabet indices | 1024 |
//! | binary mask | `20 × len` indicators | none |
//! | bag of words | 20 residue counts | none |
//! | TF-IDF | 20 weights | 1024 |
//! | n-gram | unigram + bigram counts | none |
//!
//! Binary mask, bag-of-words and n-gram encodings take no length: their
//! output is never resized. One-hot, label and binary-mask encodings accept
//! only the uppercase alphabet symbols; the three counting schemes fold
//! lowercase residues to uppercase before counting. All lookup tables are fit once in the
//! constructor and are read-only afterwards, so an encoder can be shared
//! between threads.
//!
//! # Example
//!
//! ```
//! use cyanea_featurize::ClassicEncoder;
//!
//! let enc = ClassicEncoder::new().unwrap();
//! let bow = enc.bag_of_words("AAC").unwrap();
//! assert_eq!(bow[0], 2.0); // A
//! assert_eq!(bow[1], 1.0); // C
//!
//! assert!(enc.one_hot("MKX").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use cyanea_core::{CyaneaError, Result, Sequence, Summarizable};
use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::encoding::{label_encode, one_hot_encode, BinaryMasks};
use crate::ngram::NgramRange;
use crate::resize::fixed_size;
use crate::vectorize::{CountTable, TfidfTable, Vocabulary};

/// Target length used by the resizing schemes unless configured otherwise.
pub const DEFAULT_LENGTH: usize = 1024;

/// Output lengths for the schemes that resize their result.
///
/// `None` disables resizing for that scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Length of one-hot vectors.
    pub one_hot_length: Option<usize>,
    /// Length of label vectors.
    pub label_length: Option<usize>,
    /// Length of TF-IDF vectors.
    pub tfidf_length: Option<usize>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            one_hot_length: Some(DEFAULT_LENGTH),
            label_length: Some(DEFAULT_LENGTH),
            tfidf_length: Some(DEFAULT_LENGTH),
        }
    }
}

/// The encoding schemes offered by [`ClassicEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EncodingScheme {
    OneHot,
    Label,
    BinaryMask,
    BagOfWords,
    Tfidf,
    Ngram,
}

impl EncodingScheme {
    /// Every scheme, in table order.
    pub const ALL: [EncodingScheme; 6] = [
        EncodingScheme::OneHot,
        EncodingScheme::Label,
        EncodingScheme::BinaryMask,
        EncodingScheme::BagOfWords,
        EncodingScheme::Tfidf,
        EncodingScheme::Ngram,
    ];

    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            EncodingScheme::OneHot => "one_hot",
            EncodingScheme::Label => "label",
            EncodingScheme::BinaryMask => "binary_mask",
            EncodingScheme::BagOfWords => "bag_of_words",
            EncodingScheme::Tfidf => "tfidf",
            EncodingScheme::Ngram => "ngram",
        }
    }

    /// Whether the scheme resizes its output to a target length.
    pub fn is_resized(&self) -> bool {
        matches!(
            self,
            EncodingScheme::OneHot | EncodingScheme::Label | EncodingScheme::Tfidf
        )
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingScheme {
    type Err = CyaneaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "one_hot" | "onehot" => Ok(EncodingScheme::OneHot),
            "label" => Ok(EncodingScheme::Label),
            "binary" | "binary_mask" => Ok(EncodingScheme::BinaryMask),
            "bow" | "bag_of_words" => Ok(EncodingScheme::BagOfWords),
            "tfidf" | "tf_idf" => Ok(EncodingScheme::Tfidf),
            "ngram" | "n_gram" => Ok(EncodingScheme::Ngram),
            _ => Err(CyaneaError::InvalidInput(format!(
                "unknown encoding scheme: {s}"
            ))),
        }
    }
}

/// Encodes residue sequences with fixed, pre-fit lookup tables.
#[derive(Debug, Clone)]
pub struct ClassicEncoder {
    alphabet: Alphabet,
    config: EncoderConfig,
    masks: BinaryMasks,
    bow: CountTable,
    tfidf: TfidfTable,
    ngram: CountTable,
}

impl ClassicEncoder {
    /// Protein encoder with the default 1024 target lengths.
    pub fn new() -> Result<Self> {
        Self::with_config(EncoderConfig::default())
    }

    /// Protein encoder with custom target lengths.
    pub fn with_config(config: EncoderConfig) -> Result<Self> {
        Self::with_alphabet(Alphabet::protein(), config)
    }

    /// Encoder over an arbitrary alphabet.
    ///
    /// The count, TF-IDF and n-gram tables are fit on a corpus holding each
    /// alphabet symbol as its own one-letter document.
    pub fn with_alphabet(alphabet: Alphabet, config: EncoderConfig) -> Result<Self> {
        let corpus: Vec<[u8; 1]> = alphabet.symbols().iter().map(|&s| [s]).collect();
        let masks = BinaryMasks::new(&alphabet);
        let bow = CountTable::from_corpus(&corpus, NgramRange::unigrams())?;
        let tfidf = TfidfTable::from_corpus(&corpus, NgramRange::unigrams())?;
        let ngram = CountTable::from_corpus(&corpus, NgramRange::up_to_bigrams())?;
        debug!(
            alphabet = alphabet.size(),
            bow = %bow.summary(),
            tfidf = %tfidf.summary(),
            ngram = %ngram.summary(),
            "fit classic encoder tables"
        );
        Ok(Self {
            alphabet,
            config,
            masks,
            bow,
            tfidf,
            ngram,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Column order of [`bag_of_words`](Self::bag_of_words).
    pub fn bow_vocabulary(&self) -> &Vocabulary {
        self.bow.vocabulary()
    }

    /// Column order of [`tfidf`](Self::tfidf).
    pub fn tfidf_vocabulary(&self) -> &Vocabulary {
        self.tfidf.vocabulary()
    }

    /// Column order of [`ngram`](Self::ngram).
    pub fn ngram_vocabulary(&self) -> &Vocabulary {
        self.ngram.vocabulary()
    }

    /// Encode `seq` with the given scheme and the configured lengths.
    pub fn encode<S: Sequence + ?Sized>(
        &self,
        scheme: EncodingScheme,
        seq: &S,
    ) -> Result<Vec<f64>> {
        match scheme {
            EncodingScheme::OneHot => self.one_hot(seq),
            EncodingScheme::Label => self.label(seq),
            EncodingScheme::BinaryMask => self.binary_mask(seq),
            EncodingScheme::BagOfWords => self.bag_of_words(seq),
            EncodingScheme::Tfidf => self.tfidf(seq),
            EncodingScheme::Ngram => self.ngram(seq),
        }
    }

    /// One-hot encoding resized to the configured one-hot length.
    ///
    /// # Errors
    ///
    /// [`CyaneaError::UnknownResidue`] if `seq` has a byte outside the alphabet.
    pub fn one_hot<S: Sequence + ?Sized>(&self, seq: &S) -> Result<Vec<f64>> {
        self.one_hot_with_length(seq, self.config.one_hot_length)
    }

    /// One-hot encoding resized to `length` (`None` keeps `20 × len`).
    pub fn one_hot_with_length<S: Sequence + ?Sized>(
        &self,
        seq: &S,
        length: Option<usize>,
    ) -> Result<Vec<f64>> {
        let indices = self.alphabet.residue_indices(seq.as_bytes())?;
        let out = fixed_size(one_hot_encode(&indices, self.alphabet.size()), length);
        Ok(traced(EncodingScheme::OneHot, indices.len(), out))
    }

    /// Label encoding resized to the configured label length.
    pub fn label<S: Sequence + ?Sized>(&self, seq: &S) -> Result<Vec<f64>> {
        self.label_with_length(seq, self.config.label_length)
    }

    /// Label encoding resized to `length` (`None` keeps one value per residue).
    pub fn label_with_length<S: Sequence + ?Sized>(
        &self,
        seq: &S,
        length: Option<usize>,
    ) -> Result<Vec<f64>> {
        let indices = self.alphabet.residue_indices(seq.as_bytes())?;
        let out = fixed_size(label_encode(&indices), length);
        Ok(traced(EncodingScheme::Label, indices.len(), out))
    }

    /// Concatenated per-residue binary masks, never resized.
    pub fn binary_mask<S: Sequence + ?Sized>(&self, seq: &S) -> Result<Vec<f64>> {
        let indices = self.alphabet.residue_indices(seq.as_bytes())?;
        let out = self.masks.encode(&indices);
        Ok(traced(EncodingScheme::BinaryMask, indices.len(), out))
    }

    /// Residue occurrence counts in vocabulary order, never resized.
    ///
    /// Lowercase residues are counted as their uppercase symbol.
    pub fn bag_of_words<S: Sequence + ?Sized>(&self, seq: &S) -> Result<Vec<f64>> {
        let bytes = seq.as_bytes();
        self.alphabet.validate_ignore_case(bytes)?;
        Ok(traced(EncodingScheme::BagOfWords, bytes.len(), self.bow.counts(bytes)))
    }

    /// TF-IDF weights resized to the configured TF-IDF length.
    pub fn tfidf<S: Sequence + ?Sized>(&self, seq: &S) -> Result<Vec<f64>> {
        self.tfidf_with_length(seq, self.config.tfidf_length)
    }

    /// TF-IDF weights resized to `length` (`None` keeps one weight per term).
    pub fn tfidf_with_length<S: Sequence + ?Sized>(
        &self,
        seq: &S,
        length: Option<usize>,
    ) -> Result<Vec<f64>> {
        let bytes = seq.as_bytes();
        self.alphabet.validate_ignore_case(bytes)?;
        let out = fixed_size(self.tfidf.weights(bytes), length);
        Ok(traced(EncodingScheme::Tfidf, bytes.len(), out))
    }

    /// Unigram + bigram counts over the fit vocabulary, never resized.
    ///
    /// The vocabulary was fit on one-letter documents, so it holds only
    /// unigrams and the bigrams of `seq` do not contribute.
    pub fn ngram<S: Sequence + ?Sized>(&self, seq: &S) -> Result<Vec<f64>> {
        let bytes = seq.as_bytes();
        self.alphabet.validate_ignore_case(bytes)?;
        Ok(traced(EncodingScheme::Ngram, bytes.len(), self.ngram.counts(bytes)))
    }
}

fn traced(scheme: EncodingScheme, residues: usize, out: Vec<f64>) -> Vec<f64> {
    trace!(%scheme, residues, dim = out.len(), "encoded sequence");
    out
}

impl Summarizable for ClassicEncoder {
    fn summary(&self) -> String {
        format!(
            "ClassicEncoder: {} residues, bow={} terms, tfidf={} terms, ngram={} terms",
            self.alphabet.size(),
            self.bow.vocabulary().len(),
            self.tfidf.vocabulary().len(),
            self.ngram.vocabulary().len(),
        )
    }
}
