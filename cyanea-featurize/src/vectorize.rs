//! Vocabulary-indexed count and TF-IDF tables.
//!
//! A table is built once from a corpus of documents and is immutable
//! afterwards. Each document contributes every n-gram in the table's
//! [`NgramRange`]; the distinct n-grams, sorted lexicographically, form the
//! vocabulary and fix the column order of every output vector.
//!
//! Terms in an encoded sequence that never occurred in the corpus are
//! ignored rather than reported.

use std::collections::HashMap;

use cyanea_core::{CyaneaError, Result, Summarizable};

use crate::ngram::{NgramCounter, NgramCounts, NgramRange};

/// Sorted set of n-gram terms mapped to column indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<Vec<u8>>,
    index: HashMap<Vec<u8>, usize>,
}

impl Vocabulary {
    fn from_corpus<D: AsRef<[u8]>>(corpus: &[D], counter: &NgramCounter) -> Result<Self> {
        let mut terms: Vec<Vec<u8>> = corpus
            .iter()
            .flat_map(|doc| {
                counter
                    .count_sequence(doc.as_ref())
                    .iter()
                    .map(|(gram, _)| gram.to_vec())
                    .collect::<Vec<_>>()
            })
            .collect();
        terms.sort_unstable();
        terms.dedup();
        if terms.is_empty() {
            return Err(CyaneaError::InvalidInput(
                "corpus produced an empty vocabulary".into(),
            ));
        }
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Ok(Self { terms, index })
    }

    /// Number of terms (output dimension).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in column order.
    pub fn terms(&self) -> impl Iterator<Item = &[u8]> {
        self.terms.iter().map(Vec::as_slice)
    }

    /// Column index of `term` (case-insensitive).
    pub fn get(&self, term: &[u8]) -> Option<usize> {
        let upper: Vec<u8> = term.iter().map(|b| b.to_ascii_uppercase()).collect();
        self.index.get(&upper).copied()
    }

    fn scatter(&self, counts: &NgramCounts) -> Vec<f64> {
        let mut row = vec![0.0; self.terms.len()];
        for (gram, count) in counts.iter() {
            if let Some(&col) = self.index.get(gram) {
                row[col] = count as f64;
            }
        }
        row
    }
}

/// Raw term counts over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct CountTable {
    counter: NgramCounter,
    vocabulary: Vocabulary,
}

impl CountTable {
    /// Build the vocabulary from `corpus`.
    ///
    /// # Errors
    ///
    /// Returns an error if no document yields a single n-gram.
    pub fn from_corpus<D: AsRef<[u8]>>(corpus: &[D], range: NgramRange) -> Result<Self> {
        let counter = NgramCounter::new(range);
        let vocabulary = Vocabulary::from_corpus(corpus, &counter)?;
        Ok(Self {
            counter,
            vocabulary,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn range(&self) -> NgramRange {
        self.counter.range()
    }

    /// Count vector of `doc`, one entry per vocabulary term.
    pub fn counts(&self, doc: &[u8]) -> Vec<f64> {
        self.vocabulary.scatter(&self.counter.count_sequence(doc))
    }
}

impl Summarizable for CountTable {
    fn summary(&self) -> String {
        let range = self.counter.range();
        format!(
            "CountTable: n={}..={}, {} terms",
            range.min(),
            range.max(),
            self.vocabulary.len()
        )
    }
}

/// Smoothed TF-IDF weights over a fixed vocabulary.
///
/// `idf(t) = ln((1 + n_docs) / (1 + df(t))) + 1`, where `df(t)` is the number
/// of corpus documents containing `t`. A document's row is its raw term
/// counts scaled by `idf` and then L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfTable {
    counts: CountTable,
    idf: Vec<f64>,
}

impl TfidfTable {
    /// Build the vocabulary and document frequencies from `corpus`.
    pub fn from_corpus<D: AsRef<[u8]>>(corpus: &[D], range: NgramRange) -> Result<Self> {
        let counts = CountTable::from_corpus(corpus, range)?;
        let mut df = vec![0usize; counts.vocabulary.len()];
        for doc in corpus {
            let row = counts.counts(doc.as_ref());
            for (d, &c) in df.iter_mut().zip(&row) {
                if c > 0.0 {
                    *d += 1;
                }
            }
        }
        let n_docs = corpus.len() as f64;
        let idf = df
            .into_iter()
            .map(|d| ((1.0 + n_docs) / (1.0 + d as f64)).ln() + 1.0)
            .collect();
        Ok(Self { counts, idf })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.counts.vocabulary()
    }

    /// Inverse document frequency per vocabulary term.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// L2-normalized TF-IDF row for `doc`. A document with no known terms
    /// maps to the zero vector.
    pub fn weights(&self, doc: &[u8]) -> Vec<f64> {
        let mut row = self.counts.counts(doc);
        for (w, idf) in row.iter_mut().zip(&self.idf) {
            *w *= idf;
        }
        l2_normalize(&mut row);
        row
    }
}

impl Summarizable for TfidfTable {
    fn summary(&self) -> String {
        format!("TfidfTable: {} terms", self.idf.len())
    }
}

/// Zero vectors are left unchanged.
fn l2_normalize(data: &mut [f64]) {
    let norm: f64 = data.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        data.iter_mut().for_each(|v| *v /= norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: [&str; 4] = ["G", "A", "C", "T"];

    #[test]
    fn vocabulary_is_sorted() {
        let table = CountTable::from_corpus(&LETTERS, NgramRange::unigrams()).unwrap();
        let terms: Vec<&[u8]> = table.vocabulary().terms().collect();
        assert_eq!(terms, vec![&b"A"[..], b"C", b"G", b"T"]);
    }

    #[test]
    fn one_letter_documents_never_yield_bigrams() {
        let table = CountTable::from_corpus(&LETTERS, NgramRange::up_to_bigrams()).unwrap();
        assert_eq!(table.vocabulary().len(), 4);
        assert_eq!(table.vocabulary().get(b"AC"), None);
    }

    #[test]
    fn multi_letter_documents_add_bigrams() {
        let table = CountTable::from_corpus(&["ACA"], NgramRange::up_to_bigrams()).unwrap();
        let terms: Vec<&[u8]> = table.vocabulary().terms().collect();
        assert_eq!(terms, vec![&b"A"[..], b"AC", b"C", b"CA"]);
        assert_eq!(table.counts(b"ACAC"), vec![2.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn counts_ignore_unseen_terms() {
        let table = CountTable::from_corpus(&LETTERS, NgramRange::unigrams()).unwrap();
        assert_eq!(table.counts(b"AANA"), vec![3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn vocabulary_lookup_is_case_insensitive() {
        let table = CountTable::from_corpus(&LETTERS, NgramRange::unigrams()).unwrap();
        assert_eq!(table.vocabulary().get(b"g"), Some(2));
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let corpus: [&str; 0] = [];
        assert!(CountTable::from_corpus(&corpus, NgramRange::unigrams()).is_err());
        assert!(CountTable::from_corpus(&[""], NgramRange::unigrams()).is_err());
    }

    #[test]
    fn smooth_idf_values() {
        let table = TfidfTable::from_corpus(&["AC", "A"], NgramRange::unigrams()).unwrap();
        // df(A) = 2, df(C) = 1, n = 2
        let expected_a = (3.0f64 / 3.0).ln() + 1.0;
        let expected_c = (3.0f64 / 2.0).ln() + 1.0;
        assert!((table.idf()[0] - expected_a).abs() < 1e-12);
        assert!((table.idf()[1] - expected_c).abs() < 1e-12);
    }

    #[test]
    fn tfidf_rows_are_unit_length() {
        let table = TfidfTable::from_corpus(&["AC", "A"], NgramRange::unigrams()).unwrap();
        let w = table.weights(b"AAC");
        let norm: f64 = w.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        // Raw: A = 2 * 1.0, C = 1 * (ln 1.5 + 1)
        let c = 1.5f64.ln() + 1.0;
        let n = (4.0 + c * c).sqrt();
        assert!((w[0] - 2.0 / n).abs() < 1e-12);
        assert!((w[1] - c / n).abs() < 1e-12);
    }

    #[test]
    fn tfidf_unknown_terms_only_is_zero() {
        let table = TfidfTable::from_corpus(&LETTERS, NgramRange::unigrams()).unwrap();
        assert_eq!(table.weights(b"NNN"), vec![0.0; 4]);
        assert_eq!(table.weights(b""), vec![0.0; 4]);
    }

    #[test]
    fn summaries() {
        let counts = CountTable::from_corpus(&LETTERS, NgramRange::up_to_bigrams()).unwrap();
        assert_eq!(counts.summary(), "CountTable: n=1..=2, 4 terms");
        let tfidf = TfidfTable::from_corpus(&LETTERS, NgramRange::unigrams()).unwrap();
        assert_eq!(tfidf.summary(), "TfidfTable: 4 terms");
    }
}
