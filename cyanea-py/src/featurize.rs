//! Python bindings for cyanea-featurize: classical sequence encodings.
//!
//! Method names and keyword defaults match the encoder API used by existing
//! Python pipelines, so `ClassicEncoder().get_one_hot_encoding(seq)` keeps
//! working. `length=None` disables resizing where a length is honoured.

use pyo3::prelude::*;

use cyanea_core::Summarizable;
use cyanea_featurize::{ClassicEncoder as Encoder, EncoderConfig, EncodingScheme};

use crate::error::IntoPyResult;

/// Encodes protein sequences into fixed-dimension numeric vectors.
#[pyclass(frozen)]
pub struct ClassicEncoder {
    inner: Encoder,
}

#[pymethods]
impl ClassicEncoder {
    #[new]
    #[pyo3(signature = (one_hot_length=Some(1024), label_length=Some(1024), tfidf_length=Some(1024)))]
    fn new(
        one_hot_length: Option<usize>,
        label_length: Option<usize>,
        tfidf_length: Option<usize>,
    ) -> PyResult<Self> {
        let config = EncoderConfig {
            one_hot_length,
            label_length,
            tfidf_length,
        };
        let inner = Encoder::with_config(config).into_pyresult()?;
        Ok(Self { inner })
    }

    /// The ordered residue alphabet as a list of one-letter strings.
    #[getter]
    fn protein_alphabet(&self) -> Vec<String> {
        self.inner
            .alphabet()
            .symbols()
            .iter()
            .map(|&b| (b as char).to_string())
            .collect()
    }

    /// One-hot encoding, zero-padded or truncated to `length`.
    #[pyo3(signature = (protein_sequence, length=Some(1024)))]
    fn get_one_hot_encoding(
        &self,
        protein_sequence: &str,
        length: Option<usize>,
    ) -> PyResult<Vec<f64>> {
        self.inner
            .one_hot_with_length(protein_sequence, length)
            .into_pyresult()
    }

    /// Alphabet index of each residue, resized to `length`.
    #[pyo3(signature = (protein_sequence, length=Some(1024)))]
    fn get_label_encoding(
        &self,
        protein_sequence: &str,
        length: Option<usize>,
    ) -> PyResult<Vec<f64>> {
        self.inner
            .label_with_length(protein_sequence, length)
            .into_pyresult()
    }

    /// Concatenated per-residue binary masks. `length` is accepted and ignored.
    #[pyo3(signature = (protein_sequence, length=1024))]
    fn get_binary_encoding(&self, protein_sequence: &str, length: usize) -> PyResult<Vec<f64>> {
        let _ = length;
        self.inner.binary_mask(protein_sequence).into_pyresult()
    }

    /// Residue counts in alphabet order.
    fn get_bow_encoding(&self, protein_sequence: &str) -> PyResult<Vec<f64>> {
        self.inner.bag_of_words(protein_sequence).into_pyresult()
    }

    /// L2-normalized TF-IDF weights, resized to `length`.
    #[pyo3(signature = (protein_sequence, length=Some(1024)))]
    fn get_tfidf_encoding(
        &self,
        protein_sequence: &str,
        length: Option<usize>,
    ) -> PyResult<Vec<f64>> {
        self.inner
            .tfidf_with_length(protein_sequence, length)
            .into_pyresult()
    }

    /// Unigram + bigram counts over the fit vocabulary. `length` is accepted and ignored.
    #[pyo3(signature = (protein_sequence, length=1024))]
    fn get_ngram_encoding(&self, protein_sequence: &str, length: usize) -> PyResult<Vec<f64>> {
        let _ = length;
        self.inner.ngram(protein_sequence).into_pyresult()
    }

    /// Encode with a scheme given by name (`"one_hot"`, `"tfidf"`, ...).
    fn encode(&self, protein_sequence: &str, scheme: &str) -> PyResult<Vec<f64>> {
        let scheme = scheme.parse::<EncodingScheme>().into_pyresult()?;
        self.inner.encode(scheme, protein_sequence).into_pyresult()
    }

    fn __repr__(&self) -> String {
        self.inner.summary()
    }
}

/// Names of every supported encoding scheme.
#[pyfunction]
fn encoding_schemes() -> Vec<&'static str> {
    EncodingScheme::ALL.iter().map(|s| s.name()).collect()
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "featurize")?;
    m.add_class::<ClassicEncoder>()?;
    m.add_function(wrap_pyfunction!(encoding_schemes, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
