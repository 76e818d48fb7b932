//! Python bindings for the Cyanea feature-extraction crates.
//!
//! Submodules:
//!
//! - `cyanea.featurize` — `ClassicEncoder` with one-hot, label, binary-mask,
//!   bag-of-words, TF-IDF and n-gram encodings of protein sequences

mod error;
mod featurize;

use pyo3::prelude::*;

#[pymodule]
fn cyanea(m: &Bound<'_, PyModule>) -> PyResult<()> {
    featurize::register(m)?;

    // Register submodules in sys.modules so `from cyanea.featurize import ClassicEncoder` works.
    let py = m.py();
    let sys = py.import("sys")?;
    let modules = sys.getattr("modules")?;
    for name in &["cyanea.featurize"] {
        if let Some(short) = name.rsplit('.').next() {
            modules.set_item(name, m.getattr(short)?)?;
        }
    }

    Ok(())
}
