//! Map `CyaneaError` variants to Python exceptions.

use cyanea_core::CyaneaError;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Extension trait for converting `Result<T, CyaneaError>` into `PyResult<T>`.
pub trait IntoPyResult<T> {
    fn into_pyresult(self) -> pyo3::PyResult<T>;
}

impl<T> IntoPyResult<T> for Result<T, CyaneaError> {
    fn into_pyresult(self) -> pyo3::PyResult<T> {
        self.map_err(to_pyerr)
    }
}

// Both variants describe bad caller input.
fn to_pyerr(e: CyaneaError) -> PyErr {
    match e {
        CyaneaError::UnknownResidue { .. } | CyaneaError::InvalidInput(_) => {
            PyValueError::new_err(e.to_string())
        }
    }
}
