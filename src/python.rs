//! Python bindings, built with `--features python`.
//!
//! Exposes [`Counter`] as `waterio._core.Counter(start)` with an `inc()`
//! method. Overflow surfaces as Python's `OverflowError`.

use pyo3::exceptions::PyOverflowError;
use pyo3::prelude::*;

use crate::core::counter::{Counter, CounterError};

impl From<CounterError> for PyErr {
    fn from(err: CounterError) -> Self {
        PyOverflowError::new_err(err.to_string())
    }
}

#[pyclass(name = "Counter", module = "waterio._core", unsendable)]
pub struct PyCounter {
    inner: Counter,
}

#[pymethods]
impl PyCounter {
    #[new]
    #[pyo3(signature = (start))]
    fn new(start: i64) -> Self {
        Self { inner: Counter::new(start) }
    }

    /// Increment and return the counter
    fn inc(&mut self) -> PyResult<i64> {
        Ok(self.inner.increment()?)
    }

    #[getter]
    fn start(&self) -> i64 {
        self.inner.start()
    }

    #[getter]
    fn value(&self) -> i64 {
        self.inner.value()
    }

    fn __repr__(&self) -> String {
        format!("Counter(start={}, value={})", self.inner.start(), self.inner.value())
    }
}

#[pymodule]
pub(crate) fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__doc__", "Example Rust extension (pyo3)")?;
    m.add_class::<PyCounter>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
