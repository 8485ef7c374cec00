//! Ring buffer Python binding.
//!
//! Exposes the immutable ring buffer descriptor to the Python host framework,
//! which walks `fields()` to create its remote variables.

use pyo3::prelude::*;
use ringbuf_regmap::config::DeviceConfig;
use ringbuf_regmap::{AxiStreamRingBuffer, RegisterMap};

use crate::conversion::{py_dict_to_config, to_py_err, to_py_object};

/// Python-exposed ring buffer descriptor.
#[pyclass(frozen, name = "AxiStreamRingBuffer")]
#[derive(Debug)]
pub struct PyAxiStreamRingBuffer {
    /// The wrapped descriptor.
    pub inner: AxiStreamRingBuffer,
}

#[pymethods]
impl PyAxiStreamRingBuffer {
    /// Declares the ring buffer from an optional dict of framework keyword arguments.
    ///
    /// # Errors
    ///
    /// Raises `ValueError` if the configuration is malformed.
    #[new]
    #[pyo3(signature = (config_dict=None))]
    fn new(py: Python<'_>, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => py_dict_to_config(py, dict)?,
            None => DeviceConfig::default(),
        };
        let inner = AxiStreamRingBuffer::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Instance name.
    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    /// Base byte address.
    #[getter]
    fn base(&self) -> u64 {
        self.inner.base()
    }

    /// `(base, size)` of the register window.
    fn address_range(&self) -> (u64, u64) {
        self.inner.address_range()
    }

    /// Every field as a dict of framework attributes, in declaration order.
    fn fields(&self, py: Python<'_>) -> PyResult<PyObject> {
        to_py_object(py, self.inner.list_fields())
    }

    /// One field as a dict, or `None` if the name is unknown.
    fn field(&self, py: Python<'_>, name: &str) -> PyResult<Option<PyObject>> {
        self.inner
            .field(name)
            .map(|f| to_py_object(py, f))
            .transpose()
    }

    /// The whole descriptor as pretty-printed JSON.
    fn to_json(&self) -> PyResult<String> {
        self.inner.device().to_json().map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.inner.list_fields().len()
    }

    fn __repr__(&self) -> String {
        let (base, size) = self.inner.address_range();
        format!(
            "AxiStreamRingBuffer(name={:?}, base={base:#x}, size={size:#x})",
            self.inner.name()
        )
    }
}
