//! Python↔Rust conversion helpers.
//!
//! Python dicts cross the boundary as JSON so the host framework and Rust share
//! one schema: dicts are serialized with `json.dumps` on the way in, and Rust
//! values are rendered with `serde_json` and parsed with `json.loads` on the way out.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use ringbuf_regmap::RegMapError;
use ringbuf_regmap::config::DeviceConfig;
use serde::Serialize;

/// Converts a Python dict of framework keyword arguments into a `DeviceConfig`.
///
/// # Arguments
///
/// * `py` - Python interpreter handle.
/// * `dict` - A dict such as `{"name": "RingBuf", "offset": 0x1000}`.
///
/// # Returns
///
/// The deserialized configuration, or a `ValueError` if the dict does not match.
pub fn py_dict_to_config(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<DeviceConfig> {
    let json = py.import("json")?;
    let json_str: String = json.getattr("dumps")?.call1((dict,))?.extract()?;
    DeviceConfig::from_json(&json_str).map_err(to_py_err)
}

/// Renders any serializable value as the equivalent Python object.
///
/// # Returns
///
/// Dicts, lists and scalars built by `json.loads`, or a `ValueError` if
/// serialization fails.
pub fn to_py_object<T: Serialize + ?Sized>(py: Python<'_>, value: &T) -> PyResult<PyObject> {
    let text = serde_json::to_string(value).map_err(|e| to_py_err(e.into()))?;
    let json = py.import("json")?;
    Ok(json.getattr("loads")?.call1((text,))?.unbind())
}

/// Maps a construction error onto `ValueError`, matching how the host reports bad declarations.
pub fn to_py_err(err: RegMapError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
