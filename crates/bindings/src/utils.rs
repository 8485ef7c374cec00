//! Utility functions exposed to Python.
//!
//! Provides the version string and opt-in routing of crate logs to stderr.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the package version string (e.g., for scripting or diagnostics).
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Installs a stderr log subscriber.
///
/// # Arguments
///
/// * `filter` - An `EnvFilter` directive such as `"ringbuf_regmap=debug"`;
///   defaults to `RUST_LOG`, then to `info`.
///
/// # Errors
///
/// Raises `ValueError` for a malformed directive and `RuntimeError` if a
/// subscriber is already installed.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub fn init_logging(filter: Option<&str>) -> PyResult<()> {
    let filter = match filter {
        Some(directive) => EnvFilter::try_new(directive),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info")),
    }
    .map_err(|e| PyValueError::new_err(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}
