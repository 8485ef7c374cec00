//! Python bindings for the AXI-Stream ring buffer register map.
//!
//! This crate exposes the descriptor to the Python host framework via PyO3. It provides:
//! 1. **Descriptor:** `AxiStreamRingBuffer`, built from a dict of framework keyword arguments.
//! 2. **Conversion:** JSON-backed helpers mapping Python dicts to Rust types and back.
//! 3. **Utilities:** Version string and opt-in log routing.

use pyo3::prelude::*;

/// Python dict ↔ Rust conversion.
pub mod conversion;
/// Ring buffer binding (`PyAxiStreamRingBuffer`).
pub mod device;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all classes and functions onto the given Python module.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_regmap_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<device::PyAxiStreamRingBuffer>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_regmap_module(m)
}
