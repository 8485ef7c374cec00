//! Unit tests for generic register map descriptors.

/// Declaration validation in `DeviceBuilder`.
pub mod builder;
