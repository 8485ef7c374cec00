//! AXI-Stream ring buffer register map.
//!
//! This crate describes the memory-mapped control and status registers of the
//! AXI-Stream ring buffer firmware block, for consumption by a host device-tree
//! framework that performs the actual AXI-Lite transactions. It provides:
//! 1. **Common:** Access modes, bit ranges, register geometry and construction errors.
//! 2. **Configuration:** Host-supplied device configuration and JSON register map descriptions.
//! 3. **Register maps:** Field declarations, the validating builder and immutable descriptors.
//! 4. **SoC:** The ring buffer's concrete field set and a device tree for placement and lookup.
//!
//! ```
//! use ringbuf_regmap::config::DeviceConfig;
//! use ringbuf_regmap::soc::devices::AxiStreamRingBuffer;
//! use ringbuf_regmap::RegisterMap;
//!
//! let dev = AxiStreamRingBuffer::new(DeviceConfig::default()).unwrap();
//! assert_eq!(dev.name(), "AxiStreamRingBuffer");
//! assert_eq!(dev.fields().len(), 7);
//! assert_eq!(dev.address_range(), (0, 0x10));
//! ```

/// Common types (access modes, bit ranges, constants, errors).
pub mod common;
/// Device configuration and data-driven register map descriptions.
pub mod config;
/// Generic register map descriptors (fields, builder, device, register view).
pub mod regmap;
/// Concrete devices and the device tree.
pub mod soc;

/// Error type for every construction-time failure.
pub use crate::common::RegMapError;
/// Host configuration forwarded to each device.
pub use crate::config::DeviceConfig;
/// Generic descriptor types; bring `RegisterMap` into scope to enumerate fields.
pub use crate::regmap::{Device, DeviceBuilder, Field, RegisterMap};
/// The ring buffer descriptor.
pub use crate::soc::devices::AxiStreamRingBuffer;
/// Container that places devices in one address space.
pub use crate::soc::DeviceTree;
