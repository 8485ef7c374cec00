//! System-on-Chip (SoC) Components.
//!
//! This module organizes the firmware blocks that carry register maps and the
//! device tree that places them in one address space.

/// Register maps of concrete firmware blocks.
pub mod devices;

/// Device tree: placement and path lookup of register maps.
pub mod tree;

pub use tree::DeviceTree;
