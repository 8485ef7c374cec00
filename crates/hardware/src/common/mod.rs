//! Common types shared by every register map.
//!
//! This module provides the building blocks that field declarations are made of:
//! 1. **Constants:** Register word geometry for the AXI-Lite register space.
//! 2. **Access Modes:** `RO`, `WO` and `RW` capabilities of a field.
//! 3. **Bit Ranges:** Position of a field inside its 32-bit register word.
//! 4. **Error Handling:** Construction-time validation errors.

/// Bit range arithmetic inside a register word.
pub mod bits;

/// Register geometry constants.
pub mod constants;

/// Error types raised while building a register map.
pub mod error;

/// Field access modes.
pub mod mode;

pub use bits::BitRange;
pub use constants::{REGISTER_BITS, REGISTER_BYTES};
pub use error::RegMapError;
pub use mode::AccessMode;
