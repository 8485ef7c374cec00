//! Register map descriptors.
//!
//! This module holds the generic machinery every device description is made of:
//! field declarations, the validating builder, the immutable device descriptor,
//! and the per-register view the host uses to plan bus transactions.

/// Device descriptor and validating builder.
pub mod device;

/// Field declarations.
pub mod field;

/// Fields grouped by register word.
pub mod register;

/// The `RegisterMap` trait shared by all descriptors.
pub mod traits;

pub use device::{Device, DeviceBuilder};
pub use field::Field;
pub use register::Register;
pub use traits::RegisterMap;
