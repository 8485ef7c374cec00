//! Register map trait.
//!
//! This module defines the `RegisterMap` trait implemented by every device descriptor. It provides:
//! 1. **Identification:** `name` and `base` for placement in a device tree.
//! 2. **Enumeration:** The ordered field list, name lookup and per-register grouping.
//! 3. **Address window:** The span of register words the device occupies.
//!
//! Implementors are immutable after construction and must be `Send + Sync` so a
//! host may share them with its polling and transaction threads.

use std::fmt::Debug;

use crate::common::REGISTER_BYTES;

use super::field::Field;
use super::register::Register;

/// A device whose registers are described by a fixed list of field declarations.
pub trait RegisterMap: Debug + Send + Sync {
    /// Instance name of the device (e.g., `"AxiStreamRingBuffer"`).
    fn name(&self) -> &str;

    /// Base byte address of the device within its parent.
    fn base(&self) -> u64;

    /// Every declared field, in declaration order.
    fn fields(&self) -> &[Field];

    /// Looks up a field by name.
    fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name() == name)
    }

    /// Declared fields grouped into register words, ascending by offset.
    fn registers(&self) -> Vec<Register<'_>> {
        Register::group(self.fields())
    }

    /// Returns (base, size_in_bytes) of the register window.
    ///
    /// The window ends after the highest declared register word; a device with
    /// no fields occupies no space. The span saturates at `u64::MAX`; the
    /// builder rejects any register word that would not fit.
    fn address_range(&self) -> (u64, u64) {
        let span = self
            .fields()
            .iter()
            .map(|f| f.offset().saturating_add(REGISTER_BYTES))
            .max()
            .unwrap_or(0);
        (self.base(), span)
    }
}
