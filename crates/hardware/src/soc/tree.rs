//! Device tree.
//!
//! This module implements the container that places register maps in one address space. It provides:
//! 1. **Attachment:** Built devices are added by name and sorted by base address.
//! 2. **Validation:** Duplicate names and overlapping address windows are rejected.
//! 3. **Lookup:** Dotted `Device.Field` paths resolve to a field and its absolute address.
//!
//! Only fully-built descriptors can be attached, so every declaration error is
//! raised before a device is registered with its parent.

use tracing::info;

use crate::common::RegMapError;
use crate::regmap::{Field, RegisterMap};

/// A named collection of register maps sharing one address space.
#[derive(Debug)]
pub struct DeviceTree {
    name: String,
    devices: Vec<Box<dyn RegisterMap>>,
}

impl DeviceTree {
    /// Creates an empty tree.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the root node (e.g., `"Top"`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            devices: Vec::new(),
        }
    }

    /// Name of the root node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches a device; devices are kept sorted by base address.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::EmptyName`] for an unnamed device,
    /// [`RegMapError::DuplicateDevice`] if a device of the same name is
    /// attached, [`RegMapError::AddressOverflow`] if the window ends past
    /// `u64::MAX`, or [`RegMapError::AddressOverlap`] if the new device's window
    /// intersects an attached one. Devices with an empty window never overlap.
    pub fn add(&mut self, dev: Box<dyn RegisterMap>) -> Result<(), RegMapError> {
        if dev.name().is_empty() {
            return Err(RegMapError::EmptyName);
        }
        if self.device(dev.name()).is_some() {
            return Err(RegMapError::DuplicateDevice(dev.name().to_string()));
        }

        let (base, size) = dev.address_range();
        let Some(end) = base.checked_add(size) else {
            return Err(RegMapError::AddressOverflow {
                name: dev.name().to_string(),
                base,
                span: size,
            });
        };
        if size > 0 {
            // Attached windows were checked on the way in, so their ends fit.
            let clash = self.devices.iter().find(|other| {
                let (other_base, other_size) = other.address_range();
                other_size > 0
                    && base < other_base.saturating_add(other_size)
                    && other_base < end
            });
            if let Some(other) = clash {
                return Err(RegMapError::AddressOverlap {
                    name: dev.name().to_string(),
                    other: other.name().to_string(),
                });
            }
        }

        info!(
            tree = %self.name,
            device = dev.name(),
            base,
            size,
            "device attached"
        );
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        Ok(())
    }

    /// Looks up an attached device by name.
    pub fn device(&self, name: &str) -> Option<&dyn RegisterMap> {
        self.devices
            .iter()
            .find(|d| d.name() == name)
            .map(|d| -> &dyn RegisterMap { &**d })
    }

    /// Attached devices, ascending by base address.
    pub fn devices(&self) -> impl Iterator<Item = &dyn RegisterMap> {
        self.devices
            .iter()
            .map(|d| -> &dyn RegisterMap { &**d })
    }

    /// Number of attached devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if no device is attached.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Resolves a `Device.Field` path.
    ///
    /// # Returns
    ///
    /// The field and the absolute byte address of its register
    /// (device base plus field offset), or `None` if either part is unknown.
    pub fn resolve(&self, path: &str) -> Option<(&Field, u64)> {
        let (device, field) = path.rsplit_once('.')?;
        let dev = self.device(device)?;
        let field = dev.field(field)?;
        Some((field, dev.base().checked_add(field.offset())?))
    }

    /// Returns the device whose register window contains `addr`, and the offset inside it.
    pub fn find_device(&self, addr: u64) -> Option<(&dyn RegisterMap, u64)> {
        self.devices().find_map(|d| {
            let (base, size) = d.address_range();
            if addr >= base && addr - base < size {
                Some((d, addr - base))
            } else {
                None
            }
        })
    }
}
