//! Device descriptors and their builder.
//!
//! A [`DeviceBuilder`] collects field declarations and validates each one as it
//! arrives. Building consumes the builder and yields an immutable [`Device`], so
//! a descriptor that exists is always a valid one and declarations can never be
//! added or changed after setup.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::common::{REGISTER_BYTES, RegMapError};
use crate::config::{DeviceConfig, DeviceSpec};

use super::field::Field;
use super::traits::RegisterMap;

/// Accumulates validated field declarations for one device.
#[derive(Debug)]
pub struct DeviceBuilder {
    name: String,
    config: DeviceConfig,
    fields: Vec<Field>,
    names: HashSet<String>,
}

impl DeviceBuilder {
    /// Starts a device with a default configuration and the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, RegMapError> {
        Self::from_config(DeviceConfig::named(name), "")
    }

    /// Starts a device from host configuration.
    ///
    /// `default_name` is used when the configuration does not name the instance.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::EmptyName`] if the resolved device name is empty,
    /// since such a device could not be addressed by a `Device.Field` path.
    pub fn from_config(config: DeviceConfig, default_name: &str) -> Result<Self, RegMapError> {
        let name = config
            .name
            .clone()
            .unwrap_or_else(|| default_name.to_string());
        if name.is_empty() {
            return Err(RegMapError::EmptyName);
        }
        Ok(Self {
            name,
            config,
            fields: Vec::new(),
            names: HashSet::new(),
        })
    }

    /// Name the device will carry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields declared so far, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Declares one field against the device.
    ///
    /// # Arguments
    ///
    /// * `field` - The declaration to add; it is stored unchanged.
    ///
    /// # Errors
    ///
    /// The declaration is rejected, and nothing is recorded, if:
    /// * the name is empty ([`RegMapError::EmptyName`]) or already used
    ///   ([`RegMapError::DuplicateName`]);
    /// * the width is zero ([`RegMapError::ZeroWidth`]);
    /// * `bit_offset + bit_size` exceeds 32 ([`RegMapError::BitRangeOverflow`]);
    /// * the offset is not word aligned ([`RegMapError::MisalignedOffset`]);
    /// * the register word would end past `u64::MAX` once placed at the
    ///   device base ([`RegMapError::AddressOverflow`]);
    /// * the bits overlap a field already packed at the same offset
    ///   ([`RegMapError::BitOverlap`]).
    pub fn declare(&mut self, field: Field) -> Result<(), RegMapError> {
        self.validate(&field)?;

        debug!(
            device = %self.name,
            field = field.name(),
            offset = field.offset(),
            bit_offset = field.bit_offset(),
            bit_size = field.bit_size(),
            mode = %field.mode(),
            "declared field"
        );
        if field.poll_interval().is_some() && !field.polled() {
            warn!(
                device = %self.name,
                field = field.name(),
                "poll interval on a write-only field is never scheduled"
            );
        }

        let _ = self.names.insert(field.name().to_string());
        self.fields.push(field);
        Ok(())
    }

    fn validate(&self, field: &Field) -> Result<(), RegMapError> {
        let name = field.name();
        if name.is_empty() {
            return Err(RegMapError::EmptyName);
        }
        if self.names.contains(name) {
            return Err(RegMapError::DuplicateName {
                device: self.name.clone(),
                name: name.to_string(),
            });
        }

        let bits = field.bits();
        if bits.size == 0 {
            return Err(RegMapError::ZeroWidth {
                name: name.to_string(),
            });
        }
        if !bits.fits_word() {
            return Err(RegMapError::BitRangeOverflow {
                name: name.to_string(),
                bit_offset: bits.offset,
                bit_size: bits.size,
            });
        }
        if field.offset() % REGISTER_BYTES != 0 {
            return Err(RegMapError::MisalignedOffset {
                name: name.to_string(),
                offset: field.offset(),
            });
        }
        let base = self.config.offset;
        if base
            .checked_add(field.offset())
            .and_then(|addr| addr.checked_add(REGISTER_BYTES))
            .is_none()
        {
            return Err(RegMapError::AddressOverflow {
                name: name.to_string(),
                base,
                span: field.offset(),
            });
        }

        if let Some(other) = self
            .fields
            .iter()
            .find(|f| f.offset() == field.offset() && f.bits().overlaps(bits))
        {
            return Err(RegMapError::BitOverlap {
                name: name.to_string(),
                other: other.name().to_string(),
                offset: field.offset(),
            });
        }
        Ok(())
    }

    /// Finishes construction and freezes the field list.
    pub fn build(self) -> Device {
        info!(
            device = %self.name,
            base = self.config.offset,
            fields = self.fields.len(),
            "register map built"
        );
        Device {
            name: self.name,
            config: self.config,
            fields: self.fields,
        }
    }
}

/// An immutable register map descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Device {
    name: String,
    config: DeviceConfig,
    fields: Vec<Field>,
}

impl Device {
    /// Builds a device from a JSON register map description.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::Config`] for malformed JSON and any declaration
    /// error raised by [`DeviceBuilder::declare`].
    pub fn from_json(json: &str) -> Result<Self, RegMapError> {
        Self::from_spec(DeviceSpec::from_json(json)?)
    }

    /// Builds a device from a parsed register map description.
    ///
    /// # Errors
    ///
    /// Fails on the first field whose attributes or placement are invalid.
    pub fn from_spec(spec: DeviceSpec) -> Result<Self, RegMapError> {
        let mut builder = DeviceBuilder::from_config(spec.config, "")?;
        for field in spec.fields {
            builder.declare(field.into_field()?)?;
        }
        Ok(builder.build())
    }

    /// Host configuration the device was constructed with.
    pub const fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Whether the host should issue transactions to the device.
    pub const fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Every declared field, in declaration order.
    ///
    /// The slice is the same on every call; declarations never change after build.
    pub fn list_fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the device declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the descriptor, configuration and fields included, as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::Config`] if an extra configuration value cannot be serialized.
    pub fn to_json(&self) -> Result<String, RegMapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RegisterMap for Device {
    fn name(&self) -> &str {
        &self.name
    }

    fn base(&self) -> u64 {
        self.config.offset
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }
}
