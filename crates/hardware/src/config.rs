//! Device configuration.
//!
//! This module defines the configuration a host framework passes when it constructs a
//! device, plus a data-driven description format for whole register maps. It provides:
//! 1. **Defaults:** Baseline values for attributes a declaration leaves out.
//! 2. **Device configuration:** Name, description, base offset, enable state and parent,
//!    with any further framework keys forwarded untouched.
//! 3. **Field descriptions:** Framework-style attribute sets (`bitSize`, `bitOffset`,
//!    `mode`, `pollInterval`, `disp`) that convert into validated [`Field`]s.
//!
//! Configuration is supplied as JSON from the Python host (a dict passed through
//! `json.dumps`) or built in Rust with `DeviceConfig::default()`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::common::{AccessMode, RegMapError};
use crate::regmap::Field;

/// Default values for attributes omitted from a configuration.
mod defaults {
    use crate::common::constants::DEFAULT_BIT_SIZE;

    /// Devices start enabled unless the host says otherwise.
    pub const fn enabled() -> bool {
        true
    }

    /// A field without a width spans the whole register word.
    pub const fn bit_size() -> u32 {
        DEFAULT_BIT_SIZE
    }

    /// A field without a mode is read-write.
    pub fn mode() -> String {
        "RW".to_string()
    }
}

/// Framework-level configuration for one device instance.
///
/// The descriptor never interprets `extra`; it is carried so that a host can
/// round-trip keys this crate does not know about.
///
/// # Examples
///
/// ```
/// use ringbuf_regmap::config::DeviceConfig;
///
/// let json = r#"{ "name": "RingBuf[0]", "offset": 4096, "expand": false }"#;
/// let config: DeviceConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.name.as_deref(), Some("RingBuf[0]"));
/// assert_eq!(config.offset, 0x1000);
/// assert!(config.enabled);
/// assert_eq!(config.extra["expand"], false);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Instance name; devices fall back to their class name when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable description of the instance.
    #[serde(default)]
    pub description: String,

    /// Base byte address of the device within its parent's address space.
    #[serde(default)]
    pub offset: u64,

    /// Whether the host should issue transactions to the device.
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Dotted path of the parent device, if the host has already placed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Every other framework key, forwarded unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: None,
            description: String::new(),
            offset: 0,
            enabled: defaults::enabled(),
            parent: None,
            extra: Map::new(),
        }
    }
}

impl DeviceConfig {
    /// Returns a default configuration carrying the given instance name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the base byte address of the device.
    #[must_use]
    pub const fn at(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Parses a configuration from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::Config`] if the text is not a valid configuration object.
    pub fn from_json(json: &str) -> Result<Self, RegMapError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One field declaration as the host framework spells it.
///
/// Unknown attributes are ignored so that framework-only keys (value types,
/// enums, hidden flags) do not break parsing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field name, unique within its device.
    pub name: String,
    /// Documentation string.
    #[serde(default)]
    pub description: String,
    /// Byte offset of the containing register.
    #[serde(default)]
    pub offset: u64,
    /// Width in bits.
    #[serde(default = "defaults::bit_size")]
    pub bit_size: u32,
    /// First bit inside the register word.
    #[serde(default)]
    pub bit_offset: u32,
    /// Access mode string (`RO`, `WO` or `RW`).
    #[serde(default = "defaults::mode")]
    pub mode: String,
    /// Poll interval in seconds.
    #[serde(default)]
    pub poll_interval: Option<f64>,
    /// Display-format hint.
    #[serde(default)]
    pub disp: Option<String>,
}

impl FieldSpec {
    /// Converts the description into a [`Field`].
    ///
    /// Only the attribute values themselves are checked here; placement rules
    /// (unique names, bit ranges, overlaps) are enforced when the field is declared.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::InvalidMode`] for an unknown mode string and
    /// [`RegMapError::InvalidPollInterval`] for a negative or non-finite interval.
    pub fn into_field(self) -> Result<Field, RegMapError> {
        let mode: AccessMode = self.mode.parse()?;
        let poll_interval = match self.poll_interval {
            Some(secs) => Some(Duration::try_from_secs_f64(secs).map_err(|_| {
                RegMapError::InvalidPollInterval {
                    name: self.name.clone(),
                    secs,
                }
            })?),
            None => None,
        };

        let mut field = Field::new(self.name)
            .with_description(self.description)
            .with_offset(self.offset)
            .with_bit_size(self.bit_size)
            .with_bit_offset(self.bit_offset)
            .with_mode(mode);
        if let Some(interval) = poll_interval {
            field = field.with_poll_interval(interval);
        }
        if let Some(disp) = self.disp {
            field = field.with_disp(disp);
        }
        Ok(field)
    }
}

/// A complete register map description: device configuration plus its fields.
///
/// # Examples
///
/// ```
/// use ringbuf_regmap::config::DeviceSpec;
///
/// let json = r#"{
///     "name": "Scratch",
///     "fields": [
///         { "name": "ScratchPad", "offset": 4, "mode": "RW" }
///     ]
/// }"#;
/// let spec: DeviceSpec = serde_json::from_str(json).unwrap();
/// assert_eq!(spec.fields.len(), 1);
/// assert_eq!(spec.fields[0].bit_size, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceSpec {
    /// Device-level configuration.
    #[serde(flatten)]
    pub config: DeviceConfig,
    /// Field declarations, in display order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl DeviceSpec {
    /// Parses a register map description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::Config`] if the text does not describe a device.
    pub fn from_json(json: &str) -> Result<Self, RegMapError> {
        Ok(serde_json::from_str(json)?)
    }
}
