//! Field declarations.
//!
//! A [`Field`] names one bitfield of one register: where it lives, how wide it
//! is, which way it may be accessed, and the optional polling and display hints
//! the host framework passes through to its scheduler and presentation layers.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::common::{AccessMode, BitRange};
use crate::common::constants::DEFAULT_BIT_SIZE;

/// One named register field.
///
/// Fields are assembled with the `with_*` setters and become immutable once
/// declared on a device; the getters are the only access afterwards.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ringbuf_regmap::common::AccessMode;
/// use ringbuf_regmap::regmap::Field;
///
/// let field = Field::new("TrigCnt")
///     .with_offset(0x4)
///     .with_mode(AccessMode::Ro)
///     .with_poll_interval(Duration::from_secs(1));
/// assert_eq!(field.bit_size(), 32);
/// assert!(field.polled());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    name: String,
    description: String,
    offset: u64,
    bit_size: u32,
    bit_offset: u32,
    mode: AccessMode,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_secs"
    )]
    poll_interval: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    disp: Option<String>,
}

impl Field {
    /// Starts a declaration with framework defaults: offset 0, a full 32-bit
    /// word, read-write, no polling and no display hint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            offset: 0,
            bit_size: DEFAULT_BIT_SIZE,
            bit_offset: 0,
            mode: AccessMode::Rw,
            poll_interval: None,
            disp: None,
        }
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the byte offset of the containing register.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the field width in bits.
    #[must_use]
    pub const fn with_bit_size(mut self, bit_size: u32) -> Self {
        self.bit_size = bit_size;
        self
    }

    /// Sets the first bit of the field inside its register word.
    #[must_use]
    pub const fn with_bit_offset(mut self, bit_offset: u32) -> Self {
        self.bit_offset = bit_offset;
        self
    }

    /// Sets the bit offset and width together.
    #[must_use]
    pub const fn with_bits(mut self, bits: BitRange) -> Self {
        self.bit_offset = bits.offset;
        self.bit_size = bits.size;
        self
    }

    /// Sets the access mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: AccessMode) -> Self {
        self.mode = mode;
        self
    }

    /// Asks the host to refresh the field on this cadence.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Sets the display-format hint (for example `{:d}`).
    #[must_use]
    pub fn with_disp(mut self, disp: impl Into<String>) -> Self {
        self.disp = Some(disp.into());
        self
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documentation string.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Byte offset of the containing register, relative to the device base.
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Width in bits.
    pub const fn bit_size(&self) -> u32 {
        self.bit_size
    }

    /// First bit inside the register word.
    pub const fn bit_offset(&self) -> u32 {
        self.bit_offset
    }

    /// Access mode.
    pub const fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Requested poll interval, if any.
    pub const fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval
    }

    /// Display-format hint, if any.
    pub fn disp(&self) -> Option<&str> {
        self.disp.as_deref()
    }

    /// Bits occupied inside the register word.
    pub const fn bits(&self) -> BitRange {
        BitRange::new(self.bit_offset, self.bit_size)
    }

    /// Returns `true` if the host should refresh this field automatically.
    ///
    /// A poll interval on a write-only field is kept as metadata but never acted on.
    pub const fn polled(&self) -> bool {
        self.poll_interval.is_some() && self.mode.is_readable()
    }
}

/// Poll intervals travel as fractional seconds, matching the host's attribute.
#[allow(clippy::ref_option)]
fn serialize_secs<S: Serializer>(interval: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
    match interval {
        Some(d) => s.serialize_f64(d.as_secs_f64()),
        None => s.serialize_none(),
    }
}
