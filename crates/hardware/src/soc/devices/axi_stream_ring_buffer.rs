//! AXI-Stream Ring Buffer.
//!
//! Register map of the AXI-Lite control interface of the AXI-Stream ring buffer
//! firmware block. The buffer captures a stream into block RAM; the host reads
//! back its geometry and trigger count, and fires local triggers.
//!
//! # Registers
//!
//! * `0x00`: Status (Read Only)
//!   * `[19:0]`  `BufferLength`: length of the ring buffer
//!   * `[27:20]` `RAM_ADDR_WIDTH_G`: RAM address width generic
//!   * `[28]`    `ExtBufferClear`: external buffer clear status
//!   * `[29]`    `ExtBufferEnable`: external buffer enable status
//! * `0x04`: `TrigCnt` (Read Only), trigger counter
//! * `0x08`: `TrigBurst` (Write Only), burst N trigger frames
//! * `0x0C`: `ContinuousMode` (Read/Write), bit 0 enables continuous triggering

use std::time::Duration;

use serde::Serialize;

use crate::common::{AccessMode, BitRange, RegMapError};
use crate::config::DeviceConfig;
use crate::regmap::{Device, DeviceBuilder, Field, RegisterMap};

/// Name used when the host does not name the instance.
pub const DEFAULT_NAME: &str = "AxiStreamRingBuffer";

/// Cadence at which the host refreshes the status and counter fields.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Register offsets relative to the device base.
pub mod offsets {
    /// Buffer geometry and external control status.
    pub const STATUS: u64 = 0x0;
    /// Trigger counter.
    pub const TRIG_CNT: u64 = 0x4;
    /// Trigger burst strobe.
    pub const TRIG_BURST: u64 = 0x8;
    /// Continuous trigger mode.
    pub const CONTINUOUS_MODE: u64 = 0xC;
}

/// Bit positions of the fields packed into the status register.
pub mod status {
    use crate::common::BitRange;

    /// `BufferLength`, bits `[19:0]`.
    pub const BUFFER_LENGTH: BitRange = BitRange::new(0, 20);
    /// `RAM_ADDR_WIDTH_G`, bits `[27:20]`.
    pub const RAM_ADDR_WIDTH: BitRange = BitRange::new(20, 8);
    /// `ExtBufferClear`, bit 28.
    pub const EXT_BUFFER_CLEAR: BitRange = BitRange::new(28, 1);
    /// `ExtBufferEnable`, bit 29.
    pub const EXT_BUFFER_ENABLE: BitRange = BitRange::new(29, 1);
}

/// Register map descriptor for one AXI-Stream ring buffer instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AxiStreamRingBuffer {
    inner: Device,
}

impl AxiStreamRingBuffer {
    /// Declares the ring buffer's fields and freezes the descriptor.
    ///
    /// # Arguments
    ///
    /// * `config` - Host configuration, forwarded unmodified to the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::EmptyName`] if the configuration names the
    /// instance with an empty string, or [`RegMapError::AddressOverflow`] if
    /// the base leaves no room for the register window below `u64::MAX`.
    pub fn new(config: DeviceConfig) -> Result<Self, RegMapError> {
        Ok(Self {
            inner: Self::builder(config)?.build(),
        })
    }

    /// Returns a builder with every ring buffer field already declared.
    ///
    /// Wrapping firmware that extends the block declares its extra fields on
    /// the returned builder before building.
    ///
    /// # Errors
    ///
    /// Returns [`RegMapError::EmptyName`] if the configuration names the
    /// instance with an empty string, or [`RegMapError::AddressOverflow`] if
    /// the base leaves no room for the register window below `u64::MAX`.
    pub fn builder(config: DeviceConfig) -> Result<DeviceBuilder, RegMapError> {
        let mut builder = DeviceBuilder::from_config(config, DEFAULT_NAME)?;
        for field in Self::field_set() {
            builder.declare(field)?;
        }
        Ok(builder)
    }

    /// The fixed field set, in display order.
    fn field_set() -> [Field; 7] {
        [
            Field::new("BufferLength")
                .with_description("Length of ring buffer")
                .with_offset(offsets::STATUS)
                .with_bits(status::BUFFER_LENGTH)
                .with_mode(AccessMode::Ro)
                .with_poll_interval(STATUS_POLL_INTERVAL),
            Field::new("RAM_ADDR_WIDTH_G")
                .with_description("Ring Buffer RAM Width configuration")
                .with_offset(offsets::STATUS)
                .with_bits(status::RAM_ADDR_WIDTH)
                .with_mode(AccessMode::Ro)
                .with_disp("{:d}"),
            Field::new("ExtBufferClear")
                .with_description("External Buffer Clear Status")
                .with_offset(offsets::STATUS)
                .with_bits(status::EXT_BUFFER_CLEAR)
                .with_mode(AccessMode::Ro)
                .with_poll_interval(STATUS_POLL_INTERVAL),
            Field::new("ExtBufferEnable")
                .with_description("External Buffer Enable Status")
                .with_offset(offsets::STATUS)
                .with_bits(status::EXT_BUFFER_ENABLE)
                .with_mode(AccessMode::Ro)
                .with_poll_interval(STATUS_POLL_INTERVAL),
            Field::new("TrigCnt")
                .with_description("current value of the trigger counter")
                .with_offset(offsets::TRIG_CNT)
                .with_bits(BitRange::new(0, 32))
                .with_mode(AccessMode::Ro)
                .with_poll_interval(STATUS_POLL_INTERVAL),
            Field::new("TrigBurst")
                .with_description("Used to burst N number of trigger frames from local triggering")
                .with_offset(offsets::TRIG_BURST)
                .with_bits(BitRange::new(0, 32))
                .with_mode(AccessMode::Wo),
            Field::new("ContinuousMode")
                .with_description("Sets local triggering into continuous trigger mode")
                .with_offset(offsets::CONTINUOUS_MODE)
                .with_bits(BitRange::new(0, 1))
                .with_mode(AccessMode::Rw),
        ]
    }

    /// The underlying generic descriptor.
    pub const fn device(&self) -> &Device {
        &self.inner
    }

    /// Consumes the wrapper, returning the generic descriptor.
    pub fn into_device(self) -> Device {
        self.inner
    }

    /// Every declared field, in declaration order.
    pub fn list_fields(&self) -> &[Field] {
        self.inner.list_fields()
    }

    /// Ring buffer depth encoded in a raw status word.
    pub const fn buffer_length(status_word: u32) -> u32 {
        status::BUFFER_LENGTH.extract(status_word)
    }

    /// RAM address width generic encoded in a raw status word.
    pub const fn ram_addr_width(status_word: u32) -> u32 {
        status::RAM_ADDR_WIDTH.extract(status_word)
    }
}

impl RegisterMap for AxiStreamRingBuffer {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn base(&self) -> u64 {
        self.inner.base()
    }

    fn fields(&self) -> &[Field] {
        self.inner.fields()
    }
}
