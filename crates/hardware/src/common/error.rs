//! Register map construction errors.
//!
//! Every error in this module is raised while a device descriptor is being built.
//! None of them are recoverable: a failed declaration aborts device setup and the
//! partially-built descriptor is never handed to a device tree.

use thiserror::Error;

/// Errors raised while declaring fields or assembling devices into a tree.
#[derive(Debug, Error)]
pub enum RegMapError {
    /// A field was declared with a name already used on the same device.
    #[error("duplicate field name `{name}` on device `{device}`")]
    DuplicateName {
        /// Device the declaration was made against.
        device: String,
        /// The repeated field name.
        name: String,
    },

    /// A field's bit range does not fit inside one 32-bit register word.
    #[error("field `{name}` bit range [{bit_offset}, {bit_offset}+{bit_size}) exceeds the 32-bit register")]
    BitRangeOverflow {
        /// Offending field.
        name: String,
        /// First bit of the field.
        bit_offset: u32,
        /// Width of the field in bits.
        bit_size: u32,
    },

    /// A field was declared with a width of zero bits.
    #[error("field `{name}` has a zero bit width")]
    ZeroWidth {
        /// Offending field.
        name: String,
    },

    /// Two fields packed into the same register claim overlapping bits.
    #[error("field `{name}` overlaps field `{other}` in register {offset:#x}")]
    BitOverlap {
        /// Field being declared.
        name: String,
        /// Previously declared field it collides with.
        other: String,
        /// Byte offset of the shared register.
        offset: u64,
    },

    /// A register offset is not aligned to a 32-bit word.
    #[error("field `{name}` offset {offset:#x} is not word aligned")]
    MisalignedOffset {
        /// Offending field.
        name: String,
        /// The misaligned byte offset.
        offset: u64,
    },

    /// An access mode string other than `RO`, `WO` or `RW`.
    #[error("invalid access mode `{0}` (expected RO, WO or RW)")]
    InvalidMode(String),

    /// A poll interval that is negative, infinite or not a number.
    #[error("field `{name}` has an invalid poll interval of {secs} s")]
    InvalidPollInterval {
        /// Offending field.
        name: String,
        /// The rejected interval in seconds.
        secs: f64,
    },

    /// A field or device declared with an empty name.
    #[error("empty name")]
    EmptyName,

    /// A device was attached to a tree that already holds a device of that name.
    #[error("device `{0}` is already attached")]
    DuplicateDevice(String),

    /// A device's address window intersects one already attached to the tree.
    #[error("device `{name}` address window overlaps device `{other}`")]
    AddressOverlap {
        /// Device being attached.
        name: String,
        /// Device already attached at an intersecting window.
        other: String,
    },

    /// A register word or device window would end past the top of the 64-bit address space.
    #[error("`{name}` at {base:#x}+{span:#x} runs past the end of the address space")]
    AddressOverflow {
        /// Offending field or device.
        name: String,
        /// Base address of the device.
        base: u64,
        /// Field offset or window size added to the base.
        span: u64,
    },

    /// Device configuration or field declarations could not be parsed.
    #[error("invalid device description: {0}")]
    Config(#[from] serde_json::Error),
}
