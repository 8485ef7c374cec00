//! Register geometry constants.
//!
//! The AXI-Lite register space is addressed in bytes but every register is a
//! single 32-bit word, so offsets step by four and fields never straddle words.

/// Width of one register word in bits.
pub const REGISTER_BITS: u32 = 32;

/// Width of one register word in bytes; register offsets are multiples of this.
pub const REGISTER_BYTES: u64 = 4;

/// Bit width assumed for a field that does not state one.
pub const DEFAULT_BIT_SIZE: u32 = REGISTER_BITS;
