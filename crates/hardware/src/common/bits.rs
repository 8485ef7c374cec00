//! Bit range arithmetic.
//!
//! A field occupies `[offset, offset + size)` inside its 32-bit register word.
//! The transaction engine uses the mask helpers here to pull a field out of a
//! word it has read and to merge a new field value into a word before writing.

use serde::Serialize;

use super::constants::REGISTER_BITS;

/// Half-open range of bits `[offset, offset + size)` within one register word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BitRange {
    /// First bit of the range (bit 0 is the least significant).
    #[serde(rename = "bitOffset")]
    pub offset: u32,
    /// Number of bits in the range.
    #[serde(rename = "bitSize")]
    pub size: u32,
}

impl BitRange {
    /// Creates a bit range; no validation is performed.
    #[inline]
    pub const fn new(offset: u32, size: u32) -> Self {
        Self { offset, size }
    }

    /// One past the last bit of the range, saturating instead of wrapping.
    #[inline]
    pub const fn end(self) -> u32 {
        self.offset.saturating_add(self.size)
    }

    /// Returns `true` if the range lies entirely inside a 32-bit word.
    #[inline]
    pub const fn fits_word(self) -> bool {
        self.end() <= REGISTER_BITS
    }

    /// Returns `true` if the two ranges share at least one bit.
    ///
    /// Empty ranges overlap nothing.
    pub const fn overlaps(self, other: Self) -> bool {
        self.size != 0 && other.size != 0 && self.offset < other.end() && other.offset < self.end()
    }

    /// Mask of the bits covered by the range, or `0` for an empty or oversized range.
    pub const fn mask(self) -> u32 {
        if self.size == 0 || !self.fits_word() {
            return 0;
        }
        let ones = u64::MAX >> (64 - self.size);
        (ones << self.offset) as u32
    }

    /// Extracts the field value from a register word, right-aligned.
    #[inline]
    pub const fn extract(self, word: u32) -> u32 {
        let mask = self.mask();
        if mask == 0 {
            return 0;
        }
        (word & mask) >> self.offset
    }

    /// Returns `word` with the range replaced by `value`.
    ///
    /// Bits of `value` above the field width are discarded; bits of `word`
    /// outside the range are preserved.
    #[inline]
    pub const fn insert(self, word: u32, value: u32) -> u32 {
        let mask = self.mask();
        if mask == 0 {
            return word;
        }
        (word & !mask) | ((value << self.offset) & mask)
    }
}
