//! Length marker carried in the low bits of a varint's lead byte.
//!
//! A lead byte ending in `k` one-bits followed by a zero-bit announces an
//! integer `k + 1` bytes wide. A lead byte of `0xff` has no terminating zero
//! and announces the nine-byte form, whose magnitude sits entirely in the
//! following eight bytes.

/// Widest possible encoding, in bytes.
pub const MAX_ENCODED_WIDTH: usize = 9;

/// Counts consecutive set bits starting at bit 0.
///
/// ```rust
/// use mysql_serialization::trailing_one_bit_count;
///
/// assert_eq!(trailing_one_bit_count(0b0000_0000), 0);
/// assert_eq!(trailing_one_bit_count(0b1111_1101), 1);
/// assert_eq!(trailing_one_bit_count(0b0111_1111), 7);
/// assert_eq!(trailing_one_bit_count(0b1111_1111), 8);
/// ```
#[inline]
#[must_use]
pub fn trailing_one_bit_count(byte: u8) -> usize {
    byte.trailing_ones() as usize
}

/// Total encoded width, lead byte included, announced by `lead`.
#[inline]
#[must_use]
pub fn encoded_width(lead: u8) -> usize {
    trailing_one_bit_count(lead) + 1
}
