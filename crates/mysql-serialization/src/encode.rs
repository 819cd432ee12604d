//! Encoder for the same format, emitting the narrowest width for every value.
//!
//! A `w`-byte encoding with `w <= 8` carries `7 * w` value bits, so values
//! below `2^56` never need more than eight bytes. Everything from `2^56` up
//! takes the nine-byte form.

use alloc::vec::Vec;

use crate::{marker::MAX_ENCODED_WIDTH, zigzag::zigzag_encode};

/// Value bits in the widest marker-terminated form.
const MAX_SHORT_BITS: usize = 56;

/// Number of bytes [`encode_unsigned`] emits for `value`.
#[must_use]
pub fn encoded_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()) as usize;
    if bits > MAX_SHORT_BITS {
        MAX_ENCODED_WIDTH
    } else {
        bits.div_ceil(7).max(1)
    }
}

/// Appends `value` as an unsigned varint, returning the bytes written.
///
/// ```rust
/// use mysql_serialization::{decode_unsigned, encode_unsigned};
///
/// let mut out = Vec::new();
/// assert_eq!(encode_unsigned(90_200, &mut out), 3);
/// assert_eq!(out, [0xc3, 0x02, 0x0b]);
/// assert_eq!(decode_unsigned(&out, 0).unwrap(), (90_200, 3));
/// ```
pub fn encode_unsigned(value: u64, out: &mut Vec<u8>) -> usize {
    let width = encoded_len(value);
    if width == MAX_ENCODED_WIDTH {
        out.push(0xff);
        out.extend_from_slice(&value.to_le_bytes());
    } else {
        // `width - 1` one-bits, then the zero-bit left free by the shift.
        let marker = (1u64 << (width - 1)) - 1;
        let word = (value << width) | marker;
        out.extend_from_slice(&word.to_le_bytes()[..width]);
    }
    width
}

/// Appends `value` as a zigzag-mapped signed varint, returning the bytes
/// written.
pub fn encode_signed(value: i64, out: &mut Vec<u8>) -> usize {
    encode_unsigned(zigzag_encode(value), out)
}

/// Appends `bytes` as a fixed-length sequence, one varint per byte.
pub fn encode_fixed(bytes: &[u8], out: &mut Vec<u8>) -> usize {
    bytes
        .iter()
        .map(|&byte| encode_unsigned(u64::from(byte), out))
        .sum()
}

/// Appends `bytes` as a length-prefixed string.
pub fn encode_string(bytes: &[u8], out: &mut Vec<u8>) -> usize {
    let prefix = encode_unsigned(bytes.len() as u64, out);
    out.extend_from_slice(bytes);
    prefix + bytes.len()
}
