//! Variable-length integers.
//!
//! The lead byte's marker (see [`crate::trailing_one_bit_count`]) gives the
//! encoded width `w`. For `w <= 8` the remaining `8 - w` bits of the lead
//! byte hold the lowest bits of the magnitude and every following byte
//! contributes eight more bits, in ascending order. Read as a little-endian
//! word, that is the whole encoding shifted right by `w`. The nine-byte form
//! spends its lead byte on the marker and stores the magnitude as a plain
//! little-endian `u64`.

use crate::{
    error::{DecodeError, Truncation},
    marker::{MAX_ENCODED_WIDTH, encoded_width},
    zigzag::zigzag_decode,
};

/// How the magnitude of a varint is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signedness {
    /// Zigzag-mapped, decodes to `i64`.
    Signed,
    /// Plain magnitude, decodes to `u64`.
    Unsigned,
}

/// A decoded integer, tagged with the signedness it was read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Integer {
    /// Read with [`Signedness::Signed`].
    Signed(i64),
    /// Read with [`Signedness::Unsigned`].
    Unsigned(u64),
}

impl Integer {
    /// The signedness this value was decoded with.
    #[must_use]
    pub fn signedness(self) -> Signedness {
        match self {
            Integer::Signed(_) => Signedness::Signed,
            Integer::Unsigned(_) => Signedness::Unsigned,
        }
    }

    /// The value if it was decoded signed.
    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Integer::Signed(n) => Some(n),
            Integer::Unsigned(_) => None,
        }
    }

    /// The value if it was decoded unsigned.
    #[must_use]
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Integer::Unsigned(u) => Some(u),
            Integer::Signed(_) => None,
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer::Signed(value)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Integer::Unsigned(value)
    }
}

/// Decodes one varint at `offset`, returning the value and the offset just
/// past it.
///
/// # Errors
///
/// [`Truncation::Data`] when `offset` is at or past the end of `buf`, and
/// [`Truncation::Value`] when the marker announces more bytes than remain.
///
/// ```rust
/// use mysql_serialization::{Integer, Signedness, decode_var};
///
/// let (value, next) = decode_var(&[0xd9, 0x03], 0, Signedness::Signed).unwrap();
/// assert_eq!(value, Integer::Signed(123));
/// assert_eq!(next, 2);
/// ```
pub fn decode_var(
    buf: &[u8],
    offset: usize,
    signedness: Signedness,
) -> Result<(Integer, usize), DecodeError> {
    let (raw, next) = decode_raw(buf, offset)?;
    let value = match signedness {
        Signedness::Signed => Integer::Signed(zigzag_decode(raw)),
        Signedness::Unsigned => Integer::Unsigned(raw),
    };
    Ok((value, next))
}

/// Decodes an unsigned varint at `offset`.
///
/// # Errors
///
/// See [`decode_var`].
#[inline]
pub fn decode_unsigned(buf: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    decode_raw(buf, offset)
}

/// Decodes a zigzag-mapped signed varint at `offset`.
///
/// # Errors
///
/// See [`decode_var`].
#[inline]
pub fn decode_signed(buf: &[u8], offset: usize) -> Result<(i64, usize), DecodeError> {
    let (raw, next) = decode_raw(buf, offset)?;
    Ok((zigzag_decode(raw), next))
}

fn decode_raw(buf: &[u8], offset: usize) -> Result<(u64, usize), DecodeError> {
    let Some(&lead) = buf.get(offset) else {
        return Err(DecodeError::new(Truncation::Data, offset));
    };
    let width = encoded_width(lead);
    // `offset < buf.len()` here, so neither expression can overflow.
    let Some(bytes) = buf.get(offset..offset + width) else {
        return Err(DecodeError::new(
            Truncation::Value {
                needed: width,
                available: buf.len() - offset,
            },
            offset,
        ));
    };

    let mut word = [0u8; 8];
    let value = if width == MAX_ENCODED_WIDTH {
        word.copy_from_slice(&bytes[1..]);
        u64::from_le_bytes(word)
    } else {
        word[..width].copy_from_slice(bytes);
        u64::from_le_bytes(word) >> width
    };

    Ok((value, offset + width))
}
