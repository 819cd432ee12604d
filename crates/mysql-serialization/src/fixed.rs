//! Fixed-length byte sequences: `length` back-to-back unsigned varints, each
//! holding one byte.

use alloc::vec::Vec;

use crate::{
    error::{DecodeError, ErrorKind, Truncation},
    varint::decode_unsigned,
};

/// Decodes `length` byte-valued varints starting at `offset`.
///
/// On success the returned vector holds exactly `length` bytes. Each element
/// may take anywhere from one to nine bytes of input, so the consumed width is
/// only known after decoding.
///
/// # Errors
///
/// [`Truncation::Data`] at `offset` when fewer than `length` bytes remain, so
/// a short buffer is reported before any element is looked at. An element
/// cut short later on fails with [`Truncation::Data`] at that element's
/// offset. An element whose value exceeds `0xff` fails with
/// [`ErrorKind::UnknownEncoding`] at that element's offset.
///
/// ```rust
/// use mysql_serialization::decode_fixed;
///
/// let (bytes, next) = decode_fixed(&[0xee, 0x81, 0x02], 0, 2).unwrap();
/// assert_eq!(bytes, [0x77, 0xa0]);
/// assert_eq!(next, 3);
/// ```
pub fn decode_fixed(
    buf: &[u8],
    offset: usize,
    length: usize,
) -> Result<(Vec<u8>, usize), DecodeError> {
    // Every element takes at least one byte.
    if buf.len().saturating_sub(offset) < length {
        return Err(DecodeError::new(Truncation::Data, offset));
    }

    let mut bytes = Vec::with_capacity(length);
    let mut cursor = offset;

    for _ in 0..length {
        let (value, next) = decode_unsigned(buf, cursor)
            .map_err(|_| DecodeError::new(Truncation::Data, cursor))?;
        let byte = u8::try_from(value)
            .map_err(|_| DecodeError::new(ErrorKind::UnknownEncoding { value }, cursor))?;
        bytes.push(byte);
        cursor = next;
    }

    Ok((bytes, cursor))
}
