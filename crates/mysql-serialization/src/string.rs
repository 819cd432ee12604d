//! Length-prefixed strings: an unsigned varint length followed by that many
//! raw bytes.
//!
//! The wire carries bytes, not text, so [`decode_string`] hands back a
//! [`BStr`] borrowed from the input. [`decode_str`] layers UTF-8 validation on
//! top for callers that need a `&str`.

use bstr::{BStr, ByteSlice};

use crate::{
    error::{DecodeError, ErrorKind, Truncation},
    varint::decode_unsigned,
};

/// Decodes a length-prefixed string at `offset`.
///
/// # Errors
///
/// All failures are truncations reported at `offset`:
/// - [`Truncation::StringEmpty`] when `offset` is at the end of `buf`,
/// - [`Truncation::StringLength`] when the length prefix is cut short, or a
///   non-empty string's prefix is the last thing in the buffer,
/// - [`Truncation::String`] when fewer content bytes remain than announced.
///
/// ```rust
/// use mysql_serialization::decode_string;
///
/// let (text, next) = decode_string(b"\x0aabcde", 0).unwrap();
/// assert_eq!(text, "abcde");
/// assert_eq!(next, 6);
/// ```
pub fn decode_string(buf: &[u8], offset: usize) -> Result<(&BStr, usize), DecodeError> {
    if offset >= buf.len() {
        return Err(DecodeError::new(Truncation::StringEmpty, offset));
    }

    let (length, start) = decode_unsigned(buf, offset)
        .map_err(|_| DecodeError::new(Truncation::StringLength, offset))?;

    let available = buf.len() - start;
    if length > 0 && available == 0 {
        return Err(DecodeError::new(Truncation::StringLength, offset));
    }

    let end = usize::try_from(length)
        .ok()
        .filter(|&len| len <= available)
        .map(|len| start + len)
        .ok_or_else(|| {
            DecodeError::new(
                Truncation::String {
                    needed: length,
                    available,
                },
                offset,
            )
        })?;

    Ok((buf[start..end].as_bstr(), end))
}

/// Decodes a length-prefixed string at `offset` and checks it is UTF-8.
///
/// # Errors
///
/// Everything [`decode_string`] reports, plus [`ErrorKind::InvalidUtf8`] at
/// the offset of the first byte that is not valid UTF-8.
pub fn decode_str(buf: &[u8], offset: usize) -> Result<(&str, usize), DecodeError> {
    let (bytes, next) = decode_string(buf, offset)?;
    let start = next - bytes.len();
    let text = core::str::from_utf8(bytes)
        .map_err(|err| DecodeError::new(ErrorKind::InvalidUtf8(err), start + err.valid_up_to()))?;
    Ok((text, next))
}
