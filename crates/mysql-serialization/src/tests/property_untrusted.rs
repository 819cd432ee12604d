//! Arbitrary input must decode or fail cleanly, never panic or read past the
//! end of the buffer.

use alloc::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::{
    ErrorKind, MAX_ENCODED_WIDTH, Signedness, decode_fixed, decode_string, decode_var,
    encode_unsigned, encoded_width,
};

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn var_on_arbitrary_bytes(buf: Vec<u8>, offset: u8, signed: bool) -> bool {
    let offset = usize::from(offset);
    let signedness = if signed {
        Signedness::Signed
    } else {
        Signedness::Unsigned
    };
    match decode_var(&buf, offset, signedness) {
        Ok((value, next)) => {
            value.signedness() == signedness
                && next == offset + encoded_width(buf[offset])
                && next <= buf.len()
                && next - offset <= MAX_ENCODED_WIDTH
        }
        Err(err) => err.is_truncated() && err.offset() == offset,
    }
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn fixed_on_arbitrary_bytes(buf: Vec<u8>, length: u8) -> bool {
    let length = usize::from(length);
    match decode_fixed(&buf, 0, length) {
        Ok((bytes, next)) => bytes.len() == length && next <= buf.len() && next >= length,
        Err(err) => match err.kind() {
            ErrorKind::UnknownEncoding { value } => *value > 0xff && err.offset() < buf.len(),
            ErrorKind::Truncated(_) => err.offset() <= buf.len(),
            ErrorKind::InvalidUtf8(_) => false,
        },
    }
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn string_on_arbitrary_bytes(buf: Vec<u8>, offset: u8) -> bool {
    let offset = usize::from(offset);
    match decode_string(&buf, offset) {
        Ok((text, next)) => next <= buf.len() && text == &buf[next - text.len()..next],
        Err(err) => err.is_truncated() && err.offset() == offset,
    }
}

/// Re-encoding a decoded value reproduces its bytes whenever the input used
/// the narrowest width.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn minimal_encodings_reencode_identically(buf: Vec<u8>) -> bool {
    let Ok((Some(value), next)) =
        decode_var(&buf, 0, Signedness::Unsigned).map(|(v, next)| (v.as_u64(), next))
    else {
        return true;
    };
    let mut out = Vec::new();
    encode_unsigned(value, &mut out);
    out.len() != next || out == buf[..next]
}
