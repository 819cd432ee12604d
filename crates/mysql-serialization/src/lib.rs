//! Decoder for the variable-length encoding of the MySQL serialization
//! library, the format behind integer, byte-array and string fields in newer
//! binlog events.
//!
//! An integer takes one to nine bytes. The number of trailing one-bits in the
//! first byte says how many bytes follow; the remaining bits hold the value,
//! lowest bits first. Signed integers are zigzag-mapped so that small
//! negative numbers stay short.
//!
//! Every decoder is a pure function of `(buffer, offset)` that returns the
//! decoded value together with the offset just past it:
//!
//! ```rust
//! use mysql_serialization::{decode_fixed, decode_signed, decode_string};
//!
//! let buf = [0x04, 0x06, b'a', b'b', b'c', 0xee, 0xfd, 0x03];
//! let (n, offset) = decode_signed(&buf, 0).unwrap();
//! let (s, offset) = decode_string(&buf, offset).unwrap();
//! let (bytes, offset) = decode_fixed(&buf, offset, 2).unwrap();
//! assert_eq!(n, 1);
//! assert_eq!(s, "abc");
//! assert_eq!(bytes, [0x77, 0xff]);
//! assert_eq!(offset, buf.len());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod encode;
mod error;
mod fixed;
mod marker;
mod string;
mod varint;
mod zigzag;

#[cfg(test)]
mod tests;

pub use cursor::Decoder;
pub use encode::{encode_fixed, encode_signed, encode_string, encode_unsigned, encoded_len};
pub use error::{DecodeError, ErrorKind, Truncation};
pub use fixed::decode_fixed;
pub use marker::{MAX_ENCODED_WIDTH, encoded_width, trailing_one_bit_count};
pub use string::{decode_str, decode_string};
pub use varint::{Integer, Signedness, decode_signed, decode_unsigned, decode_var};
pub use zigzag::{zigzag_decode, zigzag_encode};
