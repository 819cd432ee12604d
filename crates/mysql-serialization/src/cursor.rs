use alloc::vec::Vec;

use bstr::BStr;

use crate::{
    error::DecodeError,
    fixed::decode_fixed,
    string::{decode_str, decode_string},
    varint::{Integer, Signedness, decode_signed, decode_unsigned, decode_var},
};

/// A read position over a borrowed buffer.
///
/// Threads the offset through consecutive decodes for callers walking a
/// record field by field. Every `read_*` method advances past the value on
/// success and leaves the position untouched on error.
///
/// ```rust
/// use mysql_serialization::Decoder;
///
/// let mut decoder = Decoder::new(&[0xd9, 0x03, 0x06, b'h', b'i', b'!']);
/// assert_eq!(decoder.read_signed().unwrap(), 123);
/// assert_eq!(decoder.read_string().unwrap(), "hi!");
/// assert!(decoder.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Decoder<'a> {
    /// Starts at the beginning of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Starts at `offset` into `buf`.
    #[must_use]
    pub fn at(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, offset }
    }

    /// Current position.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unread part of the buffer.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.buf.get(self.offset..).unwrap_or_default()
    }

    /// Whether every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Reads an unsigned varint.
    ///
    /// # Errors
    ///
    /// See [`decode_unsigned`].
    pub fn read_unsigned(&mut self) -> Result<u64, DecodeError> {
        decode_unsigned(self.buf, self.offset).map(|read| self.advance(read))
    }

    /// Reads a signed varint.
    ///
    /// # Errors
    ///
    /// See [`decode_signed`].
    pub fn read_signed(&mut self) -> Result<i64, DecodeError> {
        decode_signed(self.buf, self.offset).map(|read| self.advance(read))
    }

    /// Reads a varint with the given signedness.
    ///
    /// # Errors
    ///
    /// See [`decode_var`].
    pub fn read_var(&mut self, signedness: Signedness) -> Result<Integer, DecodeError> {
        decode_var(self.buf, self.offset, signedness).map(|read| self.advance(read))
    }

    /// Reads `length` byte-valued varints.
    ///
    /// # Errors
    ///
    /// See [`decode_fixed`].
    pub fn read_fixed(&mut self, length: usize) -> Result<Vec<u8>, DecodeError> {
        decode_fixed(self.buf, self.offset, length).map(|read| self.advance(read))
    }

    /// Reads a length-prefixed string.
    ///
    /// # Errors
    ///
    /// See [`decode_string`].
    pub fn read_string(&mut self) -> Result<&'a BStr, DecodeError> {
        decode_string(self.buf, self.offset).map(|read| self.advance(read))
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// # Errors
    ///
    /// See [`decode_str`].
    pub fn read_str(&mut self) -> Result<&'a str, DecodeError> {
        decode_str(self.buf, self.offset).map(|read| self.advance(read))
    }

    fn advance<T>(&mut self, (value, next): (T, usize)) -> T {
        self.offset = next;
        value
    }
}
