use core::str::Utf8Error;

use thiserror::Error;

/// Error returned by every decoder in this crate.
///
/// Carries what went wrong and the buffer offset at which the failing element
/// begins. A failed decode never yields a partial value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct DecodeError {
    pub(crate) kind: ErrorKind,
    pub(crate) offset: usize,
}

/// The reason a decode failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer ended before the element was complete. Only more input
    /// can fix this.
    #[error("{0}")]
    Truncated(#[from] Truncation),
    /// A decoded value violates a structural constraint of its field, such as
    /// a fixed byte decoding outside `0..=255`.
    #[error("unknown decoding for {value:#x}")]
    UnknownEncoding {
        /// The out-of-range value as it was decoded.
        value: u64,
    },
    /// A string's content is not UTF-8. Only raised by the `&str` decoders.
    #[error("invalid utf-8 in string: {0}")]
    InvalidUtf8(Utf8Error),
}

/// Which part of the input was cut short.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// No lead byte at the requested offset.
    #[error("data truncated")]
    Data,
    /// The lead byte announced a wider integer than the buffer holds.
    #[error("truncated data, need {needed} bytes but {available} remain")]
    Value {
        /// Encoded width announced by the marker.
        needed: usize,
        /// Bytes left in the buffer from the lead byte on.
        available: usize,
    },
    /// A string was requested at the end of the buffer.
    #[error("string truncated, expected at least one byte")]
    StringEmpty,
    /// The string's length prefix is incomplete, or nothing follows it.
    #[error("string truncated, expected length")]
    StringLength,
    /// The string's content is shorter than its length prefix.
    #[error("string truncated, need {needed} bytes but {available} remain")]
    String {
        /// Length announced by the prefix.
        needed: u64,
        /// Bytes left after the prefix.
        available: usize,
    },
}

impl DecodeError {
    pub(crate) fn new(kind: impl Into<ErrorKind>, offset: usize) -> Self {
        let kind = kind.into();
        #[cfg(feature = "tracing")]
        tracing::trace!(offset, %kind, "decode failed");
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Offset of the element that failed to decode.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the failure can be resolved by supplying more bytes.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::Truncated(_))
    }
}
