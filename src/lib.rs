//! Reads and writes binary streams that mix byte-aligned and bit-packed
//! fields, using the encoding rules of the SWF container format.
//!
//! The format stores fixed-width integers and floats in both byte orders,
//! variable-length `u32` values (LEB128, capped at 5 bytes), IEEE-754
//! binary16 floats, a word-swapped double layout inherited from old
//! ActionScript constant pools, and bit-packed fields that are read
//! most-significant-bit first. [`SwfReader`] decodes all of these from an
//! in-memory byte slice; [`SwfWriter`] produces them into a growable chunk
//! sequence.
//!
//! # References
//! * <https://open-flash.github.io/mirrors/swf-spec-19.pdf>

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod half;
mod reader;
mod writer;


pub use reader::SwfReader;
pub use writer::SwfWriter;

/// Result type shared by [`SwfReader`] and [`SwfWriter`].
pub type Result<T> = core::result::Result<T, StreamError>;

/// Error type shared by [`SwfReader`] and [`SwfWriter`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StreamError {
    /// The stream ended before the requested value could be decoded.
    ///
    /// Returned for any fixed-width or delimiter-seeking read that runs past
    /// the end of the backing buffer, including a NUL-terminated string with
    /// no terminator in the remaining bytes. The read position may already
    /// have advanced when this is returned.
    IncompleteStream,

    /// A bit-level read or write was requested for more than 32 bits.
    ///
    /// Bit-packed values accumulate into a `u32`, so wider requests cannot
    /// be represented without losing bits.
    BitOverflow,

    /// A string field contains bytes that are not valid UTF-8.
    InvalidUtf8,
}

impl core::error::Error for StreamError {}

impl core::fmt::Display for StreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IncompleteStream => f.write_str("stream ended before the value was complete"),
            Self::BitOverflow => f.write_str("bit-level access wider than 32 bits"),
            Self::InvalidUtf8 => f.write_str("string bytes are not valid UTF-8"),
        }
    }
}
