//! Base32 (RFC 4648) encoding and decoding utilities.
//!
//! This crate provides the standard uppercase Base32 codec with:
//! - Encoding of arbitrary bytes to padded Base32 text
//! - Strict decoding with a distinct error kind per malformed-input condition
//! - Allocation-free validation that agrees with the decoder on every input
//!
//! Decoding is case-insensitive and ignores interleaved whitespace; encoding
//! always emits the uppercase alphabet.
//!
//! # Example
//!
//! ```
//! use base32_rs::{to_base32, from_base32};
//!
//! let data = b"foobar";
//! let encoded = to_base32(data);
//! assert_eq!(encoded, "MZXW6YTBOI======");
//! let decoded = from_base32(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base32;
mod is_valid;
mod to_base32;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base32::from_base32;
pub use is_valid::is_valid;
pub use to_base32::to_base32;

use thiserror::Error;

/// Error type for Base32 decoding.
///
/// Every variant is a caller-input error; the decoder raises the first one it
/// detects and produces no partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base32Error {
    /// A non-`=` character appeared after padding started.
    #[error("padding character '=' in middle of input")]
    PaddingInMiddle,
    /// A character is neither in the alphabet (case-insensitive) nor `=`.
    #[error("invalid base32 character {0:?}")]
    InvalidCharacter(char),
    /// The input length, not counting whitespace, is not a multiple of 8.
    #[error("base32 length must be a multiple of 8, got {0}")]
    BadLength(usize),
    /// An 8-character group has a pad count outside {0, 1, 3, 4, 6}.
    #[error("invalid base32 padding pattern")]
    BadPadding,
}
