//! Base32 decoding function.

use crate::constants::{decode_value, DECODE_TABLE, INVALID, PAD};
use crate::Base32Error;

/// Decodes a Base32 string to bytes.
///
/// Accepts lowercase as well as uppercase alphabet characters, and ignores
/// whitespace anywhere in the input. Once a `=` has been seen, only further
/// `=` (or whitespace) may follow.
///
/// # Arguments
///
/// * `encoded` - The Base32 text to decode.
///
/// # Returns
///
/// The decoded bytes. Input that is empty after whitespace removal decodes
/// to an empty vector.
///
/// # Errors
///
/// Returns a [`Base32Error`] describing the first malformed-input condition
/// detected: a data character after padding, a character outside the
/// alphabet, a length that is not a multiple of 8, or an 8-character group
/// with an impossible pad count.
///
/// # Example
///
/// ```
/// use base32_rs::from_base32;
///
/// let decoded = from_base32("MZXW6YTBOI======").unwrap();
/// assert_eq!(decoded, b"foobar");
/// ```
pub fn from_base32(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    // Cleaning pass: drop whitespace, enforce character class and the
    // padding-only-at-the-end rule.
    let mut clean: Vec<u8> = Vec::with_capacity(encoded.len());
    let mut in_padding = false;

    for c in encoded.chars() {
        if c.is_ascii_whitespace() {
            continue;
        }
        if c == PAD {
            in_padding = true;
            clean.push(b'=');
        } else {
            if in_padding {
                return Err(Base32Error::PaddingInMiddle);
            }
            if decode_value(c) == INVALID {
                return Err(Base32Error::InvalidCharacter(c));
            }
            clean.push(c as u8);
        }
    }

    if clean.is_empty() {
        return Ok(Vec::new());
    }
    if clean.len() % 8 != 0 {
        return Err(Base32Error::BadLength(clean.len()));
    }

    let mut out = Vec::with_capacity(clean.len() / 8 * 5);

    for group in clean.chunks_exact(8) {
        // 8 symbols, 5 bits each, into a 40-bit accumulator. Pad characters
        // contribute zero bits.
        let mut buffer: u64 = 0;
        let mut pad_count = 0u32;

        for &b in group {
            buffer <<= 5;
            if b == b'=' {
                pad_count += 1;
            } else {
                buffer |= u64::from(DECODE_TABLE[b as usize]);
            }
        }

        let out_bytes = match pad_count {
            0 => 5,
            1 => 4,
            3 => 3,
            4 => 2,
            6 => 1,
            _ => return Err(Base32Error::BadPadding),
        };

        // High-order bytes first; the padding-derived low bits are dropped.
        for k in 0..out_bytes {
            out.push((buffer >> ((4 - k) * 8)) as u8);
        }
    }

    Ok(out)
}
