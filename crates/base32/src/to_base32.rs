//! Base32 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Encodes a byte slice to an uppercase, padded Base32 string.
///
/// # Arguments
///
/// * `data` - The bytes to encode.
///
/// # Returns
///
/// A Base32-encoded string of length `ceil(data.len() / 5) * 8`, using `=`
/// for trailing padding. Empty input yields an empty string.
///
/// # Example
///
/// ```
/// use base32_rs::to_base32;
///
/// assert_eq!(to_base32(b"f"), "MY======");
/// assert_eq!(to_base32(b"foobar"), "MZXW6YTBOI======");
/// ```
pub fn to_base32(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity((data.len() + 4) / 5 * 8);

    for chunk in data.chunks(5) {
        // Pack up to 5 bytes into a 40-bit big-endian accumulator. Missing
        // bytes leave the low-order bits zero.
        let mut buffer: u64 = 0;
        for k in 0..5 {
            buffer <<= 8;
            if let Some(&b) = chunk.get(k) {
                buffer |= u64::from(b);
            }
        }

        // Significant 5-bit groups for 1..=5 chunk bytes: 2, 4, 5, 7, 8.
        let groups = (chunk.len() * 8 + 4) / 5;

        for k in 0..8 {
            if k < groups {
                let index = ((buffer >> ((7 - k) * 5)) & 0x1F) as usize;
                out.push(ALPHABET_BYTES[index] as char);
            } else {
                out.push(PAD);
            }
        }
    }

    out
}
