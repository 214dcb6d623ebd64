//! Allocation-free Base32 validation.

use crate::constants::{decode_value, INVALID, PAD};

/// Reports whether a string is decodable Base32.
///
/// Applies the same rules as [`from_base32`](crate::from_base32) - character
/// class, case-insensitivity, whitespace tolerance, padding position, length,
/// and the per-group pad-count pattern - without allocating any output, so
/// `is_valid(s)` is `true` exactly when decoding `s` succeeds with at least
/// one non-whitespace character present. The empty (or all-whitespace) string
/// is not valid, even though decoding it yields empty output.
///
/// # Example
///
/// ```
/// use base32_rs::is_valid;
///
/// assert!(is_valid("MZXW6YTBOI======"));
/// assert!(is_valid("mzxw6ytboi======"));
/// assert!(!is_valid("MZXW6YT"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(encoded: &str) -> bool {
    let mut in_padding = false;
    let mut count = 0usize;
    let mut pad_in_group = 0u32;

    for c in encoded.chars() {
        if c.is_ascii_whitespace() {
            continue;
        }
        if c == PAD {
            in_padding = true;
            pad_in_group += 1;
        } else {
            if in_padding {
                return false;
            }
            if decode_value(c) == INVALID {
                return false;
            }
        }
        count += 1;
        // Each completed 8-character group must have a pad count the decoder
        // accepts: {0, 1, 3, 4, 6}.
        if count % 8 == 0 {
            if !matches!(pad_in_group, 0 | 1 | 3 | 4 | 6) {
                return false;
            }
            pad_in_group = 0;
        }
    }

    count > 0 && count % 8 == 0
}
