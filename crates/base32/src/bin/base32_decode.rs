//! `base32-decode` - decode Base32 text (stdin) to raw bytes (stdout).
//!
//! Usage:
//!   base32-decode < file
//!
//! Whitespace in the input, including the trailing newline, is ignored.

use base32_rs::from_base32;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match from_base32(&buf) {
        Ok(bytes) => {
            io::stdout().write_all(&bytes).unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
