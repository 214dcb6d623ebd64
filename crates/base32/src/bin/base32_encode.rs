//! `base32-encode` - encode raw bytes (stdin) to Base32 text (stdout).
//!
//! Usage:
//!   base32-encode < file

use base32_rs::to_base32;
use std::io::{self, Read, Write};

fn main() {
    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let encoded = to_base32(&buf);
    io::stdout().write_all(encoded.as_bytes()).unwrap();
    io::stdout().write_all(b"\n").unwrap();
}
