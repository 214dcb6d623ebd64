//! `base32-valid` - check whether stdin is decodable Base32.
//!
//! Usage:
//!   base32-valid < file
//!
//! Prints `true` or `false`; the exit status is 0 for valid input and 1
//! otherwise, so the result can be used directly in shell conditionals.

use base32_rs::is_valid;
use std::io::{self, Read};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if is_valid(&buf) {
        println!("true");
    } else {
        println!("false");
        std::process::exit(1);
    }
}
