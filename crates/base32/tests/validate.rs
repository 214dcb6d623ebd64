//! Tests for Base32 validation (is_valid), in particular its agreement with
//! the decoder.

use base32_rs::{from_base32, is_valid, to_base32};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn accepts_encoder_output() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert!(is_valid(&to_base32(&blob)));
    }
}

#[test]
fn empty_input() {
    assert!(!is_valid(""));
}

#[test]
fn whitespace_only_input() {
    assert!(!is_valid(" \t\r\n "));
}

#[test]
fn concrete_scenarios() {
    assert!(is_valid("MZXW6YTBOI======"));
    assert!(is_valid("mzxw6ytboi======"));
    assert!(is_valid("MZXW 6YTB"));
    assert!(!is_valid("MZXW6YT"));
    assert!(!is_valid("MZXW6YTB=I======"));
    assert!(!is_valid("MZXW6YT0"));
}

#[test]
fn rejects_bad_padding_patterns() {
    // Validation applies the decoder's per-group pad-count rule, so the
    // patterns with 2, 5, 7, or 8 pads in a group fail here too rather than
    // only at decode time.
    for input in ["MZXW6Y==", "MZX=====", "M=======", "========"] {
        assert!(!is_valid(input), "input {input:?}");
        assert!(from_base32(input).is_err(), "input {input:?}");
    }
}

#[test]
fn agrees_with_decoder_on_mutated_inputs() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base32(&blob);

        let mutated = match rng.gen_range(0..6) {
            // Truncation breaks the length rule.
            0 => encoded[..encoded.len() - 1].to_string(),
            // Appending a data character breaks length or padding order.
            1 => format!("{encoded}A"),
            // A pad injected mid-input breaks the ordering rule.
            2 => {
                let mut s = encoded.clone();
                s.insert(rng.gen_range(0..s.len()), '=');
                s
            }
            // A bad character anywhere is rejected.
            3 => {
                let mut s = encoded.clone();
                let at = rng.gen_range(0..s.len());
                s.replace_range(at..at + 1, "!");
                s
            }
            // Lowercasing and whitespace keep the input valid.
            4 => encoded.to_lowercase(),
            _ => format!(" {} \n", encoded),
        };

        assert_eq!(
            is_valid(&mutated),
            from_base32(&mutated).is_ok(),
            "disagreement on {mutated:?}"
        );
    }
}

#[test]
fn empty_is_the_only_asymmetry() {
    // Decoding empty input succeeds with empty output, but validation
    // reports false; every other input classifies identically.
    assert!(from_base32("").is_ok());
    assert!(!is_valid(""));
}
