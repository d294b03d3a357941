//! Mapping between the 26 lowercase Latin letters and the integers 0-25

use crate::error::{KeyfinderError, Result};

/// Number of symbols in the alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Maps a lowercase letter to its position (a=0, b=1, ..., z=25).
///
/// Callers are expected to lowercase and strip diacritics first; anything
/// outside `a`-`z` is rejected.
pub fn encode(c: char) -> Result<u8> {
    if c.is_ascii_lowercase() {
        Ok(c as u8 - b'a')
    } else {
        Err(KeyfinderError::InvalidCharacter(c))
    }
}

/// Maps any integer back to a letter, wrapping negatives into 0-25.
pub fn decode(n: i32) -> char {
    (b'a' + n.rem_euclid(ALPHABET_LEN as i32) as u8) as char
}

/// Adds two letter positions modulo 26
pub fn add(a: u8, b: u8) -> u8 {
    (a + b) % ALPHABET_LEN
}

/// Subtracts `b` from `a` modulo 26
pub fn sub(a: u8, b: u8) -> u8 {
    (a + ALPHABET_LEN - b) % ALPHABET_LEN
}
