//! Whole-text Vigenère encryption and decryption with a repeating key
//!
//! Only ASCII letters are shifted. Every other character (spaces,
//! punctuation, digits, accented letters) is copied unchanged and does not
//! consume a key position, so the key stays aligned with the letters.

use crate::alphabet;
use crate::error::{KeyfinderError, Result};

/// Decrypts `cipher` with the repeating `key`; letters come out lowercase.
pub fn decrypt(cipher: &str, key: &str) -> Result<String> {
    transform(cipher, key, alphabet::sub)
}

/// Encrypts `plain` with the repeating `key`; letters come out lowercase.
pub fn encrypt(plain: &str, key: &str) -> Result<String> {
    transform(plain, key, alphabet::add)
}

fn transform(text: &str, key: &str, combine: impl Fn(u8, u8) -> u8) -> Result<String> {
    let shifts = key_shifts(key)?;
    let mut result = String::with_capacity(text.len());
    let mut key_index = 0usize;

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let letter = alphabet::encode(c.to_ascii_lowercase())?;
            let shifted = combine(letter, shifts[key_index % shifts.len()]);
            result.push(alphabet::decode(shifted as i32));
            key_index += 1;
        } else {
            result.push(c);
        }
    }

    Ok(result)
}

fn key_shifts(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(KeyfinderError::EmptyKey);
    }
    key.chars().map(alphabet::encode).collect()
}
