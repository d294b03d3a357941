//! Key-stream derivation from a known plaintext/ciphertext pair

use std::fmt;

use crate::alphabet;
use crate::error::{KeyfinderError, Result};

/// Per-position key letters that turn a plaintext into a ciphertext.
///
/// Always the same length as the ciphertext it was derived against and
/// made only of `a`-`z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyStream(String);

impl KeyStream {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First `period` letters of the stream (the whole stream if shorter)
    pub fn prefix(&self, period: usize) -> &str {
        &self.0[..period.min(self.0.len())]
    }
}

impl fmt::Display for KeyStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyStream {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Computes the key stream that Vigenère encryption would need to map
/// `plain` onto `cipher`: `key[i] = cipher[i] - plain[i] (mod 26)`.
///
/// Both inputs must be lowercase letters only and of equal length.
pub fn derive(plain: &str, cipher: &str) -> Result<KeyStream> {
    let plain_len = plain.chars().count();
    let cipher_len = cipher.chars().count();
    if plain_len != cipher_len {
        return Err(KeyfinderError::LengthMismatch {
            plain: plain_len,
            cipher: cipher_len,
        });
    }

    let mut stream = String::with_capacity(cipher_len);
    for (p, c) in plain.chars().zip(cipher.chars()) {
        let shift = alphabet::encode(c)? as i32 - alphabet::encode(p)? as i32;
        stream.push(alphabet::decode(shift));
    }

    Ok(KeyStream(stream))
}
