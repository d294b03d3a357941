//! Error types for key search operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyfinderError {
    #[error("Invalid character {0:?} (expected a lowercase letter a-z)")]
    InvalidCharacter(char),

    #[error("Length mismatch: plaintext has {plain} letters, ciphertext has {cipher}")]
    LengthMismatch { plain: usize, cipher: usize },

    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("No dictionary words with length in {min}..={max}")]
    EmptyDictionary { min: usize, max: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download error: {0}")]
    Download(String),
}

pub type Result<T> = std::result::Result<T, KeyfinderError>;
