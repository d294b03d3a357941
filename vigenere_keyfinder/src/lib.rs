//! # Vigenère Key Finder
//!
//! Known-length cryptanalysis of Vigenère ciphertexts against Portuguese
//! text. Every dictionary word is tried against the ciphertext and the
//! resulting keys are ranked by how plausible they look.
//!
//! ## Search Modes
//!
//! - **Key search** - the ciphertext is one word. Each dictionary word of
//!   the same length is assumed to be the plaintext; the key stream it
//!   implies is derived, optionally reduced to its shortest period, and
//!   scored by monogram frequency plus a bonus for real words.
//! - **Phrase search** - the ciphertext is a sentence. Each dictionary word
//!   in the key-length window is tried as the key and the decryption is
//!   scored by how many of its tokens are known words.
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_keyfinder::{Dictionary, FrequencyModel, KeyFinder, SearchConfig};
//!
//! let dictionary = Dictionary::from_words(["normal", "figura"]);
//! let model = FrequencyModel::portuguese();
//! let config = SearchConfig::new(4, 9, 10).with_multi_period(false);
//!
//! let finder = KeyFinder::new(&dictionary, &model, config)?;
//! let outcome = finder.search_keys("zwccmb")?;
//! assert_eq!(outcome.top[0].key, "milqmq");
//! # Ok::<(), vigenere_keyfinder::KeyfinderError>(())
//! ```

// Public modules
pub mod alphabet;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod fitness;
pub mod frequency;
pub mod keystream;
pub mod normalize;
pub mod period;
pub mod ranking;
pub mod report;
pub mod sentence;
pub mod source;

// Re-exports for easy access
pub use config::SearchConfig;
pub use dictionary::Dictionary;
pub use error::{KeyfinderError, Result};
pub use fitness::{key_fitness, sentence_fitness, SentenceScore, DICTIONARY_BONUS};
pub use frequency::FrequencyModel;
pub use keystream::{derive, KeyStream};
pub use period::minimal_period;
pub use ranking::{DerivedKey, KeyFinder, KeySearchOutcome, ScoredKey, ScoredPhrase};
pub use sentence::{decrypt, encrypt};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
