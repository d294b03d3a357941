//! Candidate generation, scoring and top-N selection
//!
//! Two modes share the same shape: draw candidates from the dictionary,
//! score each one independently (in parallel), then reduce the results on
//! a single thread so ties always resolve the same way.
//!
//! - **Key search**: the ciphertext is a single word. Every dictionary word
//!   of the same length is treated as the plaintext, the implied key stream
//!   is derived (optionally cut down to its shortest period) and scored
//!   with [`key_fitness`].
//! - **Phrase search**: the ciphertext is a whole sentence. Every dictionary
//!   word within the key-length window is tried as the key and the
//!   decryption is scored with [`sentence_fitness`].

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::alphabet;
use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::error::{KeyfinderError, Result};
use crate::fitness::{bonus_dominates, key_fitness, sentence_fitness, SentenceScore};
use crate::frequency::FrequencyModel;
use crate::keystream::{self, KeyStream};
use crate::period::minimal_period;
use crate::sentence;

/// Key implied by one candidate plaintext word
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedKey {
    pub word: String,
    pub stream: KeyStream,
    /// Set only when multi-period search is enabled
    pub period: Option<usize>,
    pub key: String,
    pub score: f64,
}

/// A unique key and the best score any candidate gave it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredKey {
    pub key: String,
    pub score: f64,
    /// Candidate word that produced the winning score
    pub word: String,
    pub in_dictionary: bool,
}

#[derive(Debug, Clone, Default)]
pub struct KeySearchOutcome {
    /// Every successfully derived candidate, in dictionary order
    pub derived: Vec<DerivedKey>,
    pub top: Vec<ScoredKey>,
}

/// A candidate key and the decryption it produces
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPhrase {
    pub key: String,
    pub score: SentenceScore,
    pub decrypted: String,
}

/// Unique keys, each kept with its best score.
///
/// Insert-or-update-if-greater; on equal scores the first entry stays.
#[derive(Debug, Default)]
struct KeyArena {
    entries: Vec<ScoredKey>,
    index: HashMap<String, usize>,
}

impl KeyArena {
    fn offer(&mut self, candidate: ScoredKey) {
        match self.index.get(&candidate.key) {
            Some(&slot) => {
                if candidate.score > self.entries[slot].score {
                    self.entries[slot] = candidate;
                }
            }
            None => {
                self.index.insert(candidate.key.clone(), self.entries.len());
                self.entries.push(candidate);
            }
        }
    }

    /// Best `top_n` entries: score descending, then key ascending
    fn into_top(self, top_n: usize) -> Vec<ScoredKey> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
        entries.truncate(top_n);
        entries
    }
}

/// Ranking pipeline over a read-only dictionary and frequency model
#[derive(Debug, Clone, Copy)]
pub struct KeyFinder<'a> {
    dictionary: &'a Dictionary,
    model: &'a FrequencyModel,
    config: SearchConfig,
}

impl<'a> KeyFinder<'a> {
    /// Validates `config` once, up front.
    pub fn new(
        dictionary: &'a Dictionary,
        model: &'a FrequencyModel,
        config: SearchConfig,
    ) -> Result<Self> {
        config.validate()?;
        if !bonus_dominates(model, config.max_key_len) {
            warn!(
                max_key_len = config.max_key_len,
                "dictionary bonus no longer dominates frequency scores at this key length"
            );
        }
        Ok(Self {
            dictionary,
            model,
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Ranks the keys implied by every dictionary word with the same length
    /// as `ciphertext`.
    ///
    /// `ciphertext` must be lowercase letters only.
    pub fn search_keys(&self, ciphertext: &str) -> Result<KeySearchOutcome> {
        for c in ciphertext.chars() {
            alphabet::encode(c)?;
        }
        let length = ciphertext.len();
        if length < self.config.min_key_len {
            warn!(
                length,
                min_key_len = self.config.min_key_len,
                "ciphertext is shorter than the minimum key length"
            );
        }

        if !self.bonus_dominates_for(length) {
            warn!(
                length,
                "dictionary bonus no longer dominates frequency scores for keys this long"
            );
        }

        let candidates = self.dictionary.words_of_length(length);
        if candidates.is_empty() {
            return Err(KeyfinderError::EmptyDictionary {
                min: length,
                max: length,
            });
        }
        info!(candidates = candidates.len(), length, "deriving key streams");

        let derived: Vec<DerivedKey> = candidates
            .par_iter()
            .filter_map(|word| match self.derive_candidate(word, ciphertext) {
                Ok(derived) => Some(derived),
                Err(err) => {
                    debug!(word, %err, "skipping candidate");
                    None
                }
            })
            .collect();

        let mut arena = KeyArena::default();
        for candidate in &derived {
            arena.offer(ScoredKey {
                key: candidate.key.clone(),
                score: candidate.score,
                word: candidate.word.clone(),
                in_dictionary: self.dictionary.contains(&candidate.key),
            });
        }
        info!(unique_keys = arena.entries.len(), "key streams scored");

        Ok(KeySearchOutcome {
            derived,
            top: arena.into_top(self.config.top_n),
        })
    }

    /// Whether the dictionary bonus still dominates for the longest key
    /// scored against a ciphertext of `length` letters. Without period
    /// detection that key is the whole stream.
    fn bonus_dominates_for(&self, length: usize) -> bool {
        let longest = if self.config.multi_period {
            self.config.max_key_len.min(length)
        } else {
            length
        };
        bonus_dominates(self.model, longest)
    }

    fn derive_candidate(&self, word: &str, ciphertext: &str) -> Result<DerivedKey> {
        let stream = keystream::derive(word, ciphertext)?;
        let (period, key) = if self.config.multi_period {
            let period = minimal_period(
                stream.as_str(),
                self.config.min_key_len,
                self.config.max_key_len,
            );
            (Some(period), stream.prefix(period).to_string())
        } else {
            (None, stream.to_string())
        };
        let score = key_fitness(&key, self.model, self.dictionary);

        Ok(DerivedKey {
            word: word.to_string(),
            stream,
            period,
            key,
            score,
        })
    }

    /// Tries every dictionary word within the key-length window as the key
    /// for `ciphertext` and ranks the decryptions by word coverage.
    ///
    /// Equal scores keep dictionary order.
    pub fn search_phrases(&self, ciphertext: &str) -> Result<Vec<ScoredPhrase>> {
        let candidates = self
            .dictionary
            .words_in_length_range(self.config.min_key_len, self.config.max_key_len);
        if candidates.is_empty() {
            return Err(KeyfinderError::EmptyDictionary {
                min: self.config.min_key_len,
                max: self.config.max_key_len,
            });
        }
        if !ciphertext.chars().any(|c| c.is_ascii_alphabetic()) {
            warn!("ciphertext has no letters to decrypt");
        }
        info!(candidates = candidates.len(), "trying candidate keys");

        let mut scored: Vec<ScoredPhrase> = candidates
            .par_iter()
            .filter_map(|key| match sentence::decrypt(ciphertext, key) {
                Ok(decrypted) => Some(ScoredPhrase {
                    key: key.to_string(),
                    score: sentence_fitness(&decrypted, self.dictionary),
                    decrypted,
                }),
                Err(err) => {
                    debug!(key, %err, "skipping candidate key");
                    None
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.config.top_n);
        Ok(scored)
    }
}
