//! Word dictionary with optional corpus frequencies
//!
//! The dictionary is built once per run and only queried afterwards. It
//! serves both as a word set (membership) and as a word -> frequency map,
//! over the same backing collection. Words keep the order in which they
//! were first inserted so candidate iteration is reproducible.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::normalize::{is_alphabet_word, normalize_word};

/// Frequency given to words read from a single-column list
pub const UNCOUNTED_FREQUENCY: u64 = 1;

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    frequencies: HashMap<String, u64>,
    /// Word length -> indices into `words`, ascending
    by_length: BTreeMap<usize, Vec<usize>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a membership-only dictionary; every word gets
    /// [`UNCOUNTED_FREQUENCY`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_frequencies(words.into_iter().map(|w| (w, UNCOUNTED_FREQUENCY)))
    }

    pub fn from_frequencies<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut dictionary = Self::new();
        for (word, frequency) in entries {
            dictionary.insert(word, frequency);
        }
        dictionary
    }

    /// Parses a newline-delimited word list.
    ///
    /// Accepts `word` or `word frequency` lines. Words are lowercased and
    /// stripped of diacritics. Lines that do not reduce to a plain `a`-`z`
    /// word, or whose frequency column is not an integer, are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Self::new();
        let mut skipped = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_line(&line) {
                Some((word, frequency)) => dictionary.insert(word, frequency),
                None => {
                    if !line.trim().is_empty() {
                        debug!(line = line_no + 1, content = %line, "skipping dictionary line");
                        skipped += 1;
                    }
                }
            }
        }

        info!(words = dictionary.len(), skipped, "dictionary loaded");
        Ok(dictionary)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Adds a word, or raises its frequency if already present.
    ///
    /// A repeated word keeps its original position.
    pub fn insert(&mut self, word: impl Into<String>, frequency: u64) {
        let word = word.into();
        if let Some(existing) = self.frequencies.get_mut(&word) {
            *existing = (*existing).max(frequency);
            return;
        }

        let index = self.words.len();
        self.by_length
            .entry(word.chars().count())
            .or_default()
            .push(index);
        self.frequencies.insert(word.clone(), frequency);
        self.words.push(word);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Corpus frequency of `word`, 0 if absent
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.by_length
            .get(&length)
            .map(|indices| indices.iter().map(|&i| self.words[i].as_str()).collect())
            .unwrap_or_default()
    }

    /// Words whose length lies in `min..=max`, in insertion order
    pub fn words_in_length_range(&self, min: usize, max: usize) -> Vec<&str> {
        if min > max {
            return Vec::new();
        }
        let mut indices: Vec<usize> = self
            .by_length
            .range(min..=max)
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|i| self.words[i].as_str())
            .collect()
    }
}

fn parse_line(line: &str) -> Option<(String, u64)> {
    let mut columns = line.split_whitespace();
    let word = normalize_word(columns.next()?);
    if !is_alphabet_word(&word) {
        return None;
    }
    let frequency = match columns.next() {
        Some(column) => column.parse().ok()?,
        None => UNCOUNTED_FREQUENCY,
    };
    Some((word, frequency))
}
