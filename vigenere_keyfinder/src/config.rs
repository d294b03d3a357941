//! Run configuration shared by both search modes

use crate::error::{KeyfinderError, Result};

/// Key-length window and result count for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_key_len: usize,
    pub max_key_len: usize,
    pub top_n: usize,
    /// Bare-key mode only: reduce each key stream to its shortest period
    pub multi_period: bool,
}

impl SearchConfig {
    pub fn new(min_key_len: usize, max_key_len: usize, top_n: usize) -> Self {
        Self {
            min_key_len,
            max_key_len,
            top_n,
            multi_period: true,
        }
    }

    /// Defaults for recovering a key from a single ciphertext word
    pub fn key_search() -> Self {
        Self::new(4, 9, 100)
    }

    /// Defaults for attacking a whole phrase
    pub fn phrase_search() -> Self {
        Self::new(4, 12, 20)
    }

    pub fn with_multi_period(mut self, multi_period: bool) -> Self {
        self.multi_period = multi_period;
        self
    }

    /// Checks the window and result count; called once before any work.
    pub fn validate(&self) -> Result<()> {
        if self.min_key_len == 0 {
            return Err(KeyfinderError::Configuration(
                "minimum key length must be at least 1".to_string(),
            ));
        }
        if self.min_key_len > self.max_key_len {
            return Err(KeyfinderError::Configuration(format!(
                "minimum key length {} exceeds maximum {}",
                self.min_key_len, self.max_key_len
            )));
        }
        if self.top_n == 0 {
            return Err(KeyfinderError::Configuration(
                "number of top results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::key_search()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SearchConfig::key_search().validate().is_ok());
        assert!(SearchConfig::phrase_search().validate().is_ok());
        assert_eq!(SearchConfig::default(), SearchConfig::key_search());
    }

    #[test]
    fn test_inverted_window() {
        let config = SearchConfig::new(9, 4, 10);
        assert!(matches!(config.validate(), Err(KeyfinderError::Configuration(_))));
    }

    #[test]
    fn test_zero_values() {
        assert!(matches!(
            SearchConfig::new(0, 4, 10).validate(),
            Err(KeyfinderError::Configuration(_))
        ));
        assert!(matches!(
            SearchConfig::new(4, 9, 0).validate(),
            Err(KeyfinderError::Configuration(_))
        ));
    }

    #[test]
    fn test_single_length_window() {
        assert!(SearchConfig::new(6, 6, 1).validate().is_ok());
    }

    #[test]
    fn test_multi_period_toggle() {
        assert!(SearchConfig::key_search().multi_period);
        assert!(!SearchConfig::key_search().with_multi_period(false).multi_period);
    }
}
