//! Monogram frequency model and log-likelihood scoring

use crate::alphabet;

/// Portuguese (pt-BR) letter frequencies in percent, a-z
pub const PORTUGUESE_FREQUENCIES: [f64; 26] = [
    12.57, 1.01, 3.88, 4.99, 14.63, 1.02, 1.30, 1.28, 6.18,
    0.40, 0.02, 2.78, 4.74, 5.05, 10.73, 2.52, 1.20, 6.53,
    6.81, 4.34, 3.01, 1.67, 0.01, 0.21, 0.01, 0.47,
];

/// Value used for any character outside the table
pub const DEFAULT_FREQUENCY: f64 = 0.01;

/// Immutable per-letter frequency table.
///
/// Built once and shared read-only between scoring threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    table: [f64; 26],
    default: f64,
}

impl FrequencyModel {
    pub fn new(table: [f64; 26]) -> Self {
        Self {
            table,
            default: DEFAULT_FREQUENCY,
        }
    }

    pub fn portuguese() -> Self {
        Self::new(PORTUGUESE_FREQUENCIES)
    }

    /// Overrides the value used for characters outside `a`-`z`
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    pub fn frequency(&self, c: char) -> f64 {
        match alphabet::encode(c) {
            Ok(index) => self.table[index as usize],
            Err(_) => self.default,
        }
    }

    /// Sum of `ln(frequency)` over every character of `sequence`.
    ///
    /// Higher (less negative) means a more plausible letter distribution.
    pub fn log_likelihood(&self, sequence: &str) -> f64 {
        sequence.chars().map(|c| self.frequency(c).ln()).sum()
    }

    /// Largest possible gap between the log-likelihoods of two sequences of
    /// at most `max_len` characters.
    pub fn max_swing(&self, max_len: usize) -> f64 {
        let (lowest, highest) = self
            .table
            .iter()
            .fold((self.default, self.default), |(lo, hi), &f| (lo.min(f), hi.max(f)));
        max_len as f64 * (highest.ln() - lowest.ln())
    }
}

impl Default for FrequencyModel {
    fn default() -> Self {
        Self::portuguese()
    }
}
