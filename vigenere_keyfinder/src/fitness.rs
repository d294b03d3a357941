//! Language-fitness scores for bare keys and decrypted sentences

use std::cmp::Ordering;

use crate::dictionary::Dictionary;
use crate::frequency::FrequencyModel;
use crate::normalize::normalize_word;

/// Added to the score of any key that is itself a dictionary word
pub const DICTIONARY_BONUS: f64 = 100.0;

/// Scores a candidate key: its monogram log-likelihood, plus
/// [`DICTIONARY_BONUS`] when the key is a dictionary word.
pub fn key_fitness(key: &str, model: &FrequencyModel, dictionary: &Dictionary) -> f64 {
    let mono = model.log_likelihood(key);
    if dictionary.contains(key) {
        DICTIONARY_BONUS + mono
    } else {
        mono
    }
}

/// True when the dictionary bonus outweighs any log-likelihood difference
/// between keys of up to `max_len` letters, so every dictionary word
/// outranks every non-word.
pub fn bonus_dominates(model: &FrequencyModel, max_len: usize) -> bool {
    DICTIONARY_BONUS > model.max_swing(max_len)
}

/// Word coverage of a decrypted sentence.
///
/// Ordered by word count first, then by frequency sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SentenceScore {
    pub words: usize,
    pub frequency_sum: u64,
}

impl Ord for SentenceScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.words
            .cmp(&other.words)
            .then(self.frequency_sum.cmp(&other.frequency_sum))
    }
}

impl PartialOrd for SentenceScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counts the tokens of `text` that are dictionary words with a non-zero
/// frequency, and sums those frequencies. Unknown tokens are ignored.
pub fn sentence_fitness(text: &str, dictionary: &Dictionary) -> SentenceScore {
    tokens(text)
        .map(normalize_word)
        .map(|token| dictionary.frequency(&token))
        .filter(|&frequency| frequency > 0)
        .fold(SentenceScore::default(), |score, frequency| SentenceScore {
            words: score.words + 1,
            frequency_sum: score.frequency_sum.saturating_add(frequency),
        })
}

/// Maximal runs of ASCII letters
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portuguese_words() -> Dictionary {
        Dictionary::from_frequencies([
            ("de", 1000),
            ("a", 900),
            ("casa", 40),
            ("amor", 30),
            ("noite", 20),
            ("milqmq", 0),
        ])
    }

    #[test]
    fn test_key_fitness_without_bonus() {
        let model = FrequencyModel::portuguese();
        let dictionary = portuguese_words();
        let score = key_fitness("xpto", &model, &dictionary);
        assert!((score - model.log_likelihood("xpto")).abs() < 1e-12);
    }

    #[test]
    fn test_key_fitness_with_bonus() {
        let model = FrequencyModel::portuguese();
        let dictionary = portuguese_words();
        let score = key_fitness("milqmq", &model, &dictionary);
        assert!((score - (100.0 + model.log_likelihood("milqmq"))).abs() < 1e-12);
    }

    #[test]
    fn test_bonus_dominates_supported_range() {
        let model = FrequencyModel::portuguese();
        for len in 1..=12 {
            assert!(bonus_dominates(&model, len), "length {len}");
        }
        assert!(!bonus_dominates(&model, 14));
    }

    #[test]
    fn test_worst_word_beats_best_non_word() {
        let model = FrequencyModel::portuguese();
        let dictionary = Dictionary::from_words(["wwwwwwwww"]);
        let worst_word = key_fitness("wwwwwwwww", &model, &dictionary);
        let best_non_word = key_fitness("eeeeeeeee", &model, &dictionary);
        assert!(worst_word > best_non_word);
    }

    #[test]
    fn test_sentence_fitness_counts_known_words() {
        let dictionary = portuguese_words();
        let score = sentence_fitness("a casa, de AMOR! xyz", &dictionary);
        assert_eq!(
            score,
            SentenceScore {
                words: 4,
                frequency_sum: 900 + 40 + 1000 + 30,
            }
        );
    }

    #[test]
    fn test_sentence_fitness_ignores_zero_frequency_and_unknown() {
        let dictionary = portuguese_words();
        assert_eq!(sentence_fitness("milqmq qqq", &dictionary), SentenceScore::default());
        assert_eq!(sentence_fitness("", &dictionary), SentenceScore::default());
    }

    #[test]
    fn test_sentence_fitness_saturates_large_frequencies() {
        let dictionary =
            Dictionary::from_reader(std::io::Cursor::new("a 18446744073709551615\nbb 5\n")).unwrap();
        let score = sentence_fitness("a a bb", &dictionary);
        assert_eq!(
            score,
            SentenceScore {
                words: 3,
                frequency_sum: u64::MAX,
            }
        );
    }

    #[test]
    fn test_tokens_split_on_non_letters() {
        let found: Vec<&str> = tokens("  ola,mundo--bom3dia ").collect();
        assert_eq!(found, vec!["ola", "mundo", "bom", "dia"]);
    }

    #[test]
    fn test_sentence_score_ordering() {
        let more_words = SentenceScore { words: 3, frequency_sum: 1 };
        let fewer_words = SentenceScore { words: 2, frequency_sum: 10_000 };
        let tie_break = SentenceScore { words: 3, frequency_sum: 2 };
        assert!(more_words > fewer_words);
        assert!(tie_break > more_words);
    }
}
