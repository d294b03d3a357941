//! Case folding and diacritic stripping for dictionary words and tokens

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes accents by decomposing (NFKD) and dropping combining marks,
/// so `"ação"` becomes `"acao"`.
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Trims, lowercases and strips diacritics
pub fn normalize_word(word: &str) -> String {
    strip_diacritics(&word.trim().to_lowercase())
}

/// True if `word` is non-empty and made only of `a`-`z`
pub fn is_alphabet_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
