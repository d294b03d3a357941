//! Result files and console rows for both search modes

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::ranking::{DerivedKey, ScoredKey, ScoredPhrase};

/// Shown next to keys that are dictionary words
pub const WORD_MARK: &str = "✓";
/// Shown next to keys that are not
pub const NON_WORD_MARK: &str = "𐄂";

/// One line per derived candidate.
///
/// `<stream> | period=<p> | key='<key>' -> <word>` when a period was
/// detected, `<key> -> <word>` otherwise.
pub fn write_all_keys<W: Write>(writer: &mut W, derived: &[DerivedKey]) -> Result<()> {
    for entry in derived {
        match entry.period {
            Some(period) => writeln!(
                writer,
                "{} | period={} | key='{}' -> {}",
                entry.stream, period, entry.key, entry.word
            )?,
            None => writeln!(writer, "{} -> {}", entry.key, entry.word)?,
        }
    }
    Ok(())
}

/// One key per line, best first
pub fn write_top_keys<W: Write>(writer: &mut W, top: &[ScoredKey]) -> Result<()> {
    for entry in top {
        writeln!(writer, "{}", entry.key)?;
    }
    Ok(())
}

pub fn write_top_phrases<W: Write>(writer: &mut W, top: &[ScoredPhrase]) -> Result<()> {
    for entry in top {
        writeln!(
            writer,
            "{}  # words={}, freq_sum={}",
            entry.key, entry.score.words, entry.score.frequency_sum
        )?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and hands a buffered writer to `write`.
pub fn save<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Console row for a ranked key, e.g. `  1. milqmq    (score=97.12) ✓`
/// Key column width for [`format_key_row`]: at least `max_key_len`, wider
/// when a ranked key is longer.
pub fn key_column_width(top: &[ScoredKey], max_key_len: usize) -> usize {
    top.iter()
        .map(|entry| entry.key.len())
        .fold(max_key_len, usize::max)
}

pub fn format_key_row(rank: usize, entry: &ScoredKey, width: usize) -> String {
    let mark = if entry.in_dictionary {
        WORD_MARK
    } else {
        NON_WORD_MARK
    };
    format!(
        "{:3}. {:<width$} (score={:.2}) {}",
        rank,
        entry.key,
        entry.score,
        mark,
        width = width
    )
}

/// Console row for a ranked phrase key with its decryption
pub fn format_phrase_row(rank: usize, entry: &ScoredPhrase) -> String {
    format!(
        "{:2}. key='{}' words={}, freq_sum={} -> {}",
        rank, entry.key, entry.score.words, entry.score.frequency_sum, entry.decrypted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::SentenceScore;
    use crate::keystream::derive;

    fn derived(word: &str, cipher: &str, period: Option<usize>) -> DerivedKey {
        let stream = derive(word, cipher).unwrap();
        let key = match period {
            Some(p) => stream.prefix(p).to_string(),
            None => stream.to_string(),
        };
        DerivedKey {
            word: word.to_string(),
            stream,
            period,
            key,
            score: 0.0,
        }
    }

    #[test]
    fn test_all_keys_formats() {
        let mut out = Vec::new();
        write_all_keys(
            &mut out,
            &[
                derived("vamosembora", "noxggpepzjo", Some(3)),
                derived("normal", "zwccmb", None),
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "solsolsolso | period=3 | key='sol' -> vamosembora\nmilqmq -> normal\n"
        );
    }

    #[test]
    fn test_top_files() {
        let keys = vec![ScoredKey {
            key: "milqmq".to_string(),
            score: 1.0,
            word: "normal".to_string(),
            in_dictionary: false,
        }];
        let mut out = Vec::new();
        write_top_keys(&mut out, &keys).unwrap();
        assert_eq!(out, b"milqmq\n");

        let phrases = vec![ScoredPhrase {
            key: "limao".to_string(),
            score: SentenceScore {
                words: 3,
                frequency_sum: 990,
            },
            decrypted: "ataque ao amanhecer".to_string(),
        }];
        let mut out = Vec::new();
        write_top_phrases(&mut out, &phrases).unwrap();
        assert_eq!(out, b"limao  # words=3, freq_sum=990\n");
        assert_eq!(
            format_phrase_row(1, &phrases[0]),
            " 1. key='limao' words=3, freq_sum=990 -> ataque ao amanhecer"
        );
    }

    #[test]
    fn test_key_row_marks_membership() {
        let mut entry = ScoredKey {
            key: "sol".to_string(),
            score: 104.567,
            word: "vamosembora".to_string(),
            in_dictionary: true,
        };
        assert_eq!(format_key_row(1, &entry, 6), "  1. sol    (score=104.57) ✓");
        entry.in_dictionary = false;
        entry.score = -3.0;
        assert_eq!(format_key_row(12, &entry, 3), " 12. sol (score=-3.00) 𐄂");
    }

    #[test]
    fn test_key_column_width() {
        let short = ScoredKey {
            key: "sol".to_string(),
            score: 1.0,
            word: "vamos".to_string(),
            in_dictionary: true,
        };
        let long = ScoredKey {
            key: "solsolsolsol".to_string(),
            ..short.clone()
        };
        assert_eq!(key_column_width(&[], 9), 9);
        assert_eq!(key_column_width(&[short.clone()], 9), 9);
        assert_eq!(key_column_width(&[short, long], 9), 12);
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top.txt");
        save(&path, |w| {
            writeln!(w, "chave")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "chave\n");
    }
}
