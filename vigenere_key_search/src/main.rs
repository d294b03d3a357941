use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vigenere_keyfinder::normalize::normalize_word;
use vigenere_keyfinder::{report, source, FrequencyModel, KeyFinder, SearchConfig};

/// Command-line arguments for the Vigenère key search program.
#[derive(Parser, Debug)]
#[command(about = "Ranks Vigenère keys that map Portuguese words onto a one-word ciphertext")]
struct Cli {
    /// Ciphertext word to attack
    #[arg(short, long, help = "Ciphertext word (letters only, case and accents are folded)")]
    ciphertext: String,

    /// Word list, one word per line, optionally followed by a frequency
    #[arg(short, long, default_value = "pt_full_cache.txt")]
    wordlist: PathBuf,

    /// Where to fetch the word list from when it is not cached yet
    #[arg(long, default_value = source::PT_FULL_URL)]
    download_url: String,

    /// Fail instead of downloading a missing word list
    #[arg(long)]
    offline: bool,

    /// Shortest key length considered when detecting periods
    #[arg(long, default_value_t = 4)]
    min_key_len: usize,

    /// Longest key length considered when detecting periods
    #[arg(long, default_value_t = 9)]
    max_key_len: usize,

    /// Number of top keys to keep
    #[arg(short = 'n', long, default_value_t = 100)]
    top: usize,

    /// Score the whole key stream instead of its shortest period
    #[arg(long)]
    single_period: bool,

    /// Output file listing every derived key stream
    #[arg(long, default_value = "all_keys_all_periods.txt")]
    all_keys_out: PathBuf,

    /// Output file with the top keys, one per line
    #[arg(long, default_value = "top_chaves_genericas.txt")]
    top_out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli: Cli = Cli::parse();

    let config = SearchConfig::new(cli.min_key_len, cli.max_key_len, cli.top)
        .with_multi_period(!cli.single_period);
    config.validate()?;

    let ciphertext = normalize_word(&cli.ciphertext);
    let url = (!cli.offline).then_some(cli.download_url.as_str());
    let dictionary = source::load_dictionary(&cli.wordlist, url)
        .with_context(|| format!("Failed to load word list {}", cli.wordlist.display()))?;

    let model = FrequencyModel::portuguese();
    let finder = KeyFinder::new(&dictionary, &model, config)?;
    let outcome = finder.search_keys(&ciphertext)?;

    report::save(&cli.all_keys_out, |w| report::write_all_keys(w, &outcome.derived))
        .with_context(|| format!("Failed to write {}", cli.all_keys_out.display()))?;
    report::save(&cli.top_out, |w| report::write_top_keys(w, &outcome.top))
        .with_context(|| format!("Failed to write {}", cli.top_out.display()))?;
    info!(
        derived = outcome.derived.len(),
        top = outcome.top.len(),
        "results written"
    );

    let config = finder.config();
    println!("\n=== Top {} candidate keys for '{}' ===", config.top_n, ciphertext);
    let width = report::key_column_width(&outcome.top, config.max_key_len);
    for (rank, entry) in outcome.top.iter().enumerate() {
        println!("{}", report::format_key_row(rank + 1, entry, width));
    }

    println!(
        "\nFiles written:\n - all key streams: {}\n - top {} keys:    {}",
        cli.all_keys_out.display(),
        config.top_n,
        cli.top_out.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vigenere_key_search", "--ciphertext", "kmrvrfwg"]);
        assert_eq!(cli.min_key_len, 4);
        assert_eq!(cli.max_key_len, 9);
        assert_eq!(cli.top, 100);
        assert!(!cli.single_period);
        assert!(!cli.offline);
        assert_eq!(cli.download_url, source::PT_FULL_URL);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "vigenere_key_search",
            "-c",
            "zwccmb",
            "-w",
            "palavras6letras.txt",
            "-n",
            "50",
            "--single-period",
            "--offline",
        ]);
        assert_eq!(cli.ciphertext, "zwccmb");
        assert_eq!(cli.wordlist, PathBuf::from("palavras6letras.txt"));
        assert_eq!(cli.top, 50);
        assert!(cli.single_period);
        assert!(cli.offline);
    }
}
