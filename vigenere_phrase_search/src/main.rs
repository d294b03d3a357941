use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vigenere_keyfinder::{report, source, FrequencyModel, KeyFinder, SearchConfig};

/// Command-line arguments for the Vigenère phrase search program.
#[derive(Parser, Debug)]
#[command(about = "Tries Portuguese words as Vigenère keys for a ciphertext phrase")]
struct Cli {
    /// Ciphertext phrase; spaces and punctuation are kept as they are
    #[arg(short, long)]
    ciphertext: String,

    /// Word-frequency list (`word frequency` per line)
    #[arg(short, long, default_value = "pt_full_cache.txt")]
    wordlist: PathBuf,

    /// Where to fetch the word list from when it is not cached yet
    #[arg(long, default_value = source::PT_FULL_URL)]
    download_url: String,

    /// Fail instead of downloading a missing word list
    #[arg(long)]
    offline: bool,

    /// Shortest candidate key
    #[arg(long, default_value_t = 4)]
    min_key_len: usize,

    /// Longest candidate key
    #[arg(long, default_value_t = 12)]
    max_key_len: usize,

    /// Number of top keys to keep
    #[arg(short = 'n', long, default_value_t = 20)]
    top: usize,

    /// Output file with the top keys and their word counts
    #[arg(long, default_value = "top_chaves_frase.txt")]
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

    let config = SearchConfig::new(cli.min_key_len, cli.max_key_len, cli.top);
    config.validate()?;

    let url = (!cli.offline).then_some(cli.download_url.as_str());
    let dictionary = source::load_dictionary(&cli.wordlist, url)
        .with_context(|| format!("Failed to load word list {}", cli.wordlist.display()))?;

    let model = FrequencyModel::portuguese();
    let finder = KeyFinder::new(&dictionary, &model, config)?;
    let top = finder.search_phrases(&cli.ciphertext)?;

    report::save(&cli.top_out, |w| report::write_top_phrases(w, &top))
        .with_context(|| format!("Failed to write {}", cli.top_out.display()))?;
    info!(top = top.len(), "results written");

    println!("\n=== Top {} keys for the phrase ===", finder.config().top_n);
    for (rank, entry) in top.iter().enumerate() {
        println!("{}", report::format_phrase_row(rank + 1, entry));
    }
    println!("\nTop keys saved to: {}", cli.top_out.display());

    Ok(())
}
