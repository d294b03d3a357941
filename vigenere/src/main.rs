use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use vigenere_keyfinder::normalize::normalize_word;
use vigenere_keyfinder::{decrypt, encrypt};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher (case and accents are folded)")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Encrypts or decrypts a file with a known key, producing material for
/// the key and phrase searches.
fn main() -> Result<()> {
    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;
    let key = normalize_word(&cli.key);

    // Letters come out lowercase; everything else is copied as is
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", key);
            encrypt(&content, &key)?
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", key);
            decrypt(&content, &key)?
        }
    };

    std::fs::write(&cli.output, result)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}
