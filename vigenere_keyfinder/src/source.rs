//! Word-list acquisition: local cache with a one-time download

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::dictionary::Dictionary;
use crate::error::{KeyfinderError, Result};

/// Portuguese word-frequency list (`word frequency` per line)
pub const PT_FULL_URL: &str =
    "https://raw.githubusercontent.com/hermitdave/FrequencyWords/master/content/2016/pt/pt_full.txt";

/// Downloads `url` into `path` unless `path` already exists.
pub fn ensure_cached(path: &Path, url: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    warn!(path = %path.display(), url, "word list not cached, downloading");
    let body = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|err| KeyfinderError::Download(err.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, body)?;
    info!(path = %path.display(), "word list cached");
    Ok(())
}

/// Loads the dictionary from `path`, fetching it from `url` first when the
/// file is missing and a URL is given.
pub fn load_dictionary(path: &Path, url: Option<&str>) -> Result<Dictionary> {
    if let Some(url) = url {
        ensure_cached(path, url)?;
    }
    Dictionary::load(path)
}
