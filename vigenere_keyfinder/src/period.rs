//! Shortest repeating unit of a key stream

/// Returns the smallest `p` in `[min_len, min(max_len, len)]` such that
/// repeating `stream[..p]` and truncating to `stream.len()` gives back
/// `stream`.
///
/// When no length in the window repeats exactly, the upper end of the
/// window is returned. This is a fallback, not a "not found" signal.
pub fn minimal_period(stream: &str, min_len: usize, max_len: usize) -> usize {
    let bytes = stream.as_bytes();
    let upper = max_len.min(bytes.len());

    (min_len.max(1)..=upper)
        .find(|&p| repeats_with_period(bytes, p))
        .unwrap_or(upper)
}

/// True if `bytes[i] == bytes[i % p]` for every position
fn repeats_with_period(bytes: &[u8], p: usize) -> bool {
    bytes
        .iter()
        .enumerate()
        .all(|(i, b)| *b == bytes[i % p])
}
