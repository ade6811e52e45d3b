//! Numeric-aware ordering of strings and paths ("shot2" < "shot10").

use std::cmp::Ordering;
use std::path::Path;

/// One piece of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// Maximal run of ASCII digits, leading zeros stripped.
    Number(String),
    /// Everything between digit runs, lowercased.
    Text(String),
}

impl Ord for Chunk {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // equal-length digit strings without leading zeros compare like integers
            (Chunk::Number(a), Chunk::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Chunk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split `s` into alternating text / number chunks.
///
/// The key always starts and ends with a text chunk (possibly empty), so two
/// keys line up chunk-by-chunk: text at even positions, numbers at odd ones.
pub fn natural_key(s: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        if !digits.is_empty() {
            chunks.push(Chunk::Text(std::mem::take(&mut text).to_lowercase()));
            chunks.push(number_chunk(&std::mem::take(&mut digits)));
        }
        text.push(c);
    }

    if !digits.is_empty() {
        chunks.push(Chunk::Text(std::mem::take(&mut text).to_lowercase()));
        chunks.push(number_chunk(&digits));
    }
    chunks.push(Chunk::Text(text.to_lowercase()));

    chunks
}

fn number_chunk(digits: &str) -> Chunk {
    let trimmed = digits.trim_start_matches('0');
    Chunk::Number(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

pub fn compare_natural(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Stable natural sort of anything string-like.
pub fn natural_sort<T: AsRef<str>>(items: &mut [T]) {
    items.sort_by_cached_key(|s| natural_key(s.as_ref()));
}

/// Stable natural sort on the full lossy string form of each path.
pub fn natural_sort_paths<T: AsRef<Path>>(items: &mut [T]) {
    items.sort_by_cached_key(|p| natural_key(&p.as_ref().to_string_lossy()));
}
