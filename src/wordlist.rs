//! Word list loading and canonical ordering.
//!
//! The generator consumes whitespace-separated tokens as raw byte strings,
//! one symbol per byte. Case folding, Unicode normalization and multi-byte
//! encodings are the concern of whoever produces the list; this layer only
//! establishes the canonical order every later stage depends on: length
//! ascending, then lexicographic ascending on raw bytes.

use std::cmp::Ordering;
use std::io::Read;

use crate::error::{Error, Result};

/// A word as a raw byte string.
pub type Word = Vec<u8>;

/// Compares two words by length first, then lexicographically on raw bytes.
pub fn length_then_lex(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Reads a whole word list from `input` and returns it in canonical order.
///
/// The stream is consumed in full before any parsing happens; there is no
/// incremental mode.
pub fn read_word_list(mut input: impl Read) -> Result<Vec<Word>> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(Error::InputUnavailable)?;
    Ok(parse_word_list(&text))
}

/// Tokenizes `text` on whitespace runs and returns the words sorted by
/// [`length_then_lex`], with duplicates removed.
///
/// Deduplication keeps the input checksum consistent with what traversal of
/// the finished graph can reconstruct: the graph stores sets, not multisets.
pub fn parse_word_list(text: &str) -> Vec<Word> {
    let mut words: Vec<Word> = text
        .split_whitespace()
        .map(|w| w.as_bytes().to_vec())
        .collect();
    words.sort_unstable_by(|a, b| length_then_lex(a, b));
    words.dedup();
    words
}
