//! Content-validity heuristic for extracted snippets.
//!
//! A snippet counts as content when it is long enough, is not purely
//! vertical whitespace, and has some structure beyond a bare list of
//! words or numbers. The last check compares the number of letter/digit
//! tokens against the number of whitespace-separated words: punctuation,
//! symbols and hyphenated or mixed alphanumeric words make the two counts
//! diverge, while a plain list of labels, prices or ratings keeps them
//! equal.
//!
//! Note that an unpunctuated sentence ("Quick brown fox jumps over the
//! lazy dog") is rejected as well, as is text whose punctuation happens to
//! balance the counts.

use std::sync::LazyLock;

use regex::Regex;

/// Default minimum snippet length, in characters.
pub const MIN_TEXT_CHARS: usize = 20;

/// A run of digits or a run of ASCII letters, delimited by word boundaries.
#[allow(clippy::expect_used)]
static WORD_OR_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:\d+|[A-Za-z]+)\b").expect("WORD_OR_NUMBER regex"));

/// Check a snippet with the default length threshold.
///
/// # Examples
///
/// ```
/// use block_extract::validity::is_valid;
///
/// assert!(is_valid("Fast shipping, easy returns and a two-year warranty."));
/// assert!(!is_valid("Laptop Phone Tablet Camera"));
/// ```
#[must_use]
pub fn is_valid(text: &str) -> bool {
    is_valid_with_min_len(text, MIN_TEXT_CHARS)
}

/// Check a snippet, requiring at least `min_chars` characters.
#[must_use]
pub fn is_valid_with_min_len(text: &str, min_chars: usize) -> bool {
    if text.chars().count() < min_chars {
        return false;
    }

    if is_blank_lines(text) {
        return false;
    }

    let tokens = token_count(text);
    tokens != 0 && tokens != word_count(text)
}

/// True when every newline-separated line is empty after trimming.
#[must_use]
pub fn is_blank_lines(text: &str) -> bool {
    text.split('\n').all(|line| line.trim().is_empty())
}

/// Number of standalone letter or digit runs.
#[must_use]
pub fn token_count(text: &str) -> usize {
    WORD_OR_NUMBER.find_iter(text).count()
}

/// Number of whitespace-delimited words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
