use std::sync::LazyLock;

use regex::Regex;

// A word: one or more alphanumerics, then any mix of alphanumerics, hyphens
// and apostrophes, optionally trailed by a single whitespace character. The
// trailing `\s?` keeps consecutive delimiters from double counting.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9]+[a-zA-Z0-9\-']*\s?").unwrap());

/// Number of words in `text`, counted as non-overlapping matches of the word
/// pattern scanning left to right. No case or Unicode normalization.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}
