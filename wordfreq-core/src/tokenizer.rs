//! Word tokenizer
//!
//! A token is a maximal run of ASCII letters, optionally followed by an
//! apostrophe and a single lowercase letter. The suffix deliberately accepts
//! lowercase only, so `don't` is one token while `DON'T` splits into `DON`
//! and `T`.

use crate::metrics::LineMetrics;
use regex::{Matches, Regex};
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::OnceLock;

/// Pattern a token must match
pub const WORD_PATTERN: &str = r"[a-zA-Z]+('[a-z])?";

static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern must compile"))
}

/// Lazy iterator over the tokens of one line
///
/// Produced by [`tokenize`] and [`extract_words`]. Tokens borrow from the
/// scanned line.
#[derive(Debug)]
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}

impl FusedIterator for Tokens<'_> {}

/// Scan `line` left to right for non-overlapping tokens.
///
/// Characters outside a match (digits, punctuation, whitespace, non-ASCII
/// letters) are skipped.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens {
        matches: word_regex().find_iter(line),
    }
}

/// Byte ranges of the tokens in `line`, in the same order as [`tokenize`]
pub fn token_spans(line: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    word_regex().find_iter(line).map(|m| m.range())
}

/// Record `line` in `metrics` and return its tokens.
///
/// This is the per-line extraction step of the pipeline: the line length
/// distribution sees every line, blank ones included, and blank lines bump
/// the empty line counter.
pub fn extract_words<'a>(line: &'a str, metrics: &LineMetrics) -> Tokens<'a> {
    metrics.observe_line(line);
    tokenize(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<&str> {
        tokenize(line).collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(words("The cat sat."), vec!["The", "cat", "sat"]);
    }

    #[test]
    fn test_contraction_suffix() {
        assert_eq!(words("don't stop"), vec!["don't", "stop"]);
        assert_eq!(words("Wasn't it"), vec!["Wasn't", "it"]);
    }

    #[test]
    fn test_uppercase_suffix_is_not_joined() {
        assert_eq!(words("DON'T"), vec!["DON", "T"]);
    }

    #[test]
    fn test_suffix_takes_one_letter_only() {
        // "'ve" is longer than one letter: only "'v" attaches
        assert_eq!(words("we've"), vec!["we'v", "e"]);
    }

    #[test]
    fn test_dangling_apostrophe_is_skipped() {
        assert_eq!(words("dogs' bowls"), vec!["dogs", "bowls"]);
        assert_eq!(words("'quoted'"), vec!["quoted"]);
    }

    #[test]
    fn test_digits_and_punctuation_are_skipped() {
        assert_eq!(words("abc123def"), vec!["abc", "def"]);
        assert_eq!(words("42, 17; -- !!"), Vec::<&str>::new());
    }

    #[test]
    fn test_non_ascii_letters_are_skipped() {
        assert_eq!(words("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(words("").is_empty());
        assert!(words("   \t ").is_empty());
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let line = "one two";
        assert_eq!(tokenize(line).count(), 2);
        assert_eq!(tokenize(line).count(), 2);
    }

    #[test]
    fn test_token_spans_match_tokens() {
        let line = "  Hello, world's end";
        let from_spans: Vec<&str> = token_spans(line).map(|r| &line[r]).collect();
        assert_eq!(from_spans, words(line));
        assert_eq!(token_spans(line).next(), Some(2..7));
    }

    #[test]
    fn test_extract_words_updates_metrics() {
        let metrics = LineMetrics::new();

        let tokens: Vec<&str> = extract_words("a b", &metrics).collect();
        assert_eq!(tokens, vec!["a", "b"]);
        assert_eq!(extract_words("  ", &metrics).count(), 0);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.empty_lines, 1);
        assert_eq!(snapshot.line_len.count, 2);
        assert_eq!(snapshot.line_len.sum, 5);
        assert_eq!(snapshot.line_len.min, 2);
        assert_eq!(snapshot.line_len.max, 3);
    }

    #[test]
    fn test_extract_words_records_metrics_before_iteration() {
        let metrics = LineMetrics::new();
        let _unused = extract_words("", &metrics);
        assert_eq!(metrics.snapshot().empty_lines, 1);
    }
}
