//! Result records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A distinct token together with the number of times it occurred.
///
/// `Display` renders the output record format `<token>: <count>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    /// The token text, compared case-sensitively
    pub token: String,
    /// Number of occurrences, always at least 1
    pub count: u64,
}

impl WordCount {
    /// Create a new record
    pub fn new<S: Into<String>>(token: S, count: u64) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.count)
    }
}

impl From<(String, u64)> for WordCount {
    fn from((token, count): (String, u64)) -> Self {
        Self { token, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(WordCount::new("The", 2).to_string(), "The: 2");
        assert_eq!(WordCount::new("don't", 1).to_string(), "don't: 1");
    }

    #[test]
    fn test_display_has_no_padding() {
        let line = WordCount::new("cat", 1000).to_string();
        assert_eq!(line, "cat: 1000");
        assert_eq!(line.trim_end(), line);
    }

    #[test]
    fn test_from_tuple() {
        let wc: WordCount = ("dog".to_string(), 3).into();
        assert_eq!(wc, WordCount::new("dog", 3));
    }
}
