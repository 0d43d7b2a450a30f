//! Token occurrence counting
//!
//! [`WordCounts`] is the collect side of a collect-then-reduce aggregation:
//! partial maps can be built independently (one per thread, one per chunk)
//! and merged in any order. Records are only produced by
//! [`WordCounts::into_word_counts`], which consumes the map, so no count is
//! observed before the whole input has been seen.

use crate::error::{CoreError, Result};
use crate::types::WordCount;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};

/// Order of the finalized records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Whatever order the underlying map yields
    #[default]
    Unordered,
    /// Token byte order
    Alphabetical,
    /// Highest count first, ties broken by token
    Frequency,
}

/// Mapping from token to number of occurrences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`
    pub fn add(&mut self, token: &str) {
        // Look up by &str first so repeated tokens don't allocate
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_owned(), 1);
            }
        }
    }

    /// Count `n` occurrences of `token`
    ///
    /// Adding zero occurrences is a no-op, so every stored count stays ≥ 1.
    pub fn add_n(&mut self, token: &str, n: u64) -> Result<()> {
        if n == 0 {
            return Ok(());
        }

        match self.counts.get_mut(token) {
            Some(count) => {
                *count = count.checked_add(n).ok_or_else(|| CoreError::Overflow {
                    token: token.to_owned(),
                })?;
            }
            None => {
                self.counts.insert(token.to_owned(), n);
            }
        }
        Ok(())
    }

    /// Combine two partial maps.
    ///
    /// The smaller map is folded into the larger one.
    pub fn merge(self, other: WordCounts) -> Result<WordCounts> {
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        for (token, n) in from.counts {
            match into.counts.entry(token) {
                hash_map::Entry::Occupied(mut entry) => {
                    let merged = entry.get().checked_add(n).ok_or_else(|| CoreError::Overflow {
                        token: entry.key().clone(),
                    })?;
                    *entry.get_mut() = merged;
                }
                hash_map::Entry::Vacant(entry) => {
                    entry.insert(n);
                }
            }
        }

        Ok(into)
    }

    /// Occurrences of `token`, if it was seen
    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no token was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens seen
    pub fn total_tokens(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(token, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Finalize into one record per distinct token
    pub fn into_word_counts(self, order: OutputOrder) -> Vec<WordCount> {
        let mut records: Vec<WordCount> = self.counts.into_iter().map(WordCount::from).collect();

        match order {
            OutputOrder::Unordered => {}
            OutputOrder::Alphabetical => records.sort_unstable_by(|a, b| a.token.cmp(&b.token)),
            OutputOrder::Frequency => records.sort_unstable_by(|a, b| {
                b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token))
            }),
        }

        records
    }
}

impl<'a> Extend<&'a str> for WordCounts {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, tokens: I) {
        for token in tokens {
            self.add(token);
        }
    }
}

impl<'a> FromIterator<&'a str> for WordCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(tokens: I) -> Self {
        let mut counts = WordCounts::new();
        counts.extend(tokens);
        counts
    }
}
