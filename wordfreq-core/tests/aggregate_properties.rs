//! Property tests for aggregation

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use wordfreq_core::{OutputOrder, WordCounts};

fn token_multiset() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-cA-C]{1,3}", 0..200)
}

proptest! {
    #[test]
    fn counts_sum_to_number_of_tokens(tokens in token_multiset()) {
        let counts: WordCounts = tokens.iter().map(String::as_str).collect();
        let records = counts.into_word_counts(OutputOrder::Unordered);

        let total: u64 = records.iter().map(|r| r.count).sum();
        prop_assert_eq!(total, tokens.len() as u64);
    }

    #[test]
    fn one_record_per_distinct_token(tokens in token_multiset()) {
        let counts: WordCounts = tokens.iter().map(String::as_str).collect();
        let records = counts.into_word_counts(OutputOrder::Unordered);

        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        prop_assert_eq!(records.len(), distinct.len());

        let mut expected: HashMap<&str, u64> = HashMap::new();
        for token in &tokens {
            *expected.entry(token.as_str()).or_default() += 1;
        }
        for record in &records {
            prop_assert!(record.count >= 1);
            prop_assert_eq!(Some(&record.count), expected.get(record.token.as_str()));
        }
    }

    #[test]
    fn merge_order_does_not_matter(tokens in token_multiset(), split in 0usize..200) {
        let split = split.min(tokens.len());
        let (head, tail) = tokens.split_at(split);

        let whole: WordCounts = tokens.iter().map(String::as_str).collect();
        let left: WordCounts = head.iter().map(String::as_str).collect();
        let right: WordCounts = tail.iter().map(String::as_str).collect();

        prop_assert_eq!(&left.clone().merge(right.clone()).unwrap(), &whole);
        prop_assert_eq!(&right.merge(left).unwrap(), &whole);
    }

    #[test]
    fn ordering_only_permutes_records(tokens in token_multiset()) {
        let counts: WordCounts = tokens.iter().map(String::as_str).collect();

        let mut unordered = counts.clone().into_word_counts(OutputOrder::Unordered);
        let mut by_frequency = counts.clone().into_word_counts(OutputOrder::Frequency);
        let alphabetical = counts.into_word_counts(OutputOrder::Alphabetical);

        prop_assert!(alphabetical.windows(2).all(|w| w[0].token < w[1].token));
        prop_assert!(by_frequency.windows(2).all(|w| w[0].count >= w[1].count));

        unordered.sort_by(|a, b| a.token.cmp(&b.token));
        by_frequency.sort_by(|a, b| a.token.cmp(&b.token));
        prop_assert_eq!(&unordered, &alphabetical);
        prop_assert_eq!(&by_frequency, &alphabetical);
    }
}
