use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::index::{AnagramIndex, IndexBuilder};
use crate::multiset::*;
use crate::types::*;

///Maps the canonical (letter,count) key of a word to all dictionary words
///with exactly that letter multiset.
///
///Sub-anagram lookup scans every stored key and tests containment, so the
///cost is linear in the number of distinct keys rather than exponential in
///the query length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyMapIndex {
    buckets: HashMap<FreqKey, Vec<String>>,
    size: usize,
}

impl FrequencyMapIndex {
    pub fn get(&self, key: &FreqKey) -> Option<&Vec<String>> {
        self.buckets.get(key)
    }
}

impl AnagramIndex for FrequencyMapIndex {
    fn strategy(&self) -> Strategy {
        Strategy::FrequencyMap
    }

    fn len(&self) -> usize {
        self.size
    }

    fn key_count(&self) -> usize {
        self.buckets.len()
    }

    fn collect<'a>(&'a self, query: &str) -> Candidates<'a> {
        let focus = query.frequencies();
        let focus_key = focus.sorted_key();
        let mut candidates = Candidates::default();
        if let Some(bucket) = self.buckets.get(&focus_key) {
            candidates.anagrams.extend(bucket.iter().map(String::as_str));
        }
        for (key, bucket) in self.buckets.iter() {
            if *key != focus_key && key_is_subset(key, &focus) {
                candidates.sub_anagrams.extend(bucket.iter().map(String::as_str));
            }
        }
        candidates
    }
}

impl IndexBuilder for FrequencyMapIndex {
    fn insert(&mut self, word: &str) {
        self.buckets
            .entry(word.sorted_key())
            .or_default()
            .push(word.to_string());
        self.size += 1;
    }
}
