use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::index::{AnagramIndex, IndexBuilder};
use crate::iterators::SubsetIterator;
use crate::multiset::*;
use crate::types::*;

///Maps the sorted characters of a word ("banana" -> "aaabnn") to all
///dictionary words sharing them, in insertion order.
///
///Anagram lookup is a single key lookup. Sub-anagram lookup enumerates every
///index-subset of the query, which is exponential in the query length;
///this strategy is meant for short queries (see [`crate::FrequencyMapIndex`]
///for longer ones).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortedKeyIndex {
    buckets: HashMap<SortedChars, Vec<String>>,
    size: usize,
}

impl SortedKeyIndex {
    ///All words filed under the given sorted-character key
    pub fn get(&self, key: &str) -> Option<&Vec<String>> {
        self.buckets.get(key)
    }
}

impl AnagramIndex for SortedKeyIndex {
    fn strategy(&self) -> Strategy {
        Strategy::SortedKey
    }

    fn len(&self) -> usize {
        self.size
    }

    fn key_count(&self) -> usize {
        self.buckets.len()
    }

    fn collect<'a>(&'a self, query: &str) -> Candidates<'a> {
        let focus = query.sorted_chars();
        let mut candidates = Candidates::default();
        if let Some(bucket) = self.buckets.get(&focus) {
            candidates.anagrams.extend(bucket.iter().map(String::as_str));
        }

        //subsets of the sorted query are sorted themselves, so they are keys already
        let mut visited: HashSet<String> = HashSet::new();
        let mut lookups = 0;
        for subset in SubsetIterator::new(focus.chars().collect()) {
            if subset == focus || visited.contains(&subset) {
                continue;
            }
            lookups += 1;
            if let Some(bucket) = self.buckets.get(&subset) {
                candidates.sub_anagrams.extend(bucket.iter().map(String::as_str));
            }
            visited.insert(subset);
        }
        log::debug!("(looked up {} distinct subset keys for '{}')", lookups, query);
        candidates
    }
}

impl IndexBuilder for SortedKeyIndex {
    fn insert(&mut self, word: &str) {
        self.buckets
            .entry(word.sorted_chars())
            .or_default()
            .push(word.to_string());
        self.size += 1;
    }
}
