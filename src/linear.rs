use serde::{Deserialize, Serialize};

use crate::index::{AnagramIndex, IndexBuilder};
use crate::multiset::*;
use crate::types::*;

///No precomputation at all: the dictionary is stored verbatim and every
///query compares against every word, O(D·L) per query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearScanIndex {
    words: Vec<String>,
}

impl LinearScanIndex {
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl AnagramIndex for LinearScanIndex {
    fn strategy(&self) -> Strategy {
        Strategy::LinearScan
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn key_count(&self) -> usize {
        self.words.len()
    }

    fn collect<'a>(&'a self, query: &str) -> Candidates<'a> {
        let focus = query.frequencies();
        let mut candidates = Candidates::default();
        for word in self.words.iter() {
            let length = word.chars().count();
            //words longer than the query can never match
            if length > focus.len() {
                continue;
            }
            let freq = word.frequencies();
            if length == focus.len() {
                //equal length: an anagram or nothing
                if freq == focus {
                    candidates.anagrams.push(word);
                }
            } else if is_subset(&freq, &focus) {
                candidates.sub_anagrams.push(word);
            }
        }
        candidates
    }
}

impl IndexBuilder for LinearScanIndex {
    fn insert(&mut self, word: &str) {
        self.words.push(word.to_string());
    }
}
