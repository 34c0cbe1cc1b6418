use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::types::*;

///The letter composition of a word: a count per distinct letter.
///Letters that are absent have count zero. Iteration is ordered by letter,
///so the canonical key falls out directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterMultiset {
    counts: BTreeMap<char, CountType>,
    length: usize,
}

impl LetterMultiset {
    ///Counts the occurrences of each character in the word
    pub fn new(word: &str) -> Self {
        let mut multiset = LetterMultiset::default();
        for c in word.chars() {
            *multiset.counts.entry(c).or_insert(0) += 1;
            multiset.length += 1;
        }
        multiset
    }

    ///The count for a letter, zero if absent
    pub fn get(&self, c: char) -> CountType {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    ///Total number of letters (not distinct letters)
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    ///Number of distinct letters
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, char, CountType> {
        self.counts.iter()
    }

    ///The sorted (letter,count) sequence, used as hash/compare key
    pub fn sorted_key(&self) -> FreqKey {
        self.counts.iter().map(|(c, n)| (*c, *n)).collect()
    }

    ///The sorted character sequence, letters repeated per their count
    pub fn sorted_chars(&self) -> SortedChars {
        let mut s = String::with_capacity(self.length);
        for (c, n) in self.counts.iter() {
            for _ in 0..*n {
                s.push(*c);
            }
        }
        s
    }

    ///Tests if this multiset contains the other one: every letter
    ///of `other` occurs here at least as often.
    ///
    /// # Examples
    ///
    /// ```
    /// # use subanagram::*;
    /// let query = LetterMultiset::new("banana");
    /// assert!(query.contains(&LetterMultiset::new("nab")));
    /// assert!(!query.contains(&LetterMultiset::new("bib")));
    /// ```
    pub fn contains(&self, other: &LetterMultiset) -> bool {
        other.length <= self.length && other.counts.iter().all(|(c, n)| self.get(*c) >= *n)
    }

    ///Removes `count` occurrences of a letter, returns false (leaving the
    ///multiset untouched) if not enough are available
    pub fn take(&mut self, c: char, count: CountType) -> bool {
        match self.counts.get_mut(&c) {
            Some(available) if *available >= count => {
                *available -= count;
                self.length -= count;
                true
            }
            _ => false,
        }
    }

    ///Gives back letters previously removed with `take()`
    pub fn restore(&mut self, c: char, count: CountType) {
        *self.counts.entry(c).or_insert(0) += count;
        self.length += count;
    }
}

impl From<&str> for LetterMultiset {
    fn from(word: &str) -> Self {
        LetterMultiset::new(word)
    }
}

///Trait for string-like objects whose letter composition can be computed
pub trait LetterCounts {
    fn frequencies(&self) -> LetterMultiset;
    fn sorted_key(&self) -> FreqKey;
    fn sorted_chars(&self) -> SortedChars;
}

impl LetterCounts for str {
    fn frequencies(&self) -> LetterMultiset {
        LetterMultiset::new(self)
    }

    ///Two words are anagrams iff their sorted keys are equal
    ///
    /// # Examples
    ///
    /// ```
    /// # use subanagram::*;
    /// assert_eq!("stressed".sorted_key(), "desserts".sorted_key());
    /// assert_eq!("aab".sorted_key(), vec![('a', 2), ('b', 1)]);
    /// ```
    fn sorted_key(&self) -> FreqKey {
        self.frequencies().sorted_key()
    }

    fn sorted_chars(&self) -> SortedChars {
        let mut chars: Vec<char> = self.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

///Counts occurrences of each character in the word
pub fn frequencies(word: &str) -> LetterMultiset {
    LetterMultiset::new(word)
}

///The sub-anagram predicate: true iff every letter in `candidate` has a count
///no greater than its count in `query` (absent letters count as zero)
pub fn is_subset(candidate: &LetterMultiset, query: &LetterMultiset) -> bool {
    query.contains(candidate)
}

///The same predicate on canonical keys, as stored by the frequency map index
pub fn key_is_subset(candidate: &[(char, CountType)], query: &LetterMultiset) -> bool {
    candidate.iter().all(|(c, n)| query.get(*c) >= *n)
}
