extern crate bincode;
extern crate rayon;
extern crate serde;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

pub mod types;
pub mod error;
pub mod multiset;
pub mod iterators;
pub mod index;
pub mod linear;
pub mod sortedkey;
pub mod freqmap;
pub mod trie;
pub mod vocab;
pub mod cache;
pub mod test;


pub use crate::types::*;
pub use crate::error::*;
pub use crate::multiset::*;
pub use crate::iterators::*;
pub use crate::index::*;
pub use crate::linear::*;
pub use crate::sortedkey::*;
pub use crate::freqmap::*;
pub use crate::trie::*;
pub use crate::vocab::*;
pub use crate::cache::*;


///Any of the four indexes, selected at runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyIndex {
    LinearScan(LinearScanIndex),
    SortedKey(SortedKeyIndex),
    FrequencyMap(FrequencyMapIndex),
    FrequencyTrie(FrequencyTrie),
}

impl AnyIndex {
    ///Builds the index for the given strategy from the dictionary words
    pub fn build<I, S>(strategy: Strategy, words: I) -> Result<AnyIndex>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(match strategy {
            Strategy::LinearScan => AnyIndex::LinearScan(LinearScanIndex::build(words)?),
            Strategy::SortedKey => AnyIndex::SortedKey(SortedKeyIndex::build(words)?),
            Strategy::FrequencyMap => AnyIndex::FrequencyMap(FrequencyMapIndex::build(words)?),
            Strategy::FrequencyTrie => AnyIndex::FrequencyTrie(FrequencyTrie::build(words)?),
        })
    }

    ///Takes the index from the cache if one was stored for this strategy and
    ///this exact dictionary, otherwise builds it and stores it for the next run
    pub fn build_cached<S: AsRef<str>>(strategy: Strategy, words: &[S], cache: &IndexCache) -> Result<AnyIndex> {
        let key = CacheKey::new(strategy, words);
        if cache.has(&key) {
            cache.load(&key)
        } else {
            let index = AnyIndex::build(strategy, words)?;
            cache.save(&index, &key)?;
            Ok(index)
        }
    }

    fn inner(&self) -> &dyn AnagramIndex {
        match self {
            AnyIndex::LinearScan(index) => index,
            AnyIndex::SortedKey(index) => index,
            AnyIndex::FrequencyMap(index) => index,
            AnyIndex::FrequencyTrie(index) => index,
        }
    }
}

impl AnagramIndex for AnyIndex {
    fn strategy(&self) -> Strategy {
        self.inner().strategy()
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn key_count(&self) -> usize {
        self.inner().key_count()
    }

    fn collect<'a>(&'a self, query: &str) -> Candidates<'a> {
        self.inner().collect(query)
    }
}


///Uniform front-end over any index: validates the query, delegates
///the lookup, and applies the self-match policy.
///
///The solver only holds a shared reference to the index, several solvers
///(or threads) may query the same index.
pub struct Solver<I: AnagramIndex> {
    index: Arc<I>,
}

impl<I: AnagramIndex> Clone for Solver<I> {
    fn clone(&self) -> Self {
        Solver { index: Arc::clone(&self.index) }
    }
}

impl<I: AnagramIndex> Solver<I> {
    pub fn new(index: I) -> Solver<I> {
        Solver { index: Arc::new(index) }
    }

    pub fn shared(index: Arc<I>) -> Solver<I> {
        Solver { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    ///Find all anagrams and sub-anagrams of a word in the dictionary.
    ///
    ///The word itself is only reported as its own anagram if the dictionary
    ///holds it more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use subanagram::*;
    /// let index = FrequencyTrie::build(["cat", "act", "tac", "ca", "at", "dog"]).unwrap();
    /// let matches = Solver::new(index).find("cat").unwrap();
    /// assert_eq!(matches.anagrams.into_iter().collect::<Vec<_>>(), vec!["act", "tac"]);
    /// assert_eq!(matches.sub_anagrams.into_iter().collect::<Vec<_>>(), vec!["at", "ca"]);
    /// ```
    pub fn find(&self, word: &str) -> Result<Matches> {
        let query = word.to_lowercase();
        if query.is_empty() {
            return Err(AnagramError::EmptyQuery);
        }
        if let Some(c) = query.chars().find(|c| !c.is_alphabetic()) {
            return Err(AnagramError::invalid_input(format!(
                "'{}' contains the non-alphabetic character {:?}",
                word, c
            )));
        }
        log::debug!("(looking up '{}' in the {} index)", query, self.index.strategy());

        let candidates = self.index.collect(&query);
        let self_matches = candidates.anagrams.iter().filter(|w| **w == query).count();
        let mut anagrams: BTreeSet<String> = candidates.anagrams.into_iter().map(str::to_string).collect();
        if self_matches < 2 {
            anagrams.remove(&query);
        }
        let mut sub_anagrams: BTreeSet<String> = candidates.sub_anagrams.into_iter().map(str::to_string).collect();
        sub_anagrams.remove(&query);

        log::debug!(" (found {} anagrams, {} sub-anagrams)", anagrams.len(), sub_anagrams.len());
        Ok(Matches { anagrams, sub_anagrams })
    }
}

impl<I: AnagramIndex + Send + Sync> Solver<I> {
    ///Queries several words against the same index in parallel.
    ///Results are in the order of the input.
    pub fn find_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<Result<Matches>> {
        words.par_iter().map(|word| self.find(word.as_ref())).collect()
    }
}
