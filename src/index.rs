use crate::error::{AnagramError, Result};
use crate::types::*;

///Common lookup interface of all dictionary indexes.
///
///An index is built once from the dictionary and is read-only afterwards:
///`collect()` takes `&self` and keeps all of its scratch state on the stack,
///so a single index can serve lookups from many threads at once.
pub trait AnagramIndex {
    fn strategy(&self) -> Strategy;

    ///Number of dictionary entries inserted (duplicates included)
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///Number of distinct keys the index is organised by
    fn key_count(&self) -> usize;

    ///Gathers the raw anagram and sub-anagram candidates of a query.
    ///The query must already be lowercased and validated, the facade
    ///([`crate::Solver`]) takes care of that and of the self-match policy.
    fn collect<'a>(&'a self, query: &str) -> Candidates<'a>;
}

///Indexes that are constructed by inserting dictionary words one by one
pub trait IndexBuilder: AnagramIndex + Default {
    ///Adds a single dictionary word
    fn insert(&mut self, word: &str);

    ///Builds an index from the dictionary words, in order.
    ///Empty strings carry no letters and are skipped.
    fn build<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for word in words {
            let word = word.as_ref();
            if !word.is_empty() {
                index.insert(word);
            }
        }
        if index.is_empty() {
            return Err(AnagramError::EmptyDictionary);
        }
        log::info!(
            "Built {} index: {} words, {} keys",
            index.strategy(),
            index.len(),
            index.key_count()
        );
        Ok(index)
    }
}
