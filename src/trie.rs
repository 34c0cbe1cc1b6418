use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::index::{AnagramIndex, IndexBuilder};
use crate::multiset::*;
use crate::types::*;

///A node in the frequency trie. Edges are labelled by (letter,count) pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrieNode {
    children: HashMap<(char, CountType), TrieNode>,

    ///Does any dictionary word terminate here?
    is_end_of_word: bool,

    ///All dictionary words terminating here, these share one letter multiset
    words: Vec<String>,
}

impl TrieNode {
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, letter: char, count: CountType) -> Option<&TrieNode> {
        self.children.get(&(letter, count))
    }

    ///Counts the nodes at which at least one word terminates
    fn terminal_count(&self) -> usize {
        let own = if self.is_end_of_word { 1 } else { 0 };
        own + self.children.values().map(|child| child.terminal_count()).sum::<usize>()
    }
}

///Trie keyed by the sorted (letter,count) pairs of each word.
///
///Every insertion path follows the canonical key of the word, so anagrams
///always end at the same node, and any word whose multiset is contained in
///that of another shares the path prefix up to the point of divergence.
///
///Lookup is a single depth-first traversal that only descends along edges
///the query still has enough letters for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyTrie {
    root: TrieNode,
    size: usize,
}

impl FrequencyTrie {
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    ///Returns the node reached by following the canonical key, if any
    pub fn get(&self, key: &[(char, CountType)]) -> Option<&TrieNode> {
        key.iter()
            .try_fold(&self.root, |node, (letter, count)| node.get(*letter, *count))
    }

    fn search<'a>(
        node: &'a TrieNode,
        remaining: &mut LetterMultiset,
        consumed: usize,
        query_length: usize,
        candidates: &mut Candidates<'a>,
    ) {
        if node.is_end_of_word {
            //the path length in letters tells anagrams from sub-anagrams
            let found = node.words.iter().map(String::as_str);
            if consumed == query_length {
                candidates.anagrams.extend(found);
            } else {
                candidates.sub_anagrams.extend(found);
            }
        }
        for ((letter, count), child) in node.children.iter() {
            if remaining.take(*letter, *count) {
                Self::search(
                    child,
                    remaining,
                    consumed + *count,
                    query_length,
                    candidates,
                );
                //backtrack
                remaining.restore(*letter, *count);
            }
        }
    }
}

impl AnagramIndex for FrequencyTrie {
    fn strategy(&self) -> Strategy {
        Strategy::FrequencyTrie
    }

    fn len(&self) -> usize {
        self.size
    }

    fn key_count(&self) -> usize {
        self.root.terminal_count()
    }

    fn collect<'a>(&'a self, query: &str) -> Candidates<'a> {
        //scratch state for the traversal, owned by this call only
        let mut remaining = query.frequencies();
        let query_length = remaining.len();
        let mut candidates = Candidates::default();
        Self::search(&self.root, &mut remaining, 0, query_length, &mut candidates);
        candidates
    }
}

impl IndexBuilder for FrequencyTrie {
    fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;
        for edge in word.sorted_key() {
            current = current.children.entry(edge).or_default();
        }
        current.is_end_of_word = true;
        current.words.push(word.to_string());
        self.size += 1;
    }
}
