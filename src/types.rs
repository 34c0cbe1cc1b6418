use serde::{Deserialize, Serialize};
use simple_error::SimpleError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

///The number of times a single letter occurs in a word, as wide as the word length itself
pub type CountType = usize;

///Canonical frequency key: (letter,count) pairs sorted by letter
pub type FreqKey = Vec<(char, CountType)>;

///Canonical sorted-character key, each letter repeated per its count ("banana" -> "aaabnn")
pub type SortedChars = String;

///The available indexing strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// No precomputation, scans the full dictionary per query
    LinearScan,
    /// Hash index on sorted characters, enumerates query subsets for sub-anagrams
    SortedKey,
    /// Hash index on (letter,count) keys, scans all keys for sub-anagrams
    FrequencyMap,
    /// Trie on (letter,count) edges, single guided traversal
    FrequencyTrie,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::LinearScan,
        Strategy::SortedKey,
        Strategy::FrequencyMap,
        Strategy::FrequencyTrie,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::LinearScan => "linear",
            Self::SortedKey => "sorted",
            Self::FrequencyMap => "frequency",
            Self::FrequencyTrie => "trie",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SimpleError;

    ///Accepts the short names as well as the long method names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "brute_force" => Ok(Self::LinearScan),
            "sorted" | "hashmap_sorted" => Ok(Self::SortedKey),
            "frequency" | "hashmap_frequency" => Ok(Self::FrequencyMap),
            "trie" | "trie_frequency" => Ok(Self::FrequencyTrie),
            _ => Err(SimpleError::new(format!(
                "unknown strategy '{}', expected one of: linear, sorted, frequency, trie",
                s
            ))),
        }
    }
}

///Raw lookup output of an index, borrowing from the dictionary words it holds.
///Duplicate dictionary entries appear once per entry.
#[derive(Debug, Default)]
pub struct Candidates<'a> {
    pub anagrams: Vec<&'a str>,
    pub sub_anagrams: Vec<&'a str>,
}

///The final answer for a single query word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    pub anagrams: BTreeSet<String>,
    pub sub_anagrams: BTreeSet<String>,
}

impl Matches {
    pub fn is_empty(&self) -> bool {
        self.anagrams.is_empty() && self.sub_anagrams.is_empty()
    }

    ///The JSON record for one query, as the command line tool writes it
    pub fn to_json(&self, input: &str) -> serde_json::Value {
        serde_json::json!({
            "input": input,
            "anagrams": self.anagrams,
            "sub_anagrams": self.sub_anagrams,
        })
    }
}
