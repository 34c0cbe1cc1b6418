pub const DICTIONARY: &[&str] = &[
    "cat", "act", "tac", "ca", "at", "dog", "god", "a", "b", "ab", "ba", "banana", "nab", "ban",
    "nan", "ana", "bib", "stressed", "desserts", "dessert", "tress", "rests", "set", "test",
    "listen", "silent", "enlist", "tinsel", "inlets", "lint", "sit", "tin", "lie", "noon", "on",
    "no", "moon", "mono",
];

///A small dictionary with anagram groups, repeated letters and some unrelated words
pub fn get_test_dictionary() -> Vec<String> {
    DICTIONARY.iter().map(|w| w.to_string()).collect()
}

///Queries that exercise anagrams, sub-anagrams, repeated letters and misses
pub fn get_test_queries() -> Vec<&'static str> {
    vec![
        "cat", "ab", "banana", "stressed", "listen", "noon", "dog", "zebra", "a", "tinsels",
    ]
}
