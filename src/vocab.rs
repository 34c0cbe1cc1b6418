use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AnagramError, Result};
use crate::types::Strategy;

///Read a word list from file. Words are separated by any whitespace
///(usually one per line), are lowercased, and keep their order; duplicates
///are retained.
pub fn read_wordlist<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
    let filename = filename.as_ref();
    log::debug!("Reading word list from {}...", filename.display());
    let load_error = |source| AnagramError::DictionaryLoad {
        path: filename.to_path_buf(),
        source,
    };
    let f = File::open(filename).map_err(load_error)?;
    let f_buffer = BufReader::new(f);
    let mut words = Vec::new();
    for line in f_buffer.lines() {
        let line = line.map_err(load_error)?;
        words.extend(line.split_whitespace().map(|word| word.to_lowercase()));
    }
    log::debug!(" - Read word list of size {}", words.len());
    Ok(words)
}

///Same as [`read_wordlist`], but from a string already in memory
pub fn parse_wordlist(contents: &str) -> Vec<String> {
    contents
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

///Sanitize a raw query word: drops every non-alphabetic character and lowercases the rest.
///
/// # Examples
///
/// ```
/// # use subanagram::*;
/// assert_eq!(sanitize("Don't!").unwrap(), "dont");
/// assert!(sanitize("1234").is_err());
/// ```
pub fn sanitize(raw: &str) -> Result<String> {
    let word: String = raw
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if word.is_empty() {
        Err(AnagramError::invalid_input(format!(
            "'{}' must contain at least one alphabetic character",
            raw
        )))
    } else {
        Ok(word)
    }
}

///Rejects queries too long for the sorted strategy, whose sub-anagram search
///enumerates every subset of the query. Other strategies and a `max_length` of 0
///accept any length.
pub fn check_query_length(strategy: Strategy, word: &str, max_length: usize) -> Result<()> {
    let length = word.chars().count();
    if strategy == Strategy::SortedKey && max_length > 0 && length > max_length {
        Err(AnagramError::invalid_input(format!(
            "too long for the {} strategy ({} > {}), raise --max-length or use another strategy",
            strategy, length, max_length
        )))
    } else {
        Ok(())
    }
}
