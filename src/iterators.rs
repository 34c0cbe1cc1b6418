///////////////////////////////////////////////////////////////////////////////////////

/// Returns the characters of every non-empty index-subset of a word, that
/// is 2^n - 1 results for a word of n characters. Subsets are selected by
/// position, so a word with repeated letters yields duplicate subsets;
/// callers deduplicate if they need to.
///
/// The selection is kept as a binary counter over positions rather than
/// an integer mask, so there is no upper bound on the word length (other
/// than patience, as the number of results doubles with each character).
///
/// If the input characters are sorted, every yielded subset is sorted too.
///
/// So given the characters abc it will yield
/// a, b, ab, c, ac, bc, abc
pub struct SubsetIterator {
    chars: Vec<char>,
    selected: Vec<bool>,
    done: bool,
}

impl SubsetIterator {
    pub fn new(chars: Vec<char>) -> SubsetIterator {
        let n = chars.len();
        SubsetIterator {
            chars,
            selected: vec![false; n],
            done: n == 0,
        }
    }

    /// Advances the counter; returns false once it wraps around to all-unselected
    fn increment(&mut self) -> bool {
        for bit in self.selected.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

impl Iterator for SubsetIterator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.increment() {
            self.done = true;
            return None;
        }
        Some(
            self.chars
                .iter()
                .zip(self.selected.iter())
                .filter_map(|(c, selected)| if *selected { Some(*c) } else { None })
                .collect(),
        )
    }
}
