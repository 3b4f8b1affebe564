//! Wordlist filter — the "known meaningful" words, stored in an FST set.
//!
//! The source is one word per line; anything after the first tab (frequency
//! counts, part-of-speech tags) is ignored. Words are lowercased before they
//! go into the set, so membership tests ignore case.

use crate::error::Result;
use fst::Set;
use std::collections::BTreeSet;
use std::fmt;

pub struct Wordlist {
    words: Set<Vec<u8>>,
}

impl Wordlist {
    /// Parse the wordlist source. Only the first tab-delimited field counts.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(
            text.lines()
                .filter_map(|line| line.split('\t').next())
                .map(str::trim),
        )
    }

    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Result<Self> {
        // FST construction needs sorted, de-duplicated keys.
        let sorted: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Ok(Self { words: Set::from_iter(sorted)? })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist").field("len", &self.words.len()).finish()
    }
}
