//! Rhyme extraction — the vowel set and the trailing-run scan.
//!
//! A word's rhyme string is the run of phonemes from its last vowel through
//! the end of the pronunciation, concatenated without a separator:
//!
//! ```text
//! K AE1 T      ──► AE1T
//! S T R        ──► ""        (no vowel)
//! ```
//!
//! Extraction borrows the sequence, so the caller's pronunciation is never
//! disturbed and the same sequence can be scanned any number of times.

use crate::types::{Phoneme, PhonemeSequence, SymbolEntry};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// VowelSet
// ---------------------------------------------------------------------------

/// Phoneme symbols classified as vowels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VowelSet {
    symbols: HashSet<Phoneme>,
}

impl VowelSet {
    /// Keep only the symbols whose classification is `"vowel"`.
    pub fn from_symbols<'a>(symbols: impl IntoIterator<Item = &'a SymbolEntry>) -> Self {
        symbols
            .into_iter()
            .filter(|entry| entry.is_vowel())
            .map(|entry| entry.symbol.clone())
            .collect()
    }

    pub fn contains(&self, phoneme: &str) -> bool {
        self.symbols.contains(phoneme)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<S: Into<Phoneme>> FromIterator<S> for VowelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

impl PhonemeSequence {
    /// The trailing phonemes starting at the last vowel, or `None` when the
    /// sequence holds no vowel at all.
    pub fn rhyme_tail(&self, vowels: &VowelSet) -> Option<&[Phoneme]> {
        let phonemes = self.as_slice();
        phonemes
            .iter()
            .rposition(|phoneme| vowels.contains(phoneme))
            .map(|start| &phonemes[start..])
    }

    /// Concatenated [`rhyme_tail`](Self::rhyme_tail); empty when there is no
    /// vowel or the sequence itself is empty.
    pub fn rhyme_string(&self, vowels: &VowelSet) -> String {
        self.rhyme_tail(vowels)
            .map(|tail| tail.concat())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
