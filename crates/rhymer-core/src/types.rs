//! Core types for rhymer-core.
//!
//! This module defines the records shared by every layer: the
//! [`PhonemeSequence`] that stores a pronunciation, and the three row types
//! read from or derived from the text sources ([`DictionaryEntry`],
//! [`SymbolEntry`], [`RhymeEntry`]).

use std::fmt;

/// An opaque pronunciation symbol such as `"AA1"` or `"T"`.
///
/// Phonemes are only ever compared for equality; stress digits and letter
/// case carry no meaning beyond that.
pub type Phoneme = String;

/// The classification value that marks a symbol as a vowel.
pub const VOWEL_CLASSIFICATION: &str = "vowel";

// ---------------------------------------------------------------------------
// PhonemeSequence
// ---------------------------------------------------------------------------

/// Ordered phonemes of one pronunciation. Front is the start of the word,
/// back is the end.
///
/// The sequence behaves like a stack at its end (`push` / `pop` / `peek`),
/// which is all the dictionary builder needs. Rhyme extraction borrows it
/// immutably, see [`PhonemeSequence::rhyme_string`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhonemeSequence {
    phonemes: Vec<Phoneme>,
}

impl PhonemeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a whitespace-separated phoneme list, e.g. `"K AE1 T"`.
    /// An empty or blank string yields an empty sequence.
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Append a phoneme at the end of the word.
    pub fn push(&mut self, phoneme: impl Into<Phoneme>) {
        self.phonemes.push(phoneme.into());
    }

    /// Remove and return the last phoneme.
    pub fn pop(&mut self) -> Option<Phoneme> {
        self.phonemes.pop()
    }

    /// The last phoneme, if any.
    pub fn peek(&self) -> Option<&str> {
        self.phonemes.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    pub fn as_slice(&self) -> &[Phoneme] {
        &self.phonemes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phoneme> {
        self.phonemes.iter()
    }
}

impl<S: Into<Phoneme>> FromIterator<S> for PhonemeSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            phonemes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Phoneme>> for PhonemeSequence {
    fn from(phonemes: Vec<Phoneme>) -> Self {
        Self { phonemes }
    }
}

impl<'a> IntoIterator for &'a PhonemeSequence {
    type Item = &'a Phoneme;
    type IntoIter = std::slice::Iter<'a, Phoneme>;

    fn into_iter(self) -> Self::IntoIter {
        self.phonemes.iter()
    }
}

impl fmt::Display for PhonemeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phonemes.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Source rows
// ---------------------------------------------------------------------------

/// One line of the pronunciation source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Headword exactly as read. Case is kept; lookups lowercase it.
    pub headword: String,
    pub phonemes: PhonemeSequence,
}

/// One line of the symbol classification source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: Phoneme,
    /// Free-form classification, e.g. `"vowel"`, `"stop"`, `"fricative"`.
    pub classification: String,
}

impl SymbolEntry {
    pub fn is_vowel(&self) -> bool {
        self.classification == VOWEL_CLASSIFICATION
    }
}

/// Derived search row, one per [`DictionaryEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeEntry {
    pub headword: String,
    /// Concatenated tail from the last vowel onward; empty when the
    /// pronunciation has no vowel.
    pub rhyme: String,
    /// Total length of the headword's pronunciation, whether or not a rhyme
    /// was found.
    pub phoneme_count: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stack_operations_work_at_the_end() {
        let mut seq = PhonemeSequence::parse("K AE1");
        seq.push("T");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.peek(), Some("T"));
        assert_eq!(seq.pop().as_deref(), Some("T"));
        assert_eq!(seq.peek(), Some("AE1"));
        assert_eq!(seq.to_string(), "K AE1");
    }

    #[test]
    fn parse_blank_is_empty() {
        let seq = PhonemeSequence::parse("   ");
        assert!(seq.is_empty());
        assert_eq!(seq.peek(), None);
    }

    #[test]
    fn symbol_classification() {
        let vowel = SymbolEntry {
            symbol: "AA".into(),
            classification: "vowel".into(),
        };
        let stop = SymbolEntry {
            symbol: "B".into(),
            classification: "stop".into(),
        };
        assert!(vowel.is_vowel());
        assert!(!stop.is_vowel());
    }
}
