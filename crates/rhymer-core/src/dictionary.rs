//! Dictionary construction — pronunciation and symbol sources.
//!
//! Both sources are tab-separated, one record per line:
//!
//! ```text
//! CAT<TAB>K AE1 T          pronunciation source
//! AE1<TAB>vowel            symbol classification source
//! ```
//!
//! Blank lines are skipped, a trailing `\r` is stripped, and a line without a
//! tab or with an empty key is rejected with its 1-based line number.

use crate::error::{LexiconError, Result};
use crate::types::{DictionaryEntry, PhonemeSequence, SymbolEntry};
use std::collections::HashMap;

pub(crate) const PRONUNCIATION_SOURCE: &str = "pronunciations";
pub(crate) const SYMBOL_SOURCE: &str = "symbols";

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Non-blank lines of `text` as `(line_number, key, value)`.
pub(crate) fn tab_records<'a>(
    text: &'a str,
    source_name: &'static str,
) -> impl Iterator<Item = Result<(usize, &'a str, &'a str)>> + 'a {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(move |(line_no, line)| {
            let (key, value) = line.split_once('\t').ok_or(LexiconError::MissingTab {
                source_name,
                line: line_no,
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(LexiconError::EmptyKey { source_name, line: line_no });
            }
            Ok((line_no, key, value))
        })
}

// ---------------------------------------------------------------------------
// PronunciationIndex
// ---------------------------------------------------------------------------

/// Headwords and their pronunciations in source order.
///
/// Lookup is case-insensitive. When a headword is defined more than once
/// (e.g. `READ` and `read`), the first definition answers lookups; every
/// definition still contributes its own row to the rhyme index.
#[derive(Debug, Clone, Default)]
pub struct PronunciationIndex {
    entries: Vec<DictionaryEntry>,
    by_headword: HashMap<String, usize>,
}

impl PronunciationIndex {
    /// Parse the pronunciation source text.
    pub fn parse(text: &str) -> Result<Self> {
        let entries = tab_records(text, PRONUNCIATION_SOURCE)
            .map(|record| {
                let (_, headword, phonemes) = record?;
                Ok(DictionaryEntry {
                    headword: headword.to_string(),
                    phonemes: PhonemeSequence::parse(phonemes),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        let position = self.entries.len();
        self.by_headword
            .entry(entry.headword.to_lowercase())
            .or_insert(position);
        self.entries.push(entry);
    }

    /// Look up a headword, ignoring case.
    pub fn entry(&self, word: &str) -> Option<&DictionaryEntry> {
        self.by_headword
            .get(&word.to_lowercase())
            .map(|&position| &self.entries[position])
    }

    /// Pronunciation of a headword, ignoring case.
    pub fn phonemes(&self, word: &str) -> Option<&PhonemeSequence> {
        self.entry(word).map(|entry| &entry.phonemes)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_headword.contains_key(&word.to_lowercase())
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Symbol table
// ---------------------------------------------------------------------------

/// Parse the symbol classification source into the raw symbol table.
pub fn parse_symbols(text: &str) -> Result<Vec<SymbolEntry>> {
    tab_records(text, SYMBOL_SOURCE)
        .map(|record| {
            let (_, symbol, classification) = record?;
            Ok(SymbolEntry {
                symbol: symbol.to_string(),
                classification: classification.trim().to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
