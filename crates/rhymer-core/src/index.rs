//! Rhyme index — one [`RhymeEntry`] per dictionary definition, keyed on
//! `(rhyme string, phoneme count)`.
//!
//! Entries stay in dictionary order so that every lookup yields headwords in
//! the order they were defined. Entries whose pronunciation has no vowel keep
//! their row (and its phoneme count) but are left out of the lookup map, so
//! an empty rhyme string never matches anything.

use crate::dictionary::PronunciationIndex;
use crate::rhyme::VowelSet;
use crate::types::RhymeEntry;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RhymeIndex {
    entries: Vec<RhymeEntry>,
    /// rhyme string -> phoneme count -> positions in `entries`, ascending.
    by_key: HashMap<String, HashMap<usize, Vec<usize>>>,
}

impl RhymeIndex {
    /// Derive one row per definition in `dictionary`.
    pub fn build(dictionary: &PronunciationIndex, vowels: &VowelSet) -> Self {
        let mut index = Self::default();
        for entry in dictionary.entries() {
            let rhyme = if entry.phonemes.is_empty() {
                String::new()
            } else {
                entry.phonemes.rhyme_string(vowels)
            };
            index.push(RhymeEntry {
                headword: entry.headword.clone(),
                rhyme,
                phoneme_count: entry.phonemes.len(),
            });
        }
        tracing::debug!(
            entries = index.entries.len(),
            rhymes = index.by_key.len(),
            "rhyme index built"
        );
        index
    }

    fn push(&mut self, entry: RhymeEntry) {
        let position = self.entries.len();
        if !entry.rhyme.is_empty() {
            self.by_key
                .entry(entry.rhyme.clone())
                .or_default()
                .entry(entry.phoneme_count)
                .or_default()
                .push(position);
        }
        self.entries.push(entry);
    }

    /// Rows whose rhyme string and phoneme count both equal the query.
    pub fn lookup<'a>(
        &'a self,
        rhyme: &str,
        phoneme_count: usize,
    ) -> impl Iterator<Item = &'a RhymeEntry> + 'a {
        self.by_key
            .get(rhyme)
            .and_then(|counts| counts.get(&phoneme_count))
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&position| &self.entries[position])
    }

    /// All rows in dictionary order, including unmatchable ones.
    pub fn entries(&self) -> &[RhymeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> RhymeIndex {
        let dictionary = PronunciationIndex::parse(
            "CAT\tK AE1 T\nBAT\tB AE1 T\nSCAT\tS K AE1 T\nHAT\tHH AE1 T\nPSST\tP S S T\nHMM\t\n",
        )
        .unwrap();
        let vowels: VowelSet = ["AE1"].into_iter().collect();
        RhymeIndex::build(&dictionary, &vowels)
    }

    #[test]
    fn one_row_per_definition_with_full_count() {
        let index = sample();
        assert_eq!(index.len(), 6);
        let psst = &index.entries()[4];
        assert_eq!(psst.rhyme, "");
        assert_eq!(psst.phoneme_count, 4);
        assert_eq!(index.entries()[5].phoneme_count, 0);
    }

    #[test]
    fn lookup_matches_both_keys_in_definition_order() {
        let index = sample();
        let hits: Vec<_> = index.lookup("AE1T", 3).map(|e| e.headword.as_str()).collect();
        assert_eq!(hits, vec!["CAT", "BAT", "HAT"]);
        let longer: Vec<_> = index.lookup("AE1T", 4).map(|e| e.headword.as_str()).collect();
        assert_eq!(longer, vec!["SCAT"]);
        assert_eq!(index.lookup("AE1T", 5).count(), 0);
    }

    #[test]
    fn empty_rhyme_never_matches() {
        let index = sample();
        assert_eq!(index.lookup("", 4).count(), 0);
        assert_eq!(index.lookup("", 0).count(), 0);
    }
}
