//! Lexicon — the prepared, read-only bundle every query runs against.
//!
//! Build order follows the data dependencies: pronunciations, then vowels,
//! then the rhyme index derived from both, then the wordlist filter. Once
//! built, nothing in the bundle changes.

use crate::dictionary::{parse_symbols, PronunciationIndex};
use crate::error::{LookupError, Result};
use crate::index::RhymeIndex;
use crate::rhyme::VowelSet;
use crate::search::{BroadeningPolicy, SearchEngine, SearchState};
use crate::types::SymbolEntry;
use crate::wordlist::Wordlist;

/// Raw text of the three sources.
#[derive(Debug, Clone, Default)]
pub struct SourceTexts {
    pub pronunciations: String,
    pub symbols: String,
    pub wordlist: String,
}

#[derive(Debug)]
pub struct Lexicon {
    pronunciations: PronunciationIndex,
    symbols: Vec<SymbolEntry>,
    vowels: VowelSet,
    rhymes: RhymeIndex,
    wordlist: Wordlist,
}

impl Lexicon {
    /// Parse and index all three sources.
    pub fn from_texts(texts: &SourceTexts) -> Result<Self> {
        let pronunciations = PronunciationIndex::parse(&texts.pronunciations)?;
        let symbols = parse_symbols(&texts.symbols)?;
        let wordlist = Wordlist::parse(&texts.wordlist)?;
        Ok(Self::new(pronunciations, symbols, wordlist))
    }

    pub fn new(
        pronunciations: PronunciationIndex,
        symbols: Vec<SymbolEntry>,
        wordlist: Wordlist,
    ) -> Self {
        let vowels = VowelSet::from_symbols(&symbols);
        let rhymes = RhymeIndex::build(&pronunciations, &vowels);
        tracing::debug!(
            headwords = pronunciations.len(),
            symbols = symbols.len(),
            vowels = vowels.len(),
            wordlist = wordlist.len(),
            "lexicon ready"
        );
        Self {
            pronunciations,
            symbols,
            vowels,
            rhymes,
            wordlist,
        }
    }

    /// Resolve a query word into fresh search parameters.
    pub fn query(&self, word: &str) -> std::result::Result<SearchState, LookupError> {
        let word = word.trim().to_lowercase();
        let phonemes = self
            .pronunciations
            .phonemes(&word)
            .ok_or_else(|| LookupError::UnknownWord(word.clone()))?;
        let rhyme = phonemes.rhyme_string(&self.vowels);
        Ok(SearchState::new(word, rhyme, phonemes.len()))
    }

    pub fn engine(&self, policy: BroadeningPolicy) -> SearchEngine<'_> {
        SearchEngine::new(&self.rhymes, &self.wordlist, policy)
    }

    pub fn pronunciations(&self) -> &PronunciationIndex {
        &self.pronunciations
    }

    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    pub fn vowels(&self) -> &VowelSet {
        &self.vowels
    }

    pub fn rhymes(&self) -> &RhymeIndex {
        &self.rhymes
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }
}
