//! Test builders — ergonomic constructors for lexicon fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use rhymer_core::dictionary::PronunciationIndex;
use rhymer_core::wordlist::Wordlist;
use rhymer_core::{DictionaryEntry, Lexicon, PhonemeSequence, SymbolEntry};

// ---------------------------------------------------------------------------
// LexiconBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Lexicon`] fixtures.
///
/// # Example
///
/// ```rust
/// let lexicon = LexiconBuilder::new()
///     .vowels(["AE1"])
///     .word("CAT", "K AE1 T")
///     .word("BAT", "B AE1 T")
///     .unlisted("VAT", "V AE1 T")
///     .build();
/// ```
#[derive(Default)]
pub struct LexiconBuilder {
    entries: Vec<DictionaryEntry>,
    symbols: Vec<SymbolEntry>,
    wordlist: Vec<String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vowels<'a>(mut self, vowels: impl IntoIterator<Item = &'a str>) -> Self {
        self.symbols.extend(vowels.into_iter().map(|symbol| SymbolEntry {
            symbol: symbol.to_string(),
            classification: "vowel".to_string(),
        }));
        self
    }

    /// Dictionary entry that is also on the wordlist.
    pub fn word(self, headword: &str, phonemes: &str) -> Self {
        let listed = headword.to_lowercase();
        let mut this = self.unlisted(headword, phonemes);
        this.wordlist.push(listed);
        this
    }

    /// Dictionary entry that is absent from the wordlist.
    pub fn unlisted(mut self, headword: &str, phonemes: &str) -> Self {
        self.entries.push(DictionaryEntry {
            headword: headword.to_string(),
            phonemes: PhonemeSequence::parse(phonemes),
        });
        self
    }

    pub fn build(self) -> Lexicon {
        Lexicon::new(
            PronunciationIndex::from_entries(self.entries),
            self.symbols,
            Wordlist::from_words(self.wordlist).expect("wordlist fixture must build"),
        )
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// `n` one-syllable words `W0 AE1 T`, `W1 AE1 T`, … all sharing the rhyme
/// `AE1T` at three phonemes, all on the wordlist.
pub fn rhyming_family(n: usize) -> Lexicon {
    (0..n)
        .fold(LexiconBuilder::new().vowels(["AE1"]), |builder, i| {
            builder.word(&format!("w{i}"), &format!("W{i} AE1 T"))
        })
        .build()
}

pub fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
