//! rhymer-core — rhyme finder core library.
//!
//! This crate holds everything between raw source text and search results:
//! the shared types, the dictionary and wordlist parsers, rhyme extraction,
//! the rhyme index and the broadening search engine.
//!
//! # Architecture
//!
//! ```text
//! pronunciations ──► PronunciationIndex ─┐
//! symbols ─────────► VowelSet ───────────┼──► RhymeIndex ─┐
//! wordlist ────────► Wordlist ───────────┴────────────────┴──► SearchEngine
//! ```
//!
//! Everything left of the engine is built once by [`Lexicon`] and never
//! mutated afterwards. Each query gets its own [`SearchState`].

pub mod config;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod lexicon;
pub mod rhyme;
pub mod search;
pub mod types;
pub mod wordlist;

pub use error::{LexiconError, LookupError};
pub use lexicon::{Lexicon, SourceTexts};
pub use rhyme::VowelSet;
pub use search::{BroadeningPolicy, Broadening, SearchEngine, SearchEvent, SearchState};
pub use types::{DictionaryEntry, Phoneme, PhonemeSequence, RhymeEntry, SymbolEntry};
