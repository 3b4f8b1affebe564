//! rhymer-sources — text source adapters for rhymer.
//!
//! Each adapter yields the full UTF-8 text of one source. [`Sources`] reads
//! the pronunciation, symbol and wordlist sources concurrently and hands the
//! texts to [`Lexicon::from_texts`]; nothing is searched until all three have
//! arrived.

pub mod file;
pub mod inline;

pub use file::FileSource;
pub use inline::InlineSource;

use rhymer_core::config::SourcesConfig;
use rhymer_core::{Lexicon, LexiconError, SourceTexts};
use std::future::Future;
use thiserror::Error;

/// Trait implemented by every text source.
pub trait TextSource: Send + Sync {
    /// Human-readable origin used in error messages (a path, `<inline>`, …).
    fn origin(&self) -> String;

    /// Read the whole source as text.
    fn read(&self) -> impl Future<Output = std::io::Result<String>> + Send;
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {name} source {origin}: {source}")]
    Read {
        name: &'static str,
        origin: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] LexiconError),
}

/// The three sources a [`Lexicon`] is built from.
#[derive(Debug, Clone)]
pub struct Sources<P, S, W> {
    pub pronunciations: P,
    pub symbols: S,
    pub wordlist: W,
}

impl Sources<FileSource, FileSource, FileSource> {
    pub fn from_config(config: &SourcesConfig) -> Self {
        Self {
            pronunciations: FileSource::new(&config.pronunciations),
            symbols: FileSource::new(&config.symbols),
            wordlist: FileSource::new(&config.wordlist),
        }
    }
}

impl<P: TextSource, S: TextSource, W: TextSource> Sources<P, S, W> {
    /// Read all three sources; the first failure wins.
    pub async fn read_all(&self) -> Result<SourceTexts, SourceError> {
        let (pronunciations, symbols, wordlist) = tokio::try_join!(
            read_named("pronunciations", &self.pronunciations),
            read_named("symbols", &self.symbols),
            read_named("wordlist", &self.wordlist),
        )?;
        Ok(SourceTexts {
            pronunciations,
            symbols,
            wordlist,
        })
    }

    /// Read and index all three sources.
    pub async fn load(&self) -> Result<Lexicon, SourceError> {
        let texts = self.read_all().await?;
        let lexicon = Lexicon::from_texts(&texts)?;
        tracing::info!(
            headwords = lexicon.pronunciations().len(),
            wordlist = lexicon.wordlist().len(),
            "sources loaded"
        );
        Ok(lexicon)
    }
}

async fn read_named<T: TextSource>(name: &'static str, source: &T) -> Result<String, SourceError> {
    tracing::debug!(name, origin = %source.origin(), "reading source");
    source.read().await.map_err(|err| SourceError::Read {
        name,
        origin: source.origin(),
        source: err,
    })
}
