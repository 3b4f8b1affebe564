//! rhymer — command-line rhyme finder.
//!
//! The binary is a thin shell over three workspace crates:
//!
//! ```text
//! rhymer-sources ──► rhymer-core (Lexicon) ──► rhymer-term (prompt + reports)
//! ```
//!
//! This crate owns the command line: argument parsing, layering CLI flags on
//! top of [`Config`], debug logging, and the single-threaded runtime that
//! loads the sources before the first prompt.

use clap::{Parser, ValueEnum};
use rhymer_core::config::{Config, OutputFormat};
use rhymer_sources::Sources;
use rhymer_term::{Outcome, TermOptions};
use std::path::PathBuf;

pub const DEBUG_LOG: &str = "/tmp/rhymer-debug.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "rhymer", about = "Find words that rhyme, by pronunciation", version)]
pub struct Cli {
    /// Search this word once instead of prompting.
    pub word: Option<String>,

    /// Extra config file layered over ~/.config/rhymer/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pronunciation dictionary (`headword<TAB>phonemes`).
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Symbol classification table (`symbol<TAB>classification`).
    #[arg(long, value_name = "PATH")]
    pub symbols: Option<PathBuf>,

    /// Wordlist used to keep only meaningful words.
    #[arg(long, value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Highest phoneme count broadening may reach.
    #[arg(long)]
    pub ceiling: Option<usize>,

    /// First batches smaller than this are widened.
    #[arg(long)]
    pub enough: Option<usize>,

    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,

    /// Keep prompting for words until end of input.
    #[arg(long)]
    pub repeat: bool,

    /// Write debug logs to /tmp/rhymer-debug.log (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.dict {
            config.sources.pronunciations = path.clone();
        }
        if let Some(path) = &self.symbols {
            config.sources.symbols = path.clone();
        }
        if let Some(path) = &self.wordlist {
            config.sources.wordlist = path.clone();
        }
        if let Some(ceiling) = self.ceiling {
            config.search.ceiling = ceiling;
        }
        if let Some(enough) = self.enough {
            config.search.enough = enough;
        }
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if self.no_color {
            config.output.color = false;
        }
        config
    }

    pub fn term_options(&self, config: &Config) -> TermOptions {
        TermOptions {
            policy: config.search,
            format: config.output.format,
            color: config.output.color,
            repeat: self.repeat,
            word: self.word.clone(),
        }
    }

    /// Load configuration, falling back to the built-in defaults when the
    /// user file cannot be read. An explicit `--config` must load.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(Some(path.as_path()))?,
            None => Config::load(None).unwrap_or_else(|err| {
                tracing::warn!(%err, "config unreadable, using defaults");
                Config::defaults()
            }),
        };
        Ok(self.apply(config))
    }
}

/// Install the file-backed tracing subscriber used by `--debug`.
pub fn init_debug_log() -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(DEBUG_LOG)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    tracing::info!("rhymer debug log started, tail -f {DEBUG_LOG}");
    Ok(())
}

/// Load the sources, then hand over to the terminal front end.
pub fn run(cli: &Cli) -> anyhow::Result<Vec<Outcome>> {
    let config = cli.load_config()?;
    tracing::debug!(?config, "effective configuration");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let lexicon = runtime.block_on(Sources::from_config(&config.sources).load())?;

    rhymer_term::run(&lexicon, &cli.term_options(&config))
}
