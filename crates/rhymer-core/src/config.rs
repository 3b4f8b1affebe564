//! Configuration types for rhymer.
//!
//! [`Config::load`] layers, lowest to highest:
//!
//! 1. the embedded defaults below,
//! 2. `~/.config/rhymer/config.toml` (created with the defaults if missing),
//! 3. an explicit file passed on the command line,
//! 4. `RHYMER__<SECTION>__<KEY>` environment variables.
//!
//! [`Config::defaults`] returns layer 1 alone without touching the
//! filesystem (useful in tests).

use crate::search::BroadeningPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[sources]
pronunciations = "./assets/phonetic_dict.txt"
symbols        = "./assets/phonetic_symbols.txt"
wordlist       = "./assets/wordlist.txt"

[search]
ceiling = 20
enough  = 5

[output]
color  = true
format = "text"
"#;

const ENV_PREFIX: &str = "RHYMER";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub search: BroadeningPolicy,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[sources]` section: where the three text sources live.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_pronunciations")]
    pub pronunciations: PathBuf,
    #[serde(default = "default_symbols")]
    pub symbols: PathBuf,
    #[serde(default = "default_wordlist")]
    pub wordlist: PathBuf,
}

fn default_pronunciations() -> PathBuf { PathBuf::from("./assets/phonetic_dict.txt") }
fn default_symbols() -> PathBuf { PathBuf::from("./assets/phonetic_symbols.txt") }
fn default_wordlist() -> PathBuf { PathBuf::from("./assets/wordlist.txt") }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            pronunciations: default_pronunciations(),
            symbols: default_symbols(),
            wordlist: default_wordlist(),
        }
    }
}

/// How reports are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered lists between rule lines.
    #[default]
    Text,
    /// One JSON object per search event.
    Json,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_color() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            format: OutputFormat::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config (creating it if needed) plus an optional explicit
    /// file and environment overrides, layered on the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&[path.as_path()], explicit)
    }

    /// Defaults, then each optional file in `user_files`, then the required
    /// `explicit` file, then the environment.
    pub fn layered(user_files: &[&Path], explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        for file in user_files {
            builder = builder.add_source(config::File::from(*file).required(false));
        }
        if let Some(file) = explicit {
            builder = builder.add_source(config::File::from(file).required(true));
        }
        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("rhymer")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.search, BroadeningPolicy::default());
        assert_eq!(cfg.search.ceiling, 20);
        assert_eq!(cfg.search.enough, 5);
        assert!(cfg.output.color);
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.sources.wordlist, PathBuf::from("./assets/wordlist.txt"));
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rhymer.toml");
        std::fs::write(
            &path,
            "[search]\nceiling = 12\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let cfg = Config::layered(&[], Some(&path)).unwrap();
        assert_eq!(cfg.search.ceiling, 12);
        assert_eq!(cfg.search.enough, 5);
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_user_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let cfg = Config::layered(&[missing.as_path()], None).unwrap();
        assert_eq!(cfg.search.ceiling, 20);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::layered(&[], Some(&missing)).is_err());
    }
}
