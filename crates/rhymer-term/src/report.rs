//! Report rendering — one report per [`SearchEvent`].
//!
//! # Text format
//!
//! ```text
//! -------------------------------------------
//! 2 rhymes having 3 phonemes are found
//! -------------------------------------------
//! 1. bat
//! 2. hat
//! ```
//!
//! Additional batches say `N more rhymes …`; misses and exhaustion print the
//! plain messages below. With colour on, counts and the failure line are
//! styled through crossterm.
//!
//! # JSON format
//!
//! One object per line, tagged by `"event"`, exactly as [`SearchEvent`]
//! serializes.

use crossterm::style::Stylize;
use rhymer_core::config::OutputFormat;
use rhymer_core::SearchEvent;
use std::io::{self, Write};

pub const RULE: &str = "-------------------------------------------";
pub const INVALID_WORD: &str = "The entered word is not valid. Try another one.";
pub const NOT_FOUND: &str = "Rhymes cannot be found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
    format: OutputFormat,
    color: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn plain() -> Self {
        Self::new(OutputFormat::Text, false)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn event<W: Write>(&self, out: &mut W, event: &SearchEvent) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, event)?;
                writeln!(out)
            }
            OutputFormat::Text => self.text_event(out, event),
        }
    }

    pub fn invalid_word<W: Write>(&self, out: &mut W, word: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(
                    &mut *out,
                    &serde_json::json!({ "event": "invalid_word", "word": word }),
                )?;
                writeln!(out)
            }
            OutputFormat::Text => writeln!(out, "{INVALID_WORD}"),
        }
    }

    fn text_event<W: Write>(&self, out: &mut W, event: &SearchEvent) -> io::Result<()> {
        match event {
            SearchEvent::Found { phoneme_count, words } => {
                let header = format!(
                    "{} rhymes having {} phonemes are found",
                    self.count(words.len()),
                    phoneme_count
                );
                self.batch(out, &header, words)
            }
            SearchEvent::More { phoneme_count, words } => {
                let header = format!(
                    "{} more rhymes having {} phonemes are found",
                    self.count(words.len()),
                    phoneme_count
                );
                self.batch(out, &header, words)
            }
            SearchEvent::Miss { phoneme_count, broadening } => {
                writeln!(out, "The rhymes having {phoneme_count} sounds are not found.")?;
                if *broadening {
                    writeln!(out, "Continue to find similar rhymes...")?;
                }
                Ok(())
            }
            SearchEvent::Exhausted { .. } => {
                writeln!(out, "{RULE}")?;
                if self.color {
                    writeln!(out, "{}", NOT_FOUND.red().bold())?;
                } else {
                    writeln!(out, "{NOT_FOUND}")?;
                }
                writeln!(out, "{RULE}")
            }
        }
    }

    fn batch<W: Write>(&self, out: &mut W, header: &str, words: &[String]) -> io::Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(out, "{header}")?;
        writeln!(out, "{RULE}")?;
        for (i, word) in words.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, word.to_lowercase())?;
        }
        Ok(())
    }

    fn count(&self, n: usize) -> String {
        if self.color {
            n.to_string().green().bold().to_string()
        } else {
            n.to_string()
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::plain()
    }
}
