//! Single-line word prompt.

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Type a word: ";

/// Print [`PROMPT`], read one line and normalise it (trimmed, lowercase).
///
/// Returns `Ok(None)` at end of input.
pub fn read_word<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    next_word(input)
}

/// Read and normalise one line without prompting (machine-readable output).
pub fn next_word<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::debug!("prompt: end of input");
        return Ok(None);
    }
    let word = line.trim().to_lowercase();
    tracing::debug!(word = %word, "prompt: word entered");
    Ok(Some(word))
}
