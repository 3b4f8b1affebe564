//! rhymer terminal front end — prompt, reports and the query session.

pub mod prompt;
pub mod report;
pub mod session;

pub use report::Reporter;
pub use session::{Outcome, Session};

use crossterm::tty::IsTty;
use rhymer_core::config::OutputFormat;
use rhymer_core::{BroadeningPolicy, Lexicon};

/// Everything the front end needs besides the lexicon.
#[derive(Debug, Clone, Default)]
pub struct TermOptions {
    pub policy: BroadeningPolicy,
    pub format: OutputFormat,
    /// Colour is also suppressed when stdout is not a terminal.
    pub color: bool,
    /// Keep prompting after each query until end of input.
    pub repeat: bool,
    /// Search this word once without prompting.
    pub word: Option<String>,
}

/// Run against the process's stdin/stdout.
pub fn run(lexicon: &Lexicon, options: &TermOptions) -> anyhow::Result<Vec<Outcome>> {
    let stdout = std::io::stdout();
    let color = options.color && options.format == OutputFormat::Text && stdout.is_tty();
    let reporter = Reporter::new(options.format, color);
    let mut out = stdout.lock();

    if let Some(word) = &options.word {
        let outcome = query_once(lexicon, word, options.policy, reporter, &mut out)?;
        return Ok(vec![outcome]);
    }

    let stdin = std::io::stdin();
    let mut session = Session::new(lexicon, options.policy, reporter, stdin.lock(), out)
        .repeat(options.repeat);
    Ok(session.run()?)
}

/// One-shot query against arbitrary output; an unknown word is an error
/// because there is no prompt to retry from.
pub fn query_once<W: std::io::Write>(
    lexicon: &Lexicon,
    word: &str,
    policy: BroadeningPolicy,
    reporter: Reporter,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let state = lexicon.query(word)?;
    Ok(session::search_and_report(lexicon, policy, reporter, state, out)?)
}
