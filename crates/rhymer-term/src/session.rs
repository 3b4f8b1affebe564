//! Interactive session — prompt, resolve, search, report.
//!
//! [`Session::run`] keeps asking until the word is in the dictionary, runs
//! the broadening search to completion and writes one report per event. With
//! `repeat` set it starts over after each query until input ends.

use crate::prompt::{next_word, read_word};
use crate::report::Reporter;
use rhymer_core::config::OutputFormat;
use rhymer_core::{BroadeningPolicy, Lexicon, SearchEvent, SearchState};
use std::io::{self, BufRead, Write};

/// How a finished query ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Batches were reported and the search ended without passing the ceiling;
    /// `total` counts words over all batches.
    Found { total: usize, batches: usize },
    /// Batches were reported, then widening ran past the ceiling.
    CeilingReached { total: usize },
    /// Nothing was found, including one step past the ceiling.
    Exhausted,
}

pub struct Session<'a, R, W> {
    lexicon: &'a Lexicon,
    policy: BroadeningPolicy,
    reporter: Reporter,
    input: R,
    out: W,
    repeat: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(lexicon: &'a Lexicon, policy: BroadeningPolicy, reporter: Reporter, input: R, out: W) -> Self {
        Self {
            lexicon,
            policy,
            reporter,
            input,
            out,
            repeat: false,
        }
    }

    /// Keep prompting for new words after each query.
    pub fn repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Drive queries until one completes (or, with `repeat`, until input ends).
    pub fn run(&mut self) -> io::Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();
        while let Some(state) = self.ask_until_valid()? {
            outcomes.push(self.search(state)?);
            if !self.repeat {
                break;
            }
        }
        Ok(outcomes)
    }

    /// Prompt until the entered word resolves. `None` at end of input.
    pub fn ask_until_valid(&mut self) -> io::Result<Option<SearchState>> {
        loop {
            let word = match self.reporter.format() {
                OutputFormat::Text => read_word(&mut self.input, &mut self.out)?,
                OutputFormat::Json => next_word(&mut self.input)?,
            };
            let Some(word) = word else {
                return Ok(None);
            };
            match self.lexicon.query(&word) {
                Ok(state) => return Ok(Some(state)),
                Err(err) => {
                    tracing::debug!(%err, "rejected input");
                    self.reporter.invalid_word(&mut self.out, &word)?;
                }
            }
        }
    }

    /// Run one query to completion, reporting every event.
    pub fn search(&mut self, state: SearchState) -> io::Result<Outcome> {
        search_and_report(self.lexicon, self.policy, self.reporter, state, &mut self.out)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

/// Run the broadening search for `state` and write its reports to `out`.
pub fn search_and_report<W: Write>(
    lexicon: &Lexicon,
    policy: BroadeningPolicy,
    reporter: Reporter,
    state: SearchState,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut total = 0;
    let mut batches = 0;
    let mut exhausted = false;

    for event in lexicon.engine(policy).broaden(state) {
        reporter.event(out, &event)?;
        match &event {
            SearchEvent::Found { words, .. } | SearchEvent::More { words, .. } => {
                total += words.len();
                batches += 1;
            }
            SearchEvent::Exhausted { .. } => exhausted = true,
            SearchEvent::Miss { .. } => {}
        }
    }
    out.flush()?;

    let outcome = match (exhausted, batches) {
        (true, 0) => Outcome::Exhausted,
        (true, _) => Outcome::CeilingReached { total },
        (false, _) => Outcome::Found { total, batches },
    };
    tracing::info!(?outcome, "query finished");
    Ok(outcome)
}
