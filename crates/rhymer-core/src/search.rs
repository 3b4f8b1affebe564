//! Search layer — exact `(rhyme, phoneme count)` matching with progressive
//! broadening.
//!
//! # Matching
//!
//! [`SearchEngine::find_matches`] selects the index rows whose rhyme string
//! and phoneme count both equal the query, keeps the headwords present in the
//! [`Wordlist`], lowercases them, drops the input word itself and removes
//! duplicates. Order follows dictionary definition order.
//!
//! # Broadening
//!
//! When a lookup comes back short, the phoneme count is relaxed upward one
//! step at a time. [`Broadening`] walks this state machine and yields one
//! [`SearchEvent`] per step:
//!
//! ```text
//!            miss, count <= ceiling
//!           ┌──────────────────────┐
//!           ▼                      │
//!       Seeking(count) ────────────┘
//!        │        │
//!   hit  │        │ miss, count > ceiling
//!        ▼        ▼
//!     Found ──► Exhausted
//!        │          ▲
//!  < enough         │ looked up past ceiling
//!        ▼          │
//!    Widening(count+1) ──► (miss) done
//!        │  ▲
//!   hit  └──┘ More
//! ```
//!
//! The phoneme count never decreases and moves one step at a time. Both loops
//! may look one step past the ceiling; the first lookup beyond it is the last
//! one made, and the walk then ends in [`SearchEvent::Exhausted`]. A first
//! batch found beyond the ceiling is followed by a single widening lookup.

use crate::index::RhymeIndex;
use crate::wordlist::Wordlist;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_CEILING: usize = 20;
pub const DEFAULT_ENOUGH: usize = 5;

// ---------------------------------------------------------------------------
// Policy + state
// ---------------------------------------------------------------------------

/// The two broadening constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadeningPolicy {
    /// Broadening continues from counts up to and including this one.
    pub ceiling: usize,
    /// A first batch with at least this many words needs no widening.
    pub enough: usize,
}

impl Default for BroadeningPolicy {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_CEILING,
            enough: DEFAULT_ENOUGH,
        }
    }
}

/// Per-query search parameters. Only `current_phoneme_count` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Lowercased query word; excluded from every result batch.
    pub input_word: String,
    pub rhyme: String,
    pub input_phoneme_count: usize,
    pub current_phoneme_count: usize,
}

impl SearchState {
    pub fn new(input_word: impl Into<String>, rhyme: impl Into<String>, phoneme_count: usize) -> Self {
        Self {
            input_word: input_word.into().to_lowercase(),
            rhyme: rhyme.into(),
            input_phoneme_count: phoneme_count,
            current_phoneme_count: phoneme_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// One broadening step, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent {
    /// Nothing at this count while still seeking a first batch.
    /// `broadening` is false once the count is past the ceiling; the next
    /// event is then [`SearchEvent::Exhausted`].
    Miss { phoneme_count: usize, broadening: bool },
    /// The first non-empty batch.
    Found { phoneme_count: usize, words: Vec<String> },
    /// An additional batch found while widening a short first batch.
    More { phoneme_count: usize, words: Vec<String> },
    /// A lookup past the ceiling ended the walk.
    Exhausted { ceiling: usize },
}

impl SearchEvent {
    /// Words carried by this event; empty for misses and exhaustion.
    pub fn words(&self) -> &[String] {
        match self {
            SearchEvent::Found { words, .. } | SearchEvent::More { words, .. } => words,
            SearchEvent::Miss { .. } | SearchEvent::Exhausted { .. } => &[],
        }
    }

    /// Phoneme count that was searched, if this event reports a lookup.
    pub fn phoneme_count(&self) -> Option<usize> {
        match self {
            SearchEvent::Miss { phoneme_count, .. }
            | SearchEvent::Found { phoneme_count, .. }
            | SearchEvent::More { phoneme_count, .. } => Some(*phoneme_count),
            SearchEvent::Exhausted { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Read-only view over the prepared index and wordlist.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    index: &'a RhymeIndex,
    wordlist: &'a Wordlist,
    policy: BroadeningPolicy,
}

impl<'a> SearchEngine<'a> {
    pub fn new(index: &'a RhymeIndex, wordlist: &'a Wordlist, policy: BroadeningPolicy) -> Self {
        Self { index, wordlist, policy }
    }

    pub fn policy(&self) -> BroadeningPolicy {
        self.policy
    }

    /// Lowercased wordlist-approved headwords matching `(rhyme, phoneme_count)`,
    /// minus `exclude`, de-duplicated in definition order.
    pub fn find_matches(&self, rhyme: &str, phoneme_count: usize, exclude: &str) -> Vec<String> {
        let exclude = exclude.to_lowercase();
        let mut seen = HashSet::new();
        let words: Vec<String> = self
            .index
            .lookup(rhyme, phoneme_count)
            .filter(|entry| self.wordlist.contains(&entry.headword))
            .map(|entry| entry.headword.to_lowercase())
            .filter(|word| *word != exclude && seen.insert(word.clone()))
            .collect();
        tracing::trace!(rhyme, phoneme_count, hits = words.len(), "rhyme lookup");
        words
    }

    /// Start the broadening state machine for one query.
    pub fn broaden(&self, state: SearchState) -> Broadening<'a> {
        tracing::debug!(
            word = %state.input_word,
            rhyme = %state.rhyme,
            phoneme_count = state.input_phoneme_count,
            "search started"
        );
        Broadening {
            engine: *self,
            state,
            phase: Phase::Seeking,
        }
    }
}

// ---------------------------------------------------------------------------
// Broadening state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Seeking,
    Widening,
    Exhausted,
    Done,
}

/// Iterator over the [`SearchEvent`]s of one query.
#[derive(Debug, Clone)]
pub struct Broadening<'a> {
    engine: SearchEngine<'a>,
    state: SearchState,
    phase: Phase,
}

impl Broadening<'_> {
    /// Current search parameters; `current_phoneme_count` reflects the last
    /// step taken.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    fn lookup(&self) -> Vec<String> {
        self.engine.find_matches(
            &self.state.rhyme,
            self.state.current_phoneme_count,
            &self.state.input_word,
        )
    }

    fn seek(&mut self) -> SearchEvent {
        let policy = self.engine.policy;
        let phoneme_count = self.state.current_phoneme_count;
        let words = self.lookup();

        if !words.is_empty() {
            self.phase = if words.len() < policy.enough {
                Phase::Widening
            } else {
                Phase::Done
            };
            tracing::debug!(phoneme_count, found = words.len(), "first batch");
            return SearchEvent::Found { phoneme_count, words };
        }

        let broadening = phoneme_count <= policy.ceiling;
        if broadening {
            self.state.current_phoneme_count += 1;
        } else {
            self.phase = Phase::Exhausted;
        }
        tracing::debug!(phoneme_count, broadening, "no rhymes at this count");
        SearchEvent::Miss { phoneme_count, broadening }
    }

    fn widen(&mut self) -> Option<SearchEvent> {
        let ceiling = self.engine.policy.ceiling;
        self.state.current_phoneme_count += 1;
        let phoneme_count = self.state.current_phoneme_count;
        let past_ceiling = phoneme_count > ceiling;

        let words = self.lookup();
        if words.is_empty() {
            self.phase = Phase::Done;
            if past_ceiling {
                return Some(SearchEvent::Exhausted { ceiling });
            }
            tracing::debug!(phoneme_count, "widening stopped at first miss");
            return None;
        }

        if past_ceiling {
            self.phase = Phase::Exhausted;
        }
        tracing::debug!(phoneme_count, found = words.len(), "additional batch");
        Some(SearchEvent::More { phoneme_count, words })
    }
}

impl Iterator for Broadening<'_> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        match self.phase {
            Phase::Seeking => Some(self.seek()),
            Phase::Widening => self.widen(),
            Phase::Exhausted => {
                self.phase = Phase::Done;
                Some(SearchEvent::Exhausted {
                    ceiling: self.engine.policy.ceiling,
                })
            }
            Phase::Done => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
