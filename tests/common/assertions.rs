//! Domain-specific assertions for rhymer harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! broadening invariant was violated and at which step.

use rhymer_core::{BroadeningPolicy, SearchEvent};

/// Assert that an event carries exactly these words, in order.
///
/// ```rust
/// assert_words!(events[0], ["bat", "hat"]);
/// ```
#[macro_export]
macro_rules! assert_words {
    ($event:expr, [$($word:expr),* $(,)?]) => {{
        let event: &rhymer_core::SearchEvent = &$event;
        let expected: Vec<&str> = vec![$($word),*];
        let actual: Vec<&str> = event.words().iter().map(String::as_str).collect();
        if actual != expected {
            panic!(
                "assert_words! failed:\n  event:    {:?}\n  expected: {:?}\n  actual:   {:?}",
                event, expected, actual
            );
        }
    }};
}

/// Phoneme counts searched, in event order.
pub fn searched_counts(events: &[SearchEvent]) -> Vec<usize> {
    events.iter().filter_map(SearchEvent::phoneme_count).collect()
}

/// Each step moves the count up by exactly one, and no step after the first
/// goes more than one past the ceiling (or past the input's own count, when
/// that is already beyond it).
pub fn assert_broadening_bounded(events: &[SearchEvent], policy: BroadeningPolicy) {
    let counts = searched_counts(events);
    for pair in counts.windows(2) {
        assert_eq!(
            pair[0] + 1,
            pair[1],
            "phoneme count did not step up by one: {counts:?}\n  events: {events:?}"
        );
    }
    let Some(&first) = counts.first() else {
        return;
    };
    let limit = first.max(policy.ceiling) + 1;
    for &count in counts.iter().skip(1) {
        assert!(
            count <= limit,
            "searched past {limit} with ceiling {}: {counts:?}",
            policy.ceiling
        );
    }
}

/// At most one `Exhausted`, and if present it is last.
pub fn assert_exhausted_last(events: &[SearchEvent]) {
    let positions: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e, SearchEvent::Exhausted { .. }))
        .map(|(i, _)| i)
        .collect();
    assert!(positions.len() <= 1, "more than one Exhausted: {events:?}");
    if let Some(&i) = positions.first() {
        assert_eq!(i, events.len() - 1, "Exhausted is not the last event: {events:?}");
    }
}
