//! Pure predicate selection over the day's events

use super::event::Event;
use std::collections::HashSet;

/// Filter parameters supplied by the shell on every recomputation.
///
/// `currencies: None` means no currency restriction. `Some` with an empty set
/// is a distinct configuration that admits nothing.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub currencies: Option<HashSet<String>>,
    /// Inclusive minimum impact weight. 0 admits unclassified events.
    pub min_impact: u32,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if event.impact.weight() < self.min_impact {
            return false;
        }
        match &self.currencies {
            Some(set) => set.contains(&event.currency),
            None => true,
        }
    }
}

/// Select the events passing `filter`, preserving input order.
///
/// Pure: the source collection is never mutated, so this is safe to re-run
/// with different parameters against the same full set on every interaction.
pub fn filter_events(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}
