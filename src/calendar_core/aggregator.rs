//! Timeline aggregation: per-tier event density and cumulative weighted score

use super::event::{Event, Impact};
use chrono::DateTime;
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// Number of events sharing one distinct instant, for one impact tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityPoint {
    pub instant: DateTime<Tz>,
    pub count: usize,
}

/// Running total of impact weights after one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePoint {
    pub instant: DateTime<Tz>,
    pub total: u32,
}

/// The two aggregation artifacts derived from one filtered event collection.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    density: BTreeMap<Impact, Vec<DensityPoint>>,
    /// Peak density count across all tiers and instants, for axis scaling.
    pub max_count: usize,
    /// One point per filtered event, chronological, non-decreasing totals.
    pub score: Vec<ScorePoint>,
}

impl Timeline {
    /// Density series for one tier, ascending by instant. Tiers with no
    /// events (and `Unclassified`, which is never bucketed) yield an empty
    /// slice.
    pub fn density_for(&self, tier: Impact) -> &[DensityPoint] {
        self.density.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no event survived filtering. Every event anchors a score
    /// point, so the score series alone decides this.
    pub fn is_empty(&self) -> bool {
        self.score.is_empty()
    }

    pub fn final_score(&self) -> u32 {
        self.score.last().map(|p| p.total).unwrap_or(0)
    }
}

/// Aggregate a filtered event collection into its timeline artifacts.
///
/// Deterministic: same events in the same order produce identical output.
/// An empty input produces empty series, not an error.
pub fn aggregate(events: &[Event]) -> Timeline {
    let mut density = BTreeMap::new();
    let mut max_count = 0;

    for tier in Impact::tiers() {
        // Collapse duplicate instants per tier; BTreeMap keeps the series
        // sorted ascending.
        let mut counts: BTreeMap<DateTime<Tz>, usize> = BTreeMap::new();
        for event in events.iter().filter(|e| e.impact == tier) {
            *counts.entry(event.instant).or_insert(0) += 1;
        }

        let series: Vec<DensityPoint> = counts
            .into_iter()
            .map(|(instant, count)| DensityPoint { instant, count })
            .collect();

        if let Some(peak) = series.iter().map(|p| p.count).max() {
            max_count = max_count.max(peak);
        }
        density.insert(tier, series);
    }

    // Every filtered event steps the cumulative score, unclassified ones with
    // weight 0. Stable sort keeps input order for identical instants, so
    // simultaneous events each contribute their own step.
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|e| e.instant);

    let mut total = 0u32;
    let score = ordered
        .into_iter()
        .map(|event| {
            total += event.impact.weight();
            ScorePoint {
                instant: event.instant,
                total,
            }
        })
        .collect();

    Timeline {
        density,
        max_count,
        score,
    }
}
