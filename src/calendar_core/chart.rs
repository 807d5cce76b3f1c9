//! Chart-ready projection of an aggregated timeline
//!
//! The core emits plain f64 datasets and axis bounds; the UI layer decides
//! colors and widgets. The display window clips the visible x-axis only --
//! the underlying series always keep every computed point.

use super::aggregator::Timeline;
use super::event::Impact;
use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Requested display window: start/end wall-clock times on the charted day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ChartWindow {
    /// Parse `HH:MM` bounds from free-text shell input.
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?;
        if start >= end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Fallback when the shell input is invalid: the whole session day.
    pub fn full_day() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default(),
        }
    }
}

/// Everything the UI needs to draw the two stacked panels: per-tier density
/// datasets and the cumulative score dataset over a shared x-axis.
#[derive(Debug, Clone, Default)]
pub struct ChartModel {
    /// `(epoch seconds, count)` per bucketed tier, tier order low..high.
    pub tier_series: Vec<(Impact, Vec<(f64, f64)>)>,
    /// `(epoch seconds, running total)`.
    pub score_series: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    /// Window start / midpoint / end, formatted `HH:MM`.
    pub x_labels: Vec<String>,
    pub count_bounds: [f64; 2],
    pub score_bounds: [f64; 2],
}

impl ChartModel {
    /// True when there is nothing to plot for the selected filters; the UI
    /// renders a placeholder instead of an empty chart.
    pub fn is_empty(&self) -> bool {
        self.score_series.is_empty() && self.tier_series.iter().all(|(_, s)| s.is_empty())
    }
}

/// Project a timeline into chart-ready datasets for `day` in `tz`, clipping
/// the visible x-axis to `window`.
pub fn build_chart(timeline: &Timeline, day: NaiveDate, tz: Tz, window: &ChartWindow) -> ChartModel {
    let tier_series = Impact::tiers()
        .into_iter()
        .map(|tier| {
            let points = timeline
                .density_for(tier)
                .iter()
                .map(|p| (p.instant.timestamp() as f64, p.count as f64))
                .collect();
            (tier, points)
        })
        .collect();

    let score_series = timeline
        .score
        .iter()
        .map(|p| (p.instant.timestamp() as f64, p.total as f64))
        .collect();

    let x_bounds = [
        wall_clock_secs(day, window.start, tz),
        wall_clock_secs(day, window.end, tz),
    ];

    let midpoint = window.start + (window.end - window.start) / 2;
    let x_labels = vec![
        window.start.format("%H:%M").to_string(),
        midpoint.format("%H:%M").to_string(),
        window.end.format("%H:%M").to_string(),
    ];

    ChartModel {
        tier_series,
        score_series,
        x_bounds,
        x_labels,
        count_bounds: [0.0, timeline.max_count.max(1) as f64 + 0.5],
        score_bounds: [0.0, timeline.final_score().max(1) as f64],
    }
}

fn wall_clock_secs(day: NaiveDate, time: NaiveTime, tz: Tz) -> f64 {
    match tz.from_local_datetime(&day.and_time(time)).earliest() {
        Some(dt) => dt.timestamp() as f64,
        None => {
            // Window edge landed in a DST gap; nudge to the day's start in UTC.
            log::warn!("Display window edge {} does not exist in {}", time, tz);
            day.and_hms_opt(0, 0, 0)
                .map(|naive| naive.and_utc().timestamp() as f64)
                .unwrap_or(0.0)
        }
    }
}
