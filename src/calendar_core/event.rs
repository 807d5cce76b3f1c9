//! Canonical calendar event shape and impact tier mapping

use chrono::DateTime;
use chrono_tz::Tz;

/// Time display marker for events without an intraday wall-clock time.
pub const ALL_DAY: &str = "All Day";

/// Market significance tier of a calendar event.
///
/// Unmapped or absent importance labels land in `Unclassified` rather than
/// failing; those events still count as valid events but never appear in a
/// tier-specific density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Impact {
    Unclassified,
    Low,
    Medium,
    High,
}

impl Impact {
    /// Map a provider importance label to a tier. Total: any label outside
    /// low/medium/high (case-insensitive) maps to `Unclassified`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("low") => Impact::Low,
            Some("medium") => Impact::Medium,
            Some("high") => Impact::High,
            _ => Impact::Unclassified,
        }
    }

    /// Numeric weight used by the cumulative score series.
    pub fn weight(&self) -> u32 {
        match self {
            Impact::Unclassified => 0,
            Impact::Low => 1,
            Impact::Medium => 2,
            Impact::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Unclassified => "unclassified",
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }

    /// The tiers that get their own density bucket.
    pub fn tiers() -> [Impact; 3] {
        [Impact::Low, Impact::Medium, Impact::High]
    }
}

/// One normalized economic-calendar occurrence.
///
/// Immutable after construction: filtering and aggregation only select from
/// or derive over these, never mutate them. `date_display` and `time_display`
/// exist for the table view only and are never used for ordering.
#[derive(Debug, Clone)]
pub struct Event {
    /// Timezone-aware instant, localized into the market's wall-clock zone.
    pub instant: DateTime<Tz>,
    pub date_display: String,
    pub time_display: String,
    pub currency: String,
    pub name: String,
    pub impact: Impact,
    pub actual: Option<String>,
    pub consensus: Option<String>,
    pub previous: Option<String>,
}
