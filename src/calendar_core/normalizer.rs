//! Raw provider rows to canonical Event normalization

use super::event::{Event, Impact, ALL_DAY};
use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used both to request the provider range and to match rows
/// against the target day.
pub const DAY_FORMAT: &str = "%d/%m/%Y";

/// One raw calendar row as delivered by the provider.
///
/// Everything except the date is optional; absent fields degrade to the
/// "N/A" / unclassified defaults during normalization. The provider calls
/// the consensus column "forecast".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEventRow {
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub importance: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

#[derive(Debug)]
pub enum NormalizeError {
    /// The row's time could not be resolved by either accepted form, or the
    /// resulting wall clock does not exist in the reference timezone.
    MalformedTimestamp { date: String, time: String },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MalformedTimestamp { date, time } => {
                write!(f, "malformed timestamp: date={} time={}", date, time)
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Normalize one day's worth of raw rows into canonical Events.
///
/// The provider range necessarily spans two days, so rows whose date string
/// does not match `day` are discarded here. Rows with unparseable times are
/// skipped with a warning; the batch always completes.
pub fn normalize_day(rows: &[RawEventRow], day: NaiveDate, tz: Tz) -> Vec<Event> {
    let day_str = day.format(DAY_FORMAT).to_string();
    let mut events = Vec::new();

    for row in rows {
        if row.date != day_str {
            continue;
        }
        match normalize_row(row, day, tz) {
            Ok(event) => events.push(event),
            Err(e) => log::warn!("Skipping calendar row: {}", e),
        }
    }

    events
}

/// Normalize a single raw row. `day` must already match the row's date.
pub fn normalize_row(row: &RawEventRow, day: NaiveDate, tz: Tz) -> Result<Event, NormalizeError> {
    let is_all_day = match row.time.as_deref() {
        Some(t) => t.trim().eq_ignore_ascii_case(ALL_DAY),
        None => true,
    };

    let naive = if is_all_day {
        // No intraday time: the event anchors at midnight of its day.
        day.and_hms_opt(0, 0, 0).ok_or_else(|| malformed(row))?
    } else {
        let time = row.time.as_deref().unwrap_or_default();
        day.and_time(parse_wall_time(time).ok_or_else(|| malformed(row))?)
    };

    // The provider's times are naive but already correct for the market's
    // wall clock, so localize rather than convert. An ambiguous autumn wall
    // time takes its first occurrence; a nonexistent one is a malformed row.
    let instant = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| malformed(row))?;

    let time_display = if is_all_day {
        ALL_DAY.to_string()
    } else {
        instant.format("%H:%M").to_string()
    };

    Ok(Event {
        instant,
        date_display: instant.format("%b %d, %Y").to_string(),
        time_display,
        currency: row.currency.clone().unwrap_or_else(|| "N/A".to_string()),
        name: row.event.clone().unwrap_or_else(|| "N/A".to_string()),
        impact: Impact::from_label(row.importance.as_deref()),
        actual: row.actual.clone(),
        consensus: row.forecast.clone(),
        previous: row.previous.clone(),
    })
}

/// Parse an intraday wall time: `HH:MM`, falling back to a bare hour.
fn parse_wall_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    if let Ok(t) = NaiveTime::parse_from_str(time, "%H:%M") {
        return Some(t);
    }
    time.parse::<u32>()
        .ok()
        .and_then(|h| NaiveTime::from_hms_opt(h, 0, 0))
}

fn malformed(row: &RawEventRow) -> NormalizeError {
    NormalizeError::MalformedTimestamp {
        date: row.date.clone(),
        time: row.time.clone().unwrap_or_default(),
    }
}
