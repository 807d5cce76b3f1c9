//! End-to-end tests for the calendar timeline pipeline
//!
//! Exercises the full flow a dashboard session goes through: provider fetch
//! (mocked) → normalization → filtering → aggregation → chart projection,
//! including the degraded path when the provider is unavailable.

use async_trait::async_trait;
use calflow::calendar_core::{
    aggregate, build_chart, filter_events, normalize_day, ChartWindow, EventFilter, Impact,
    RawEventRow,
};
use calflow::provider::{fetch_day, CalendarSource, ProviderError};
use chrono::NaiveDate;
use chrono_tz::Europe::London;
use std::collections::HashSet;

struct StaticSource {
    rows: Vec<RawEventRow>,
}

#[async_trait]
impl CalendarSource for StaticSource {
    async fn fetch(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<RawEventRow>, ProviderError> {
        Ok(self.rows.clone())
    }
}

struct DownSource;

#[async_trait]
impl CalendarSource for DownSource {
    async fn fetch(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<RawEventRow>, ProviderError> {
        Err(ProviderError::Unavailable("connection refused".to_string()))
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn session_rows() -> Vec<RawEventRow> {
    // The provider range spans two days; the JSON mirrors its wire shape.
    serde_json::from_str(
        r#"[
        {"date":"01/01/2024","time":"09:00","importance":"high","currency":"USD","event":"Nonfarm Payrolls","actual":"250K","forecast":"200K","previous":"180K"},
        {"date":"01/01/2024","time":"09:00","importance":"low","currency":"EUR","event":"German Factory Orders"},
        {"date":"01/01/2024","time":"All Day","importance":"medium","currency":"GBP","event":"Bank Holiday"},
        {"date":"01/01/2024","time":"25:99","importance":"high","currency":"USD","event":"Corrupt Row"},
        {"date":"01/01/2024","time":"14:30","currency":"JPY","event":"BoJ Minutes"},
        {"date":"02/01/2024","time":"09:00","importance":"high","currency":"USD","event":"Tomorrow's Event"}
    ]"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_normalize_filter_aggregate() {
    let source = StaticSource {
        rows: session_rows(),
    };

    let rows = fetch_day(&source, day()).await;
    assert_eq!(rows.len(), 6);

    // Corrupt row and second-day row drop out; four events survive.
    let events = normalize_day(&rows, day(), London);
    assert_eq!(events.len(), 4);
    assert!(events.iter().all(|e| e.name != "Corrupt Row"));
    assert!(events.iter().all(|e| e.name != "Tomorrow's Event"));

    let all_day = events.iter().find(|e| e.name == "Bank Holiday").unwrap();
    assert_eq!(all_day.time_display, "All Day");

    let unclassified = events.iter().find(|e| e.name == "BoJ Minutes").unwrap();
    assert_eq!(unclassified.impact, Impact::Unclassified);

    let filter = EventFilter {
        currencies: Some(
            ["USD", "EUR", "GBP", "JPY"]
                .iter()
                .map(|s| s.to_string())
                .collect::<HashSet<_>>(),
        ),
        min_impact: 0,
    };
    let filtered = filter_events(&events, &filter);
    assert_eq!(filtered.len(), 4);

    let timeline = aggregate(&filtered);
    assert_eq!(timeline.density_for(Impact::High).len(), 1);
    assert_eq!(timeline.density_for(Impact::High)[0].count, 1);
    assert_eq!(timeline.density_for(Impact::Low).len(), 1);
    assert_eq!(timeline.density_for(Impact::Medium).len(), 1);
    assert_eq!(timeline.max_count, 1);

    // All Day (midnight, weight 2) → 09:00 high+low (3, 1) → 14:30 (0).
    let totals: Vec<u32> = timeline.score.iter().map(|p| p.total).collect();
    assert_eq!(totals, vec![2, 5, 6, 6]);
    assert_eq!(timeline.final_score(), 6);

    let window = ChartWindow::parse("09:00", "19:00").unwrap();
    let model = build_chart(&timeline, day(), London, &window);
    assert!(!model.is_empty());
    // Series keep every point, including the midnight one left of the window.
    assert_eq!(model.score_series.len(), 4);
    assert!(model.score_series[0].0 < model.x_bounds[0]);
}

#[tokio::test]
async fn test_provider_failure_degrades_to_empty() {
    let rows = fetch_day(&DownSource, day()).await;
    assert!(rows.is_empty());

    let events = normalize_day(&rows, day(), London);
    let timeline = aggregate(&events);
    assert!(timeline.is_empty());
    assert_eq!(timeline.max_count, 0);

    let model = build_chart(&timeline, day(), London, &ChartWindow::full_day());
    assert!(model.is_empty());
}

#[tokio::test]
async fn test_restrictive_filter_yields_empty_not_error() {
    let source = StaticSource {
        rows: session_rows(),
    };
    let rows = fetch_day(&source, day()).await;
    let events = normalize_day(&rows, day(), London);

    let filter = EventFilter {
        currencies: Some(std::iter::once("CHF".to_string()).collect::<HashSet<_>>()),
        min_impact: 0,
    };
    let filtered = filter_events(&events, &filter);
    assert!(filtered.is_empty());
    assert!(aggregate(&filtered).is_empty());
}
