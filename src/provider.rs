//! Economic calendar provider boundary
//!
//! The core never talks to the network itself: it consumes raw rows handed
//! over by a [`CalendarSource`]. The HTTP implementation targets a JSON
//! endpoint returning an array of row objects; any provider failure degrades
//! to an empty row set so the dashboard still comes up.

use crate::calendar_core::{RawEventRow, DAY_FORMAT};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum ProviderError {
    /// Network, auth, or non-2xx response.
    Unavailable(String),
    /// The provider answered with something that is not a row array.
    Malformed(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(msg) => write!(f, "provider unavailable: {}", msg),
            ProviderError::Malformed(msg) => write!(f, "malformed provider response: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of raw calendar rows for a date range.
#[async_trait]
pub trait CalendarSource {
    /// Fetch raw rows covering `[from, to]` inclusive. `to` must be strictly
    /// after `from`; providers reject zero-width ranges.
    async fn fetch(&self, from: NaiveDate, to: NaiveDate)
        -> Result<Vec<RawEventRow>, ProviderError>;
}

/// HTTP provider: `GET {base_url}/calendar?from=DD/MM/YYYY&to=DD/MM/YYYY`.
pub struct HttpCalendarSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCalendarSource {
    pub fn new(base_url: String) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl CalendarSource for HttpCalendarSource {
    async fn fetch(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RawEventRow>, ProviderError> {
        let url = format!("{}/calendar", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[
                ("from", from.format(DAY_FORMAT).to_string()),
                ("to", to.format(DAY_FORMAT).to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ProviderError::Unavailable(format!(
                "calendar API error: {}",
                response.status()
            )));
        }

        response
            .json::<Vec<RawEventRow>>()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}

/// Fetch the rows for one day.
///
/// Requests a two-day span (the provider cannot accept a zero-width range);
/// the normalizer keeps only rows matching `day`. A failed or empty fetch is
/// the same thing to the core: no events.
pub async fn fetch_day(source: &dyn CalendarSource, day: NaiveDate) -> Vec<RawEventRow> {
    let to = day.checked_add_days(Days::new(1)).unwrap_or(day);

    match source.fetch(day, to).await {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("Calendar fetch failed, continuing with no events: {}", e);
            Vec::new()
        }
    }
}
