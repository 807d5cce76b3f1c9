//! Calendar Core - Event Timeline Engine
//!
//! Pure engine behind the dashboard: normalizes raw provider rows into
//! canonical events, filters them by shell parameters, and aggregates the
//! survivors into the two displayed series.
//!
//! # Architecture
//!
//! ```text
//! Provider rows → normalizer (day filter, tz localization, tier mapping)
//!     ↓
//! Vec<Event>  (full day set, single source of truth)
//!     ↓
//! filter (currency set + min impact, pure, re-runnable)
//!     ↓
//! aggregator (per-tier density series + cumulative weighted score)
//!     ↓
//! chart (f64 datasets + axis bounds for the UI)
//! ```
//!
//! Every stage is synchronous and side-effect free; empty input at any stage
//! produces empty output, never an error.

pub mod aggregator;
pub mod chart;
pub mod event;
pub mod filter;
pub mod normalizer;

pub use aggregator::{aggregate, DensityPoint, ScorePoint, Timeline};
pub use chart::{build_chart, ChartModel, ChartWindow};
pub use event::{Event, Impact, ALL_DAY};
pub use filter::{filter_events, EventFilter};
pub use normalizer::{normalize_day, normalize_row, NormalizeError, RawEventRow, DAY_FORMAT};
