// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Heavens-Above pass timestamps
//!
//! This crate rebuilds complete UTC timestamps for satellite passes listed on
//! heavens-above.com, whose pages only show partial date and time fragments.
//!
//! # Core types
//!
//! - [`Fragment`] — `day`, `month`, `time` text as shown on a page.
//! - [`PositionRecord`] — one resolved point of a pass (timestamp, altitude, direction).
//! - [`PassTimeline`] — the five points `rises, starts, highest, ends, sets`,
//!   built in two phases and kept chronologically ordered.
//! - [`PassWindow`] — a `[start, end]` span between two points of a timeline.
//! - [`SerialTimestamp`] — the upstream 100 ns tick encoding used in queries.
//! - [`TimestampResolver`] — resolution bound to a [`Clock`] and a [`RolloverPolicy`].
//!
//! # Two phases
//!
//! The pass summary yields `starts`, `highest` and `ends`
//! ([`SummaryRow::resolve`]). The detail page later adds `rises` and `sets`
//! with distance, brightness and sun altitude ([`PassTimeline::apply_detail`]).
//! Enrichment is atomic: on error the timeline keeps its phase-1 state.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use heavens_above::{DetailTable, Phase, RolloverPolicy, SummaryRow};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
//! let summary = SummaryRow::from_cells(&[
//!     "15 Jun", "-2.3", "21:00:12", "10°", "WSW", "21:03:40", "54°", "S",
//!     "21:07:05", "10°", "ESE", "visible",
//! ])
//! .unwrap();
//! let mut timeline = summary.resolve(now).unwrap();
//! assert_eq!(timeline.phase(), Phase::Summary);
//!
//! let detail = DetailTable::from_rows(&[
//!     ["Rises", "20:57:10", "0°", "248° (WSW)", "2,190 km", "-", "-14.2°"],
//!     ["Visible", "21:00:12", "10°", "251° (WSW)", "1,420 km", "-0.9", "-14.5°"],
//!     ["Maximum altitude", "21:03:40", "54°", "178° (S)", "490 km", "-2.3", "-15.0°"],
//!     ["Disappears", "21:07:05", "10°", "105° (ESE)", "1,410 km", "-1.0", "-15.4°"],
//!     ["Sets", "21:10:02", "0°", "102° (ESE)", "2,200 km", "-", "-15.8°"],
//! ])
//! .unwrap();
//! timeline.apply_detail(&detail, RolloverPolicy::Legacy).unwrap();
//! assert_eq!(timeline.phase(), Phase::Detailed);
//! ```

mod clock;
mod config;
mod error;
pub mod grammar;
mod pass;
mod position;
pub mod query;
mod resolver;
mod rows;
pub mod serial;
mod timeline;
mod window;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use grammar::Azimuth;
pub use pass::{Observer, SatellitePass};
pub use position::{PerRole, PositionDetail, PositionRecord, Role, MAX_ALTITUDE};
pub use query::PassQuery;
pub use resolver::{
    parse_day, parse_month, parse_time_of_day, resolve, resolve_rise, resolve_set,
    resolve_summary_chain, Fragment, HorizonResolution, RolloverPolicy, RolloverWarning,
    TimestampResolver,
};
pub use rows::{
    DetailRow, DetailTable, SummaryPoint, SummaryRow, DETAIL_COLUMNS, DETAIL_ROWS,
    SUMMARY_COLUMNS,
};
pub use serial::{from_serial, to_serial, SerialTimestamp};
pub use timeline::{PassTimeline, Phase};
pub use window::PassWindow;
