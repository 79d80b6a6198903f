// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Raw table rows handed over by the page extractor.
//!
//! The extractor supplies each table cell as plain text. This module checks
//! the cell count, parses every value eagerly and keeps the result in typed
//! form. A missing or unparsable cell is fatal for the row; nothing is
//! defaulted.
//!
//! ## Summary row (12 columns)
//! ```text
//! 0 date "27 Dec"   1 brightness   2 start time    3 start alt    4 start dir
//! 5 highest time    6 highest alt  7 highest dir   8 end time     9 end alt
//! 10 end dir        11 pass type
//! ```
//!
//! ## Detail table (5 rows × 7 columns)
//! Rows in role order `rises, starts, highest, ends, sets`:
//! ```text
//! 0 label  1 time HH:MM:SS  2 altitude  3 "deg° (DIR)"  4 distance
//! 5 brightness  6 sun altitude
//! ```

use crate::error::{Error, Result, RoleContext};
use crate::grammar::{
    parse_altitude, parse_azimuth, parse_brightness, parse_distance, parse_sun_altitude,
    split_day_month, Azimuth,
};
use crate::position::{PerRole, PositionDetail, PositionRecord, Role};
use crate::resolver::{parse_day, parse_month, parse_time_of_day, resolve_summary_chain};
use crate::timeline::PassTimeline;
use chrono::{DateTime, NaiveTime, Utc};
use std::ops::Index;

/// Cells in one pass-summary row.
pub const SUMMARY_COLUMNS: usize = 12;

/// Rows in the pass-detail table.
pub const DETAIL_ROWS: usize = 5;

/// Cells in one pass-detail row.
pub const DETAIL_COLUMNS: usize = 7;

fn cell<'a, S: AsRef<str>>(
    cells: &'a [S],
    table: &'static str,
    row: usize,
    column: usize,
) -> Result<&'a str> {
    cells
        .get(column)
        .map(|c| c.as_ref().trim())
        .ok_or(Error::MissingCell { table, row, column })
}

// ═══════════════════════════════════════════════════════════════════════════
// Summary
// ═══════════════════════════════════════════════════════════════════════════

/// One of the three points listed in a summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPoint {
    /// Raw `HH:MM[:SS]` text, validated.
    pub time: String,
    pub altitude: u8,
    /// Compass label.
    pub direction: String,
}

/// A parsed pass-summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Day of month, validated.
    pub day: String,
    /// Month abbreviation, validated.
    pub month: String,
    /// Peak magnitude; `None` when the site reports `-`.
    pub brightness: Option<f64>,
    /// `starts`, `highest`, `ends`, in that order.
    pub points: [SummaryPoint; 3],
    /// Pass classification such as `"visible"`.
    pub pass_type: String,
}

impl SummaryRow {
    /// Parse the twelve cells of a summary row.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self> {
        const TABLE: &str = "summary";
        if cells.len() < SUMMARY_COLUMNS {
            return Err(Error::MissingCell {
                table: TABLE,
                row: 0,
                column: cells.len(),
            });
        }

        let date = cell(cells, TABLE, 0, 0)?;
        let (day, month) = split_day_month(date)?;
        parse_day(day)?;
        parse_month(month)?;

        let brightness = parse_brightness(cell(cells, TABLE, 0, 1)?)?;

        let points = [
            summary_point(cells, 2).in_role(Role::Starts)?,
            summary_point(cells, 5).in_role(Role::Highest)?,
            summary_point(cells, 8).in_role(Role::Ends)?,
        ];

        Ok(Self {
            day: day.to_owned(),
            month: month.to_owned(),
            brightness,
            points,
            pass_type: cell(cells, TABLE, 0, 11)?.to_owned(),
        })
    }

    /// The summary point for `role`, if the summary lists it.
    pub fn point(&self, role: Role) -> Option<&SummaryPoint> {
        match role {
            Role::Starts => Some(&self.points[0]),
            Role::Highest => Some(&self.points[1]),
            Role::Ends => Some(&self.points[2]),
            Role::Rises | Role::Sets => None,
        }
    }

    /// Resolve the three summary points into a phase-1 timeline.
    pub fn resolve(&self, reference_now: DateTime<Utc>) -> Result<PassTimeline> {
        let [s, h, e] = &self.points;
        let [starts, highest, ends] = resolve_summary_chain(
            &self.day,
            &self.month,
            [s.time.as_str(), h.time.as_str(), e.time.as_str()],
            reference_now,
        )?;

        let record = |role: Role, point: &SummaryPoint, at: DateTime<Utc>| {
            PositionRecord::new(at, point.altitude, point.direction.as_str()).in_role(role)
        };

        let mut timeline = PassTimeline::new();
        timeline.set_summary(
            record(Role::Starts, s, starts)?,
            record(Role::Highest, h, highest)?,
            record(Role::Ends, e, ends)?,
        )?;
        Ok(timeline)
    }
}

/// Parse the `time, altitude, direction` cells starting at column `first`.
fn summary_point<S: AsRef<str>>(cells: &[S], first: usize) -> Result<SummaryPoint> {
    let time = cell(cells, "summary", 0, first)?;
    parse_time_of_day(time)?;
    let altitude = parse_altitude(cell(cells, "summary", 0, first + 1)?)?;
    let direction = cell(cells, "summary", 0, first + 2)?;
    if direction.is_empty() {
        return Err(Error::extraction("direction", direction));
    }
    Ok(SummaryPoint {
        time: time.to_owned(),
        altitude,
        direction: direction.to_owned(),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Detail
// ═══════════════════════════════════════════════════════════════════════════

/// One parsed row of the pass-detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    /// Free-text row label as shown on the page.
    pub label: String,
    pub time: NaiveTime,
    pub altitude: u8,
    pub azimuth: Azimuth,
    pub detail: PositionDetail,
}

impl DetailRow {
    /// Parse the seven cells of detail row `row`.
    pub fn from_cells<S: AsRef<str>>(cells: &[S], row: usize) -> Result<Self> {
        const TABLE: &str = "detail";
        if cells.len() < DETAIL_COLUMNS {
            return Err(Error::MissingCell {
                table: TABLE,
                row,
                column: cells.len(),
            });
        }

        let azimuth = parse_azimuth(cell(cells, TABLE, row, 3)?)?;
        let detail = PositionDetail {
            direction_degrees: Some(azimuth.degrees),
            distance: Some(parse_distance(cell(cells, TABLE, row, 4)?)?),
            brightness: parse_brightness(cell(cells, TABLE, row, 5)?)?,
            sun_altitude: Some(parse_sun_altitude(cell(cells, TABLE, row, 6)?)?),
        };

        Ok(Self {
            label: cell(cells, TABLE, row, 0)?.to_owned(),
            time: parse_time_of_day(cell(cells, TABLE, row, 1)?)?,
            altitude: parse_altitude(cell(cells, TABLE, row, 2)?)?,
            azimuth,
            detail,
        })
    }
}

/// The five parsed rows of the pass-detail table, indexed by role.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailTable(PerRole<DetailRow>);

impl DetailTable {
    /// Parse the table rows, in role order.
    ///
    /// Errors are tagged with the role of the failing row.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        PerRole::try_from_fn(|role| {
            let row = role.index();
            let cells = rows
                .get(row)
                .ok_or(Error::MissingCell {
                    table: "detail",
                    row,
                    column: 0,
                })
                .in_role(role)?;
            DetailRow::from_cells(AsRef::<[S]>::as_ref(cells), row).in_role(role)
        })
        .map(Self)
    }

    /// Extended attributes of every row.
    pub fn details(&self) -> PerRole<PositionDetail> {
        PerRole::from_fn(|role| self.0[role].detail.clone())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &DetailRow)> {
        self.0.iter()
    }
}

impl Index<Role> for DetailTable {
    type Output = DetailRow;

    #[inline]
    fn index(&self, role: Role) -> &DetailRow {
        &self.0[role]
    }
}
