// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Timestamp reconstruction
//!
//! The pass pages report time in fragments: a day-of-month, an abbreviated
//! month name and a time of day, never a year. The detail page drops the
//! date entirely. This module turns those fragments into absolute UTC
//! instants.
//!
//! ## Summary fragments
//!
//! [`resolve`] builds `(year, month, day, time)` and applies one rollover
//! rule:
//!
//! - **with an anchor**: the year is the anchor's. An instant strictly
//!   earlier than the anchor is moved forward one calendar day, which keeps
//!   a `start → highest → end` chain ordered when it crosses midnight; if
//!   that is still too early the next year holding the date is used. The
//!   result is never earlier than the anchor.
//! - **without an anchor**: the year is `reference_now`'s. An instant more
//!   than one day older than `reference_now` is moved into the following
//!   year, so a pass listed on `01 Jan` while it is still December resolves
//!   to next January.
//!
//! [`resolve_summary_chain`] applies this to the three summary times,
//! anchoring each on the previous one.
//!
//! ## Detail times
//!
//! [`resolve_rise`] and [`resolve_set`] combine a bare time of day with the
//! date of the already resolved start. The day correction that follows is
//! selected by [`RolloverPolicy`]; whenever it fires a [`RolloverWarning`]
//! is logged and returned, because the direction of the legacy correction
//! has not been confirmed against live data.
//!
//! ## Quick Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use heavens_above::{resolve, Fragment};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
//! let fragment = Fragment::new("15", "Jun", "09:00:00");
//! let ts = resolve(&fragment, None, now).unwrap();
//! assert_eq!(ts, Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap());
//! ```

use crate::clock::Clock;
use crate::error::{Error, Result, RoleContext};
use crate::position::Role;
use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveTime, TimeDelta, Utc};
use std::fmt;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How far ahead to look for the next valid occurrence of a day/month
/// (29 Feb recurs at most eight years later).
const YEAR_SEARCH_SPAN: i32 = 8;

// ═══════════════════════════════════════════════════════════════════════════
// Fragments
// ═══════════════════════════════════════════════════════════════════════════

/// A day/month/time triple as read from a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Day of month, 1–2 digits.
    pub day: &'a str,
    /// Three-letter English month abbreviation.
    pub month: &'a str,
    /// `HH:MM` or `HH:MM:SS`.
    pub time: &'a str,
}

impl<'a> Fragment<'a> {
    #[inline]
    pub const fn new(day: &'a str, month: &'a str, time: &'a str) -> Self {
        Self { day, month, time }
    }
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.time)
    }
}

/// Parse a 1–2 digit day of month.
pub fn parse_day(day: &str) -> Result<u32> {
    let day = day.trim();
    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::format("day", day, "expected 1-2 digits"));
    }
    match day.parse::<u32>() {
        Ok(d @ 1..=31) => Ok(d),
        _ => Err(Error::format("day", day, "day of month out of range")),
    }
}

/// Parse a three-letter month abbreviation (`Jan` … `Dec`).
pub fn parse_month(month: &str) -> Result<Month> {
    let month = month.trim();
    if month.len() != 3 || !month.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(Error::format("month", month, "expected a 3-letter abbreviation"));
    }
    month
        .parse::<Month>()
        .map_err(|_| Error::format("month", month, "unknown month abbreviation"))
}

/// Parse `HH:MM` (seconds assumed 0) or `HH:MM:SS`.
pub fn parse_time_of_day(time: &str) -> Result<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| Error::format("time", time, "expected HH:MM or HH:MM:SS"))
}

/// `year-month-day time` as a UTC instant, if the calendar date exists.
fn civil(year: i32, month: Month, day: u32, time: NaiveTime) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
        .map(|d| d.and_time(time).and_utc())
}

fn out_of_range(value: String) -> Error {
    Error::format("date", value, "outside the representable date range")
}

fn no_such_date(fragment: &Fragment<'_>, year: i32) -> Error {
    Error::format(
        "date",
        fragment.to_string(),
        format!("no such calendar date in or after {year}"),
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Operation A: summary fragments
// ═══════════════════════════════════════════════════════════════════════════

/// Resolve a day/month/time fragment to an absolute UTC instant.
///
/// See the [module documentation](self) for the rollover rules. When an
/// anchor is supplied the year is taken from the anchor, so a chain that
/// crosses New Year keeps its order; the result is guaranteed to be
/// `>= anchor`.
///
/// Fails with [`Error::Format`] for an unknown month, a malformed time or a
/// day that does not exist in the month.
pub fn resolve(
    fragment: &Fragment<'_>,
    anchor: Option<DateTime<Utc>>,
    reference_now: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let day = parse_day(fragment.day)?;
    let month = parse_month(fragment.month)?;
    let time = parse_time_of_day(fragment.time)?;

    match anchor {
        Some(anchor) => resolve_after(fragment, anchor, month, day, time),
        None => resolve_near(fragment, reference_now, month, day, time),
    }
}

fn resolve_near(
    fragment: &Fragment<'_>,
    reference_now: DateTime<Utc>,
    month: Month,
    day: u32,
    time: NaiveTime,
) -> Result<DateTime<Utc>> {
    let year = reference_now.year();
    let ts = civil(year, month, day, time).ok_or_else(|| no_such_date(fragment, year))?;

    let stale_before = reference_now
        .checked_sub_signed(TimeDelta::days(1))
        .ok_or_else(|| out_of_range(fragment.to_string()))?;
    if ts < stale_before {
        let next = civil(year + 1, month, day, time)
            .ok_or_else(|| no_such_date(fragment, year + 1))?;
        debug!(%fragment, from = %ts, to = %next, "year rollover");
        return Ok(next);
    }
    Ok(ts)
}

fn resolve_after(
    fragment: &Fragment<'_>,
    anchor: DateTime<Utc>,
    month: Month,
    day: u32,
    time: NaiveTime,
) -> Result<DateTime<Utc>> {
    let year = anchor.year();
    if let Some(ts) = civil(year, month, day, time) {
        if ts >= anchor {
            return Ok(ts);
        }
        if let Some(next_day) = ts
            .checked_add_signed(TimeDelta::days(1))
            .filter(|next| *next >= anchor)
        {
            debug!(%fragment, %anchor, to = %next_day, "midnight rollover");
            return Ok(next_day);
        }
    }

    // The fragment's date lies before the anchor's: take its next occurrence.
    let next = (year + 1..=year + YEAR_SEARCH_SPAN)
        .find_map(|y| civil(y, month, day, time))
        .ok_or_else(|| no_such_date(fragment, year))?;
    debug!(%fragment, %anchor, to = %next, "year rollover past anchor");
    Ok(next)
}

/// Resolve the summary `start → highest → end` times of one pass.
///
/// Each time is anchored on the previous one, so the result is ordered even
/// when the pass crosses midnight. Errors are tagged with the role they
/// occurred in.
pub fn resolve_summary_chain(
    day: &str,
    month: &str,
    times: [&str; 3],
    reference_now: DateTime<Utc>,
) -> Result<[DateTime<Utc>; 3]> {
    let [start_t, highest_t, end_t] = times;

    let starts = resolve(&Fragment::new(day, month, start_t), None, reference_now)
        .in_role(Role::Starts)?;
    let highest = resolve(&Fragment::new(day, month, highest_t), Some(starts), reference_now)
        .in_role(Role::Highest)?;
    let ends = resolve(&Fragment::new(day, month, end_t), Some(highest), reference_now)
        .in_role(Role::Ends)?;

    Ok([starts, highest, ends])
}

// ═══════════════════════════════════════════════════════════════════════════
// Operation B: detail times
// ═══════════════════════════════════════════════════════════════════════════

/// Direction of the day correction applied to rise/set times.
///
/// | Policy | rise later than start | set earlier than end |
/// |--------|-----------------------|----------------------|
/// | [`Legacy`](RolloverPolicy::Legacy) | add one day | subtract one day |
/// | [`Corrected`](RolloverPolicy::Corrected) | subtract one day | add one day |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RolloverPolicy {
    /// Adds a day to a late rise and subtracts one from an early set.
    #[default]
    Legacy,
    /// Moves rise before start and set after end.
    Corrected,
}

/// Notice that a rise/set day correction was applied.
///
/// Not an error: the corrected value is used, but the pass should be
/// audited until the correction direction is confirmed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RolloverWarning {
    pub role: Role,
    pub policy: RolloverPolicy,
    /// Instant the correction was compared against (start for rise, end for set).
    pub anchor: DateTime<Utc>,
    /// Candidate before correction.
    pub naive: DateTime<Utc>,
    /// Value actually used.
    pub corrected: DateTime<Utc>,
}

impl fmt::Display for RolloverWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} moved from {} to {} against {} ({:?} policy)",
            self.role, self.naive, self.corrected, self.anchor, self.policy
        )
    }
}

/// A detail-page instant plus the warning raised while resolving it.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonResolution {
    pub timestamp: DateTime<Utc>,
    pub warning: Option<RolloverWarning>,
}

fn corrected(
    role: Role,
    policy: RolloverPolicy,
    anchor: DateTime<Utc>,
    naive: DateTime<Utc>,
    shift: TimeDelta,
) -> Result<HorizonResolution> {
    let timestamp = naive
        .checked_add_signed(shift)
        .ok_or_else(|| out_of_range(naive.to_string()))?;
    let warning = RolloverWarning {
        role,
        policy,
        anchor,
        naive,
        corrected: timestamp,
    };
    warn!(%role, ?policy, %anchor, %naive, corrected = %timestamp, "ambiguous horizon rollover");
    Ok(HorizonResolution {
        timestamp,
        warning: Some(warning),
    })
}

/// Resolve the rise time against the resolved start.
///
/// The candidate takes its date from `starts`; if it is later than `starts`
/// a one-day correction is applied in the direction chosen by `policy`.
///
/// Fails with [`Error::Format`] only if the correction leaves chrono's range.
pub fn resolve_rise(
    time: NaiveTime,
    starts: DateTime<Utc>,
    policy: RolloverPolicy,
) -> Result<HorizonResolution> {
    let naive = starts.date_naive().and_time(time).and_utc();
    if naive <= starts {
        return Ok(HorizonResolution {
            timestamp: naive,
            warning: None,
        });
    }
    let shift = match policy {
        RolloverPolicy::Legacy => TimeDelta::days(1),
        RolloverPolicy::Corrected => TimeDelta::days(-1),
    };
    corrected(Role::Rises, policy, starts, naive, shift)
}

/// Resolve the set time against the resolved end.
///
/// The candidate takes its date from `starts`; if it is earlier than `ends`
/// a one-day correction is applied in the direction chosen by `policy`.
pub fn resolve_set(
    time: NaiveTime,
    starts: DateTime<Utc>,
    ends: DateTime<Utc>,
    policy: RolloverPolicy,
) -> Result<HorizonResolution> {
    let naive = starts.date_naive().and_time(time).and_utc();
    if naive >= ends {
        return Ok(HorizonResolution {
            timestamp: naive,
            warning: None,
        });
    }
    let shift = match policy {
        RolloverPolicy::Legacy => TimeDelta::days(-1),
        RolloverPolicy::Corrected => TimeDelta::days(1),
    };
    corrected(Role::Sets, policy, ends, naive, shift)
}

// ═══════════════════════════════════════════════════════════════════════════
// TimestampResolver
// ═══════════════════════════════════════════════════════════════════════════

/// Resolver bound to a clock and a rollover policy.
///
/// Thin convenience over the free functions: every call reads
/// `clock.now()` once and passes it on as `reference_now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampResolver<C> {
    clock: C,
    policy: RolloverPolicy,
}

impl<C: Clock> TimestampResolver<C> {
    pub fn new(clock: C, policy: RolloverPolicy) -> Self {
        Self { clock, policy }
    }

    #[inline]
    pub fn policy(&self) -> RolloverPolicy {
        self.policy
    }

    #[inline]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// [`resolve`] with `reference_now` taken from the clock.
    pub fn resolve(
        &self,
        fragment: &Fragment<'_>,
        anchor: Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>> {
        resolve(fragment, anchor, self.clock.now())
    }

    /// [`resolve_summary_chain`] with `reference_now` taken from the clock.
    pub fn resolve_summary_chain(
        &self,
        day: &str,
        month: &str,
        times: [&str; 3],
    ) -> Result<[DateTime<Utc>; 3]> {
        resolve_summary_chain(day, month, times, self.clock.now())
    }

    /// [`resolve_rise`] under this resolver's policy.
    pub fn resolve_rise(
        &self,
        time: NaiveTime,
        starts: DateTime<Utc>,
    ) -> Result<HorizonResolution> {
        resolve_rise(time, starts, self.policy)
    }

    /// [`resolve_set`] under this resolver's policy.
    pub fn resolve_set(
        &self,
        time: NaiveTime,
        starts: DateTime<Utc>,
        ends: DateTime<Utc>,
    ) -> Result<HorizonResolution> {
        resolve_set(time, starts, ends, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    // ── fragment parsing ──────────────────────────────────────────────

    #[test]
    fn month_abbreviations_parse() {
        assert_eq!(parse_month("Jan").unwrap(), Month::January);
        assert_eq!(parse_month("Dec").unwrap(), Month::December);
        assert!(matches!(parse_month("Foo"), Err(Error::Format { field: "month", .. })));
        assert!(parse_month("June").is_err());
        assert!(parse_month("").is_err());
    }

    #[test]
    fn time_accepts_minutes_or_seconds() {
        assert_eq!(parse_time_of_day("21:03").unwrap(), hms(21, 3, 0));
        assert_eq!(parse_time_of_day("21:03:30").unwrap(), hms(21, 3, 30));
        assert!(matches!(parse_time_of_day("9pm"), Err(Error::Format { field: "time", .. })));
        assert!(parse_time_of_day("25:00").is_err());
    }

    #[test]
    fn day_must_be_one_or_two_digits() {
        assert_eq!(parse_day("01").unwrap(), 1);
        assert_eq!(parse_day("7").unwrap(), 7);
        assert!(parse_day("0").is_err());
        assert!(parse_day("32").is_err());
        assert!(parse_day("123").is_err());
        assert!(parse_day("x1").is_err());
    }

    // ── Operation A ───────────────────────────────────────────────────

    #[test]
    fn past_date_rolls_into_next_year() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let ts = resolve(&Fragment::new("01", "Jun", "00:00:00"), None, now).unwrap();
        assert_eq!(ts, utc(2025, 6, 1, 0, 0, 0));
    }

    #[test]
    fn near_future_date_keeps_year() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let ts = resolve(&Fragment::new("15", "Jun", "09:00:00"), None, now).unwrap();
        assert_eq!(ts, utc(2024, 6, 15, 9, 0, 0));
    }

    #[test]
    fn date_within_the_last_day_keeps_year() {
        let now = utc(2024, 6, 10, 12, 0, 0);
        let ts = resolve(&Fragment::new("09", "Jun", "12:00"), None, now).unwrap();
        assert_eq!(ts, utc(2024, 6, 9, 12, 0, 0));
    }

    #[test]
    fn january_pass_listed_in_december() {
        let now = utc(2024, 12, 30, 18, 0, 0);
        let ts = resolve(&Fragment::new("2", "Jan", "05:10"), None, now).unwrap();
        assert_eq!(ts, utc(2025, 1, 2, 5, 10, 0));
    }

    #[test]
    fn anchor_forces_next_day() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let anchor = utc(2024, 6, 15, 23, 58, 0);
        let ts = resolve(&Fragment::new("15", "Jun", "00:02"), Some(anchor), now).unwrap();
        assert_eq!(ts, utc(2024, 6, 16, 0, 2, 0));
    }

    #[test]
    fn anchor_equal_is_not_rolled() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let anchor = utc(2024, 6, 15, 21, 0, 0);
        let ts = resolve(&Fragment::new("15", "Jun", "21:00"), Some(anchor), now).unwrap();
        assert_eq!(ts, anchor);
    }

    #[test]
    fn anchor_across_new_year() {
        let now = utc(2024, 12, 30, 0, 0, 0);
        let starts = resolve(&Fragment::new("31", "Dec", "23:58"), None, now).unwrap();
        let highest = resolve(&Fragment::new("31", "Dec", "00:02"), Some(starts), now).unwrap();
        assert_eq!(highest, utc(2025, 1, 1, 0, 2, 0));
    }

    #[test]
    fn anchor_far_after_fragment_moves_to_next_occurrence() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let anchor = utc(2024, 6, 10, 0, 0, 0);
        let ts = resolve(&Fragment::new("01", "Jan", "00:00"), Some(anchor), now).unwrap();
        assert_eq!(ts, utc(2025, 1, 1, 0, 0, 0));
    }

    #[test]
    fn nonexistent_day_is_a_format_error() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let err = resolve(&Fragment::new("31", "Apr", "10:00"), None, now).unwrap_err();
        assert!(matches!(err, Error::Format { field: "date", .. }));
    }

    // ── chain ─────────────────────────────────────────────────────────

    #[test]
    fn chain_without_midnight() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let [s, h, e] =
            resolve_summary_chain("15", "Jun", ["21:00:00", "21:03:30", "21:06:45"], now).unwrap();
        assert!(s <= h && h <= e);
        assert_eq!(s.date_naive(), e.date_naive());
        let ticks = |t| crate::to_serial(t).unwrap();
        assert_eq!(ticks(e) - ticks(s), 405 * 10_000_000);
    }

    #[test]
    fn chain_across_midnight() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let [s, h, e] =
            resolve_summary_chain("15", "Jun", ["23:58:00", "00:02:00", "00:05:00"], now).unwrap();
        assert_eq!(s, utc(2024, 6, 15, 23, 58, 0));
        assert_eq!(h, utc(2024, 6, 16, 0, 2, 0));
        assert_eq!(e, utc(2024, 6, 16, 0, 5, 0));
    }

    #[test]
    fn chain_error_names_role() {
        let now = utc(2024, 6, 10, 0, 0, 0);
        let err = resolve_summary_chain("15", "Jun", ["21:00", "21:0x", "21:06"], now).unwrap_err();
        assert_eq!(err.role(), Some(Role::Highest));
    }

    // ── Operation B ───────────────────────────────────────────────────

    #[test]
    fn rise_before_start_is_unchanged() {
        let starts = utc(2024, 6, 15, 21, 0, 0);
        let r = resolve_rise(hms(20, 57, 10), starts, RolloverPolicy::Legacy).unwrap();
        assert_eq!(r.timestamp, utc(2024, 6, 15, 20, 57, 10));
        assert!(r.warning.is_none());
    }

    #[test]
    fn rise_after_start_legacy_adds_a_day() {
        let starts = utc(2024, 6, 16, 0, 1, 0);
        let r = resolve_rise(hms(23, 58, 30), starts, RolloverPolicy::Legacy).unwrap();
        assert_eq!(r.timestamp, utc(2024, 6, 17, 23, 58, 30));
        let warning = r.warning.unwrap();
        assert_eq!(warning.role, Role::Rises);
        assert_eq!(warning.naive, utc(2024, 6, 16, 23, 58, 30));
    }

    #[test]
    fn rise_after_start_corrected_subtracts_a_day() {
        let starts = utc(2024, 6, 16, 0, 1, 0);
        let r = resolve_rise(hms(23, 58, 30), starts, RolloverPolicy::Corrected).unwrap();
        assert_eq!(r.timestamp, utc(2024, 6, 15, 23, 58, 30));
        assert!(r.warning.is_some());
    }

    #[test]
    fn set_before_end_legacy_subtracts_a_day() {
        let starts = utc(2024, 6, 15, 23, 58, 0);
        let ends = utc(2024, 6, 16, 0, 5, 0);
        let r = resolve_set(hms(0, 8, 0), starts, ends, RolloverPolicy::Legacy).unwrap();
        assert_eq!(r.timestamp, utc(2024, 6, 14, 0, 8, 0));
        assert_eq!(r.warning.unwrap().anchor, ends);
    }

    #[test]
    fn set_before_end_corrected_adds_a_day() {
        let starts = utc(2024, 6, 15, 23, 58, 0);
        let ends = utc(2024, 6, 16, 0, 5, 0);
        let r = resolve_set(hms(0, 8, 0), starts, ends, RolloverPolicy::Corrected).unwrap();
        assert_eq!(r.timestamp, utc(2024, 6, 16, 0, 8, 0));
    }

    #[test]
    fn set_after_end_is_unchanged() {
        let starts = utc(2024, 6, 15, 21, 0, 0);
        let ends = utc(2024, 6, 15, 21, 6, 45);
        let r = resolve_set(hms(21, 9, 0), starts, ends, RolloverPolicy::Legacy).unwrap();
        assert_eq!(r.timestamp, utc(2024, 6, 15, 21, 9, 0));
        assert!(r.warning.is_none());
    }

    #[test]
    fn corrections_past_chrono_range_are_errors() {
        let last = DateTime::<Utc>::MAX_UTC;
        let err = resolve_set(hms(0, 0, 0), last, last, RolloverPolicy::Corrected).unwrap_err();
        assert!(matches!(err, Error::Format { field: "date", .. }));

        let first = DateTime::<Utc>::MIN_UTC;
        let err = resolve_rise(hms(0, 0, 1), first, RolloverPolicy::Corrected).unwrap_err();
        assert!(matches!(err, Error::Format { field: "date", .. }));
    }

    #[test]
    fn fragments_at_chrono_limits_do_not_panic() {
        let last = DateTime::<Utc>::MAX_UTC;
        let err = resolve(&Fragment::new("31", "Dec", "00:00"), Some(last), last).unwrap_err();
        assert!(matches!(err, Error::Format { field: "date", .. }));

        let first = DateTime::<Utc>::MIN_UTC;
        assert!(resolve(&Fragment::new("01", "Jan", "00:00"), None, first).is_err());
    }

    #[test]
    fn resolver_reads_its_clock() {
        let clock = FixedClock(utc(2024, 6, 10, 0, 0, 0));
        let resolver = TimestampResolver::new(clock, RolloverPolicy::Corrected);
        let ts = resolver.resolve(&Fragment::new("01", "Jun", "00:00"), None).unwrap();
        assert_eq!(ts.year(), 2025);
        assert_eq!(resolver.policy(), RolloverPolicy::Corrected);
    }
}
