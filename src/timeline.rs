// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Two-phase assembly of a pass timeline.
//!
//! A [`PassTimeline`] holds one [`PositionRecord`] per [`Role`] and keeps
//! them ordered:
//!
//! ```text
//! rises ≤ starts ≤ highest ≤ ends ≤ sets
//! ```
//!
//! 1. **Summary**: [`set_summary`](PassTimeline::set_summary) stores
//!    `starts`, `highest` and `ends` from the pass listing.
//! 2. **Detail**: [`enrich_with_detail`](PassTimeline::enrich_with_detail)
//!    adds `rises` and `sets` and replaces the three summary records with
//!    enriched copies. The new state is built and validated aside and
//!    committed in one assignment; on error the timeline is left exactly
//!    as it was.

use crate::error::{Error, Result, RoleContext};
use crate::position::{PerRole, PositionDetail, PositionRecord, Role};
use crate::resolver::{resolve_rise, resolve_set, RolloverPolicy, RolloverWarning};
use crate::rows::DetailTable;
use crate::window::PassWindow;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

/// How far a timeline has been assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    /// Nothing resolved yet.
    Empty,
    /// `starts`, `highest` and `ends` are known.
    Summary,
    /// All five points are known and carry their detail attributes.
    Detailed,
}

/// The ordered points of one pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PassTimeline {
    records: PerRole<Option<PositionRecord>>,
    warnings: Vec<RolloverWarning>,
}

/// Check that the present records are non-decreasing in time.
fn check_order(records: &PerRole<Option<PositionRecord>>) -> Result<()> {
    let present: Vec<(Role, &PositionRecord)> = records
        .iter()
        .filter_map(|(role, rec)| rec.as_ref().map(|r| (role, r)))
        .collect();

    for pair in present.windows(2) {
        let (earlier, a) = pair[0];
        let (later, b) = pair[1];
        if a.timestamp() > b.timestamp() {
            return Err(Error::OrderingViolation {
                earlier,
                earlier_at: a.timestamp(),
                later,
                later_at: b.timestamp(),
            });
        }
    }
    Ok(())
}

impl PassTimeline {
    /// An empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.records[Role::Rises].is_some() && self.records[Role::Sets].is_some() {
            Phase::Detailed
        } else if self.records[Role::Starts].is_some() {
            Phase::Summary
        } else {
            Phase::Empty
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The record for `role`, or `None` if it has not been resolved.
    #[inline]
    pub fn get(&self, role: Role) -> Option<&PositionRecord> {
        self.records[role].as_ref()
    }

    #[inline]
    pub fn rises(&self) -> Option<&PositionRecord> {
        self.get(Role::Rises)
    }

    #[inline]
    pub fn starts(&self) -> Option<&PositionRecord> {
        self.get(Role::Starts)
    }

    #[inline]
    pub fn highest(&self) -> Option<&PositionRecord> {
        self.get(Role::Highest)
    }

    #[inline]
    pub fn ends(&self) -> Option<&PositionRecord> {
        self.get(Role::Ends)
    }

    #[inline]
    pub fn sets(&self) -> Option<&PositionRecord> {
        self.get(Role::Sets)
    }

    /// Resolved records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &PositionRecord)> {
        self.records
            .iter()
            .filter_map(|(role, rec)| rec.as_ref().map(|r| (role, r)))
    }

    /// Rollover notices raised while the detail phase was applied.
    pub fn rollover_warnings(&self) -> &[RolloverWarning] {
        &self.warnings
    }

    /// `starts` → `ends`, once the summary is resolved.
    pub fn visible_window(&self) -> Option<PassWindow> {
        self.window(Role::Starts, Role::Ends)
    }

    /// `rises` → `sets`, once the detail phase is applied.
    pub fn horizon_window(&self) -> Option<PassWindow> {
        self.window(Role::Rises, Role::Sets)
    }

    fn window(&self, from: Role, to: Role) -> Option<PassWindow> {
        let a = self.get(from)?;
        let b = self.get(to)?;
        PassWindow::new((from, a.timestamp()), (to, b.timestamp())).ok()
    }

    // ── phase 1 ───────────────────────────────────────────────────────

    /// Store the three summary records.
    ///
    /// Fails with [`Error::OrderingViolation`] unless
    /// `starts ≤ highest ≤ ends`. Any previously applied detail is dropped.
    pub fn set_summary(
        &mut self,
        starts: PositionRecord,
        highest: PositionRecord,
        ends: PositionRecord,
    ) -> Result<()> {
        let mut records = PerRole::default();
        records[Role::Starts] = Some(starts);
        records[Role::Highest] = Some(highest);
        records[Role::Ends] = Some(ends);
        check_order(&records)?;

        self.records = records;
        self.warnings.clear();
        Ok(())
    }

    // ── phase 2 ───────────────────────────────────────────────────────

    /// Insert `rises`/`sets` and attach detail attributes to the summary
    /// records.
    ///
    /// `details` supplies the attributes for `starts`, `highest` and `ends`;
    /// `rises` and `sets` are taken as given and must have altitude 0.
    /// Rollover warnings from an earlier [`apply_detail`](Self::apply_detail)
    /// are dropped with the records they described.
    /// All-or-nothing: on error the timeline keeps its previous state.
    pub fn enrich_with_detail(
        &mut self,
        rises: PositionRecord,
        sets: PositionRecord,
        details: &PerRole<PositionDetail>,
    ) -> Result<()> {
        for (role, rec) in [(Role::Rises, &rises), (Role::Sets, &sets)] {
            if rec.altitude() != 0 {
                return Err(Error::AltitudeOutOfRange(rec.altitude().into()).in_role(role));
            }
        }

        let mut records: PerRole<Option<PositionRecord>> = PerRole::default();
        for role in Role::SUMMARY {
            let current = self.get(role).ok_or(Error::MissingSummary)?;
            records[role] = Some(current.with_detail(&details[role]));
        }
        records[Role::Rises] = Some(rises);
        records[Role::Sets] = Some(sets);
        check_order(&records)?;

        self.records = records;
        self.warnings.clear();
        Ok(())
    }

    /// Resolve the detail table against this timeline and enrich it.
    ///
    /// Rise and set take their date from `starts` and are corrected
    /// according to `policy` (see [`resolve_rise`] and [`resolve_set`]).
    /// On success the rollover warnings are replaced by those raised for the
    /// committed rise and set; on error nothing changes.
    pub fn apply_detail(&mut self, table: &DetailTable, policy: RolloverPolicy) -> Result<()> {
        let starts = self.starts().ok_or(Error::MissingSummary)?.timestamp();
        let ends = self.ends().ok_or(Error::MissingSummary)?.timestamp();

        let rise = resolve_rise(table[Role::Rises].time, starts, policy).in_role(Role::Rises)?;
        let set = resolve_set(table[Role::Sets].time, starts, ends, policy).in_role(Role::Sets)?;

        let rises = PositionRecord::horizon(
            rise.timestamp,
            table[Role::Rises].azimuth.label.as_str(),
            &table[Role::Rises].detail,
        );
        let sets = PositionRecord::horizon(
            set.timestamp,
            table[Role::Sets].azimuth.label.as_str(),
            &table[Role::Sets].detail,
        );

        self.enrich_with_detail(rises, sets, &table.details())?;
        self.warnings = rise.warning.into_iter().chain(set.warning).collect();
        debug!(
            rises = %rise.timestamp,
            sets = %set.timestamp,
            warnings = self.warnings.len(),
            "pass detail applied"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(d: u32, h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, h, m, s).unwrap()
    }

    fn rec(ts: DateTime<Utc>, alt: u8, dir: &str) -> PositionRecord {
        PositionRecord::new(ts, alt, dir).unwrap()
    }

    fn summary() -> PassTimeline {
        let mut t = PassTimeline::new();
        t.set_summary(
            rec(at(15, 21, 0, 0), 10, "WSW"),
            rec(at(15, 21, 3, 30), 54, "S"),
            rec(at(15, 21, 6, 45), 10, "ESE"),
        )
        .unwrap();
        t
    }

    fn detail(deg: u16) -> PositionDetail {
        PositionDetail {
            direction_degrees: Some(deg),
            distance: Some(800),
            brightness: Some(-1.0),
            sun_altitude: Some(-15.0),
        }
    }

    fn details() -> PerRole<PositionDetail> {
        PerRole::from_fn(|role| detail(role.index() as u16 * 40))
    }

    #[test]
    fn empty_timeline_has_no_records() {
        let t = PassTimeline::new();
        assert_eq!(t.phase(), Phase::Empty);
        assert!(t.starts().is_none());
        assert_eq!(t.iter().count(), 0);
        assert!(t.visible_window().is_none());
    }

    #[test]
    fn summary_phase_stores_three_points() {
        let t = summary();
        assert_eq!(t.phase(), Phase::Summary);
        assert_eq!(t.highest().unwrap().altitude(), 54);
        assert!(t.rises().is_none() && t.sets().is_none());
        let roles: Vec<Role> = t.iter().map(|(r, _)| r).collect();
        assert_eq!(roles, Role::SUMMARY.to_vec());
        assert_eq!(
            t.visible_window().unwrap().duration(),
            chrono::TimeDelta::seconds(405)
        );
    }

    #[test]
    fn unordered_summary_is_rejected() {
        let mut t = PassTimeline::new();
        let err = t
            .set_summary(
                rec(at(15, 21, 0, 0), 10, "WSW"),
                rec(at(15, 20, 59, 0), 54, "S"),
                rec(at(15, 21, 6, 45), 10, "ESE"),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::OrderingViolation {
                earlier: Role::Starts,
                later: Role::Highest,
                ..
            }
        ));
        assert_eq!(t.phase(), Phase::Empty);
    }

    #[test]
    fn enrichment_replaces_and_inserts() {
        let mut t = summary();
        let rises = PositionRecord::horizon(at(15, 20, 57, 0), "W", &detail(260));
        let sets = PositionRecord::horizon(at(15, 21, 10, 0), "E", &detail(95));
        t.enrich_with_detail(rises, sets, &details()).unwrap();

        assert_eq!(t.phase(), Phase::Detailed);
        assert_eq!(t.iter().count(), 5);
        let highest = t.highest().unwrap();
        assert_eq!(highest.direction(), "S");
        assert_eq!(highest.direction_degrees(), Some(80));
        assert_eq!(highest.distance(), Some(800));
        assert_eq!(t.rises().unwrap().altitude(), 0);
        assert!(t.horizon_window().unwrap().contains(highest.timestamp()));
    }

    #[test]
    fn failed_enrichment_leaves_summary_untouched() {
        let mut t = summary();
        let before = t.clone();
        let rises = PositionRecord::horizon(at(15, 21, 1, 0), "W", &detail(260));
        let sets = PositionRecord::horizon(at(15, 21, 10, 0), "E", &detail(95));

        let err = t.enrich_with_detail(rises, sets, &details()).unwrap_err();
        assert!(matches!(err, Error::OrderingViolation { earlier: Role::Rises, .. }));
        assert_eq!(t, before);
        assert_eq!(t.phase(), Phase::Summary);
        assert!(!t.starts().unwrap().has_detail());
    }

    #[test]
    fn horizon_records_must_sit_at_zero_altitude() {
        let mut t = summary();
        let before = t.clone();
        let rises = rec(at(15, 20, 57, 0), 3, "W");
        let sets = PositionRecord::horizon(at(15, 21, 10, 0), "E", &detail(95));
        let err = t.enrich_with_detail(rises, sets, &details()).unwrap_err();
        assert_eq!(err.role(), Some(Role::Rises));
        assert_eq!(t, before);
    }

    #[test]
    fn enrichment_requires_summary() {
        let mut t = PassTimeline::new();
        let rises = PositionRecord::horizon(at(15, 20, 57, 0), "W", &detail(260));
        let sets = PositionRecord::horizon(at(15, 21, 10, 0), "E", &detail(95));
        assert_eq!(
            t.enrich_with_detail(rises, sets, &details()),
            Err(Error::MissingSummary)
        );
    }

    fn midnight_summary() -> PassTimeline {
        let mut t = PassTimeline::new();
        t.set_summary(
            rec(at(15, 23, 58, 0), 10, "WSW"),
            rec(at(16, 0, 2, 0), 54, "S"),
            rec(at(16, 0, 5, 0), 10, "ESE"),
        )
        .unwrap();
        t
    }

    fn midnight_table() -> DetailTable {
        let row = |label, time, alt| [label, time, alt, "180° (S)", "900 km", "-", "-15.0°"];
        DetailTable::from_rows(&[
            row("Rises", "23:55:00", "0°"),
            row("Visible", "23:58:00", "10°"),
            row("Maximum altitude", "00:02:00", "54°"),
            row("Disappears", "00:05:00", "10°"),
            row("Sets", "00:08:00", "0°"),
        ])
        .unwrap()
    }

    #[test]
    fn reapplying_detail_replaces_warnings() {
        let mut t = midnight_summary();
        let table = midnight_table();
        t.apply_detail(&table, RolloverPolicy::Corrected).unwrap();
        t.apply_detail(&table, RolloverPolicy::Corrected).unwrap();

        let warnings = t.rollover_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].corrected, t.sets().unwrap().timestamp());
    }

    #[test]
    fn direct_enrichment_drops_stale_warnings() {
        let mut t = midnight_summary();
        t.apply_detail(&midnight_table(), RolloverPolicy::Corrected).unwrap();
        assert_eq!(t.rollover_warnings().len(), 1);

        let rises = PositionRecord::horizon(at(15, 23, 55, 0), "W", &detail(260));
        let sets = PositionRecord::horizon(at(16, 0, 9, 0), "E", &detail(95));
        t.enrich_with_detail(rises, sets, &details()).unwrap();
        assert!(t.rollover_warnings().is_empty());
        assert_eq!(t.sets().unwrap().timestamp(), at(16, 0, 9, 0));
    }

    #[test]
    fn failed_reapply_keeps_previous_warnings() {
        let mut t = midnight_summary();
        t.apply_detail(&midnight_table(), RolloverPolicy::Corrected).unwrap();
        let before = t.clone();

        let err = t.apply_detail(&midnight_table(), RolloverPolicy::Legacy).unwrap_err();
        assert!(matches!(err, Error::OrderingViolation { later: Role::Sets, .. }));
        assert_eq!(t, before);
    }

    #[test]
    fn resetting_summary_drops_detail() {
        let mut t = summary();
        let rises = PositionRecord::horizon(at(15, 20, 57, 0), "W", &detail(260));
        let sets = PositionRecord::horizon(at(15, 21, 10, 0), "E", &detail(95));
        t.enrich_with_detail(rises, sets, &details()).unwrap();

        t.set_summary(
            rec(at(16, 21, 0, 0), 10, "WSW"),
            rec(at(16, 21, 3, 30), 54, "S"),
            rec(at(16, 21, 6, 45), 10, "ESE"),
        )
        .unwrap();
        assert_eq!(t.phase(), Phase::Summary);
        assert!(t.rises().is_none());
    }
}
