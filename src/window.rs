// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC time window spanned by part of a pass.

use crate::error::{Error, Result};
use crate::position::Role;
use chrono::{DateTime, TimeDelta, Utc};
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Closed UTC interval `[start, end]` between two points of a pass.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use heavens_above::{PassWindow, Role};
///
/// let start = Utc.with_ymd_and_hms(2024, 6, 15, 21, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 6, 15, 21, 6, 45).unwrap();
/// let window = PassWindow::new((Role::Starts, start), (Role::Ends, end)).unwrap();
///
/// assert_eq!(window.duration_seconds().value(), 405.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PassWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PassWindow {
    /// Create a window between two role-tagged instants.
    ///
    /// Fails with [`Error::OrderingViolation`] if `start` is after `end`.
    pub fn new(start: (Role, DateTime<Utc>), end: (Role, DateTime<Utc>)) -> Result<Self> {
        if start.1 > end.1 {
            return Err(Error::OrderingViolation {
                earlier: start.0,
                earlier_at: start.1,
                later: end.0,
                later_at: end.1,
            });
        }
        Ok(Self {
            start: start.1,
            end: end.1,
        })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Duration in seconds, including the sub-second part.
    pub fn duration_seconds(&self) -> Seconds {
        let d = self.duration();
        Seconds::new(d.num_seconds() as f64 + f64::from(d.subsec_nanos()) / 1e9)
    }

    /// `true` if `instant` lies within the closed window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns the overlapping sub-window between `self` and `other`.
    ///
    /// Windows are treated as half-open ranges `[start, end)`: if one window
    /// ends exactly when the other starts, `None` is returned.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }
}

impl fmt::Display for PassWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d %H:%M:%S"),
            self.end.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
