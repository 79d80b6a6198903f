// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Serial timestamps for the upstream query protocol.
//!
//! The pass-summary page takes its search start as an integer count of
//! 100-nanosecond ticks elapsed since `0001-01-01T00:00:00 UTC`:
//!
//! ```text
//! ticks = floor((t − 0001-01-01T00:00:00Z) / 100 ns)
//! ```
//!
//! The conversion is carried out in checked integer arithmetic: every instant
//! whose tick count fits in an `i64` round-trips exactly (to 100 ns), and
//! anything outside that span is rejected rather than clamped.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds in one tick.
const NANOS_PER_TICK: i64 = 100;

/// Unix seconds of `0001-01-01T00:00:00Z`, the serial epoch.
const SERIAL_EPOCH_UNIX_SECONDS: i64 = -62_135_596_800;

/// The serial epoch, `0001-01-01T00:00:00Z`.
pub fn serial_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(SERIAL_EPOCH_UNIX_SECONDS, 0)
        .expect("serial epoch is within chrono range")
}

/// Convert an absolute UTC instant to serial ticks.
///
/// Returns `None` for instants whose tick count does not fit in an `i64`
/// (roughly ±29 000 years around the epoch).
pub fn to_serial(timestamp: DateTime<Utc>) -> Option<i64> {
    let seconds = timestamp.timestamp().checked_sub(SERIAL_EPOCH_UNIX_SECONDS)?;
    let sub_ticks = i64::from(timestamp.timestamp_subsec_nanos()) / NANOS_PER_TICK;
    seconds.checked_mul(TICKS_PER_SECOND)?.checked_add(sub_ticks)
}

/// Convert serial ticks back to an absolute UTC instant.
///
/// Returns `None` if the value falls outside chrono's representable range.
pub fn from_serial(ticks: i64) -> Option<DateTime<Utc>> {
    let seconds = ticks.div_euclid(TICKS_PER_SECOND).checked_add(SERIAL_EPOCH_UNIX_SECONDS)?;
    let nanos = ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK;
    DateTime::<Utc>::from_timestamp(seconds, nanos as u32)
}

/// A timestamp encoded as serial ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SerialTimestamp(i64);

impl SerialTimestamp {
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Decode to a UTC instant.
    #[inline]
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        from_serial(self.0)
    }
}

impl TryFrom<DateTime<Utc>> for SerialTimestamp {
    type Error = Error;

    fn try_from(timestamp: DateTime<Utc>) -> Result<Self> {
        to_serial(timestamp)
            .map(Self)
            .ok_or(Error::SerialOutOfRange(timestamp))
    }
}

impl From<SerialTimestamp> for i64 {
    #[inline]
    fn from(serial: SerialTimestamp) -> Self {
        serial.0
    }
}

impl fmt::Display for SerialTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
