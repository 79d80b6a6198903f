// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Points of a satellite pass.
//!
//! A pass is described by up to five timed points, each tagged with a
//! [`Role`]. Every point is a [`PositionRecord`]; the role carries the only
//! difference between them. Records are immutable: attaching the extended
//! attributes from the detail page produces a new record through
//! [`PositionRecord::with_detail`].

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use qtty::{Degrees, Kilometers};
use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Highest altitude a record may report, in degrees.
pub const MAX_ALTITUDE: u8 = 90;

// ═══════════════════════════════════════════════════════════════════════════
// Role
// ═══════════════════════════════════════════════════════════════════════════

/// The five points of a pass, in chronological order.
///
/// | Role | Meaning |
/// |------|---------|
/// | [`Role::Rises`] | crosses the true horizon (altitude 0) |
/// | [`Role::Starts`] | reaches 10° altitude |
/// | [`Role::Highest`] | maximum altitude |
/// | [`Role::Ends`] | drops back to 10° altitude |
/// | [`Role::Sets`] | crosses the true horizon again |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Rises,
    Starts,
    Highest,
    Ends,
    Sets,
}

impl Role {
    /// All roles in chronological order.
    pub const ALL: [Role; 5] = [Role::Rises, Role::Starts, Role::Highest, Role::Ends, Role::Sets];

    /// Roles reported by the pass summary listing.
    pub const SUMMARY: [Role; 3] = [Role::Starts, Role::Highest, Role::Ends];

    /// Position of this role in [`Role::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case label, as used in logs and serialised output.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Rises => "rises",
            Role::Starts => "starts",
            Role::Highest => "highest",
            Role::Ends => "ends",
            Role::Sets => "sets",
        }
    }

    /// `true` for the horizon crossings, which only the detail page reports.
    #[inline]
    pub const fn is_horizon(self) -> bool {
        matches!(self, Role::Rises | Role::Sets)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One value per [`Role`], indexed by role.
///
/// Serialises as a map keyed by the lowercase role name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerRole<T>([T; 5]);

impl<T> PerRole<T> {
    /// Build from a function evaluated for each role in order.
    pub fn from_fn(mut f: impl FnMut(Role) -> T) -> Self {
        Self(Role::ALL.map(&mut f))
    }

    /// Like [`from_fn`](Self::from_fn), stopping at the first error.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(Role) -> std::result::Result<T, E>,
    ) -> std::result::Result<Self, E> {
        let [rises, starts, highest, ends, sets] = Role::ALL;
        Ok(Self([f(rises)?, f(starts)?, f(highest)?, f(ends)?, f(sets)?]))
    }

    /// Iterate `(role, value)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().zip(self.0.iter())
    }

    /// Apply `f` to every value, keeping the role association.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PerRole<U> {
        PerRole(self.0.map(f))
    }
}

impl<T> Index<Role> for PerRole<T> {
    type Output = T;

    #[inline]
    fn index(&self, role: Role) -> &T {
        &self.0[role.index()]
    }
}

impl<T> IndexMut<Role> for PerRole<T> {
    #[inline]
    fn index_mut(&mut self, role: Role) -> &mut T {
        &mut self.0[role.index()]
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for PerRole<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Role::ALL.len()))?;
        for (role, value) in self.iter() {
            map.serialize_entry(&role, value)?;
        }
        map.end()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PositionDetail
// ═══════════════════════════════════════════════════════════════════════════

/// Extended attributes reported by the pass detail page for one point.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionDetail {
    /// Azimuth in whole degrees, `0..=359`.
    pub direction_degrees: Option<u16>,
    /// Slant range in kilometres.
    pub distance: Option<u32>,
    /// Visual magnitude; `None` when the site reports no brightness.
    pub brightness: Option<f64>,
    /// Altitude of the Sun in degrees (negative below the horizon).
    pub sun_altitude: Option<f64>,
}

// ═══════════════════════════════════════════════════════════════════════════
// PositionRecord
// ═══════════════════════════════════════════════════════════════════════════

/// A single point of a pass: when it happens and where the satellite is.
///
/// Summary records carry only `timestamp`, `altitude` and `direction`;
/// the remaining fields stay `None` until the detail page is applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PositionRecord {
    timestamp: DateTime<Utc>,
    altitude: u8,
    direction: String,
    direction_degrees: Option<u16>,
    distance: Option<u32>,
    brightness: Option<f64>,
    sun_altitude: Option<f64>,
}

impl PositionRecord {
    // ── constructors ──────────────────────────────────────────────────

    /// Create a summary record.
    ///
    /// Fails with [`Error::AltitudeOutOfRange`] if `altitude` exceeds 90°.
    pub fn new(
        timestamp: DateTime<Utc>,
        altitude: u8,
        direction: impl Into<String>,
    ) -> Result<Self> {
        if altitude > MAX_ALTITUDE {
            return Err(Error::AltitudeOutOfRange(altitude.into()));
        }
        Ok(Self {
            timestamp,
            altitude,
            direction: direction.into(),
            direction_degrees: None,
            distance: None,
            brightness: None,
            sun_altitude: None,
        })
    }

    /// Create a fully populated horizon crossing (altitude 0).
    pub fn horizon(
        timestamp: DateTime<Utc>,
        direction: impl Into<String>,
        detail: &PositionDetail,
    ) -> Self {
        Self {
            timestamp,
            altitude: 0,
            direction: direction.into(),
            direction_degrees: None,
            distance: None,
            brightness: None,
            sun_altitude: None,
        }
        .with_detail(detail)
    }

    /// Return a copy of this record carrying the detail-page attributes.
    ///
    /// Timestamp, altitude and direction label are kept from `self`.
    pub fn with_detail(&self, detail: &PositionDetail) -> Self {
        Self {
            timestamp: self.timestamp,
            altitude: self.altitude,
            direction: self.direction.clone(),
            direction_degrees: detail.direction_degrees,
            distance: detail.distance,
            brightness: detail.brightness,
            sun_altitude: detail.sun_altitude,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Altitude above the horizon in whole degrees.
    #[inline]
    pub fn altitude(&self) -> u8 {
        self.altitude
    }

    /// Compass label such as `"NNE"`.
    #[inline]
    pub fn direction(&self) -> &str {
        &self.direction
    }

    #[inline]
    pub fn direction_degrees(&self) -> Option<u16> {
        self.direction_degrees
    }

    /// Slant range in kilometres.
    #[inline]
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// Visual magnitude. Lower is brighter.
    #[inline]
    pub fn brightness(&self) -> Option<f64> {
        self.brightness
    }

    #[inline]
    pub fn sun_altitude(&self) -> Option<f64> {
        self.sun_altitude
    }

    /// `true` once the detail-page attributes are attached.
    pub fn has_detail(&self) -> bool {
        self.direction_degrees.is_some() || self.distance.is_some() || self.sun_altitude.is_some()
    }

    // ── typed quantities ──────────────────────────────────────────────

    /// Altitude as an angle.
    pub fn altitude_angle(&self) -> Degrees {
        Degrees::new(f64::from(self.altitude))
    }

    /// Azimuth as an angle, when reported.
    pub fn azimuth(&self) -> Option<Degrees> {
        self.direction_degrees.map(|d| Degrees::new(f64::from(d)))
    }

    /// Slant range as a length, when reported.
    pub fn slant_range(&self) -> Option<Kilometers> {
        self.distance.map(|d| Kilometers::new(f64::from(d)))
    }
}

impl fmt::Display for PositionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}° {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.altitude,
            self.direction
        )
    }
}
