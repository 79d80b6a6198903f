// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A single predicted pass of a satellite.

use crate::error::Result;
use crate::position::PositionRecord;
use crate::query::page_url;
use crate::resolver::RolloverPolicy;
use crate::rows::{DetailTable, SummaryRow};
use crate::timeline::PassTimeline;
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observer location. Passed through to the upstream query unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

impl Observer {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One pass of a satellite over an observer.
///
/// Built from a summary row; [`apply_detail`](Self::apply_detail) adds the
/// horizon crossings and extended attributes from the detail page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SatellitePass {
    satellite_id: u32,
    observer: Observer,
    brightness: Option<f64>,
    pass_type: String,
    link: String,
    timeline: PassTimeline,
}

impl SatellitePass {
    /// Resolve a summary row into a pass.
    pub fn from_summary(
        satellite_id: u32,
        observer: Observer,
        row: &SummaryRow,
        link: impl Into<String>,
        reference_now: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            satellite_id,
            observer,
            brightness: row.brightness,
            pass_type: row.pass_type.clone(),
            link: link.into(),
            timeline: row.resolve(reference_now)?,
        })
    }

    /// Apply the parsed detail page. On error the pass is left unchanged.
    pub fn apply_detail(&mut self, table: &DetailTable, policy: RolloverPolicy) -> Result<()> {
        self.timeline.apply_detail(table, policy)
    }

    #[inline]
    pub fn satellite_id(&self) -> u32 {
        self.satellite_id
    }

    #[inline]
    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// Peak magnitude during the pass. Lower is brighter.
    #[inline]
    pub fn brightness(&self) -> Option<f64> {
        self.brightness
    }

    /// Pass classification such as `"visible"` or `"daylight"`.
    #[inline]
    pub fn pass_type(&self) -> &str {
        &self.pass_type
    }

    /// Relative link to the detail page.
    #[inline]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Absolute URL of the detail page.
    pub fn detail_url(&self) -> String {
        page_url(&self.link)
    }

    #[inline]
    pub fn timeline(&self) -> &PassTimeline {
        &self.timeline
    }

    /// Convenience for `timeline().starts()`.
    pub fn starts(&self) -> Option<&PositionRecord> {
        self.timeline.starts()
    }
}

impl fmt::Display for SatellitePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timeline.starts() {
            Some(starts) => write!(
                f,
                "{}: {}",
                self.satellite_id,
                starts.timestamp().format("%Y-%m-%d %H:%M:%S")
            ),
            None => write!(f, "{}: unresolved", self.satellite_id),
        }
    }
}
