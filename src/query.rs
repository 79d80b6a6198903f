// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Parameters of the upstream pass-summary query.
//!
//! Only the request contents live here; issuing it is the caller's job.
//! The search start is the one value encoded by this crate, as a
//! [`SerialTimestamp`].

use crate::clock::Clock;
use crate::config::Config;
use crate::error::Result;
use crate::pass::Observer;
use crate::serial::SerialTimestamp;
use chrono::{DateTime, Utc};

/// Site root.
pub const BASE_URL: &str = "https://www.heavens-above.com";

/// Pass listing page.
pub const PASS_SUMMARY_PATH: &str = "PassSummary.aspx";

/// Join a page path or relative detail link onto [`BASE_URL`].
pub fn page_url(link: &str) -> String {
    format!("{}/{}", BASE_URL, link.trim_start_matches('/'))
}

/// A pass-summary request for one satellite and observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassQuery {
    pub satellite_id: u32,
    pub observer: Observer,
    /// Search start.
    pub start: SerialTimestamp,
    /// List every pass rather than only the visible ones.
    pub show_all: bool,
}

impl PassQuery {
    /// Fails with [`Error::SerialOutOfRange`](crate::Error::SerialOutOfRange)
    /// if `start` cannot be encoded.
    pub fn new(satellite_id: u32, observer: Observer, start: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            satellite_id,
            observer,
            start: SerialTimestamp::try_from(start)?,
            show_all: false,
        })
    }

    /// A query starting at `clock.now()`, honouring `config.show_all`.
    pub fn starting_now(
        satellite_id: u32,
        observer: Observer,
        clock: &impl Clock,
        config: &Config,
    ) -> Result<Self> {
        Ok(Self::new(satellite_id, observer, clock.now())?.with_show_all(config.show_all))
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    pub fn url(&self) -> String {
        page_url(PASS_SUMMARY_PATH)
    }

    /// URL query parameters.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("satid", self.satellite_id.to_string()),
            ("lat", self.observer.latitude.to_string()),
            ("lng", self.observer.longitude.to_string()),
        ];
        if self.show_all {
            params.push(("showall", "t".to_owned()));
        }
        params
    }

    /// Form body fields.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("utcOffset", "0".to_owned()),
            ("ctl00$ddlCulture", "en".to_owned()),
            ("ctl00$cph1$hidStartUtc", self.start.to_string()),
        ]
    }
}
