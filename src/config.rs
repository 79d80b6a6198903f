// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Resolution settings.
//!
//! With the `serde` feature a [`Config`] can be read from TOML:
//!
//! ```toml
//! rollover_policy = "corrected"
//! show_all = true
//! ```

use crate::clock::Clock;
use crate::resolver::{RolloverPolicy, TimestampResolver};

#[cfg(feature = "serde")]
use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;

/// Settings for resolving and querying passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Direction of the rise/set day correction.
    pub rollover_policy: RolloverPolicy,
    /// Query every pass, not only the visible ones.
    pub show_all: bool,
}

impl Config {
    pub fn with_rollover_policy(mut self, policy: RolloverPolicy) -> Self {
        self.rollover_policy = policy;
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// A resolver bound to `clock` under this configuration's policy.
    pub fn resolver<C: Clock>(&self, clock: C) -> TimestampResolver<C> {
        TimestampResolver::new(clock, self.rollover_policy)
    }
}

#[cfg(feature = "serde")]
impl Config {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(format!("failed to parse config: {e}")))
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Config(format!("failed to read config file: {e}")))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn default_is_legacy_visible_only() {
        let config = Config::default();
        assert_eq!(config.rollover_policy, RolloverPolicy::Legacy);
        assert!(!config.show_all);
    }

    #[test]
    fn resolver_inherits_policy() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());
        let config = Config::default().with_rollover_policy(RolloverPolicy::Corrected);
        assert_eq!(config.resolver(clock).policy(), RolloverPolicy::Corrected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_overrides_defaults() {
        let config = Config::from_toml_str("rollover_policy = \"corrected\"\n").unwrap();
        assert_eq!(config.rollover_policy, RolloverPolicy::Corrected);
        assert!(!config.show_all);

        let config = Config::from_toml_str("show_all = true").unwrap();
        assert_eq!(config.rollover_policy, RolloverPolicy::Legacy);
        assert!(config.show_all);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_policy_is_a_config_error() {
        let err = Config::from_toml_str("rollover_policy = \"backwards\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::from_file("/nonexistent/heavens-above.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
