// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for pass reconstruction.

use crate::position::Role;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type for heavens-above operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning page fragments into pass timelines.
///
/// Every variant is fatal to the record being built; nothing in the crate
/// retries. Non-fatal rollover notices are reported through
/// [`RolloverWarning`](crate::RolloverWarning) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An unparsable day, month or time-of-day fragment.
    #[error("invalid {field} fragment {value:?}: {reason}")]
    Format {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A text cell did not match its expected grammar.
    #[error("cannot extract {field} from {text:?}")]
    Extraction { field: &'static str, text: String },

    /// An altitude outside the `0..=90` degree range.
    #[error("altitude {0}° is outside 0..=90")]
    AltitudeOutOfRange(i64),

    /// Resolved records break the `rises ≤ starts ≤ highest ≤ ends ≤ sets` chain.
    #[error("{earlier} ({earlier_at}) is later than {later} ({later_at})")]
    OrderingViolation {
        earlier: Role,
        earlier_at: DateTime<Utc>,
        later: Role,
        later_at: DateTime<Utc>,
    },

    /// An instant whose serial tick count does not fit in an `i64`.
    #[error("{0} is outside the serial tick range")]
    SerialOutOfRange(DateTime<Utc>),

    /// A required table cell is absent.
    #[error("{table} table is missing row {row}, column {column}")]
    MissingCell {
        table: &'static str,
        row: usize,
        column: usize,
    },

    /// Detail data was applied to a timeline without a resolved summary.
    #[error("pass summary has not been resolved yet")]
    MissingSummary,

    /// Configuration text could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A fatal error tied to one point of the pass.
    #[error("{role}: {source}")]
    Row {
        role: Role,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn format(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::Format {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn extraction(field: &'static str, text: impl Into<String>) -> Self {
        Error::Extraction {
            field,
            text: text.into(),
        }
    }

    /// Attach the pass role this error occurred in.
    ///
    /// Errors that already carry a role are returned unchanged.
    pub fn in_role(self, role: Role) -> Self {
        match self {
            Error::Row { .. } => self,
            other => Error::Row {
                role,
                source: Box::new(other),
            },
        }
    }

    /// The role this error was attributed to, if any.
    pub fn role(&self) -> Option<Role> {
        match self {
            Error::Row { role, .. } => Some(*role),
            _ => None,
        }
    }
}

/// Extension for tagging a `Result` with the role it was produced for.
pub(crate) trait RoleContext<T> {
    fn in_role(self, role: Role) -> Result<T>;
}

impl<T> RoleContext<T> for Result<T> {
    #[inline]
    fn in_role(self, role: Role) -> Result<T> {
        self.map_err(|e| e.in_role(role))
    }
}
