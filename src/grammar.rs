// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Field grammar for table cell text.
//!
//! The pass pages report values as free-form labels (`"123° (NNE)"`,
//! `"1,234 km"`, `"-12.5°"`). These parsers pull the typed value out of the
//! label and fail with [`Error::Extraction`] when the text does not match.
//!
//! | Field | Grammar | Absent value |
//! |-------|---------|--------------|
//! | azimuth | `<deg>° (<compass>)` | |
//! | altitude | first run of digits, `0..=90` | |
//! | distance | digits after stripping everything but `0-9 - .` | |
//! | sun altitude | same stripping, may be negative | |
//! | brightness | real magnitude | literal `-` |

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal the site uses when no brightness is reported.
pub const NO_BRIGHTNESS: &str = "-";

static AZIMUTH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)°\s*\(([NESW]{1,3})\)").expect("valid azimuth regex"));

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digits regex"));

/// Azimuth reported as whole degrees plus a compass label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Azimuth {
    /// `0..=359`
    pub degrees: u16,
    /// Compass point such as `"NNE"`.
    pub label: String,
}

/// Parse `"<deg>° (<compass>)"`.
pub fn parse_azimuth(text: &str) -> Result<Azimuth> {
    let caps = AZIMUTH_REGEX
        .captures(text)
        .ok_or_else(|| Error::extraction("azimuth", text))?;
    let degrees: u16 = caps[1]
        .parse()
        .map_err(|_| Error::extraction("azimuth", text))?;
    if degrees >= 360 {
        return Err(Error::extraction("azimuth", text));
    }
    Ok(Azimuth {
        degrees,
        label: caps[2].to_owned(),
    })
}

/// Parse an altitude label such as `"10°"`.
pub fn parse_altitude(text: &str) -> Result<u8> {
    let digits = DIGITS_REGEX
        .find(text)
        .ok_or_else(|| Error::extraction("altitude", text))?;
    let value: i64 = digits
        .as_str()
        .parse()
        .map_err(|_| Error::extraction("altitude", text))?;
    u8::try_from(value)
        .ok()
        .filter(|alt| *alt <= crate::position::MAX_ALTITUDE)
        .ok_or(Error::AltitudeOutOfRange(value))
}

/// Keep only digits, minus signs and decimal points.
fn numeric_residue(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect()
}

/// Parse a distance label such as `"1,234 km"` into whole kilometres.
pub fn parse_distance(text: &str) -> Result<u32> {
    numeric_residue(text)
        .parse::<u32>()
        .map_err(|_| Error::extraction("distance", text))
}

/// Parse a sun-altitude label such as `"-12.5°"`.
pub fn parse_sun_altitude(text: &str) -> Result<f64> {
    let residue = numeric_residue(text);
    residue
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::extraction("sun altitude", text))
}

/// Parse a magnitude; [`NO_BRIGHTNESS`] maps to `None`.
pub fn parse_brightness(text: &str) -> Result<Option<f64>> {
    let text = text.trim();
    if text == NO_BRIGHTNESS {
        return Ok(None);
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| Error::extraction("brightness", text))
}

/// Split a summary date cell such as `"27 Dec"` into `(day, month)`.
pub fn split_day_month(text: &str) -> Result<(&str, &str)> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), None) => Ok((day, month)),
        _ => Err(Error::format("date", text, "expected \"<day> <month>\"")),
    }
}
