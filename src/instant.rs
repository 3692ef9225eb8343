// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC calendar instant.
//!
//! [`UtcInstant`] is the calendar-facing representation of a moment in time:
//! a plain year/month/day hour:minute:second breakdown on the UTC axis with
//! whole-second resolution. It is the input type of the Julian Date
//! conversion in [`crate::julian`] and is immutable once captured.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// A UTC calendar breakdown (whole seconds).
///
/// Fields are public because the type is a transparent record; the
/// documented domain is month in `[1,12]`, day in `[1,31]`, hour in
/// `[0,24)`, minute and second in `[0,60)`. Values outside these ranges are
/// not rejected, downstream arithmetic simply extrapolates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl UtcInstant {
    /// Create from explicit calendar fields.
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fraction of the day elapsed since the preceding midnight, in days.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0 + self.minute as f64 / 1_440.0 + self.second as f64 / 86_400.0
    }
}

impl From<DateTime<Utc>> for UtcInstant {
    /// Capture a chrono UTC timestamp, truncating sub-second precision.
    fn from(datetime: DateTime<Utc>) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
        }
    }
}

impl std::fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
