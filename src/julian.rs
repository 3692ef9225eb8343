// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date: the continuous time axis of the clock.
//!
//! [`JulianDate`] wraps a [`Days`] quantity counting from the Julian epoch
//! (noon UTC, January 1, 4713 BCE, proleptic Julian calendar). It is derived
//! deterministically from a [`UtcInstant`] via the Fliegel & Van Flandern
//! calendar algorithm and feeds the sidereal-time stages in
//! [`crate::sidereal`].
//!
//! The calendar conversion keeps the published arithmetic exactly: the date
//! part uses truncating `i64` division (equivalent to floor division for the
//! positive operands produced by calendar years above −4800), the
//! time-of-day part uses real division, and hours before noon shift the day
//! by −0.5 because Julian days begin at noon.
//!
//! ## References
//! * Fliegel & Van Flandern (1968), CACM 11(10), 657
//! * Explanatory Supplement to the Astronomical Almanac, ch. 12

use qtty::*;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::instant::UtcInstant;
use chrono::{DateTime, Utc};

/// A point on the Julian Date axis.
///
/// Stores a single [`Days`] quantity; the struct is `Copy` and
/// layout-identical to an `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate(Days);

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 UTC (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the Julian epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self(days)
    }

    /// Convert a UTC calendar timestamp using Fliegel & Van Flandern.
    ///
    /// Accepts any finite input with month in `[1,12]`; out-of-range fields
    /// extrapolate silently rather than erroring. The `i64` divisions
    /// truncate, which matches the published algorithm for the documented
    /// domain (it diverges from floor division only for years ≤ −4800).
    pub fn from_utc(utc: UtcInstant) -> Self {
        let a = (14 - utc.month as i64) / 12;
        let y = utc.year as i64 + 4_800 - a;
        let m = utc.month as i64 + 12 * a - 3;
        let jdn = utc.day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32_045;
        let time_of_day = (utc.hour as f64 - 12.0) / 24.0
            + utc.minute as f64 / 1_440.0
            + utc.second as f64 / 86_400.0;
        Self::new(jdn as f64 + time_of_day)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.0
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    // ── derived instants and spans ────────────────────────────────────

    /// The preceding (or same) UTC midnight: `floor(jd − 0.5) + 0.5`.
    #[inline]
    pub fn midnight(&self) -> Self {
        Self::new((self.value() - 0.5).floor() + 0.5)
    }

    /// Hours elapsed since the preceding UTC midnight, in `[0,24)`.
    #[inline]
    pub fn hours_since_midnight(&self) -> Hours {
        (*self - self.midnight()).to::<Hour>()
    }

    /// Days since the J2000.0 epoch (negative before it).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian centuries since J2000.0 (used by the sidereal polynomial).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            (self.days_since_j2000() / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

impl From<DateTime<Utc>> for JulianDate {
    /// Capture a chrono UTC timestamp at whole-second resolution.
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(UtcInstant::from(datetime))
    }
}

impl From<UtcInstant> for JulianDate {
    #[inline]
    fn from(utc: UtcInstant) -> Self {
        Self::from_utc(utc)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.0 += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.0 -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_noon_is_exact() {
        let jd = JulianDate::from_utc(UtcInstant::new(2000, 1, 1, 12, 0, 0));
        assert_eq!(jd.value(), 2_451_545.0);
        assert_eq!(jd, JulianDate::J2000);
    }

    #[test]
    fn test_midnight_shifts_half_day() {
        let jd = JulianDate::from_utc(UtcInstant::new(2000, 1, 1, 0, 0, 0));
        assert_eq!(jd.value(), 2_451_544.5);
    }

    #[test]
    fn test_reference_dates() {
        // Unix epoch, a summer date and the Gregorian reform day.
        let unix = JulianDate::from_utc(UtcInstant::new(1970, 1, 1, 0, 0, 0));
        assert_eq!(unix.value(), 2_440_587.5);

        let summer = JulianDate::from_utc(UtcInstant::new(2013, 8, 1, 0, 0, 0));
        assert_eq!(summer.value(), 2_456_505.5);

        let reform = JulianDate::from_utc(UtcInstant::new(1582, 10, 15, 0, 0, 0));
        assert_eq!(reform.value(), 2_299_160.5);
    }

    #[test]
    fn test_time_of_day_terms() {
        let base = JulianDate::from_utc(UtcInstant::new(2013, 8, 1, 0, 0, 0));
        let with_time = JulianDate::from_utc(UtcInstant::new(2013, 8, 1, 6, 30, 36));
        let elapsed = with_time - base;
        let expected = 6.0 / 24.0 + 30.0 / 1_440.0 + 36.0 / 86_400.0;
        assert!((elapsed.value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_in_time() {
        let sequence = [
            UtcInstant::new(1999, 12, 31, 23, 59, 59),
            UtcInstant::new(2000, 1, 1, 0, 0, 0),
            UtcInstant::new(2000, 1, 1, 0, 0, 1),
            UtcInstant::new(2000, 2, 29, 12, 0, 0),
            UtcInstant::new(2000, 3, 1, 0, 0, 0),
            UtcInstant::new(2013, 8, 1, 0, 0, 0),
        ];
        let jds: Vec<f64> = sequence
            .iter()
            .map(|&t| JulianDate::from_utc(t).value())
            .collect();
        assert!(jds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_chrono_datetime() {
        // 2000-01-01 12:00:00 UTC as a Unix timestamp.
        let dt = DateTime::from_timestamp(946_728_000, 0).unwrap();
        assert_eq!(JulianDate::from(dt), JulianDate::J2000);
    }

    #[test]
    fn test_midnight_and_hours_since() {
        let evening = JulianDate::from_utc(UtcInstant::new(2013, 8, 1, 18, 0, 0));
        assert_eq!(evening.midnight().value(), 2_456_505.5);
        assert!((evening.hours_since_midnight() - Hours::new(18.0)).abs() < Hours::new(1e-9));

        // Noon sits exactly on the Julian day boundary.
        let noon = JulianDate::J2000;
        assert_eq!(noon.midnight().value(), 2_451_544.5);
        assert!((noon.hours_since_midnight() - Hours::new(12.0)).abs() < Hours::new(1e-9));
    }

    #[test]
    fn test_julian_centuries() {
        let jd = JulianDate::J2000 + Days::new(36_525.0);
        assert!((jd.julian_centuries() - Centuries::new(1.0)).abs() < Centuries::new(1e-12));
        assert_eq!(JulianDate::J2000.julian_centuries(), Centuries::new(0.0));
    }

    #[test]
    fn test_add_assign_sub_assign() {
        let mut jd = JulianDate::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
    }

    #[test]
    fn test_display() {
        let jd = JulianDate::new(2_451_545.0);
        assert!(format!("{jd}").contains("JD"));
    }
}
