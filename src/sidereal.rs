// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich and local sidereal time.
//!
//! Implements the USNO approximation for Greenwich Apparent Sidereal Time:
//! a mean-sidereal polynomial in days since J2000.0 plus the equation of
//! equinoxes (the two largest nutation terms). Local sidereal time offsets
//! GAST by the observer's east longitude. The approximation is good to a
//! few tenths of a second of time over several decades around J2000.
//!
//! All angular hour values are wrapped with [`restrict`], the single
//! normalization primitive of the crate.
//!
//! Sources:
//! - USNO Astronomical Applications, "Approximate Sidereal Time".
//! - Meeus, *Astronomical Algorithms*, ch. 12 (background).

use qtty::*;

use crate::julian::JulianDate;

/// Wrap `value` into the half-open interval `[lower, upper)`.
///
/// Uses floor division, so negative inputs wrap into the positive range
/// (e.g. `restrict(-1.0, 0.0, 24.0) == 23.0`). Truncating division would
/// get this wrong for values below `lower`.
#[inline]
pub fn restrict(value: f64, lower: f64, upper: f64) -> f64 {
    let span = upper - lower;
    value - span * ((value - lower) / span).floor()
}

/// Greenwich Mean Sidereal Time at a given Julian Date.
///
/// `gmst = 6.697374558 + 0.06570982441908·D0 + 1.00273790935·H + 0.000026·T²`
/// where `D0` is days from J2000.0 to the preceding UTC midnight, `H` is
/// hours since that midnight and `T` is Julian centuries since J2000.0.
///
/// Returns hours in `[0,24)`.
pub fn greenwich_mean_sidereal_time(jd: JulianDate) -> Hours {
    let d0 = (jd.midnight() - JulianDate::J2000).value();
    let h = jd.hours_since_midnight().value();
    let t = jd.julian_centuries().value();
    let gmst = 6.697374558 + 0.065_709_824_419_08 * d0 + 1.002_737_909_35 * h + 0.000026 * t * t;
    Hours::new(restrict(gmst, 0.0, 24.0))
}

/// Equation of equinoxes: the nutation correction from mean to apparent
/// sidereal time, in hours.
///
/// Keeps the two dominant terms of the nutation in longitude (`Δψ`, hours)
/// and multiplies by the cosine of the mean obliquity:
///
/// `Δψ = -0.000319·sin Ω - 0.000024·sin 2L`,  `eqeq = Δψ·cos ε`
///
/// with `Ω` the longitude of the ascending node of the Moon and `L` the
/// mean longitude of the Sun. Magnitude stays below ±0.0011 h.
pub fn equation_of_equinoxes(jd: JulianDate) -> Hours {
    let d = jd.days_since_j2000().value();
    let omega = (125.04 - 0.052954 * d).to_radians();
    let l = (280.47 + 0.98565 * d).to_radians();
    let delta_psi = -0.000319 * omega.sin() - 0.000024 * (2.0 * l).sin();
    let epsilon = (23.4393 - 0.0000004 * d).to_radians();
    Hours::new(delta_psi * epsilon.cos())
}

/// Greenwich Apparent Sidereal Time: GMST plus the equation of equinoxes.
///
/// Returns hours in `[0,24)`.
pub fn greenwich_apparent_sidereal_time(jd: JulianDate) -> Hours {
    let gast = greenwich_mean_sidereal_time(jd) + equation_of_equinoxes(jd);
    Hours::new(restrict(gast.value(), 0.0, 24.0))
}

/// Local Sidereal Time for an observer at `longitude` (degrees, east
/// positive).
///
/// Total over all finite inputs; longitudes outside `(-180, 180]` simply
/// wrap (LST is periodic in longitude with period 360°).
pub fn local_sidereal_time(jd: JulianDate, longitude: Degrees) -> SiderealTime {
    let gast = greenwich_apparent_sidereal_time(jd);
    let local = restrict(gast.value() + longitude.value() / 15.0, 0.0, 24.0);
    SiderealTime::from_hours(Hours::new(local))
}

// ═══════════════════════════════════════════════════════════════════════════
// SiderealTime — the hour/minute/second reading
// ═══════════════════════════════════════════════════════════════════════════

/// A sidereal clock reading: hour in `[0,24)`, minute and second in `[0,60)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SiderealTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl SiderealTime {
    /// Decompose an hour value into a wrapped whole-second reading.
    ///
    /// The value is rounded to whole seconds first and then wrapped, so an
    /// input that rounds up to exactly 24h lands on `00h 00m 00s`.
    pub fn from_hours(hours: Hours) -> Self {
        let total = restrict((hours.value() * 3_600.0).round(), 0.0, 86_400.0) as i64;
        let hour = total / 3_600;
        let remainder = total % 3_600;
        Self {
            hour: hour as u32,
            minute: (remainder / 60) as u32,
            second: (remainder % 60) as u32,
        }
    }

    /// Seconds since 00h 00m 00s, in `[0, 86400)`.
    #[inline]
    pub const fn total_seconds(&self) -> u32 {
        self.hour * 3_600 + self.minute * 60 + self.second
    }
}

impl std::fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}h {:02}m {:02}s LST",
            self.hour, self.minute, self.second
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
