// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock capture and the formatted clock readings.
//!
//! [`Clock`] is the port through which the current instant enters the
//! system; [`SystemClock`] reads the host wall clock and [`FixedClock`]
//! pins time for deterministic tests. [`calc`] is the calculation entry
//! point: one captured instant in, one [`ClockReadings`] record of the four
//! display strings out. It is a pure function of the clock's instant and
//! the supplied longitude.

use chrono::{DateTime, Local, Utc};

use crate::config::Longitude;
use crate::instant::UtcInstant;
use crate::julian::JulianDate;
use crate::sidereal::local_sidereal_time;

/// Port for obtaining the current time.
///
/// The abstraction exists so that time-dependent code can be driven by a
/// fixed clock in tests.
pub trait Clock: Send + Sync {
    /// The current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// The host wall clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock at `instant`.
    #[inline]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ClockReadings — the per-tick display record
// ═══════════════════════════════════════════════════════════════════════════

/// The four formatted strings for one calculation instant.
///
/// Created fresh per tick; it has no lifecycle beyond a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReadings {
    /// Local civil time, `YYYY-MM-DD HH:MM:SS <zone>`.
    pub local_time: String,
    /// Coordinated Universal Time, `YYYY-MM-DD HH:MM:SS UTC`.
    pub utc_time: String,
    /// Julian Date, `D.DDDDD JD` (five fixed decimals).
    pub julian_date: String,
    /// Local Sidereal Time, `HHh MMm SSs LST`.
    pub lst: String,
}

impl ClockReadings {
    /// The readings in display order, one line each.
    #[inline]
    pub fn lines(&self) -> [&str; 4] {
        [&self.local_time, &self.utc_time, &self.julian_date, &self.lst]
    }
}

/// Compute the four clock readings for the clock's current instant.
///
/// Local time is derived from the same captured instant as the UTC line, so
/// the two never straddle a second boundary. The Julian Date and sidereal
/// stages operate on the whole-second UTC calendar breakdown.
pub fn calc(clock: &impl Clock, longitude: Longitude) -> ClockReadings {
    let now = clock.now();
    let utc = UtcInstant::from(now);
    let jd = JulianDate::from_utc(utc);
    let lst = local_sidereal_time(jd, longitude.degrees());

    ClockReadings {
        local_time: now
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string(),
        utc_time: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        julian_date: format!("{:.5} JD", jd.value()),
        lst: lst.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
