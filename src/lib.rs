// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! StarClock
//!
//! Real-time astronomical clock values for an observer's longitude: local
//! time, UTC, Julian Date and Local Sidereal Time, recomputed on every
//! render tick from a single captured instant.
//!
//! # Core types
//!
//! - [`UtcInstant`] — UTC calendar breakdown (whole seconds).
//! - [`JulianDate`] — continuous day count since the Julian epoch.
//! - [`SiderealTime`] — wrapped hour/minute/second sidereal reading.
//! - [`Longitude`] — validated observer longitude, persisted in TOML.
//! - [`ClockReadings`] — the four formatted display strings for one tick.
//! - [`Clock`] — time-source port ([`SystemClock`], [`FixedClock`]).
//!
//! # Pipeline
//!
//! | Stage | Entry point |
//! |-------|-------------|
//! | capture instant | [`Clock::now`] |
//! | calendar → JD | [`JulianDate::from_utc`] |
//! | JD → GMST | [`greenwich_mean_sidereal_time`] |
//! | GMST → GAST | [`greenwich_apparent_sidereal_time`] |
//! | GAST → LST | [`local_sidereal_time`] |
//! | format readings | [`calc`] |
//!
//! The [`animate`] loop drives a front end (see [`console`]) at a fixed
//! frame rate; the `starclock` binary wires the pieces together.
//!
//! # Quick start
//!
//! ```
//! use starclock::{calc, Longitude, SystemClock};
//!
//! let longitude = Longitude::from_degrees(-72.1053)?;
//! let readings = calc(&SystemClock, longitude);
//! println!("{}", readings.lst);
//! # Ok::<(), starclock::ConfigError>(())
//! ```

mod animation;
mod clock;
pub mod config;
pub mod console;
pub(crate) mod instant;
pub(crate) mod julian;
pub(crate) mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use animation::{animate, Tick, DEFAULT_FPS};
pub use clock::{calc, Clock, ClockReadings, FixedClock, SystemClock};
pub use config::{ConfigError, Longitude, ObserverConfig};
pub use instant::UtcInstant;
pub use julian::JulianDate;
pub use sidereal::{
    equation_of_equinoxes, greenwich_apparent_sidereal_time, greenwich_mean_sidereal_time,
    local_sidereal_time, restrict, SiderealTime,
};
