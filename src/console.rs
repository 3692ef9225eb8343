// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Terminal display for the clock.
//!
//! [`initialize`] prints the banner and reserves four blank lines;
//! [`update`] then repaints those lines in place on every tick by moving
//! the cursor up and rewriting them. Both take any [`Write`] sink so tests
//! can capture the exact byte stream.

use std::io::Write;

use crate::clock::ClockReadings;

/// Prepare the terminal: banner plus one reserved line per reading.
pub fn initialize<W: Write>(mut w: W) -> std::io::Result<()> {
    writeln!(w, "StarClock (CTRL-C to exit)")?;
    w.write_all(b"\n\n\n\n")?;
    w.flush()
}

/// Repaint the four reading lines in place.
///
/// Moves the cursor up over the reserved block, then rewrites each line,
/// erasing to end of line so a shorter line leaves no stale trail.
pub fn update<W: Write>(mut w: W, readings: &ClockReadings) -> std::io::Result<()> {
    let lines = readings.lines();
    for _ in 0..lines.len() {
        w.write_all(b"\x1b[A")?;
    }
    for line in lines {
        writeln!(w, "{line}\x1b[K")?;
    }
    w.flush()
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
