// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-rate render loop.
//!
//! [`animate`] drives a display front end: it invokes the render callback,
//! measures how long the render took and sleeps away the remainder of the
//! frame budget. A frame that overruns its budget is followed immediately
//! by the next one; frames are never skipped and the loop never tries to
//! catch up. Single-threaded, cooperative: the callback ends the loop by
//! returning [`Tick::Stop`] or an error.

use std::time::{Duration, Instant};

use tracing::trace;

/// Default target frame rate of the clock display, in frames per second.
pub const DEFAULT_FPS: f64 = 30.0;

/// Outcome of one render callback invocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Keep rendering.
    Continue,
    /// Leave the loop cleanly.
    Stop,
}

/// Invoke `draw` repeatedly at a target rate of `fps` calls per second.
///
/// Each iteration measures the wall-clock time the callback consumed and
/// sleeps for `1/fps − elapsed` if that is positive, otherwise proceeds
/// straight to the next frame. Returns `Ok(())` when the callback reports
/// [`Tick::Stop`]; a callback error ends the loop and propagates unchanged.
///
/// # Panics
///
/// Panics if `fps` is not a positive finite number.
pub fn animate<F, E>(mut draw: F, fps: f64) -> Result<(), E>
where
    F: FnMut() -> Result<Tick, E>,
{
    assert!(fps.is_finite() && fps > 0.0, "fps must be positive");
    let budget = Duration::from_secs_f64(1.0 / fps);

    loop {
        let started = Instant::now();
        if let Tick::Stop = draw()? {
            return Ok(());
        }
        let elapsed = started.elapsed();
        match budget.checked_sub(elapsed) {
            Some(remaining) => std::thread::sleep(remaining),
            None => trace!(
                elapsed_us = elapsed.as_micros() as u64,
                "render overran the frame budget"
            ),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
