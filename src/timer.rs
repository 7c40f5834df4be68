//! Polled software timer.
//!
//! A `Timer` measures elapsed time against a configured duration by reading
//! an injected [`Clock`]. Nothing runs in the background: callers poll
//! [`Timer::check`] or [`Timer::check_and_restart`] from their main loop.
//!
//! ```text
//!            start()/restart()
//!   Stopped ──────────────────▶ Running ──┐
//!      ▲                          │  ▲    │ check_and_restart()
//!      └──────── reset() ─────────┘  └────┘ (on expiry)
//! ```
//!
//! Expiry is strict: a timer started at `t` with duration `d` expires at the
//! first poll where `now - t > d`, i.e. at `t + d + 1`.

use crate::clock::{Clock, Millis};
use crate::error::TimerError;

/// Raw duration value meaning "no duration configured".
///
/// Only used at the raw integer boundary ([`Timer::from_raw`],
/// [`Timer::raw_duration`]). Internally the duration is an `Option`.
pub const INVALID_DURATION: Millis = 0;

/// Convert a `core::time::Duration` into timer milliseconds.
///
/// Sub-millisecond remainders are truncated. Fails if the value does not fit
/// in `u32` (about 49.7 days).
pub fn millis_from_duration(duration: core::time::Duration) -> Result<Millis, TimerError> {
    Millis::try_from(duration.as_millis()).map_err(|_| TimerError::DurationOutOfRange)
}

/// Software timer driven by a monotonic millisecond clock.
///
/// Supports one-shot use (`start` + `check`) and cyclic tasks
/// (`check_and_restart` once per loop iteration).
#[derive(Debug, Clone)]
pub struct Timer<C> {
    clock: C,
    duration: Option<Millis>,
    running: bool,
    /// Only meaningful while `running`
    start_time: Millis,
}

impl<C> Timer<C> {
    /// Create a stopped timer without a duration.
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            duration: None,
            running: false,
            start_time: 0,
        }
    }

    /// Create a stopped timer with a duration.
    ///
    /// A zero duration is a real zero-length duration, not "unset".
    pub const fn with_duration(clock: C, duration: Millis) -> Self {
        Self {
            clock,
            duration: Some(duration),
            running: false,
            start_time: 0,
        }
    }

    /// Create a stopped timer from a raw millisecond value where
    /// [`INVALID_DURATION`] (0) means unset.
    pub const fn from_raw(clock: C, raw: Millis) -> Self {
        if raw == INVALID_DURATION {
            Self::new(clock)
        } else {
            Self::with_duration(clock, raw)
        }
    }

    /// Set the duration. Running state is not touched.
    pub fn set_duration(&mut self, duration: Millis) {
        if self.duration != Some(duration) {
            self.duration = Some(duration);
        }
    }

    /// Forget the configured duration. A running timer keeps running but can
    /// no longer expire.
    pub fn clear_duration(&mut self) {
        self.duration = None;
    }

    /// Configured duration, `None` if unset.
    pub fn duration(&self) -> Option<Millis> {
        self.duration
    }

    /// Configured duration as a raw integer, [`INVALID_DURATION`] if unset.
    pub fn raw_duration(&self) -> Millis {
        self.duration.unwrap_or(INVALID_DURATION)
    }

    /// Whether a duration has been configured.
    pub fn is_set(&self) -> bool {
        self.duration.is_some()
    }

    /// Stop the timer and clear its start time. Idempotent.
    pub fn reset(&mut self) {
        if self.running {
            trace!("timer reset after start at {} ms", self.start_time);
        }
        self.start_time = 0;
        self.running = false;
    }

    /// Whether the timer is counting.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time the timer was started, `0` if not running.
    pub fn start_time(&self) -> Millis {
        if self.running { self.start_time } else { 0 }
    }

    /// Compare configured durations only; running state and start time are
    /// ignored.
    pub fn same_duration<D>(&self, other: &Timer<D>) -> bool {
        self.duration == other.duration
    }

    /// The injected clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> Timer<C> {
    /// Current clock reading.
    pub fn now(&self) -> Millis {
        self.clock.now_ms()
    }

    /// Start the timer unless it is already running.
    ///
    /// Returns `false` (and leaves the start time alone) if it was running.
    pub fn start(&mut self) -> bool {
        if self.running {
            debug!("timer already running since {} ms", self.start_time);
            return false;
        }

        self.start_time = self.now();
        self.running = true;
        trace!(
            "timer started at {} ms, duration {} ms",
            self.start_time,
            self.raw_duration()
        );
        true
    }

    /// Set the duration, then [`start`](Self::start).
    ///
    /// The new duration applies even if the timer was already running.
    pub fn start_with(&mut self, duration: Millis) -> bool {
        self.set_duration(duration);
        self.start()
    }

    /// Reset and start again from the current clock reading. Always `true`.
    pub fn restart(&mut self) -> bool {
        self.reset();
        self.start()
    }

    /// Set the duration, then [`restart`](Self::restart). Always `true`.
    pub fn restart_with(&mut self, duration: Millis) -> bool {
        self.reset();
        self.start_with(duration)
    }

    /// Milliseconds since start, `0` if not running.
    ///
    /// Correct across clock wraparound.
    pub fn elapsed(&self) -> Millis {
        if self.running {
            self.now().wrapping_sub(self.start_time)
        } else {
            0
        }
    }

    /// Whether the timer is running and its duration has been exceeded.
    ///
    /// Unset timers never expire.
    pub fn check(&self) -> bool {
        match self.duration {
            Some(duration) if self.running => self.elapsed() > duration,
            _ => false,
        }
    }

    /// On expiry, restart with the same duration and return `true`.
    /// Otherwise return `false` and change nothing.
    pub fn check_and_restart(&mut self) -> bool {
        if self.check() {
            self.restart();
            return true;
        }
        false
    }

    /// Progress toward expiry in `[0.0, 1.0]`.
    ///
    /// `0.0` when unset. A zero-length duration reports `1.0` while running.
    pub fn elapsed_rel(&self) -> f32 {
        match self.duration {
            None => 0.0,
            Some(0) => {
                if self.running {
                    1.0
                } else {
                    0.0
                }
            }
            Some(duration) => (self.elapsed() as f32 / duration as f32).clamp(0.0, 1.0),
        }
    }

    /// Time left until the duration is reached, saturating at zero.
    ///
    /// `None` if the timer is stopped or unset.
    pub fn remaining(&self) -> Option<Millis> {
        match self.duration {
            Some(duration) if self.running => Some(duration.saturating_sub(self.elapsed())),
            _ => None,
        }
    }
}
