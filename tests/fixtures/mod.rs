//! Test fixtures for poll-timer testing.
//!
//! Provides:
//! - `SimClock`: cloneable simulated clock with shared state
//! - `millis_at`: function-pointer clock backed by a thread-local counter

#![allow(dead_code)]

use poll_timer::{Clock, Millis};
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// SimClock - shared simulated time
// ============================================================================

/// Simulated clock that can be cloned into many timers.
///
/// All clones observe the same counter, like a hardware SysTick shared by
/// every timer in the firmware. Counts clock reads so tests can check how
/// often timers touch the clock.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Rc<Cell<Millis>>,
    reads: Rc<Cell<usize>>,
}

impl SimClock {
    /// Create a clock reading `start`.
    pub fn at(start: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            reads: Rc::new(Cell::new(0)),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, ms: Millis) {
        self.now.set(ms);
    }

    /// Advance time, wrapping at `u32::MAX`.
    pub fn tick(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Current time without counting a read.
    pub fn peek(&self) -> Millis {
        self.now.get()
    }

    /// Number of `now_ms()` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> Millis {
        self.reads.set(self.reads.get() + 1);
        self.now.get()
    }
}

// ============================================================================
// Function-pointer clock
// ============================================================================

thread_local! {
    static MILLIS: Cell<Millis> = const { Cell::new(0) };
}

/// Stand-in for a HAL `millis()` function.
pub fn millis() -> Millis {
    MILLIS.with(|m| m.get())
}

/// Set the value returned by [`millis`] on this thread.
pub fn set_millis(ms: Millis) {
    MILLIS.with(|m| m.set(ms));
}

/// [`millis`] as a clock value.
pub const MILLIS_CLOCK: fn() -> Millis = millis;
