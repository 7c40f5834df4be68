//! Monotonic millisecond clock abstraction.
//!
//! The `Clock` trait is the only thing a timer needs from the platform: a
//! free-running millisecond counter. It can be implemented for any source
//! (SysTick counter, HAL `millis()`, RTOS tick, `std::time::Instant`).
//!
//! Counters are `u32` and wrap at [`MAX_VALUE`]. Timers subtract with
//! `wrapping_sub` at exactly this width, so elapsed time stays correct across
//! the overflow as long as fewer than 2^32 ms pass between start and query.

use core::cell::Cell;

/// Millisecond count, same width as the clock counter.
pub type Millis = u32;

/// Largest value the clock reports before wrapping back to zero.
pub const MAX_VALUE: Millis = Millis::MAX;

/// Platform-agnostic monotonic millisecond clock.
///
/// Implementations must:
/// - Return milliseconds since an arbitrary epoch (commonly boot)
/// - Never go backwards, except when wrapping from `MAX_VALUE` to `0`
/// - Not block
pub trait Clock {
    /// Current counter value in milliseconds.
    fn now_ms(&self) -> Millis;
}

/// Function pointers, e.g. a HAL's `fn millis() -> u32`.
impl Clock for fn() -> Millis {
    fn now_ms(&self) -> Millis {
        self()
    }
}

/// Shared clocks: many timers can borrow the same source.
impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Adapter turning any closure into a clock.
///
/// Function items need a cast to `fn() -> Millis`; closures capturing state
/// go through this wrapper instead.
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(pub F);

impl<F> Clock for FnClock<F>
where
    F: Fn() -> Millis,
{
    fn now_ms(&self) -> Millis {
        (self.0)()
    }
}

// ============================================================================
// ManualClock - simulated time
// ============================================================================

/// Clock whose value is moved by hand.
///
/// Useful for tests and host-side simulation. Uses interior mutability so a
/// timer can hold `&ManualClock` while the test advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    /// Create a clock reading `start`.
    pub const fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Jump to an absolute value.
    pub fn set(&self, ms: Millis) {
        self.now.set(ms);
    }

    /// Move forward by `ms`, wrapping like a hardware counter.
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Current value.
    pub fn get(&self) -> Millis {
        self.now.get()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

// ============================================================================
// StdClock
// ============================================================================

/// Host clock: milliseconds since construction, truncated to `u32`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> Millis {
        // Truncation is the wraparound
        self.epoch.elapsed().as_millis() as Millis
    }
}

// ============================================================================
// EmbassyClock
// ============================================================================

/// Clock backed by the embassy time driver.
///
/// Reads `embassy_time::Instant::now()` and truncates the 64-bit tick count
/// to `u32` milliseconds.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> Millis {
        embassy_time::Instant::now().as_millis() as Millis
    }
}
