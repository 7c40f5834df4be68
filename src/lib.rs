//! # poll-timer
//!
//! Polled software timers for embedded systems with zero heap allocation.
//!
//! **Key features:**
//! - **No interrupts** - Timers are driven by polling a monotonic millisecond clock
//! - **Wraparound-safe** - Elapsed time stays correct when the `u32` clock overflows
//! - **Injected clock** - A `fn() -> u32`, a closure, a shared reference, or a simulated clock
//! - **Timer sets** - Fixed-capacity groups of labelled timers polled from one loop
//!
//! ## Example
//!
//! ```
//! use poll_timer::{ManualClock, Timer};
//!
//! let clock = ManualClock::new(5000);
//! let mut blink = Timer::with_duration(&clock, 1000);
//! blink.start();
//!
//! clock.set(6000);
//! assert!(!blink.check());
//!
//! clock.set(6001);
//! assert!(blink.check_and_restart());
//! assert_eq!(blink.start_time(), 6001);
//! ```
//!
//! ## Optional Features
//!
//! - `std` - `StdClock` backed by `std::time::Instant`
//! - `embassy` - `EmbassyClock` backed by `embassy_time::Instant`
//! - `log` - Trace/debug output through the `log` facade
//! - `defmt` - Trace/debug output through `defmt`, plus `defmt::Format` impls
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

// Logging shim, must come first so the macros are visible to later modules
mod fmt;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clock;
pub mod error;
pub mod set;
pub mod timer;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Clock sources
pub use clock::{Clock, FnClock, ManualClock, Millis, MAX_VALUE};

#[cfg(feature = "std")]
pub use clock::StdClock;

#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;

// Error types
pub use error::TimerError;

// Timers
pub use set::{MAX_TIMERS, TimerId, TimerSet};
pub use timer::{millis_from_duration, Timer, INVALID_DURATION};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
