//! Error types for timer operations.
//!
//! Single timers never fail. `TimerError` covers the fixed-capacity
//! [`TimerSet`](crate::set::TimerSet) and conversions from
//! `core::time::Duration`.

use core::fmt;

/// Timer error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Timer set has no free slot
    CapacityExceeded,

    /// Label already used by another timer in the set
    DuplicateLabel,

    /// Id does not refer to a live timer (never issued, or already removed)
    NotFound,

    /// Duration does not fit in `u32` milliseconds
    DurationOutOfRange,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::CapacityExceeded => write!(f, "Timer set full"),
            TimerError::DuplicateLabel => write!(f, "Duplicate timer label"),
            TimerError::NotFound => write!(f, "Timer not found"),
            TimerError::DurationOutOfRange => write!(f, "Duration out of range"),
        }
    }
}

impl core::error::Error for TimerError {}
