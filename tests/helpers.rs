//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::{MILLIS_CLOCK, SimClock, set_millis};

use poll_timer::{Clock, Millis, Timer, TimerSet};

// ============================================================================
// Timer Creation Helpers
// ============================================================================

/// Move the clock to `at` and start a timer there.
pub fn started_timer(clock: &SimClock, duration: Millis, at: Millis) -> Timer<SimClock> {
    clock.set(at);
    let mut timer = Timer::with_duration(clock.clone(), duration);
    assert!(timer.start(), "fresh timer must start");
    timer
}

// ============================================================================
// Main Loop Simulation
// ============================================================================

/// Simulate a cooperative main loop: advance the clock by `step` and poll the
/// set, `iterations` times. Returns `(time, label)` for every fire.
pub fn run_loop<C, const N: usize>(
    set: &mut TimerSet<C, N>,
    clock: &SimClock,
    step: Millis,
    iterations: usize,
) -> Vec<(Millis, &'static str)>
where
    C: Clock + Clone,
{
    let mut fires = Vec::new();
    for _ in 0..iterations {
        clock.tick(step);
        let now = clock.peek();
        set.poll(|_, label| fires.push((now, label)));
    }
    fires
}

/// Poll a single timer with `check_and_restart` once per `step`, `iterations`
/// times. Returns the clock value at each fire.
pub fn run_cyclic(
    timer: &mut Timer<SimClock>,
    clock: &SimClock,
    step: Millis,
    iterations: usize,
) -> Vec<Millis> {
    let mut fires = Vec::new();
    for _ in 0..iterations {
        clock.tick(step);
        if timer.check_and_restart() {
            fires.push(clock.peek());
        }
    }
    fires
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Collect fire times for one label.
pub fn fire_times(fires: &[(Millis, &'static str)], label: &str) -> Vec<Millis> {
    fires
        .iter()
        .filter(|(_, l)| *l == label)
        .map(|(t, _)| *t)
        .collect()
}

/// Assert a timer is stopped and reports the stopped sentinels.
pub fn assert_stopped<C: Clock>(timer: &Timer<C>) {
    assert!(!timer.is_running(), "timer should be stopped");
    assert_eq!(timer.start_time(), 0, "stopped timer reports start time 0");
    assert_eq!(timer.elapsed(), 0, "stopped timer reports elapsed 0");
    assert!(!timer.check(), "stopped timer never expires");
}
