//! Rust-specific size and compile-time verification tests.
//!
//! Tests that validate:
//! - Timers stay a few words in size
//! - Const initialization
//! - Borrowed clocks share one source

use poll_timer::{ManualClock, Millis, Timer, TimerId, TimerSet};

fn boot_millis() -> Millis {
    0
}

const BOOT_CLOCK: fn() -> Millis = boot_millis;

// ============================================================================
// Size Tests
// ============================================================================

#[test]
fn test_timer_with_zero_size_clock_is_small() {
    #[derive(Clone, Copy)]
    struct NullClock;
    impl poll_timer::Clock for NullClock {
        fn now_ms(&self) -> Millis {
            0
        }
    }

    // Option<u32> + bool + u32
    let size = core::mem::size_of::<Timer<NullClock>>();
    assert!(
        size <= 16,
        "Timer with a zero-size clock should fit in 16 bytes, got: {} bytes",
        size
    );
}

#[test]
fn test_timer_id_is_compact() {
    // u16 slot index + u32 generation
    assert_eq!(core::mem::size_of::<TimerId>(), 8);
}

#[test]
fn test_borrowed_clock_costs_one_pointer() {
    let with_ref = core::mem::size_of::<Timer<&ManualClock>>();
    let with_fn = core::mem::size_of::<Timer<fn() -> Millis>>();
    assert_eq!(with_ref, with_fn);
}

// ============================================================================
// Const Initialization Tests
// ============================================================================

#[test]
fn test_timer_const_initializable() {
    const HEARTBEAT: Timer<fn() -> Millis> = Timer::with_duration(BOOT_CLOCK, 1000);
    const IDLE: Timer<fn() -> Millis> = Timer::new(BOOT_CLOCK);
    const LEGACY: Timer<fn() -> Millis> = Timer::from_raw(BOOT_CLOCK, 0);

    assert_eq!(HEARTBEAT.duration(), Some(1000));
    assert!(!IDLE.is_set());
    assert!(!LEGACY.is_set());
    assert!(!HEARTBEAT.is_running());
}

#[test]
fn test_timer_set_const_initializable() {
    const TASKS: TimerSet<fn() -> Millis, 8> = TimerSet::new(BOOT_CLOCK);

    let mut tasks = TASKS;
    assert!(tasks.is_empty());
    assert_eq!(tasks.capacity(), 8);
    tasks.add("led", 250).unwrap();
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_manual_clock_const_initializable() {
    const CLOCK: ManualClock = ManualClock::new(77);
    let clock = CLOCK;
    assert_eq!(clock.get(), 77);
}

// ============================================================================
// Sharing Tests
// ============================================================================

#[test]
fn test_many_timers_share_one_clock() {
    let clock = ManualClock::new(0);
    let mut timers = [
        Timer::with_duration(&clock, 10),
        Timer::with_duration(&clock, 20),
        Timer::with_duration(&clock, 30),
    ];
    for timer in timers.iter_mut() {
        timer.start();
    }

    clock.set(25);
    let due: Vec<bool> = timers.iter().map(|t| t.check()).collect();
    assert_eq!(due, vec![true, true, false]);
}
