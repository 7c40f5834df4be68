#![no_std]
#![no_main]

use core::cell::Cell;

use cortex_m::peripheral::syst::SystClkSource;
use critical_section::Mutex;
use panic_halt as _;
use poll_timer::{Millis, Timer, TimerSet};

// Core clock assumed for the SysTick reload value
const CORE_HZ: u32 = 8_000_000;

// Millisecond counter incremented by SysTick
static MILLIS: Mutex<Cell<Millis>> = Mutex::new(Cell::new(0));

fn millis() -> Millis {
    critical_section::with(|cs| MILLIS.borrow(cs).get())
}

#[cortex_m_rt::exception]
fn SysTick() {
    critical_section::with(|cs| {
        let counter = MILLIS.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let Some(mut cp) = cortex_m::Peripherals::take() else {
        loop {
            cortex_m::asm::nop();
        }
    };
    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(CORE_HZ / 1000 - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_counter();
    cp.SYST.enable_interrupt();

    let clock: fn() -> Millis = millis;

    // Single timer paths
    let mut heartbeat = Timer::with_duration(clock, 1000);
    heartbeat.start();

    // Set paths
    let mut tasks: TimerSet<fn() -> Millis, 4> = TimerSet::new(clock);
    if tasks.add("sample", 10).is_err() || tasks.add("report", 500).is_err() {
        loop {
            cortex_m::asm::nop();
        }
    }
    tasks.start_all();

    // Keep everything alive to prevent optimization
    loop {
        if heartbeat.check_and_restart() {
            core::hint::black_box(heartbeat.elapsed_rel());
        }
        let fired = tasks.poll(|id, _| {
            core::hint::black_box(id);
        });
        core::hint::black_box(fired);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
