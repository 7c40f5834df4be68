//! Fixed-capacity group of labelled timers.
//!
//! A `TimerSet` lets one cooperative main loop drive several periodic tasks
//! from a single clock:
//!
//! ```
//! use poll_timer::{ManualClock, TimerSet};
//!
//! let clock = ManualClock::new(0);
//! let mut timers: TimerSet<&ManualClock, 4> = TimerSet::new(&clock);
//! let blink = timers.add("blink", 500).unwrap();
//! timers.add("telemetry", 2000).unwrap();
//! timers.start_all();
//!
//! clock.set(501);
//! let mut fired = 0;
//! timers.poll(|id, _label| {
//!     assert_eq!(id, blink);
//!     fired += 1;
//! });
//! assert_eq!(fired, 1);
//! ```
//!
//! Slots are stored in a `heapless::Vec`, so the set never allocates. Removed
//! slots are reused by later additions; the generation stored in each
//! [`TimerId`] keeps a stale id from reaching the new occupant.

use crate::clock::{Clock, Millis};
use crate::error::TimerError;
use crate::timer::Timer;

/// Largest capacity a [`TimerSet`] may declare; slot indices are `u16`.
pub const MAX_TIMERS: usize = u16::MAX as usize + 1;

/// Handle to a timer inside a [`TimerSet`].
///
/// Each removal bumps the slot's `u32` generation, so a stale id stops
/// matching until the same slot has been reused 2^32 times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerId {
    index: u16,
    generation: u32,
}

impl TimerId {
    /// Slot index within the owning set.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

#[derive(Debug)]
struct Entry<C> {
    label: &'static str,
    timer: Timer<C>,
}

#[derive(Debug)]
struct Slot<C> {
    generation: u32,
    entry: Option<Entry<C>>,
}

/// Up to `N` labelled timers sharing one clock.
///
/// Each timer receives a clone of the set's clock, so `C` is typically a
/// shared reference or a function pointer.
#[derive(Debug)]
pub struct TimerSet<C, const N: usize> {
    clock: C,
    slots: heapless::Vec<Slot<C>, N>,
}

impl<C, const N: usize> TimerSet<C, N> {
    /// Maximum number of timers, checked against [`MAX_TIMERS`] at compile
    /// time.
    pub const CAPACITY: usize = {
        assert!(N <= MAX_TIMERS, "TimerSet capacity exceeds u16 slot indices");
        N
    };

    /// Create an empty set.
    pub const fn new(clock: C) -> Self {
        let _ = Self::CAPACITY;
        Self {
            clock,
            slots: heapless::Vec::new(),
        }
    }

    /// The clock handed to every timer in the set.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of live timers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.entry.is_some()).count()
    }

    /// Whether the set holds no timers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of timers.
    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Look up a timer by label.
    pub fn find(&self, label: &str) -> Option<TimerId> {
        self.iter()
            .find(|(_, l, _)| *l == label)
            .map(|(id, _, _)| id)
    }

    /// Label of a timer.
    pub fn label(&self, id: TimerId) -> Option<&'static str> {
        self.entry(id).map(|e| e.label)
    }

    /// Borrow a timer.
    pub fn get(&self, id: TimerId) -> Option<&Timer<C>> {
        self.entry(id).map(|e| &e.timer)
    }

    /// Mutably borrow a timer, e.g. to change its duration.
    pub fn get_mut(&mut self, id: TimerId) -> Option<&mut Timer<C>> {
        self.entry_mut(id).map(|e| &mut e.timer)
    }

    /// Remove a timer and hand it back.
    pub fn remove(&mut self, id: TimerId) -> Result<Timer<C>, TimerError> {
        let slot = self
            .slots
            .get_mut(id.index())
            .filter(|s| s.generation == id.generation)
            .ok_or(TimerError::NotFound)?;
        let entry = slot.entry.take().ok_or(TimerError::NotFound)?;
        slot.generation = slot.generation.wrapping_add(1);

        debug!("timer '{}' removed from slot {}", entry.label, id.index);
        Ok(entry.timer)
    }

    /// Iterate over live timers with their ids and labels.
    pub fn iter(&self) -> impl Iterator<Item = (TimerId, &'static str, &Timer<C>)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entry.as_ref().map(|e| {
                let id = TimerId {
                    index: index as u16,
                    generation: slot.generation,
                };
                (id, e.label, &e.timer)
            })
        })
    }

    /// Stop every timer.
    pub fn reset_all(&mut self) {
        for entry in self.slots.iter_mut().filter_map(|s| s.entry.as_mut()) {
            entry.timer.reset();
        }
    }

    fn entry(&self, id: TimerId) -> Option<&Entry<C>> {
        self.slots
            .get(id.index())
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.entry.as_ref())
    }

    fn entry_mut(&mut self, id: TimerId) -> Option<&mut Entry<C>> {
        self.slots
            .get_mut(id.index())
            .filter(|s| s.generation == id.generation)
            .and_then(|s| s.entry.as_mut())
    }
}

impl<C: Clock + Clone, const N: usize> TimerSet<C, N> {
    /// Add a stopped timer with the given duration.
    ///
    /// Labels must be unique within the set.
    pub fn add(&mut self, label: &'static str, duration: Millis) -> Result<TimerId, TimerError> {
        if self.find(label).is_some() {
            warn!("timer label '{}' already in use", label);
            return Err(TimerError::DuplicateLabel);
        }

        let entry = Entry {
            label,
            timer: Timer::with_duration(self.clock.clone(), duration),
        };

        // Reuse a vacated slot before growing
        if let Some((index, slot)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, s)| s.entry.is_none())
        {
            slot.entry = Some(entry);
            debug!("timer '{}' added at slot {}", label, index);
            return Ok(TimerId {
                index: index as u16,
                generation: slot.generation,
            });
        }

        let index = self.slots.len();
        self.slots
            .push(Slot {
                generation: 0,
                entry: Some(entry),
            })
            .map_err(|_| {
                warn!("timer set full, '{}' rejected", label);
                TimerError::CapacityExceeded
            })?;

        debug!("timer '{}' added at slot {}", label, index);
        Ok(TimerId {
            index: index as u16,
            generation: 0,
        })
    }

    /// Start every timer that is not already running.
    ///
    /// Returns how many were started.
    pub fn start_all(&mut self) -> usize {
        self.slots
            .iter_mut()
            .filter_map(|s| s.entry.as_mut())
            .map(|e| e.timer.start())
            .filter(|&started| started)
            .count()
    }

    /// Run [`Timer::check_and_restart`] on every timer and call `on_fire`
    /// for each one that expired.
    ///
    /// Call once per main loop iteration. Returns the number fired.
    pub fn poll<F>(&mut self, mut on_fire: F) -> usize
    where
        F: FnMut(TimerId, &'static str),
    {
        let mut fired = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(entry) = slot.entry.as_mut() else {
                continue;
            };
            if entry.timer.check_and_restart() {
                trace!("timer '{}' fired", entry.label);
                fired += 1;
                on_fire(
                    TimerId {
                        index: index as u16,
                        generation: slot.generation,
                    },
                    entry.label,
                );
            }
        }
        fired
    }

    /// Ids of every expired timer, without restarting them.
    pub fn expired(&self) -> heapless::Vec<TimerId, N> {
        let mut ids = heapless::Vec::new();
        for (id, _, timer) in self.iter() {
            if timer.check() {
                // Cannot overflow: at most N live timers
                let _ = ids.push(id);
            }
        }
        ids
    }
}
