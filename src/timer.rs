//! Clock and one-shot timer queue
//!
//! Every timed behavior of the console (cursor blink, boot typing, response
//! delay, effects) is a one-shot event scheduled on a [`TimerQueue`]. Time is
//! measured as a [`Duration`] since the console was created, supplied by a
//! [`Clock`]. Tests and the headless `exec` command drive a [`ManualClock`];
//! the interactive terminal uses [`SystemClock`].

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of the current logical time.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Monotonic wall clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug)]
struct Scheduled<E> {
    /// Scheduling order, breaks ties between equal deadlines
    seq: u64,
    deadline: Duration,
    event: E,
}

/// Queue of one-shot timers.
///
/// Events fire in deadline order; events sharing a deadline fire in the
/// order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_seq: u64,
    entries: Vec<Scheduled<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `event` to fire at `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: E) {
        self.entries.push(Scheduled {
            seq: self.next_seq,
            deadline: now + delay,
            event,
        });
        self.next_seq += 1;
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Remove and return the earliest event due at or before `now`, along
    /// with its deadline.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(idx, _)| idx)?;
        let entry = self.entries.remove(idx);
        Some((entry.deadline, entry.event))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
