// playback/timer.rs

// Fixed-delay timers for auto-play. The controller only ever talks to the
// `Scheduler` trait; `TimerQueue` is the single-threaded implementation the
// binary drives with real sleeps and the tests drive with a virtual clock.

use std::time::Duration;

/// Identifies one scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wraps a raw timer id
    pub const fn new(id: u64) -> Self {
        TimerHandle(id)
    }

    /// Raw timer id
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Source of one-shot timers. A timer that fires is delivered back to the
/// controller as `on_tick(handle)` by whoever drives the scheduler.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler {
    /// Arms a one-shot timer due after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Disarms a timer; cancelling an unknown or fired handle is a no-op
    fn cancel(&mut self, handle: TimerHandle);
}

/// Virtual-clock timer queue
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerHandle)>,
}

impl TimerQueue {
    /// Empty queue with the clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Time left until the earliest armed timer fires
    pub fn time_to_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(due, _)| due.saturating_sub(self.now))
            .min()
    }

    /// Advances the clock by `elapsed` and returns every timer that came due,
    /// earliest first
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        self.now += elapsed;
        let now = self.now;
        let mut due: Vec<(Duration, TimerHandle)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Jumps the clock to the earliest armed timer and pops it
    pub fn pop_next(&mut self) -> Option<TimerHandle> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| **entry)
            .map(|(index, _)| index)?;
        let (due, handle) = self.pending.remove(index);
        self.now = self.now.max(due);
        Some(handle)
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push((self.now + delay, handle));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|(_, pending)| *pending != handle);
    }
}
