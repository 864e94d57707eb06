//! Scripted time source.
//!
//! `SimClock` stands in for the wall clock. It starts at a chosen time and
//! advances by a fixed step on every sample, so a test knows exactly which
//! time each render saw.

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use tock_core::{Clock, TimeOfDay};

/// Deterministic clock.
///
/// Clones share the same time, so a test can keep a handle after moving the
/// clock into a runtime.
#[derive(Debug, Clone)]
pub struct SimClock {
    secs: Arc<AtomicU32>,
    step: u32,
}

impl SimClock {
    /// A clock frozen at `start`.
    pub fn new(start: TimeOfDay) -> Self {
        Self { secs: Arc::new(AtomicU32::new(start.seconds_since_midnight())), step: 0 }
    }

    /// Advance by `step` seconds after every sample.
    #[must_use]
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    /// Jump to `time`.
    pub fn set(&self, time: TimeOfDay) {
        self.secs.store(time.seconds_since_midnight(), Ordering::SeqCst);
    }

    /// Time the next sample will return, without advancing.
    pub fn peek(&self) -> TimeOfDay {
        TimeOfDay::from_seconds_since_midnight(self.secs.load(Ordering::SeqCst))
    }
}

impl Clock for SimClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_seconds_since_midnight(self.secs.fetch_add(self.step, Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8, second: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute, second).unwrap()
    }

    #[test]
    fn frozen_by_default() {
        let clock = SimClock::new(at(12, 0, 0));
        assert_eq!(clock.now(), at(12, 0, 0));
        assert_eq!(clock.now(), at(12, 0, 0));
    }

    #[test]
    fn steps_and_wraps_past_midnight() {
        let clock = SimClock::new(at(23, 59, 59)).with_step(1);
        assert_eq!(clock.now(), at(23, 59, 59));
        assert_eq!(clock.now(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn clones_share_time() {
        let clock = SimClock::new(TimeOfDay::MIDNIGHT);
        let handle = clock.clone();
        handle.set(at(8, 30, 0));
        assert_eq!(clock.peek(), at(8, 30, 0));
    }
}
