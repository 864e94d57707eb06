//! Production time source backed by the local wall clock.

use chrono::{Local, Timelike};
use tock_core::{Clock, TimeOfDay};

/// Local wall clock, read through chrono on every sample.
///
/// Follows the system time zone, including DST changes mid-run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[allow(clippy::disallowed_methods)]
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_seconds_since_midnight(Local::now().num_seconds_from_midnight())
    }
}
