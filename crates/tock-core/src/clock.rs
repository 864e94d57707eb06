//! Time source abstraction.
//!
//! Decouples the display loop from the wall clock so the same loop runs
//! against the local system clock in production and a scripted clock in
//! simulation.

use crate::TimeOfDay;

/// Supplies the current time of day.
///
/// Implementations are sampled once per render and must always return a
/// valid [`TimeOfDay`]; they have no failure mode.
pub trait Clock: Send {
    /// Current local time of day.
    fn now(&self) -> TimeOfDay;
}

/// A fixed time. Handy for tests and screenshots.
impl Clock for TimeOfDay {
    fn now(&self) -> TimeOfDay {
        *self
    }
}
