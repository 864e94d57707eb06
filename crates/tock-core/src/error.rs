//! Error types for the tock core.
//!
//! Rendering is total and never fails. The only fallible operation is building
//! a [`crate::TimeOfDay`] from unchecked components.

use thiserror::Error;

/// A time component outside its valid range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    /// Hour not in `0..=23`.
    #[error("hour out of range: {0} (expected 0..=23)")]
    Hour(u8),

    /// Minute not in `0..=59`.
    #[error("minute out of range: {0} (expected 0..=59)")]
    Minute(u8),

    /// Second not in `0..=59`.
    #[error("second out of range: {0} (expected 0..=59)")]
    Second(u8),
}
