//! Wall-clock time of day.

use std::fmt;

use crate::TimeError;

/// Seconds in one day. [`TimeOfDay::from_seconds_since_midnight`] wraps at
/// this boundary.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// An hour/minute/second triple.
///
/// # Invariants
///
/// - `hour < 24`, `minute < 60`, `second < 60`. Enforced by every
///   constructor, so renderers never bounds-check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0 };

    /// Build a time from its components.
    ///
    /// # Errors
    ///
    /// Returns the first component that is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::Hour(hour));
        }
        if minute >= 60 {
            return Err(TimeError::Minute(minute));
        }
        if second >= 60 {
            return Err(TimeError::Second(second));
        }
        Ok(Self { hour, minute, second })
    }

    /// Build a time from seconds elapsed since midnight, wrapping past the end
    /// of the day.
    pub fn from_seconds_since_midnight(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self { hour: (secs / 3600) as u8, minute: (secs / 60 % 60) as u8, second: (secs % 60) as u8 }
    }

    /// Hour, `0..=23`.
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute, `0..=59`.
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Second, `0..=59`.
    pub fn second(self) -> u8 {
        self.second
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_since_midnight(self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

/// Zero-padded 24-hour `HH:MM:SS`.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_components() {
        assert_eq!(TimeOfDay::new(24, 0, 0), Err(TimeError::Hour(24)));
        assert_eq!(TimeOfDay::new(0, 60, 0), Err(TimeError::Minute(60)));
        assert_eq!(TimeOfDay::new(0, 0, 60), Err(TimeError::Second(60)));
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
    }

    #[test]
    fn display_is_zero_padded() {
        let time = TimeOfDay::new(7, 5, 3).unwrap();
        assert_eq!(time.to_string(), "07:05:03");
    }

    #[test]
    fn from_seconds_wraps_at_midnight() {
        let time = TimeOfDay::from_seconds_since_midnight(SECONDS_PER_DAY + 3661);
        assert_eq!((time.hour(), time.minute(), time.second()), (1, 1, 1));
        assert_eq!(time.seconds_since_midnight(), 3661);
    }
}
