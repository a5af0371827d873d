//! Date, time and duration display helpers.
//!
//! Habit times are naive local date-times, so no timezone is printed.

use std::fmt;

use jiff::{SignedDuration, civil::DateTime};

/// Formats a habit start or end as `YYYY-MM-DD HH:MM` plus the weekday.
pub struct HabitDateTime<'a>(pub &'a DateTime);

impl fmt::Display for HabitDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M (%a)"))
    }
}

/// Formats a duration as `HH:MM:SS`. This is also the storage format.
///
/// ```rust
/// use cadence_core::display::ClockDuration;
/// use jiff::SignedDuration;
///
/// let d = SignedDuration::from_secs(2 * 3600 + 5 * 60 + 9);
/// assert_eq!(ClockDuration(&d).to_string(), "02:05:09");
/// ```
pub struct ClockDuration<'a>(pub &'a SignedDuration);

impl fmt::Display for ClockDuration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs().unsigned_abs();
        let sign = if self.0.is_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }
}
