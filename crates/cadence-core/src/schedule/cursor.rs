//! Calendar cursor used by the expansion walk.

use jiff::{ToSpan, civil::DateTime};

use super::Weekday;

/// A mutable date+time position on the calendar.
///
/// The cursor only ever moves forward in whole days, so the time-of-day of
/// the starting value is preserved for every position it visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    at: DateTime,
}

impl CalendarCursor {
    pub fn new(at: DateTime) -> Self {
        Self { at }
    }

    /// Moves the cursor forward by exactly `days` calendar days.
    ///
    /// Returns `false` and stays put when the move would pass the last
    /// representable date.
    pub fn advance(&mut self, days: u32) -> bool {
        match self.at.checked_add(i64::from(days).days()) {
            Ok(at) => {
                self.at = at;
                true
            }
            Err(_) => false,
        }
    }

    /// Weekday of the current position.
    pub fn weekday(&self) -> Weekday {
        self.at.weekday().into()
    }

    /// Current date+time.
    pub fn position(&self) -> DateTime {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_advance_preserves_time_of_day() {
        let mut cursor = CalendarCursor::new(date(2030, 1, 7).at(6, 45, 0, 0));
        cursor.advance(3);
        assert_eq!(cursor.position(), date(2030, 1, 10).at(6, 45, 0, 0));
        assert_eq!(cursor.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_advance_zero_is_noop() {
        let start = date(2030, 1, 7).at(6, 45, 0, 0);
        let mut cursor = CalendarCursor::new(start);
        assert!(cursor.advance(0));
        assert_eq!(cursor.position(), start);
    }

    #[test]
    fn test_advance_past_calendar_end_stays_put() {
        let start = date(9999, 12, 30).at(7, 0, 0, 0);
        let mut cursor = CalendarCursor::new(start);
        assert!(!cursor.advance(5));
        assert_eq!(cursor.position(), start);
        assert!(cursor.advance(1));
        assert_eq!(cursor.position(), date(9999, 12, 31).at(7, 0, 0, 0));
    }

    #[test]
    fn test_advance_rolls_over_month_and_year() {
        let mut cursor = CalendarCursor::new(date(2030, 12, 30).at(21, 0, 0, 0));
        cursor.advance(5);
        assert_eq!(cursor.position(), date(2031, 1, 4).at(21, 0, 0, 0));
    }

    #[test]
    fn test_advance_across_leap_day() {
        let mut cursor = CalendarCursor::new(date(2032, 2, 28).at(8, 0, 0, 0));
        cursor.advance(1);
        assert_eq!(cursor.position().date(), date(2032, 2, 29));
        cursor.advance(1);
        assert_eq!(cursor.position().date(), date(2032, 3, 1));
    }
}
