//! Filter types for querying habits.

use jiff::civil::Date;

use super::HabitStatus;

/// Filter options for querying habits. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitFilter {
    /// Filter by habit name (case-insensitive partial match)
    pub name_contains: Option<String>,

    /// Filter by exact status
    pub status: Option<HabitStatus>,

    /// Sessions starting on this date
    pub date: Option<Date>,

    /// Sessions starting in this month
    pub month: Option<YearMonth>,

    /// Text found in the description or the reflections
    pub content_contains: Option<String>,
}

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i16,
    pub month: i8,
}

impl HabitFilter {
    /// Filter for a single status.
    ///
    /// ```rust
    /// use cadence_core::models::{HabitFilter, HabitStatus};
    ///
    /// let filter = HabitFilter::for_status(HabitStatus::Missed);
    /// assert_eq!(filter.status, Some(HabitStatus::Missed));
    /// assert!(filter.name_contains.is_none());
    /// ```
    pub fn for_status(status: HabitStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Filter for sessions of one habit name.
    pub fn for_name(name: impl Into<String>) -> Self {
        Self {
            name_contains: Some(name.into()),
            ..Default::default()
        }
    }
}
