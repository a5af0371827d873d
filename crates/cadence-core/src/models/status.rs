//! Habit lifecycle status and the time-window classifier.

use std::str::FromStr;

use jiff::{SignedDuration, civil::DateTime};
use serde::{Deserialize, Serialize};

/// How long after a session ends it can still be confirmed before it counts
/// as missed.
pub const CONFIRMATION_WINDOW: SignedDuration = SignedDuration::from_secs(24 * 60 * 60);

/// Type-safe enumeration of habit statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitStatus {
    /// Session is happening right now
    Ongoing,

    /// Session is scheduled in the future
    #[default]
    Upcoming,

    /// Habit marked as active
    Active,

    /// Session was completed
    Done,

    /// Habit terminated or cancelled
    Dead,

    /// Session ended more than a day ago without confirmation
    Missed,

    /// Session ended recently and waits for confirmation
    ToBeConfirmed,

    /// Status could not be determined
    Unknown,
}

impl FromStr for HabitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace([' ', '-'], "_").as_str() {
            "ONGOING" => Ok(HabitStatus::Ongoing),
            "UPCOMING" => Ok(HabitStatus::Upcoming),
            "ACTIVE" => Ok(HabitStatus::Active),
            "DONE" => Ok(HabitStatus::Done),
            "DEAD" => Ok(HabitStatus::Dead),
            "MISSED" => Ok(HabitStatus::Missed),
            "TO_BE_CONFIRMED" => Ok(HabitStatus::ToBeConfirmed),
            "UNKNOWN" => Ok(HabitStatus::Unknown),
            _ => Err(format!("Invalid habit status: {s}")),
        }
    }
}

impl HabitStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitStatus::Ongoing => "ONGOING",
            HabitStatus::Upcoming => "UPCOMING",
            HabitStatus::Active => "ACTIVE",
            HabitStatus::Done => "DONE",
            HabitStatus::Dead => "DEAD",
            HabitStatus::Missed => "MISSED",
            HabitStatus::ToBeConfirmed => "TO_BE_CONFIRMED",
            HabitStatus::Unknown => "UNKNOWN",
        }
    }

    /// Statuses that still depend on the clock and get reclassified by a
    /// status refresh.
    pub fn is_time_driven(&self) -> bool {
        matches!(
            self,
            HabitStatus::Upcoming | HabitStatus::Ongoing | HabitStatus::ToBeConfirmed
        )
    }

    /// Classifies a session by where `now` falls relative to its window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::models::HabitStatus;
    /// use jiff::{SignedDuration, civil::date};
    ///
    /// let start = date(2030, 3, 1).at(9, 0, 0, 0);
    /// let hour = SignedDuration::from_hours(1);
    ///
    /// assert_eq!(
    ///     HabitStatus::classify(start, hour, date(2030, 3, 1).at(8, 0, 0, 0)),
    ///     HabitStatus::Upcoming
    /// );
    /// assert_eq!(
    ///     HabitStatus::classify(start, hour, date(2030, 3, 1).at(9, 30, 0, 0)),
    ///     HabitStatus::Ongoing
    /// );
    /// assert_eq!(
    ///     HabitStatus::classify(start, hour, date(2030, 3, 1).at(20, 0, 0, 0)),
    ///     HabitStatus::ToBeConfirmed
    /// );
    /// assert_eq!(
    ///     HabitStatus::classify(start, hour, date(2030, 3, 3).at(9, 0, 0, 0)),
    ///     HabitStatus::Missed
    /// );
    /// ```
    pub fn classify(start: DateTime, duration: SignedDuration, now: DateTime) -> HabitStatus {
        let Ok(end) = start.checked_add(duration) else {
            return HabitStatus::Unknown;
        };

        if start <= now && now < end {
            return HabitStatus::Ongoing;
        }
        if start > now {
            return HabitStatus::Upcoming;
        }
        if now.duration_since(end) > CONFIRMATION_WINDOW {
            return HabitStatus::Missed;
        }
        HabitStatus::ToBeConfirmed
    }
}
