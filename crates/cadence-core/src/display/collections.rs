//! Collection wrapper types for displaying groups of habits and patterns.

use std::{fmt, ops::Index};

use super::datetime::{ClockDuration, HabitDateTime};
use crate::{
    models::Habit,
    schedule::{MonthPatterns, PatternSequence, WeekPatterns},
};

/// Newtype wrapper for displaying a list of habits as a markdown table.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{
///     display::Habits,
///     models::{Habit, HabitStatus},
/// };
/// use jiff::{SignedDuration, civil::date};
///
/// let habit = Habit {
///     id: 1,
///     content_id: 1,
///     name: "Journal".to_string(),
///     start: date(2030, 1, 7).at(22, 0, 0, 0),
///     duration: SignedDuration::from_mins(10),
///     status: HabitStatus::Upcoming,
///     description: None,
///     reflections: None,
/// };
///
/// let output = Habits(vec![habit]).to_string();
/// assert!(output.contains("| 1 | Journal | 2030-01-07 22:00 (Mon) | 00:10:00 | UPCOMING |"));
/// ```
pub struct Habits(pub Vec<Habit>);

impl Habits {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.0.iter()
    }
}

impl Index<usize> for Habits {
    type Output = Habit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Habits {
    type Item = Habit;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Habits {
    type Item = &'a Habit;
    type IntoIter = std::slice::Iter<'a, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Habits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No habits found.");
        }

        writeln!(f, "| ID | Name | Start | Duration | Status |")?;
        writeln!(f, "|---:|------|-------|----------|--------|")?;
        for habit in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                habit.id,
                habit.name,
                HabitDateTime(&habit.start),
                ClockDuration(&habit.duration),
                habit.status
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for WeekPatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No week patterns defined.");
        }
        for week in self.list_all() {
            write!(f, "{week}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MonthPatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No month patterns composed.");
        }
        for month in self.list_all() {
            write!(f, "{month}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PatternSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No month patterns ordered.");
        }
        for (i, month) in self.months().iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, month.name)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{} months, {} days in total",
            self.len(),
            self.span_days()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::AuthoringSession;

    #[test]
    fn test_habits_display_empty() {
        assert_eq!(Habits(vec![]).to_string(), "No habits found.\n");
    }

    #[test]
    fn test_week_patterns_display() {
        let mut session = AuthoringSession::new();
        assert_eq!(session.weeks().to_string(), "No week patterns defined.\n");

        session.define_week("gym", "mon wed fri").unwrap();
        session.define_week("rest", "").unwrap();
        let output = session.weeks().to_string();
        assert!(output.contains("- **gym**: mon wed fri"));
        assert!(output.contains("- **rest**: (no days)"));
        assert!(output.find("gym").unwrap() < output.find("rest").unwrap());
    }

    #[test]
    fn test_month_patterns_display_shows_skips() {
        let mut session = AuthoringSession::new();
        session.define_week("gym", "mon").unwrap();
        session
            .compose_month("light", &["gym", "skip", "skip", "gym"])
            .unwrap();

        let output = session.months().to_string();
        assert!(output.contains("#### light"));
        assert!(output.contains("1. gym (mon)"));
        assert!(output.contains("2. skip"));
    }

    #[test]
    fn test_sequence_display_span() {
        let mut session = AuthoringSession::new();
        session.define_week("gym", "mon").unwrap();
        session
            .compose_month("light", &["gym", "gym", "gym", "gym"])
            .unwrap();
        session.order(&["light", "skip"]).unwrap();

        let output = session.sequence().to_string();
        assert!(output.contains("1. light"));
        assert!(output.contains("2. skip"));
        assert!(output.contains("2 months, 56 days in total"));
    }
}
