//! Streak and completion analytics over stored habit sessions.
//!
//! All functions expect the sessions of one habit sorted by start time, which
//! is the order [`crate::Database::list_habits`] returns them in.

use std::collections::BTreeMap;

use crate::models::{Habit, HabitStatus};

/// Number of most recent streaks reported by [`latest_streaks`].
pub const LATEST_STREAK_COUNT: usize = 7;

/// Lengths of consecutive `DONE` runs, oldest first.
///
/// Upcoming sessions have not happened yet and are skipped entirely. Any other
/// non-`DONE` status breaks a run.
///
/// ```rust
/// use cadence_core::{analytics::streaks, models::HabitStatus::*};
///
/// assert_eq!(streaks([Done, Done, Missed, Upcoming, Done]), vec![2, 1]);
/// assert_eq!(streaks([Done, Upcoming, Done]), vec![2]);
/// ```
pub fn streaks<I>(statuses: I) -> Vec<u32>
where
    I: IntoIterator<Item = HabitStatus>,
{
    let mut runs = Vec::new();
    let mut current = 0;

    for status in statuses {
        match status {
            HabitStatus::Upcoming => {}
            HabitStatus::Done => current += 1,
            _ => {
                if current > 0 {
                    runs.push(current);
                }
                current = 0;
            }
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

fn statuses(habits: &[Habit]) -> impl Iterator<Item = HabitStatus> + '_ {
    habits.iter().map(|habit| habit.status)
}

/// Longest streak, or 0 when there is none.
pub fn longest_streak(habits: &[Habit]) -> u32 {
    streaks(statuses(habits)).into_iter().max().unwrap_or(0)
}

/// Shortest streak, or 0 when there is none.
pub fn shortest_streak(habits: &[Habit]) -> u32 {
    streaks(statuses(habits)).into_iter().min().unwrap_or(0)
}

/// The last [`LATEST_STREAK_COUNT`] streaks, oldest first.
pub fn latest_streaks(habits: &[Habit]) -> Vec<u32> {
    let all = streaks(statuses(habits));
    let skip = all.len().saturating_sub(LATEST_STREAK_COUNT);
    all[skip..].to_vec()
}

/// Done and missed session counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Completion {
    pub done: u32,
    pub missed: u32,
}

impl Completion {
    /// Count the done and missed sessions.
    pub fn count(habits: &[Habit]) -> Self {
        habits
            .iter()
            .fold(Self::default(), |mut acc, habit| {
                match habit.status {
                    HabitStatus::Done => acc.done += 1,
                    HabitStatus::Missed => acc.missed += 1,
                    _ => {}
                }
                acc
            })
    }

    /// Percentage of done over done plus missed; `None` when both are zero.
    pub fn rate(&self) -> Option<f64> {
        let total = self.done + self.missed;
        (total > 0).then(|| f64::from(self.done) / f64::from(total) * 100.0)
    }
}

/// Completion rate in percent. See [`Completion::rate`].
pub fn completion_rate(habits: &[Habit]) -> Option<f64> {
    Completion::count(habits).rate()
}

/// Names whose longest streak equals the maximum over all names.
///
/// Input is every stored session, in start order. Names come back sorted.
/// Returns an empty list when there are no sessions.
pub fn leaders(habits: &[Habit]) -> (Vec<String>, u32) {
    let mut by_name: BTreeMap<&str, Vec<HabitStatus>> = BTreeMap::new();
    for habit in habits {
        by_name.entry(&habit.name).or_default().push(habit.status);
    }

    let longest: BTreeMap<&str, u32> = by_name
        .into_iter()
        .map(|(name, statuses)| (name, streaks(statuses).into_iter().max().unwrap_or(0)))
        .collect();

    let Some(best) = longest.values().copied().max() else {
        return (Vec::new(), 0);
    };

    let names = longest
        .into_iter()
        .filter(|(_, streak)| *streak == best)
        .map(|(name, _)| name.to_string())
        .collect();
    (names, best)
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, civil::date};

    use super::*;
    use crate::models::HabitStatus::*;

    fn habit(id: u64, name: &str, status: HabitStatus) -> Habit {
        Habit {
            id,
            content_id: id,
            name: name.to_string(),
            start: date(2030, 1, 1).at(8, 0, 0, 0) + SignedDuration::from_hours(24 * id as i64),
            duration: SignedDuration::from_mins(30),
            status,
            description: None,
            reflections: None,
        }
    }

    fn sessions(name: &str, statuses: &[HabitStatus]) -> Vec<Habit> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| habit(i as u64 + 1, name, *status))
            .collect()
    }

    #[test]
    fn test_longest_streak_broken_by_missed() {
        let habits = sessions("Run", &[Done, Done, Missed, Done]);
        assert_eq!(longest_streak(&habits), 2);
        assert_eq!(shortest_streak(&habits), 1);
    }

    #[test]
    fn test_no_streaks_is_zero() {
        let habits = sessions("Run", &[Missed, Upcoming]);
        assert_eq!(longest_streak(&habits), 0);
        assert_eq!(shortest_streak(&habits), 0);
        assert!(latest_streaks(&habits).is_empty());
    }

    #[test]
    fn test_latest_streaks_keeps_last_seven() {
        let mut statuses = Vec::new();
        for run in 1..=9 {
            statuses.extend(std::iter::repeat_n(Done, run));
            statuses.push(Missed);
        }
        let habits = sessions("Read", &statuses);
        assert_eq!(latest_streaks(&habits), vec![3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_completion_rate() {
        let habits = sessions("Run", &[Done, Done, Missed, Upcoming, ToBeConfirmed]);
        let completion = Completion::count(&habits);
        assert_eq!(completion, Completion { done: 2, missed: 1 });

        let rate = completion_rate(&habits).unwrap();
        assert!((rate - 66.666_666).abs() < 0.001);
    }

    #[test]
    fn test_completion_rate_without_history() {
        let habits = sessions("Run", &[Upcoming, Upcoming]);
        assert_eq!(completion_rate(&habits), None);
    }

    #[test]
    fn test_leaders_reports_ties() {
        let mut habits = sessions("Swim", &[Done, Done, Missed]);
        habits.extend(sessions("Read", &[Done, Missed, Done, Done]));
        habits.extend(sessions("Yoga", &[Done]));

        let (names, best) = leaders(&habits);
        assert_eq!(best, 2);
        assert_eq!(names, vec!["Read".to_string(), "Swim".to_string()]);
    }

    #[test]
    fn test_leaders_empty() {
        assert_eq!(leaders(&[]), (Vec::new(), 0));
    }
}
