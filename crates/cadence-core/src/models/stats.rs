//! Per-habit statistics.

use serde::{Deserialize, Serialize};

use super::Habit;
use crate::analytics::{self, Completion};

/// Streak and completion figures for all sessions of one habit name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitStats {
    /// Habit name the figures were computed for
    pub name: String,
    /// Number of stored sessions
    pub sessions: u32,
    pub longest_streak: u32,
    pub shortest_streak: u32,
    /// Most recent streaks, oldest first
    pub latest_streaks: Vec<u32>,
    pub completion: Completion,
}

impl HabitStats {
    /// Compute statistics from sessions sorted by start time.
    pub fn from_habits(name: impl Into<String>, habits: &[Habit]) -> Self {
        Self {
            name: name.into(),
            sessions: habits.len() as u32,
            longest_streak: analytics::longest_streak(habits),
            shortest_streak: analytics::shortest_streak(habits),
            latest_streaks: analytics::latest_streaks(habits),
            completion: Completion::count(habits),
        }
    }

    /// Completion rate in percent, if any session was done or missed.
    pub fn completion_rate(&self) -> Option<f64> {
        self.completion.rate()
    }
}

/// Habit names sharing the longest streak.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StreakLeaders {
    pub names: Vec<String>,
    pub streak: u32,
}
