//! Streak and completion statistics.

use super::Tracker;
use crate::{
    analytics,
    error::Result,
    models::{HabitFilter, HabitStats, StreakLeaders},
};

impl Tracker {
    /// Statistics over all sessions whose name is exactly `name`.
    pub async fn habit_stats(&self, name: &str) -> Result<HabitStats> {
        let name = name.trim().to_string();
        self.with_db(move |db| {
            let habits: Vec<_> = db
                .list_habits(&HabitFilter::for_name(name.as_str()))?
                .into_iter()
                .filter(|habit| habit.name == name)
                .collect();
            Ok(HabitStats::from_habits(name, &habits))
        })
        .await
    }

    /// Habit names sharing the longest streak.
    pub async fn streak_leaders(&self) -> Result<StreakLeaders> {
        self.with_db(|db| {
            let habits = db.list_habits(&HabitFilter::default())?;
            let (names, streak) = analytics::leaders(&habits);
            Ok(StreakLeaders { names, streak })
        })
        .await
    }
}
