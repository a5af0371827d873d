//! Display implementations for domain models.
//!
//! Display impls live here rather than next to the model definitions. All
//! output is markdown for the terminal renderer.

use std::fmt;

use super::datetime::{ClockDuration, HabitDateTime};
use crate::{
    models::{Habit, HabitStats, HabitStatus, StreakLeaders},
    schedule::{MonthPattern, WeekPattern, WeekSlot},
};

impl fmt::Display for HabitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.status)?;
        writeln!(f)?;

        writeln!(f, "- Start: {}", HabitDateTime(&self.start))?;
        writeln!(f, "- Duration: {}", ClockDuration(&self.duration))?;
        writeln!(f, "- End: {}", HabitDateTime(&self.end()))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if let Some(reflections) = &self.reflections {
            writeln!(f)?;
            writeln!(f, "#### Reflections")?;
            writeln!(f)?;
            writeln!(f, "{reflections}")?;
        }

        writeln!(f)
    }
}

impl fmt::Display for WeekPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}**: {}", self.name, self.days)
    }
}

impl fmt::Display for WeekSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.days {
            Some(days) => write!(f, "{} ({days})", self.name),
            None => write!(f, "skip"),
        }
    }
}

impl fmt::Display for MonthPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### {}", self.name)?;
        writeln!(f)?;
        for (i, slot) in self.weeks().iter().enumerate() {
            writeln!(f, "{}. {slot}", i + 1)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for HabitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Sessions: {}", self.sessions)?;
        writeln!(f, "- Longest streak: {}", self.longest_streak)?;
        writeln!(f, "- Shortest streak: {}", self.shortest_streak)?;

        if self.latest_streaks.is_empty() {
            writeln!(f, "- Latest streaks: none")?;
        } else {
            let latest: Vec<String> = self.latest_streaks.iter().map(u32::to_string).collect();
            writeln!(f, "- Latest streaks: {}", latest.join(", "))?;
        }

        match self.completion_rate() {
            Some(rate) => writeln!(
                f,
                "- Completion rate: {rate:.1}% (done {}, missed {})",
                self.completion.done, self.completion.missed
            ),
            None => writeln!(f, "- Completion rate: no finished sessions yet"),
        }
    }
}

impl fmt::Display for StreakLeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            return writeln!(f, "No habits found.");
        }
        writeln!(f, "Longest streak: {}", self.streak)?;
        writeln!(f)?;
        for name in &self.names {
            writeln!(f, "- {name}")?;
        }
        Ok(())
    }
}
