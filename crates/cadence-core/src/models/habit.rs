//! Habit model definitions.

use jiff::{SignedDuration, civil::DateTime};
use serde::{Deserialize, Serialize};

use super::HabitStatus;

/// A stored habit session with its content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    /// Unique identifier of the habit row
    pub id: u64,

    /// Identifier of the associated content row
    pub content_id: u64,

    /// Name of the habit
    pub name: String,

    /// When the session starts (naive local time)
    pub start: DateTime,

    /// How long the session lasts
    pub duration: SignedDuration,

    /// Current lifecycle status
    pub status: HabitStatus,

    /// Optional short description
    pub description: Option<String>,

    /// Reflections written after the session
    pub reflections: Option<String>,
}

impl Habit {
    /// End of the session window.
    pub fn end(&self) -> DateTime {
        self.start.saturating_add(self.duration)
    }
}

/// A habit session that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHabit {
    pub name: String,
    pub start: DateTime,
    pub duration: SignedDuration,
    pub status: HabitStatus,
    pub description: Option<String>,
}

/// The base habit a recurring schedule is expanded from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitTemplate {
    pub name: String,
    pub start: DateTime,
    pub duration: SignedDuration,
    pub description: Option<String>,
}

impl HabitTemplate {
    /// A copy of this template rescheduled to `start`, with status
    /// [`HabitStatus::Upcoming`].
    pub fn instance_at(&self, start: DateTime) -> NewHabit {
        NewHabit {
            name: self.name.clone(),
            start,
            duration: self.duration,
            status: HabitStatus::Upcoming,
            description: self.description.clone(),
        }
    }
}

impl From<HabitTemplate> for NewHabit {
    fn from(template: HabitTemplate) -> Self {
        NewHabit {
            name: template.name,
            start: template.start,
            duration: template.duration,
            status: HabitStatus::Upcoming,
            description: template.description,
        }
    }
}
