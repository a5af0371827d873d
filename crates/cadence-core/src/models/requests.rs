//! Request types for updating models.

use jiff::{SignedDuration, civil::DateTime};

use super::HabitStatus;

/// Validated partial update of a habit. `None` keeps the stored value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    pub start: Option<DateTime>,
    pub duration: Option<SignedDuration>,
    pub status: Option<HabitStatus>,
    pub description: Option<String>,
    pub reflections: Option<String>,
}

impl UpdateHabitRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start.is_none()
            && self.duration.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.reflections.is_none()
    }

    /// Human-readable list of the fields this request touches.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to '{name}'"));
        }
        if let Some(start) = &self.start {
            changes.push(format!("Rescheduled to {}", start.strftime("%Y-%m-%d %H:%M")));
        }
        if self.duration.is_some() {
            changes.push("Changed duration".to_string());
        }
        if let Some(status) = &self.status {
            changes.push(format!("Changed status to {}", status.as_str()));
        }
        if self.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if self.reflections.is_some() {
            changes.push("Updated reflections".to_string());
        }
        changes
    }
}

impl TryFrom<crate::params::UpdateHabit> for UpdateHabitRequest {
    type Error = crate::TrackerError;

    /// Convert an UpdateHabit parameter into a validated UpdateHabitRequest.
    fn try_from(params: crate::params::UpdateHabit) -> Result<Self, Self::Error> {
        params.validate()
    }
}
