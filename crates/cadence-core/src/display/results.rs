//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::collections::Habits;
use crate::models::Habit;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{
///     display::CreateResult,
///     models::{Habit, HabitStatus},
/// };
/// use jiff::{SignedDuration, civil::date};
///
/// let habit = Habit {
///     id: 4,
///     content_id: 4,
///     name: "Piano".to_string(),
///     start: date(2030, 2, 1).at(18, 0, 0, 0),
///     duration: SignedDuration::from_mins(40),
///     status: HabitStatus::Upcoming,
///     description: Some("Scales first".to_string()),
///     reflections: None,
/// };
///
/// let output = CreateResult::new(habit).to_string();
/// assert!(output.contains("Created habit with ID: 4"));
/// assert!(output.contains("Scales first"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created habit with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Recurring creation: one line per saved instance.
impl fmt::Display for CreateResult<Habits> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource.0.first() {
            Some(first) => writeln!(
                f,
                "Created {} sessions of '{}'",
                self.resource.len(),
                first.name
            )?,
            None => writeln!(f, "No sessions matched the ordered patterns")?,
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated habit with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying deletion confirmations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Habit> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted habit '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}
