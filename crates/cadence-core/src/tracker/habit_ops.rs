//! Habit operations for the Tracker.

use super::{Tracker, local_now};
use crate::{
    error::{Result, TrackerError},
    models::{Habit, HabitFilter, NewHabit, UpdateHabitRequest},
    params::{CreateHabit, DeleteHabit, Id, UpdateHabit},
};

impl Tracker {
    /// Validates and stores a single habit session.
    pub async fn create_habit(&self, params: &CreateHabit) -> Result<Habit> {
        let new: NewHabit = params.validate(local_now())?.into();
        self.with_db(move |db| db.add_habit(&new)).await
    }

    /// Retrieves a habit by its ID.
    pub async fn get_habit(&self, params: &Id) -> Result<Option<Habit>> {
        let id = params.id;
        self.with_db(move |db| db.get_habit(id)).await
    }

    /// Lists habits matching `filter`, ordered by start.
    pub async fn list_habits(&self, filter: HabitFilter) -> Result<Vec<Habit>> {
        self.with_db(move |db| db.list_habits(&filter)).await
    }

    /// Applies a validated partial update.
    pub async fn apply_update(&self, id: u64, request: UpdateHabitRequest) -> Result<Habit> {
        self.with_db(move |db| db.update_habit(id, request)).await
    }

    /// Validates and applies an update.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` if the request changes nothing or a
    /// field is invalid, and `TrackerError::HabitNotFound` if the ID is unknown.
    pub async fn update_habit(&self, params: &UpdateHabit) -> Result<Habit> {
        let request = params.validate()?;
        if request.is_empty() {
            return Err(TrackerError::validation("fields").with_reason("Nothing to update"));
        }
        self.apply_update(params.id, request).await
    }

    /// Deletes a habit and returns what was deleted.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` when not confirmed and
    /// `TrackerError::HabitNotFound` if the ID is unknown.
    pub async fn delete_habit(&self, params: &DeleteHabit) -> Result<Habit> {
        if !params.confirmed {
            return Err(TrackerError::validation("confirm")
                .with_reason("Deletion requires confirmation"));
        }

        let id = params.id;
        self.with_db(move |db| {
            let habit = db
                .get_habit(id)?
                .ok_or(TrackerError::HabitNotFound { id })?;
            db.delete_habit(id)?;
            Ok(habit)
        })
        .await
    }

    /// Distinct stored habit names.
    pub async fn habit_names(&self) -> Result<Vec<String>> {
        self.with_db(|db| db.habit_names()).await
    }
}
