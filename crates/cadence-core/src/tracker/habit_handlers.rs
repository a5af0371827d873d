//! Habit handlers that take raw parameters and return display wrappers.

use jiff::Zoned;

use super::Tracker;
use crate::{
    display::{CreateResult, DeleteResult, Habits, OperationStatus, UpdateResult},
    error::{Result, TrackerError},
    models::Habit,
    params::{CreateHabit, DeleteHabit, Id, ListHabits, SearchHabits, UpdateHabit},
    schedule::PatternSequence,
};

impl Tracker {
    /// Handle creating a habit, recurring over `sequence` when one is given.
    pub async fn create_habit_result(
        &self,
        params: &CreateHabit,
        sequence: Option<&PatternSequence>,
    ) -> Result<CreateOutcome> {
        match sequence {
            Some(sequence) => self
                .create_recurring_habit(params, sequence)
                .await
                .map(|habits| CreateOutcome::Recurring(CreateResult::new(Habits(habits)))),
            None => self
                .create_habit(params)
                .await
                .map(|habit| CreateOutcome::Single(CreateResult::new(habit))),
        }
    }

    /// Handle showing a single habit.
    pub async fn show_habit(&self, params: &Id) -> Result<Habit> {
        self.get_habit(params)
            .await?
            .ok_or(TrackerError::HabitNotFound { id: params.id })
    }

    /// Handle listing habits, optionally by status.
    pub async fn list_habits_result(&self, params: &ListHabits) -> Result<Habits> {
        let filter = params.validate()?;
        self.list_habits(filter).await.map(Habits)
    }

    /// Handle searching habits. A month without a year means this year.
    pub async fn search_habits(&self, params: &SearchHabits) -> Result<Habits> {
        let filter = params.validate(Zoned::now().year())?;
        self.list_habits(filter).await.map(Habits)
    }

    /// Handle updating a habit, reporting the changes made.
    pub async fn update_habit_result(&self, params: &UpdateHabit) -> Result<UpdateResult<Habit>> {
        let request = params.validate()?;
        if request.is_empty() {
            return Err(TrackerError::validation("fields").with_reason("Nothing to update"));
        }
        let changes = request.describe_changes();
        let habit = self.apply_update(params.id, request).await?;
        Ok(UpdateResult::with_changes(habit, changes))
    }

    /// Handle deleting a habit.
    pub async fn delete_habit_result(&self, params: &DeleteHabit) -> Result<DeleteResult<Habit>> {
        self.delete_habit(params).await.map(DeleteResult::new)
    }

    /// Handle a status refresh.
    pub async fn refresh_statuses_result(&self) -> Result<OperationStatus> {
        let changed = self.refresh_statuses().await?;
        Ok(OperationStatus::success(format!(
            "Refreshed statuses, {changed} habits changed"
        )))
    }

    /// Handle confirming every habit waiting for confirmation.
    pub async fn complete_pending_result(&self) -> Result<OperationStatus> {
        let completed = self.complete_pending().await?;
        Ok(OperationStatus::success(format!(
            "Marked {completed} habits as done"
        )))
    }
}

/// Result of [`Tracker::create_habit_result`].
pub enum CreateOutcome {
    Single(CreateResult<Habit>),
    Recurring(CreateResult<Habits>),
}

impl std::fmt::Display for CreateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateOutcome::Single(result) => write!(f, "{result}"),
            CreateOutcome::Recurring(result) => write!(f, "{result}"),
        }
    }
}
