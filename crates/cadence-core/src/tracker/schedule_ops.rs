//! Recurring habit creation.

use jiff::ToSpan;
use log::info;

use super::{Tracker, local_now};
use crate::{
    error::{Result, TrackerError},
    models::Habit,
    params::CreateHabit,
    schedule::{PatternSequence, expand},
};

impl Tracker {
    /// Expands a habit over the ordered pattern sequence and stores every
    /// instance, one at a time, in emission order.
    ///
    /// The base habit itself is not stored separately; when its start day
    /// matches the first active week it is the first instance.
    ///
    /// # Errors
    ///
    /// - `TrackerError::State` if the sequence is empty
    /// - `TrackerError::Validation` if the parameters are invalid or the walk
    ///   would run past the last representable date
    /// - the first save error; instances saved before it stay saved
    pub async fn create_recurring_habit(
        &self,
        params: &CreateHabit,
        sequence: &PatternSequence,
    ) -> Result<Vec<Habit>> {
        if sequence.is_empty() {
            return Err(TrackerError::state(
                "Order month patterns before creating a recurring habit",
            ));
        }

        let template = params.validate(local_now())?;
        if template
            .start
            .checked_add(i64::from(sequence.span_days()).days())
            .is_err()
        {
            return Err(TrackerError::validation("start").with_reason(format!(
                "the {} days of ordered patterns would run past the end of the calendar",
                sequence.span_days()
            )));
        }
        let sequence = sequence.clone();

        let saved = self
            .with_db(move |db| expand(&template, &sequence).emit_into(db))
            .await?;

        info!("Created {} recurring sessions", saved.len());
        Ok(saved)
    }
}
