//! Time-driven status maintenance.

use jiff::civil::DateTime;
use log::info;

use super::{Tracker, local_now};
use crate::{
    error::Result,
    models::{HabitFilter, HabitStatus},
};

impl Tracker {
    /// Reclassifies every upcoming, ongoing and to-be-confirmed habit
    /// against the current time. Returns how many changed.
    pub async fn refresh_statuses(&self) -> Result<usize> {
        self.refresh_statuses_at(local_now()).await
    }

    /// [`Tracker::refresh_statuses`] against an explicit `now`.
    pub async fn refresh_statuses_at(&self, now: DateTime) -> Result<usize> {
        let changed = self
            .with_db(move |db| {
                let changes: Vec<(u64, HabitStatus)> = db
                    .list_habits(&HabitFilter::default())?
                    .into_iter()
                    .filter(|habit| habit.status.is_time_driven())
                    .filter_map(|habit| {
                        let status = HabitStatus::classify(habit.start, habit.duration, now);
                        (status != habit.status).then_some((habit.id, status))
                    })
                    .collect();
                db.set_statuses(&changes)
            })
            .await?;

        info!("Refreshed habit statuses, {changed} changed");
        Ok(changed)
    }

    /// Marks every habit waiting for confirmation as done. Returns how many
    /// were marked.
    pub async fn complete_pending(&self) -> Result<usize> {
        self.with_db(|db| {
            let changes: Vec<(u64, HabitStatus)> = db
                .list_habits(&HabitFilter::for_status(HabitStatus::ToBeConfirmed))?
                .into_iter()
                .map(|habit| (habit.id, HabitStatus::Done))
                .collect();
            db.set_statuses(&changes)
        })
        .await
    }
}
