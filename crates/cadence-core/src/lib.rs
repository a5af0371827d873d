//! Core library for the Cadence habit tracker.
//!
//! The crate covers:
//!
//! - [`schedule`]: week and month patterns, the ordered pattern sequence and
//!   the expansion engine that turns a habit template into dated sessions
//! - [`models`]: habits, statuses and the status classifier
//! - [`db`]: SQLite persistence
//! - [`tracker`]: the async facade interfaces talk to
//! - [`analytics`]: streaks and completion rates
//! - [`display`]: markdown formatting for the terminal
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cadence_core::{TrackerBuilder, params::CreateHabit, schedule::AuthoringSession};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("habits.db"))
//!     .build()
//!     .await?;
//!
//! let mut session = AuthoringSession::new();
//! session.define_week("gym", "mon wed fri")?;
//! session.compose_month("month1", &["gym", "skip", "gym", "skip"])?;
//! session.order(&["month1"])?;
//!
//! let params = CreateHabit {
//!     name: "Gym".to_string(),
//!     start: "2099-01-05, 07:00".to_string(),
//!     duration: "00:45:00".to_string(),
//!     description: None,
//! };
//! let habits = tracker
//!     .create_recurring_habit(&params, session.sequence())
//!     .await?;
//! assert_eq!(habits.len(), 6);
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod tracker;

pub use db::Database;
pub use display::{CreateResult, DeleteResult, Habits, OperationStatus, UpdateResult};
pub use error::{ErrorKind, Result, TrackerError};
pub use models::{
    Habit, HabitFilter, HabitStats, HabitStatus, HabitTemplate, NewHabit, StreakLeaders,
    UpdateHabitRequest,
};
pub use params::{CreateHabit, DeleteHabit, Id, ListHabits, SearchHabits, UpdateHabit};
pub use schedule::{AuthoringSession, PatternSequence};
pub use tracker::{Tracker, TrackerBuilder, habit_handlers::CreateOutcome};
