//! Data models for habits.
//!
//! This module contains the core domain models of the habit tracker. Display
//! implementations for these models are located in
//! [`crate::display::models`] to keep data structures and presentation
//! apart.
//!
//! - [`Habit`]: a stored session with its content (description, reflections)
//! - [`NewHabit`]: a session that has not been stored yet
//! - [`HabitTemplate`]: the base a recurring schedule is expanded from
//! - [`HabitStatus`]: lifecycle status and the time-window classifier
//! - [`HabitFilter`]: query options for listing and searching
//! - [`UpdateHabitRequest`]: a validated partial update
//! - [`HabitStats`]: streak and completion figures for one habit
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{HabitStatus, HabitTemplate};
//! use jiff::{SignedDuration, civil::date};
//!
//! let template = HabitTemplate {
//!     name: "Reading".to_string(),
//!     start: date(2030, 5, 6).at(21, 0, 0, 0),
//!     duration: SignedDuration::from_mins(30),
//!     description: Some("Two chapters".to_string()),
//! };
//!
//! let instance = template.instance_at(date(2030, 5, 8).at(21, 0, 0, 0));
//! assert_eq!(instance.name, "Reading");
//! assert_eq!(instance.status, HabitStatus::Upcoming);
//! ```

pub mod filters;
pub mod habit;
pub mod requests;
pub mod stats;
pub mod status;

#[cfg(test)]
mod tests;

pub use filters::{HabitFilter, YearMonth};
pub use habit::{Habit, HabitTemplate, NewHabit};
pub use requests::UpdateHabitRequest;
pub use stats::{HabitStats, StreakLeaders};
pub use status::{CONFIRMATION_WINDOW, HabitStatus};
