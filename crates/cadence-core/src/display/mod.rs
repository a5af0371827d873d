//! Display formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes are wrapped in small newtypes so the
//! same data can be formatted differently per context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │ (Habit, Pattern)│───▶│ (Habits, Create │───▶│    Output       │
//! │                 │    │  Result, ...)   │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `Habits` and the pattern collection listings
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus` one-liners
//! - [`datetime`]: `HabitDateTime` and `ClockDuration`
//!
//! ```rust
//! use cadence_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Refreshed 3 habits");
//! assert_eq!(status.to_string(), "Success: Refreshed 3 habits\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Habits;
pub use datetime::{ClockDuration, HabitDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
