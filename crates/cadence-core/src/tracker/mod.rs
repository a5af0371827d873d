//! Async tracker API over the habit store.
//!
//! [`Tracker`] is the entry point for interfaces. It validates parameters,
//! runs database work on the blocking thread pool and hands back models or
//! display wrappers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (habit_handlers)│───▶│ (habit_ops,     │───▶│   (via db/)     │
//! │                 │    │  schedule_ops,  │    │                 │
//! │                 │    │  status_ops,    │    │                 │
//! │                 │    │  analytics_ops) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every database call opens its own connection inside
//! `tokio::task::spawn_blocking`; the tracker itself only holds the path.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_core::{TrackerBuilder, params::CreateHabit};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/cadence.db"))
//!     .build()
//!     .await?;
//!
//! let habit = tracker
//!     .create_habit(&CreateHabit {
//!         name: "Stretching".to_string(),
//!         start: "2099-01-05, 07:00".to_string(),
//!         duration: "00:15:00".to_string(),
//!         description: None,
//!     })
//!     .await?;
//! println!("{habit}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use jiff::{Zoned, civil::DateTime};
use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
};

pub mod analytics_ops;
pub mod builder;
pub mod habit_handlers;
pub mod habit_ops;
pub mod schedule_ops;
pub mod status_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing habits.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file in use.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` with a fresh connection on the blocking thread pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Current wall-clock time in the system timezone, without the zone.
pub fn local_now() -> DateTime {
    Zoned::now().datetime()
}
