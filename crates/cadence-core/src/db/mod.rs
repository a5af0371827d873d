//! SQLite storage for habits and their content.
//!
//! Each habit row points at a `habit_content` row holding the description
//! and reflections. Deleting the content row cascades to the habit.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::Habit,
    schedule::{GeneratedInstance, InstanceSink},
};

pub mod habit_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Expanded instances are persisted one row pair at a time.
impl InstanceSink for Database {
    type Saved = Habit;

    fn save(&mut self, instance: GeneratedInstance) -> Result<Habit> {
        self.add_habit(&instance)
    }
}
