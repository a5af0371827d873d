//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

/// Rewrites `YYYY-MM-DD HH:MM:SS` start values to the ISO `T` form.
const NORMALIZE_START_SQL: &str = "UPDATE habit SET start_datetime = replace(start_datetime, ' ', 'T') \
     WHERE start_datetime LIKE '____-__-__ %'";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Brings databases written by older versions up to date.
    fn apply_migrations(&self) -> Result<()> {
        let has_reflection_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('habit_content') WHERE name = 'reflection'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect habit_content table")?;

        if !has_reflection_column {
            self.connection
                .execute("ALTER TABLE habit_content ADD COLUMN reflection TEXT", [])
                .db_context("Failed to add reflection column to habit_content table")?;
            info!("Added reflection column to habit_content");
        }

        let normalized = self
            .connection
            .execute(NORMALIZE_START_SQL, [])
            .db_context("Failed to normalize start date-times")?;
        if normalized > 0 {
            info!("Normalized {normalized} legacy start date-times");
        }

        Ok(())
    }
}
