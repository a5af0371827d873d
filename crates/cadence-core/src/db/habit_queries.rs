//! Habit CRUD operations and queries.

use jiff::{SignedDuration, civil::DateTime};
use rusqlite::{OptionalExtension, Row, params, types::Type};

use crate::{
    display::ClockDuration,
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Habit, HabitFilter, HabitStatus, NewHabit, UpdateHabitRequest},
};

const INSERT_CONTENT_SQL: &str = "INSERT INTO habit_content (description, reflection) VALUES (?1, NULL)";
const INSERT_HABIT_SQL: &str = "INSERT INTO habit (habit_content_id, name, start_datetime, duration, status) VALUES (?1, ?2, ?3, ?4, ?5)";
const HABIT_COLUMNS: &str = "h.id, h.habit_content_id, h.name, h.start_datetime, h.duration, h.status, c.description, c.reflection";
const HABIT_FROM: &str = "FROM habit h JOIN habit_content c ON c.id = h.habit_content_id";
const SELECT_CONTENT_ID_SQL: &str = "SELECT habit_content_id FROM habit WHERE id = ?1";
const UPDATE_HABIT_SQL: &str =
    "UPDATE habit SET name = ?1, start_datetime = ?2, duration = ?3, status = ?4 WHERE id = ?5";
const UPDATE_CONTENT_SQL: &str =
    "UPDATE habit_content SET description = ?1, reflection = ?2 WHERE id = ?3";
const UPDATE_STATUS_SQL: &str = "UPDATE habit SET status = ?1 WHERE id = ?2";
const DELETE_CONTENT_SQL: &str = "DELETE FROM habit_content WHERE id = ?1";
const SELECT_NAMES_SQL: &str = "SELECT DISTINCT name FROM habit ORDER BY name";

fn select_habit_sql() -> String {
    format!("SELECT {HABIT_COLUMNS} {HABIT_FROM} WHERE h.id = ?1")
}

fn conversion_error(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

/// Parses a stored `HH:MM:SS` duration. Hours may exceed 23.
fn parse_stored_duration(raw: &str) -> Option<SignedDuration> {
    let mut parts = raw.trim().splitn(3, ':').map(str::parse::<i64>);
    let (Some(Ok(hours)), Some(Ok(minutes)), Some(Ok(seconds))) =
        (parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    Some(SignedDuration::from_secs(hours * 3600 + minutes * 60 + seconds))
}

/// Maps a row selected with [`HABIT_COLUMNS`] to a [`Habit`].
fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
    let start_str: String = row.get(3)?;
    let start = start_str
        .parse::<DateTime>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let duration_str: String = row.get(4)?;
    let duration = parse_stored_duration(&duration_str)
        .ok_or_else(|| conversion_error(4, format!("Invalid duration: {duration_str}")))?;

    let status_str: String = row.get(5)?;
    let status = status_str
        .parse::<HabitStatus>()
        .map_err(|reason| conversion_error(5, reason))?;

    Ok(Habit {
        id: row.get::<_, i64>(0)? as u64,
        content_id: row.get::<_, i64>(1)? as u64,
        name: row.get(2)?,
        start,
        duration,
        status,
        description: row.get(6)?,
        reflections: row.get(7)?,
    })
}

impl super::Database {
    /// Stores a habit and its content row in one transaction.
    pub fn add_habit(&mut self, habit: &NewHabit) -> Result<Habit> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(INSERT_CONTENT_SQL, params![habit.description.as_deref()])
            .db_context("Failed to insert habit content")?;
        let content_id = tx.last_insert_rowid();

        tx.execute(
            INSERT_HABIT_SQL,
            params![
                content_id,
                habit.name,
                habit.start.to_string(),
                ClockDuration(&habit.duration).to_string(),
                habit.status.as_str()
            ],
        )
        .db_context("Failed to insert habit")?;
        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Habit {
            id: id as u64,
            content_id: content_id as u64,
            name: habit.name.clone(),
            start: habit.start,
            duration: habit.duration,
            status: habit.status,
            description: habit.description.clone(),
            reflections: None,
        })
    }

    /// Retrieves a habit by its ID.
    pub fn get_habit(&self, id: u64) -> Result<Option<Habit>> {
        self.connection
            .query_row(&select_habit_sql(), params![id as i64], habit_from_row)
            .optional()
            .db_context("Failed to query habit")
    }

    /// Lists habits matching every criterion of `filter`, ordered by start.
    pub fn list_habits(&self, filter: &HabitFilter) -> Result<Vec<Habit>> {
        let mut query = format!("SELECT {HABIT_COLUMNS} {HABIT_FROM}");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref name) = filter.name_contains {
            conditions.push("h.name LIKE ?");
            params_vec.push(Box::new(format!("%{name}%")));
        }

        if let Some(status) = filter.status {
            conditions.push("h.status = ?");
            params_vec.push(Box::new(status.as_str()));
        }

        if let Some(date) = filter.date {
            conditions.push("h.start_datetime LIKE ?");
            params_vec.push(Box::new(format!("{date}%")));
        }

        if let Some(month) = filter.month {
            conditions.push("h.start_datetime LIKE ?");
            params_vec.push(Box::new(format!("{:04}-{:02}-%", month.year, month.month)));
        }

        if let Some(ref text) = filter.content_contains {
            conditions.push("(c.description LIKE ? OR c.reflection LIKE ?)");
            params_vec.push(Box::new(format!("%{text}%")));
            params_vec.push(Box::new(format!("%{text}%")));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY h.start_datetime, h.id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        stmt.query_map(&params_refs[..], habit_from_row)
            .db_context("Failed to query habits")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch habits")
    }

    /// Applies a partial update and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if no habit has this ID.
    pub fn update_habit(&mut self, id: u64, request: UpdateHabitRequest) -> Result<Habit> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(&select_habit_sql(), params![id as i64], habit_from_row)
            .optional()
            .db_context("Failed to get current habit")?
            .ok_or(TrackerError::HabitNotFound { id })?;

        let updated = Habit {
            name: request.name.unwrap_or(current.name),
            start: request.start.unwrap_or(current.start),
            duration: request.duration.unwrap_or(current.duration),
            status: request.status.unwrap_or(current.status),
            description: request.description.or(current.description),
            reflections: request.reflections.or(current.reflections),
            ..current
        };

        tx.execute(
            UPDATE_HABIT_SQL,
            params![
                updated.name,
                updated.start.to_string(),
                ClockDuration(&updated.duration).to_string(),
                updated.status.as_str(),
                id as i64
            ],
        )
        .db_context("Failed to update habit")?;

        tx.execute(
            UPDATE_CONTENT_SQL,
            params![
                updated.description.as_deref(),
                updated.reflections.as_deref(),
                updated.content_id as i64
            ],
        )
        .db_context("Failed to update habit content")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Stores new statuses for several habits at once. Returns the number of
    /// rows changed.
    pub fn set_statuses(&mut self, changes: &[(u64, HabitStatus)]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut changed = 0;
        {
            let mut stmt = tx
                .prepare(UPDATE_STATUS_SQL)
                .db_context("Failed to prepare status update")?;
            for (id, status) in changes {
                changed += stmt
                    .execute(params![status.as_str(), *id as i64])
                    .db_context("Failed to update habit status")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(changed)
    }

    /// Deletes a habit by removing its content row.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::HabitNotFound` if no habit has this ID.
    pub fn delete_habit(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let content_id: i64 = tx
            .query_row(SELECT_CONTENT_ID_SQL, params![id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to check habit existence")?
            .ok_or(TrackerError::HabitNotFound { id })?;

        tx.execute(DELETE_CONTENT_SQL, params![content_id])
            .db_context("Failed to delete habit")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Distinct habit names, sorted.
    pub fn habit_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_NAMES_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_map([], |row| row.get::<_, String>(0))
            .db_context("Failed to query habit names")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch habit names")
    }
}
