//! Pattern authoring session.

use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use super::{MonthPattern, MonthPatterns, PatternSequence, WeekPattern, WeekPatterns};
use crate::error::{Result, TrackerError};

/// Everything a user has authored so far: week patterns, month patterns
/// composed from them, and the ordered sequence to expand.
///
/// A session is a plain value. Operations either succeed or return an error
/// and leave the session untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthoringSession {
    weeks: WeekPatterns,
    months: MonthPatterns,
    sequence: PatternSequence,
}

impl AuthoringSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a session from a JSON pattern file. A missing file yields an
    /// empty session.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let raw = fs::read_to_string(path).map_err(|e| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut session: Self = serde_json::from_str(&raw)?;
        session.weeks.reindex();
        session.months.reindex();
        info!(
            "Loaded pattern session from {} ({} weeks, {} months, {} ordered)",
            path.display(),
            session.weeks.len(),
            session.months.len(),
            session.sequence.len()
        );
        Ok(session)
    }

    /// Writes the session to a JSON pattern file, creating parent
    /// directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).map_err(|e| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!("Saved pattern session to {}", path.display());
        Ok(())
    }

    pub fn define_week(&mut self, name: &str, days_input: &str) -> Result<&WeekPattern> {
        self.weeks.define(name, days_input)
    }

    pub fn rename_week(&mut self, old: &str, new: &str) -> Result<&WeekPattern> {
        self.weeks.rename(old, new)
    }

    pub fn replace_week_body(&mut self, name: &str, days_input: &str) -> Result<&WeekPattern> {
        self.weeks.replace_body(name, days_input)
    }

    pub fn delete_week(&mut self, name: &str) -> Result<WeekPattern> {
        self.weeks.delete(name)
    }

    pub fn weeks(&self) -> &WeekPatterns {
        &self.weeks
    }

    pub fn compose_month<S: AsRef<str>>(
        &mut self,
        name: &str,
        week_refs: &[S],
    ) -> Result<&MonthPattern> {
        self.months.compose(&self.weeks, name, week_refs)
    }

    pub fn months(&self) -> &MonthPatterns {
        &self.months
    }

    /// Appends month patterns to the sequence. Returns how many were added.
    pub fn order<S: AsRef<str>>(&mut self, names: &[S]) -> Result<usize> {
        self.sequence.order(&self.weeks, &self.months, names)
    }

    pub fn sequence(&self) -> &PatternSequence {
        &self.sequence
    }

    /// Drops the ordered sequence, keeping week and month patterns.
    pub fn clear_sequence(&mut self) {
        self.sequence.clear();
    }
}
