//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/cadence/cadence.db` or `~/.local/share/cadence/cadence.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the tracker, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the parent directory cannot be
    /// created, and `TrackerError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Tracker::new(db_path))
    }
}

/// Default database location under the XDG data directory.
pub fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("cadence")
        .place_data_file("cadence.db")
        .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
}

/// Default pattern session file under the XDG data directory.
pub fn default_patterns_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("cadence")
        .place_data_file("patterns.json")
        .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
}
