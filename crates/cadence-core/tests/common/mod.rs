#![allow(dead_code)]

use cadence_core::{Tracker, TrackerBuilder, params::CreateHabit};
use tempfile::TempDir;

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Creation parameters for a 30 minute session.
pub fn habit_params(name: &str, start: &str) -> CreateHabit {
    CreateHabit {
        name: name.to_string(),
        start: start.to_string(),
        duration: "00:30:00".to_string(),
        description: None,
    }
}
