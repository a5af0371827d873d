use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Throwaway database and pattern file for one test
struct CliTestEnvironment {
    _temp_dir: TempDir,
    db_path: PathBuf,
    patterns_path: PathBuf,
}

impl CliTestEnvironment {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let db_path = temp_dir.path().join("cli_test.db");
        let patterns_path = temp_dir.path().join("patterns.json");
        Self {
            _temp_dir: temp_dir,
            db_path,
            patterns_path,
        }
    }

    /// A `cadence` command with `--no-color` and both files set
    fn cmd(&self) -> Command {
        let mut cmd = cadence_cmd();
        cmd.args([
            "--database-file",
            self.db_path.to_str().unwrap(),
            "--patterns-file",
            self.patterns_path.to_str().unwrap(),
        ]);
        cmd
    }

    fn create_gym(&self) {
        self.cmd()
            .args([
                "habit",
                "create",
                "Gym",
                "--start",
                "2099-01-05, 07:00",
                "--duration",
                "00:45:00",
                "--description",
                "Legs and back",
            ])
            .assert()
            .success();
    }
}

/// Helper function to create a Command with --no-color flag for testing
fn cadence_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_create_habit_success() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "habit",
            "create",
            "Gym",
            "--start",
            "2099-01-05, 07:00",
            "--duration",
            "00:45:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created habit with ID: 1"))
        .stdout(predicate::str::contains("### 1. Gym (UPCOMING)"))
        .stdout(predicate::str::contains("- End: 2099-01-05 07:45 (Mon)"));
}

#[test]
fn test_cli_create_habit_in_past_fails() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "habit",
            "create",
            "Gym",
            "--start",
            "2001-01-01, 07:00",
            "--duration",
            "00:45:00",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("date has already passed"));
}

#[test]
fn test_cli_create_habit_bad_duration_fails() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "habit",
            "create",
            "Gym",
            "--start",
            "2099-01-05, 07:00",
            "--duration",
            "45 minutes",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid duration format"));
}

#[test]
fn test_cli_list_empty_habits() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["habit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits found."));
}

#[test]
fn test_cli_default_command_lists_habits() {
    let env = CliTestEnvironment::new();
    env.create_gym();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("| ID | Name | Start | Duration | Status |"))
        .stdout(predicate::str::contains(
            "| 1 | Gym | 2099-01-05 07:00 (Mon) | 00:45:00 | UPCOMING |",
        ));
}

#[test]
fn test_cli_list_by_status() {
    let env = CliTestEnvironment::new();
    env.create_gym();

    env.cmd()
        .args(["habit", "list", "--status", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits found."));

    env.cmd()
        .args(["habit", "list", "--status", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym"));
}

#[test]
fn test_cli_show_habit() {
    let env = CliTestEnvironment::new();
    env.create_gym();

    env.cmd()
        .args(["habit", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Gym (UPCOMING)"))
        .stdout(predicate::str::contains("Legs and back"));
}

#[test]
fn test_cli_invalid_habit_id() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["habit", "show", "99999"])
        .assert()
        .failure();
}

#[test]
fn test_cli_update_habit() {
    let env = CliTestEnvironment::new();
    env.create_gym();

    env.cmd()
        .args([
            "habit",
            "update",
            "1",
            "--status",
            "done",
            "--reflections",
            "New personal best",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated habit with ID: 1"))
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("- Changed status to DONE"))
        .stdout(predicate::str::contains("- Updated reflections"))
        .stdout(predicate::str::contains("#### Reflections"))
        .stdout(predicate::str::contains("New personal best"));
}

#[test]
fn test_cli_update_without_changes_fails() {
    let env = CliTestEnvironment::new();
    env.create_gym();

    env.cmd()
        .args(["habit", "update", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_cli_delete_habit_requires_confirmation() {
    let env = CliTestEnvironment::new();
    env.create_gym();

    env.cmd()
        .args(["habit", "delete", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Deletion requires confirmation"));

    env.cmd()
        .args(["habit", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted habit 'Gym' (ID: 1)"));

    env.cmd()
        .args(["habit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits found."));
}

#[test]
fn test_cli_search_habits() {
    let env = CliTestEnvironment::new();
    env.create_gym();
    env.cmd()
        .args([
            "habit",
            "create",
            "Reading",
            "--start",
            "2099-03-10, 21:00",
            "--duration",
            "00:30:00",
        ])
        .assert()
        .success();

    env.cmd()
        .args(["habit", "search", "--name", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading"))
        .stdout(predicate::str::contains("Gym").not());

    env.cmd()
        .args(["habit", "search", "--month", "1", "--year", "2099"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym"))
        .stdout(predicate::str::contains("Reading").not());

    env.cmd()
        .args(["habit", "search", "--content", "legs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym"));

    env.cmd()
        .args(["habit", "search", "--date", "2099-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits found."));
}

#[test]
fn test_cli_refresh_and_complete() {
    let env = CliTestEnvironment::new();
    env.create_gym();

    env.cmd()
        .args(["habit", "refresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Refreshed statuses, 0 habits changed",
        ));

    env.cmd()
        .args(["habit", "complete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Marked 0 habits as done"));
}

#[test]
fn test_cli_week_patterns() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["week", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No week patterns defined."));

    env.cmd()
        .args(["week", "define", "gym", "Fri", "mon", "wed"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Defined week pattern 'gym': mon wed fri",
        ));

    env.cmd()
        .args(["week", "rename", "gym", "lifting"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Renamed week pattern 'gym' to 'lifting'",
        ));

    env.cmd()
        .args(["week", "edit", "lifting", "tues", "thurs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'lifting': tues thurs"));

    env.cmd()
        .args(["week", "define", "rest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no days)"));

    env.cmd()
        .args(["week", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **lifting**: tues thurs"))
        .stdout(predicate::str::contains("- **rest**: (no days)"));

    env.cmd()
        .args(["week", "delete", "rest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted week pattern 'rest'"));

    env.cmd()
        .args(["week", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rest").not());
}

#[test]
fn test_cli_week_validation_errors() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["week", "define", "ab", "mon"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error:"));

    env.cmd()
        .args(["week", "define", "gym", "tue"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid input for field 'days'"));

    env.cmd()
        .args(["week", "define", "gym", "mon"])
        .assert()
        .success();

    env.cmd()
        .args(["week", "define", "gym", "fri"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("already used"));
}

#[test]
fn test_cli_month_requires_four_weeks() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["month", "compose", "month1", "skip", "skip", "skip", "skip"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("First create a week pattern"));

    env.cmd()
        .args(["week", "define", "gym", "mon", "wed", "fri"])
        .assert()
        .success();

    env.cmd()
        .args(["month", "compose", "month1", "gym", "skip", "gym"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid input for field 'weeks'"));

    env.cmd()
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No month patterns composed."));
}

#[test]
fn test_cli_recurring_habit_workflow() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["week", "define", "gym", "mon", "wed", "fri"])
        .assert()
        .success();

    env.cmd()
        .args(["month", "compose", "month1", "gym", "skip", "gym", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Composed month pattern 'month1'"));

    env.cmd()
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### month1"))
        .stdout(predicate::str::contains("1. gym (mon wed fri)"))
        .stdout(predicate::str::contains("2. skip"));

    env.cmd()
        .args(["sequence", "order", "month1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Appended 1 month patterns, 1 in sequence",
        ));

    env.cmd()
        .args(["sequence", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. month1"))
        .stdout(predicate::str::contains("1 months, 28 days in total"));

    // 2099-01-05 is a Monday
    env.cmd()
        .args([
            "habit",
            "create",
            "Gym",
            "--start",
            "2099-01-05, 07:00",
            "--duration",
            "00:45:00",
            "--repeat",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 6 sessions of 'Gym'"))
        .stdout(predicate::str::contains("2099-01-05 07:00 (Mon)"))
        .stdout(predicate::str::contains("2099-01-23 07:00 (Fri)"))
        .stdout(predicate::str::contains("2099-01-12").not());

    // The sequence was consumed but the patterns remain
    env.cmd()
        .args(["sequence", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No month patterns ordered."));

    env.cmd()
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### month1"));

    env.cmd()
        .args(["stats", "Gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Gym"));
}

#[test]
fn test_cli_repeat_without_sequence_fails() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "habit",
            "create",
            "Gym",
            "--start",
            "2099-01-05, 07:00",
            "--duration",
            "00:45:00",
            "--repeat",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: Order month patterns before creating a recurring habit",
        ));

    env.cmd()
        .args(["habit", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits found."));
}

#[test]
fn test_cli_sequence_order_and_clear() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["week", "define", "daily", "everyday"])
        .assert()
        .success();
    env.cmd()
        .args(["month", "compose", "steady", "daily", "daily", "daily", "daily"])
        .assert()
        .success();

    env.cmd()
        .args(["sequence", "order", "steady", "skip"])
        .assert()
        .success();
    env.cmd()
        .args(["sequence", "order", "steady"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 in sequence"));

    env.cmd()
        .args(["sequence", "order", "nothing"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("'nothing' is not a saved month pattern"));

    env.cmd()
        .args(["sequence", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. skip"))
        .stdout(predicate::str::contains("3 months, 84 days in total"));

    env.cmd()
        .args(["sequence", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared the pattern sequence"));

    env.cmd()
        .args(["sequence", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No month patterns ordered."));
}

#[test]
fn test_cli_stats() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args(["stats", "--leaders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits found."));

    env.create_gym();
    env.cmd()
        .args(["habit", "update", "1", "--status", "done"])
        .assert()
        .success();

    env.cmd()
        .args(["stats", "--leaders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Longest streak: 1"))
        .stdout(predicate::str::contains("- Gym"));

    env.cmd()
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Gym"))
        .stdout(predicate::str::contains("100.0%"));
}

#[test]
fn test_cli_stats_for_habit_named_leaders() {
    let env = CliTestEnvironment::new();

    env.cmd()
        .args([
            "habit",
            "create",
            "leaders",
            "--start",
            "2099-01-05, 07:00",
            "--duration",
            "00:30:00",
        ])
        .assert()
        .success();

    env.cmd()
        .args(["stats", "leaders"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## leaders"))
        .stdout(predicate::str::contains("- Sessions: 1"));

    env.cmd()
        .args(["stats", "leaders", "--leaders"])
        .assert()
        .failure();
}

#[test]
fn test_cli_help_output() {
    cadence_cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("habit"))
        .stdout(predicate::str::contains("week"))
        .stdout(predicate::str::contains("month"))
        .stdout(predicate::str::contains("sequence"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_cli_habit_help() {
    cadence_cmd()
        .args(["habit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage habits"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("refresh"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_cli_version_output() {
    cadence_cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cadence "));
}
