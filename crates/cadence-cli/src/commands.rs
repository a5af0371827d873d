//! Subcommand argument definitions.
//!
//! Each clap struct mirrors a parameter type from `cadence_core::params` and
//! converts into it with `From`, so clap attributes stay out of the core
//! crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::fmt;

use cadence_core::params::{CreateHabit, DeleteHabit, Id, ListHabits, SearchHabits, UpdateHabit};
use clap::{Args, Subcommand, ValueEnum};

// ============================================================================
// Habits
// ============================================================================

/// Create a habit
///
/// Without `--repeat` a single session is stored. With `--repeat` the start
/// date anchors the ordered month patterns and one session is stored for
/// every matching day; the sequence is cleared afterwards.
#[derive(Args)]
pub struct CreateHabitArgs {
    /// Name of the habit (3 to 30 characters)
    pub name: String,
    #[arg(short, long, help = "Start date and time, e.g. '2030-01-07, 06:30'")]
    pub start: String,
    #[arg(short, long, help = "Duration as HH:MM:SS")]
    pub duration: String,
    #[arg(long, help = "Optional description (at most 50 characters)")]
    pub description: Option<String>,
    #[arg(long, help = "Repeat over the ordered month patterns")]
    pub repeat: bool,
}

impl From<CreateHabitArgs> for CreateHabit {
    fn from(val: CreateHabitArgs) -> Self {
        CreateHabit {
            name: val.name,
            start: val.start,
            duration: val.duration,
            description: val.description,
        }
    }
}

/// List habits, optionally by status
#[derive(Args)]
pub struct ListHabitsArgs {
    #[arg(long, help = "Only show habits with this status")]
    pub status: Option<StatusArg>,
}

impl From<ListHabitsArgs> for ListHabits {
    fn from(val: ListHabitsArgs) -> Self {
        ListHabits {
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Show a single habit with its description and reflections
#[derive(Args)]
pub struct ShowHabitArgs {
    #[arg(help = "Unique identifier of the habit")]
    pub id: u64,
}

impl From<ShowHabitArgs> for Id {
    fn from(val: ShowHabitArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a habit's details, status or reflections
#[derive(Args)]
pub struct UpdateHabitArgs {
    #[arg(help = "Unique identifier of the habit to update")]
    pub id: u64,
    #[arg(long, help = "New name")]
    pub name: Option<String>,
    #[arg(long, help = "New start date and time, e.g. '2030-01-07, 06:30'")]
    pub start: Option<String>,
    #[arg(long, help = "New duration as HH:MM:SS")]
    pub duration: Option<String>,
    #[arg(long, help = "New status")]
    pub status: Option<StatusArg>,
    #[arg(long, help = "New description")]
    pub description: Option<String>,
    #[arg(long, help = "Reflections on how the session went")]
    pub reflections: Option<String>,
}

impl From<UpdateHabitArgs> for UpdateHabit {
    fn from(val: UpdateHabitArgs) -> Self {
        UpdateHabit {
            id: val.id,
            name: val.name,
            start: val.start,
            duration: val.duration,
            status: val.status.map(|s| s.to_string()),
            description: val.description,
            reflections: val.reflections,
        }
    }
}

/// Delete a habit permanently
#[derive(Args)]
pub struct DeleteHabitArgs {
    #[arg(help = "Unique identifier of the habit to delete")]
    pub id: u64,
    #[arg(long, help = "Confirm the deletion")]
    pub confirm: bool,
}

impl From<DeleteHabitArgs> for DeleteHabit {
    fn from(val: DeleteHabitArgs) -> Self {
        DeleteHabit {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Search habits; every given criterion must match
#[derive(Args)]
pub struct SearchHabitsArgs {
    #[arg(long, help = "Part of the habit name")]
    pub name: Option<String>,
    #[arg(long, help = "Exact status")]
    pub status: Option<StatusArg>,
    #[arg(long, help = "Start date as YYYY-MM-DD")]
    pub date: Option<String>,
    #[arg(long, help = "Start month (1-12)")]
    pub month: Option<u8>,
    #[arg(long, requires = "month", help = "Year of --month, defaults to this year")]
    pub year: Option<i16>,
    #[arg(long, help = "Text in the description or reflections")]
    pub content: Option<String>,
}

impl From<SearchHabitsArgs> for SearchHabits {
    fn from(val: SearchHabitsArgs) -> Self {
        SearchHabits {
            name: val.name,
            status: val.status.map(|s| s.to_string()),
            date: val.date,
            month: val.month,
            year: val.year,
            content: val.content,
        }
    }
}

#[derive(Subcommand)]
pub enum HabitCommands {
    /// Create a habit, once or repeating over the ordered month patterns
    #[command(alias = "c")]
    Create(CreateHabitArgs),
    /// List habits
    #[command(aliases = ["l", "ls"])]
    List(ListHabitsArgs),
    /// Show details of a habit
    #[command(alias = "s")]
    Show(ShowHabitArgs),
    /// Update a habit
    #[command(alias = "u")]
    Update(UpdateHabitArgs),
    /// Delete a habit
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteHabitArgs),
    /// Search habits by name, status, date, month or content
    #[command(alias = "f")]
    Search(SearchHabitsArgs),
    /// Recompute statuses from the current time
    Refresh,
    /// Mark every habit awaiting confirmation as done
    Complete,
}

/// Habit status values accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StatusArg {
    Ongoing,
    Upcoming,
    Active,
    Done,
    Dead,
    Missed,
    ToBeConfirmed,
    Unknown,
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            StatusArg::Ongoing => "ongoing",
            StatusArg::Upcoming => "upcoming",
            StatusArg::Active => "active",
            StatusArg::Done => "done",
            StatusArg::Dead => "dead",
            StatusArg::Missed => "missed",
            StatusArg::ToBeConfirmed => "to-be-confirmed",
            StatusArg::Unknown => "unknown",
        };
        f.write_str(value)
    }
}

// ============================================================================
// Patterns
// ============================================================================

/// Define a week pattern from day tokens
///
/// Tokens are `mon tues wed thurs fri sat sun` or `everyday`. No tokens
/// defines a week with no sessions.
#[derive(Args)]
pub struct DefineWeekArgs {
    /// Name of the week pattern (at least 3 characters)
    pub name: String,
    /// Days of the week
    pub days: Vec<String>,
}

#[derive(Args)]
pub struct RenameWeekArgs {
    /// Current name
    pub old: String,
    /// New name
    pub new: String,
}

/// Replace the days of an existing week pattern
///
/// Month patterns composed earlier keep the days they were composed with.
#[derive(Args)]
pub struct EditWeekArgs {
    /// Name of the week pattern
    pub name: String,
    /// New days of the week
    pub days: Vec<String>,
}

#[derive(Args)]
pub struct DeleteWeekArgs {
    /// Name of the week pattern
    pub name: String,
}

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Define a week pattern
    #[command(alias = "d")]
    Define(DefineWeekArgs),
    /// Rename a week pattern
    #[command(alias = "r")]
    Rename(RenameWeekArgs),
    /// Replace the days of a week pattern
    #[command(alias = "e")]
    Edit(EditWeekArgs),
    /// Delete a week pattern
    #[command(alias = "rm")]
    Delete(DeleteWeekArgs),
    /// List week patterns
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Compose a month pattern from exactly four week pattern names or `skip`
#[derive(Args)]
pub struct ComposeMonthArgs {
    /// Name of the month pattern (at least 3 characters)
    pub name: String,
    /// Four week pattern names, `skip` for a week without sessions
    pub weeks: Vec<String>,
}

#[derive(Subcommand)]
pub enum MonthCommands {
    /// Compose a month pattern
    #[command(alias = "c")]
    Compose(ComposeMonthArgs),
    /// List month patterns
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Append month patterns to the sequence
///
/// `skip` appends a month without sessions.
#[derive(Args)]
pub struct OrderArgs {
    /// Month pattern names in the order they should run
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Subcommand)]
pub enum SequenceCommands {
    /// Append month patterns to the sequence
    #[command(alias = "o")]
    Order(OrderArgs),
    /// Show the ordered month patterns
    #[command(alias = "s")]
    Show,
    /// Clear the sequence, keeping week and month patterns
    Clear,
}

// ============================================================================
// Statistics
// ============================================================================

/// Show statistics for one habit, for every habit, or the streak leaders
#[derive(Args)]
pub struct StatsArgs {
    /// Exact habit name; all habits when omitted
    pub name: Option<String>,
    /// Habits with the longest streak of completed sessions
    #[arg(long, conflicts_with = "name")]
    pub leaders: bool,
}
