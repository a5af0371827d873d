use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{HabitCommands, MonthCommands, SequenceCommands, StatsArgs, WeekCommands};

/// Cadence, a habit tracker for the terminal
///
/// Habits are timed sessions with a start, a duration and a status. Recurring
/// habits are described with week patterns (day sets), month patterns (four
/// weeks) and an ordered sequence of months, then expanded into dated
/// sessions.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the pattern file holding weeks, months and the sequence.
    /// Defaults to $XDG_DATA_HOME/cadence/patterns.json
    #[arg(long, global = true)]
    pub patterns_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage habits
    #[command(alias = "h")]
    Habit {
        #[command(subcommand)]
        command: HabitCommands,
    },
    /// Manage week patterns
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Manage month patterns
    #[command(alias = "m")]
    Month {
        #[command(subcommand)]
        command: MonthCommands,
    },
    /// Manage the order of month patterns used by `habit create --repeat`
    #[command(alias = "seq")]
    Sequence {
        #[command(subcommand)]
        command: SequenceCommands,
    },
    /// Show streaks and completion rates
    Stats(StatsArgs),
}
