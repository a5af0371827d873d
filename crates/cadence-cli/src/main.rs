//! Cadence CLI Application
//!
//! Command-line interface for the cadence habit tracker.

mod args;
mod cli;
mod commands;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{
    OperationStatus, TrackerBuilder, TrackerError, params::ListHabits,
    tracker::builder::default_patterns_path,
};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        database_file,
        patterns_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let patterns_path = match patterns_file {
        Some(path) => path,
        None => default_patterns_path().context("Failed to locate pattern file")?,
    };

    info!("Cadence started");

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color), patterns_path);
    let result = match command {
        Some(Habit { command }) => cli.handle_habit_command(command).await,
        Some(Week { command }) => cli.handle_week_command(command),
        Some(Month { command }) => cli.handle_month_command(command),
        Some(Sequence { command }) => cli.handle_sequence_command(command),
        Some(Stats(args)) => cli.handle_stats_command(args).await,
        None => cli.list_habits(&ListHabits { status: None }).await,
    };

    // Mistakes in user input are reported on stdout like any other outcome
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<TrackerError>() {
            Some(tracker_err) if tracker_err.is_recoverable() => {
                let renderer = TerminalRenderer::new(!no_color);
                renderer.render(&OperationStatus::from(tracker_err).to_string())?;
                Ok(ExitCode::FAILURE)
            }
            _ => Err(err),
        },
    }
}
