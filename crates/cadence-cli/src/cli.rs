//! Command handlers.
//!
//! [`Cli`] turns parsed commands into tracker calls and pattern session
//! edits, then renders the resulting display wrappers as markdown. Pattern
//! commands load the session from the pattern file, apply one change and
//! write it back.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cadence_core::{
    AuthoringSession, CreateOutcome, OperationStatus, Tracker,
    params::{CreateHabit, ListHabits},
};
use log::debug;

use crate::{
    commands::{
        CreateHabitArgs, HabitCommands, MonthCommands, SequenceCommands, StatsArgs, WeekCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    patterns_path: PathBuf,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, patterns_path: PathBuf) -> Self {
        Self {
            tracker,
            renderer,
            patterns_path,
        }
    }

    fn load_session(&self) -> Result<AuthoringSession> {
        AuthoringSession::load(&self.patterns_path).with_context(|| {
            format!(
                "Failed to load pattern file {}",
                self.patterns_path.display()
            )
        })
    }

    fn save_session(&self, session: &AuthoringSession) -> Result<()> {
        session.save(&self.patterns_path).with_context(|| {
            format!(
                "Failed to save pattern file {}",
                self.patterns_path.display()
            )
        })
    }

    fn render_status(&self, message: String) -> Result<()> {
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }

    pub async fn handle_habit_command(&self, command: HabitCommands) -> Result<()> {
        match command {
            HabitCommands::Create(args) => self.create_habit(args).await,
            HabitCommands::List(args) => self.list_habits(&args.into()).await,
            HabitCommands::Show(args) => {
                let habit = self.tracker.show_habit(&args.into()).await?;
                self.renderer.render(&habit.to_string())
            }
            HabitCommands::Update(args) => {
                let result = self.tracker.update_habit_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            HabitCommands::Delete(args) => {
                let result = self.tracker.delete_habit_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            HabitCommands::Search(args) => {
                let habits = self.tracker.search_habits(&args.into()).await?;
                self.renderer.render(&habits.to_string())
            }
            HabitCommands::Refresh => {
                let status = self.tracker.refresh_statuses_result().await?;
                self.renderer.render(&status.to_string())
            }
            HabitCommands::Complete => {
                let status = self.tracker.complete_pending_result().await?;
                self.renderer.render(&status.to_string())
            }
        }
    }

    async fn create_habit(&self, args: CreateHabitArgs) -> Result<()> {
        let repeat = args.repeat;
        let params: CreateHabit = args.into();

        if !repeat {
            let outcome = self.tracker.create_habit_result(&params, None).await?;
            return self.renderer.render(&outcome.to_string());
        }

        let mut session = self.load_session()?;
        let outcome = self
            .tracker
            .create_habit_result(&params, Some(session.sequence()))
            .await?;

        // The sequence is consumed; week and month patterns stay for reuse
        session.clear_sequence();
        self.save_session(&session)?;

        if let CreateOutcome::Recurring(ref result) = outcome {
            debug!("Stored {} sessions of '{}'", result.resource.len(), params.name);
        }
        self.renderer.render(&outcome.to_string())
    }

    pub async fn list_habits(&self, params: &ListHabits) -> Result<()> {
        let habits = self.tracker.list_habits_result(params).await?;
        self.renderer.render(&habits.to_string())
    }

    pub fn handle_week_command(&self, command: WeekCommands) -> Result<()> {
        let mut session = self.load_session()?;

        let message = match command {
            WeekCommands::Define(args) => {
                let pattern = session.define_week(&args.name, &args.days.join(" "))?;
                format!("Defined week pattern '{}': {}", pattern.name, pattern.days)
            }
            WeekCommands::Rename(args) => {
                let pattern = session.rename_week(&args.old, &args.new)?;
                format!("Renamed week pattern '{}' to '{}'", args.old, pattern.name)
            }
            WeekCommands::Edit(args) => {
                let pattern = session.replace_week_body(&args.name, &args.days.join(" "))?;
                format!("Updated week pattern '{}': {}", pattern.name, pattern.days)
            }
            WeekCommands::Delete(args) => {
                let pattern = session.delete_week(&args.name)?;
                format!("Deleted week pattern '{}'", pattern.name)
            }
            WeekCommands::List => {
                return self
                    .renderer
                    .render(&format!("# Week Patterns\n\n{}", session.weeks()));
            }
        };

        self.save_session(&session)?;
        self.render_status(message)
    }

    pub fn handle_month_command(&self, command: MonthCommands) -> Result<()> {
        let mut session = self.load_session()?;

        match command {
            MonthCommands::Compose(args) => {
                let month = session.compose_month(&args.name, args.weeks.as_slice())?;
                let output = format!("Composed month pattern '{}'\n\n{month}", month.name);
                self.save_session(&session)?;
                self.renderer
                    .render(&OperationStatus::success(output).to_string())
            }
            MonthCommands::List => self
                .renderer
                .render(&format!("# Month Patterns\n\n{}", session.months())),
        }
    }

    pub fn handle_sequence_command(&self, command: SequenceCommands) -> Result<()> {
        let mut session = self.load_session()?;

        match command {
            SequenceCommands::Order(args) => {
                let added = session.order(args.names.as_slice())?;
                self.save_session(&session)?;
                self.render_status(format!(
                    "Appended {added} month patterns, {} in sequence",
                    session.sequence().len()
                ))
            }
            SequenceCommands::Show => self
                .renderer
                .render(&format!("# Pattern Sequence\n\n{}", session.sequence())),
            SequenceCommands::Clear => {
                session.clear_sequence();
                self.save_session(&session)?;
                self.render_status("Cleared the pattern sequence".to_string())
            }
        }
    }

    pub async fn handle_stats_command(&self, args: StatsArgs) -> Result<()> {
        if args.leaders {
            let leaders = self.tracker.streak_leaders().await?;
            return self.renderer.render(&leaders.to_string());
        }

        match args.name {
            Some(name) => {
                let stats = self.tracker.habit_stats(&name).await?;
                self.renderer.render(&stats.to_string())
            }
            None => {
                let names = self.tracker.habit_names().await?;
                if names.is_empty() {
                    return self.renderer.render("No habits found.\n");
                }
                let mut output = String::new();
                for name in names {
                    let stats = self.tracker.habit_stats(&name).await?;
                    output.push_str(&stats.to_string());
                }
                self.renderer.render(&output)
            }
        }
    }
}
