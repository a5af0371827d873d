//! Parameter structures for tracker operations
//!
//! This module contains parameter structures shared by every interface
//! (currently the CLI) without framework-specific derives. Interface layers
//! define their own argument types and convert into these with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ Validated Model │
//! │  (clap derives) │───▶│ (plain strings) │───▶│ (typed values)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Raw values stay strings until `validate` turns them into typed models, so
//! every interface gets the same validation rules and messages.

use std::str::FromStr;

use jiff::{
    SignedDuration,
    civil::{Date, DateTime},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{HabitFilter, HabitStatus, HabitTemplate, UpdateHabitRequest, YearMonth},
};

/// Minimum number of characters in a habit name.
pub const MIN_HABIT_NAME_LEN: usize = 3;
/// Maximum number of characters in a habit name.
pub const MAX_HABIT_NAME_LEN: usize = 30;
/// Maximum number of characters in a habit description.
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Input format for start date-times.
pub const START_FORMAT: &str = "%Y-%m-%d, %H:%M";

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the habit to operate on
    pub id: u64,
}

/// Parameters for creating a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateHabit {
    /// Name of the habit, 3 to 30 characters
    pub name: String,
    /// Start as `YYYY-MM-DD, HH:MM`
    pub start: String,
    /// Session length as `HH:MM:SS`
    pub duration: String,
    /// Optional description, at most 50 characters
    pub description: Option<String>,
}

impl CreateHabit {
    /// Validate the raw values and build the habit template.
    ///
    /// The start must lie strictly after `now`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` naming the first offending field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::params::CreateHabit;
    /// use jiff::civil::date;
    ///
    /// let params = CreateHabit {
    ///     name: "Stretching".to_string(),
    ///     start: "2030-01-07, 07:30".to_string(),
    ///     duration: "00:15:00".to_string(),
    ///     description: None,
    /// };
    /// let template = params.validate(date(2030, 1, 1).at(0, 0, 0, 0)).unwrap();
    /// assert_eq!(template.start, date(2030, 1, 7).at(7, 30, 0, 0));
    ///
    /// // Starting in the past is rejected
    /// assert!(params.validate(date(2031, 1, 1).at(0, 0, 0, 0)).is_err());
    /// ```
    pub fn validate(&self, now: DateTime) -> Result<HabitTemplate> {
        let name = validate_habit_name(&self.name)?;
        let start = parse_start(&self.start)?;
        if start <= now {
            return Err(TrackerError::validation("start").with_reason("date has already passed"));
        }
        let duration = parse_clock_duration(&self.duration)?;
        let description = validate_description(self.description.as_deref())?;

        Ok(HabitTemplate {
            name,
            start,
            duration,
            description,
        })
    }
}

/// Parameters for listing habits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListHabits {
    /// Only habits with this status
    pub status: Option<String>,
}

impl ListHabits {
    pub fn validate(&self) -> Result<HabitFilter> {
        Ok(HabitFilter {
            status: self.status.as_deref().map(parse_status).transpose()?,
            ..Default::default()
        })
    }
}

/// Parameters for searching habits. All given criteria must match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHabits {
    /// Text contained in the habit name
    pub name: Option<String>,
    /// Exact status
    pub status: Option<String>,
    /// Start date as `YYYY-MM-DD`
    pub date: Option<String>,
    /// Month number, 1 to 12
    pub month: Option<u8>,
    /// Year for the month search; defaults to the given current year
    pub year: Option<i16>,
    /// Text contained in the description or reflections
    pub content: Option<String>,
}

impl SearchHabits {
    /// Validate the criteria into a filter. `current_year` is used when a
    /// month is given without a year.
    pub fn validate(&self, current_year: i16) -> Result<HabitFilter> {
        if self.year.is_some() && self.month.is_none() {
            return Err(TrackerError::validation("year").with_reason("a year needs a month"));
        }

        let date = self
            .date
            .as_deref()
            .map(|raw| {
                Date::from_str(raw.trim()).map_err(|e| {
                    TrackerError::validation("date")
                        .with_reason(format!("invalid date format (YYYY-MM-DD): {e}"))
                })
            })
            .transpose()?;

        let month = match self.month {
            Some(month) if (1..=12).contains(&month) => Some(YearMonth {
                year: self.year.unwrap_or(current_year),
                month: month as i8,
            }),
            Some(month) => {
                return Err(TrackerError::validation("month")
                    .with_reason(format!("month must be between 1 and 12, got {month}")));
            }
            None => None,
        };

        Ok(HabitFilter {
            name_contains: self.name.clone(),
            status: self.status.as_deref().map(parse_status).transpose()?,
            date,
            month,
            content_contains: self.content.clone(),
        })
    }
}

/// Parameters for updating a habit. Unset fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHabit {
    /// The ID of the habit to update
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// What went well or badly; usually written after the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflections: Option<String>,
}

impl UpdateHabit {
    /// Validate update parameters into a typed request.
    ///
    /// Unlike creation, a new start time may lie in the past so that old
    /// sessions can be corrected.
    pub fn validate(&self) -> Result<UpdateHabitRequest> {
        Ok(UpdateHabitRequest {
            name: self.name.as_deref().map(validate_habit_name).transpose()?,
            start: self.start.as_deref().map(parse_start).transpose()?,
            duration: self
                .duration
                .as_deref()
                .map(parse_clock_duration)
                .transpose()?,
            status: self.status.as_deref().map(parse_status).transpose()?,
            description: validate_description(self.description.as_deref())?,
            reflections: self.reflections.clone(),
        })
    }
}

/// Parameters for deleting a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteHabit {
    pub id: u64,
    /// Must be true for the deletion to proceed
    pub confirmed: bool,
}

/// Parse a start date-time.
///
/// Accepts `YYYY-MM-DD, HH:MM` and ISO 8601 (`YYYY-MM-DDTHH:MM[:SS]`).
pub fn parse_start(raw: &str) -> Result<DateTime> {
    let raw = raw.trim();
    DateTime::strptime(START_FORMAT, raw)
        .or_else(|_| raw.parse::<DateTime>())
        .map_err(|_| {
            TrackerError::validation("start")
                .with_reason("invalid date format (YYYY-MM-DD, HH:MM)")
        })
}

/// Parse an `HH:MM:SS` duration. Minutes and seconds must be below 60.
///
/// ```rust
/// use cadence_core::params::parse_clock_duration;
/// use jiff::SignedDuration;
///
/// assert_eq!(
///     parse_clock_duration("01:30:00").unwrap(),
///     SignedDuration::from_mins(90)
/// );
/// assert!(parse_clock_duration("90 minutes").is_err());
/// ```
pub fn parse_clock_duration(raw: &str) -> Result<SignedDuration> {
    let invalid =
        || TrackerError::validation("duration").with_reason("invalid duration format (HH:MM:SS)");

    let parts = raw
        .trim()
        .split(':')
        .map(|part| part.parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;
    let &[hours, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };
    if minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    let total = i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds);
    if total == 0 {
        return Err(TrackerError::validation("duration").with_reason("duration must not be zero"));
    }
    Ok(SignedDuration::from_secs(total))
}

/// Parse a status name, case-insensitively.
pub fn parse_status(raw: &str) -> Result<HabitStatus> {
    HabitStatus::from_str(raw).map_err(|reason| TrackerError::validation("status").with_reason(reason))
}

fn validate_habit_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    let len = name.chars().count();
    if len < MIN_HABIT_NAME_LEN {
        return Err(TrackerError::validation("name")
            .with_reason(format!("name must have more than {} characters", MIN_HABIT_NAME_LEN - 1)));
    }
    if len > MAX_HABIT_NAME_LEN {
        return Err(TrackerError::validation("name")
            .with_reason(format!("name must have at most {MAX_HABIT_NAME_LEN} characters")));
    }
    Ok(name.to_string())
}

fn validate_description(raw: Option<&str>) -> Result<Option<String>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => {
            Err(TrackerError::validation("description").with_reason(format!(
                "description must have at most {MAX_DESCRIPTION_LEN} characters"
            )))
        }
        Some(text) => Ok(Some(text.to_string())),
    }
}
