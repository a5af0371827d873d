//! Weekday tokens and ordered day sets.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Shorthand token that expands to all seven days.
pub const EVERYDAY_TOKEN: &str = "everyday";

/// A day of the week in canonical order, Monday first.
///
/// The derived `Ord` follows declaration order, so sets of weekdays always
/// iterate mon, tues, wed, thurs, fri, sat, sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "mon")]
    Monday,
    #[serde(rename = "tues")]
    Tuesday,
    #[serde(rename = "wed")]
    Wednesday,
    #[serde(rename = "thurs")]
    Thursday,
    #[serde(rename = "fri")]
    Friday,
    #[serde(rename = "sat")]
    Saturday,
    #[serde(rename = "sun")]
    Sunday,
}

impl Weekday {
    /// All seven days in canonical order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The token used for this day in pattern input and storage.
    ///
    /// Tuesday and Thursday use the `tues` / `thurs` forms.
    pub fn token(&self) -> &'static str {
        match self {
            Weekday::Monday => "mon",
            Weekday::Tuesday => "tues",
            Weekday::Wednesday => "wed",
            Weekday::Thursday => "thurs",
            Weekday::Friday => "fri",
            Weekday::Saturday => "sat",
            Weekday::Sunday => "sun",
        }
    }
}

impl FromStr for Weekday {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.token() == token)
            .ok_or_else(|| {
                TrackerError::validation("days").with_reason(format!(
                    "'{s}' is not a week day, expected one of: {}, {EVERYDAY_TOKEN}",
                    Weekday::ALL.map(|d| d.token()).join(", ")
                ))
            })
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(day: jiff::civil::Weekday) -> Self {
        use jiff::civil::Weekday as Civil;

        match day {
            Civil::Monday => Weekday::Monday,
            Civil::Tuesday => Weekday::Tuesday,
            Civil::Wednesday => Weekday::Wednesday,
            Civil::Thursday => Weekday::Thursday,
            Civil::Friday => Weekday::Friday,
            Civil::Saturday => Weekday::Saturday,
            Civil::Sunday => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Ordered, duplicate-free set of weekdays. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySet(BTreeSet<Weekday>);

impl DaySet {
    /// An empty set, used for deliberately skipped weeks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All seven days.
    pub fn everyday() -> Self {
        Self(Weekday::ALL.into_iter().collect())
    }

    /// Parses a whitespace or comma separated list of day tokens.
    ///
    /// `everyday` anywhere in the input selects all seven days. An input with
    /// no tokens yields the empty set.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` if any token is not a weekday token
    /// or `everyday`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::schedule::{DaySet, Weekday};
    ///
    /// let days = DaySet::parse("fri mon wed mon").unwrap();
    /// let ordered: Vec<_> = days.iter().collect();
    /// assert_eq!(ordered, [Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
    ///
    /// assert_eq!(DaySet::parse("everyday").unwrap().len(), 7);
    /// assert!(DaySet::parse("tue").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let mut days = BTreeSet::new();
        let mut everyday = false;
        for token in tokens {
            if token.eq_ignore_ascii_case(EVERYDAY_TOKEN) {
                everyday = true;
                continue;
            }
            days.insert(token.parse::<Weekday>()?);
        }

        if everyday {
            return Ok(Self::everyday());
        }
        Ok(Self(days))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the days in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(no days)");
        }
        let tokens: Vec<&str> = self.iter().map(|day| day.token()).collect();
        f.write_str(&tokens.join(" "))
    }
}
