//! Named week patterns and their collection.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{DaySet, SKIP_TOKEN};
use crate::error::{Result, TrackerError};

/// Minimum number of characters in a pattern name.
pub const MIN_NAME_LEN: usize = 3;

/// Stable identifier of a pattern inside its collection.
///
/// Identifiers are allocated in increasing order and never reused, so
/// iterating by id is iterating by creation order.
pub type PatternId = u64;

/// A named set of weekdays a habit repeats on within one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPattern {
    pub id: PatternId,
    pub name: String,
    pub days: DaySet,
}

/// Checks a new pattern name against the naming rules.
pub(crate) fn validate_name(field: &str, name: &str, taken: bool) -> Result<String> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err(TrackerError::validation(field)
            .with_reason(format!("name must have at least {MIN_NAME_LEN} characters")));
    }
    if name.eq_ignore_ascii_case(SKIP_TOKEN) {
        return Err(TrackerError::validation(field)
            .with_reason(format!("'{SKIP_TOKEN}' is reserved for skipped weeks")));
    }
    if taken {
        return Err(TrackerError::validation(field)
            .with_reason(format!("name '{name}' already used, use another one")));
    }
    Ok(name.to_string())
}

/// Ordered collection of week patterns keyed by stable id with a name index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekPatterns {
    next_id: PatternId,
    entries: BTreeMap<PatternId, WeekPattern>,
    #[serde(skip)]
    by_name: HashMap<String, PatternId>,
}

impl WeekPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the name index after deserialization.
    pub(crate) fn reindex(&mut self) {
        self.by_name = self
            .entries
            .values()
            .map(|pattern| (pattern.name.clone(), pattern.id))
            .collect();
    }

    /// Defines a new named week pattern from free-text day tokens.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` if the name is too short, reserved
    /// or already used, or if any day token is invalid. The collection is
    /// unchanged on error.
    pub fn define(&mut self, name: &str, days_input: &str) -> Result<&WeekPattern> {
        let days = DaySet::parse(days_input)?;
        let name = validate_name("name", name, self.by_name.contains_key(name.trim()))?;

        let id = self.next_id;
        self.next_id += 1;
        self.by_name.insert(name.clone(), id);
        Ok(self
            .entries
            .entry(id)
            .or_insert(WeekPattern { id, name, days }))
    }

    /// Renames a pattern in place. Its id and position are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Validation` if `old` does not exist or `new` is
    /// not an acceptable name.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<&WeekPattern> {
        let id = self.id_of(old)?;
        let new = validate_name("new_name", new, self.by_name.contains_key(new.trim()))?;

        self.by_name.remove(old);
        self.by_name.insert(new.clone(), id);
        let pattern = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| unknown_pattern(old))?;
        pattern.name = new;
        Ok(pattern)
    }

    /// Replaces the day set of an existing pattern.
    pub fn replace_body(&mut self, name: &str, days_input: &str) -> Result<&WeekPattern> {
        let id = self.id_of(name)?;
        let days = DaySet::parse(days_input)?;
        let pattern = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| unknown_pattern(name))?;
        pattern.days = days;
        Ok(pattern)
    }

    /// Removes a pattern by name and returns it.
    pub fn delete(&mut self, name: &str) -> Result<WeekPattern> {
        let id = self.id_of(name)?;
        self.by_name.remove(name);
        self.entries.remove(&id).ok_or_else(|| unknown_pattern(name))
    }

    pub fn get(&self, name: &str) -> Option<&WeekPattern> {
        self.by_name.get(name).and_then(|id| self.entries.get(id))
    }

    /// All patterns in creation order.
    pub fn list_all(&self) -> impl Iterator<Item = &WeekPattern> {
        self.entries.values()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn id_of(&self, name: &str) -> Result<PatternId> {
        if self.entries.is_empty() {
            return Err(TrackerError::state("First create a week pattern"));
        }
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| unknown_pattern(name))
    }
}

fn unknown_pattern(name: &str) -> TrackerError {
    TrackerError::validation("name").with_reason(format!("week pattern '{name}' does not exist"))
}
