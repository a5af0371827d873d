//! Four-week month patterns composed from week pattern snapshots.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{
    DaySet, SKIP_TOKEN, WeekPatterns,
    week::{PatternId, validate_name},
};
use crate::error::{Result, TrackerError};

/// Number of weeks in a month pattern.
pub const WEEKS_PER_MONTH: usize = 4;

/// One week of a month pattern.
///
/// `days` is a copy of the referenced week pattern's days taken when the
/// month was composed; `None` marks a skipped week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSlot {
    pub name: String,
    pub days: Option<DaySet>,
}

impl WeekSlot {
    pub fn skipped() -> Self {
        Self {
            name: SKIP_TOKEN.to_string(),
            days: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.days.is_none()
    }
}

/// A named sequence of exactly four week slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPattern {
    pub name: String,
    weeks: [WeekSlot; WEEKS_PER_MONTH],
}

impl MonthPattern {
    /// A month where every week is skipped. Used for `skip` entries in a
    /// pattern sequence.
    pub fn skipped() -> Self {
        Self {
            name: SKIP_TOKEN.to_string(),
            weeks: std::array::from_fn(|_| WeekSlot::skipped()),
        }
    }

    pub fn weeks(&self) -> &[WeekSlot; WEEKS_PER_MONTH] {
        &self.weeks
    }
}

/// Collection of composed month patterns, in composition order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthPatterns {
    next_id: PatternId,
    entries: BTreeMap<PatternId, MonthPattern>,
    #[serde(skip)]
    by_name: HashMap<String, PatternId>,
}

impl MonthPatterns {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reindex(&mut self) {
        self.by_name = self
            .entries
            .iter()
            .map(|(id, month)| (month.name.clone(), *id))
            .collect();
    }

    /// Composes a month pattern from four week references.
    ///
    /// Each reference is either the name of a week pattern in `weeks` or the
    /// `skip` token. Referenced patterns are copied by value, so later edits
    /// to `weeks` do not change the composed month.
    ///
    /// # Errors
    ///
    /// - `TrackerError::State` if `weeks` is empty
    /// - `TrackerError::Validation` if there are not exactly four references,
    ///   a reference is unknown, or the name is too short or already used
    pub fn compose<S: AsRef<str>>(
        &mut self,
        weeks: &WeekPatterns,
        name: &str,
        week_refs: &[S],
    ) -> Result<&MonthPattern> {
        if weeks.is_empty() {
            return Err(TrackerError::state("First create a week pattern"));
        }
        if week_refs.len() != WEEKS_PER_MONTH {
            return Err(TrackerError::validation("weeks").with_reason(format!(
                "A month must have exactly {WEEKS_PER_MONTH} week patterns, got {}",
                week_refs.len()
            )));
        }

        let slots = week_refs
            .iter()
            .map(|week_ref| resolve_slot(weeks, week_ref.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let weeks: [WeekSlot; WEEKS_PER_MONTH] = slots.try_into().map_err(|_| {
            TrackerError::validation("weeks")
                .with_reason(format!("A month must have exactly {WEEKS_PER_MONTH} week patterns"))
        })?;

        let name = validate_name("name", name, self.by_name.contains_key(name.trim()))?;

        let id = self.next_id;
        self.next_id += 1;
        self.by_name.insert(name.clone(), id);
        Ok(self.entries.entry(id).or_insert(MonthPattern { name, weeks }))
    }

    pub fn get(&self, name: &str) -> Option<&MonthPattern> {
        self.by_name.get(name).and_then(|id| self.entries.get(id))
    }

    pub fn list_all(&self) -> impl Iterator<Item = &MonthPattern> {
        self.entries.values()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn resolve_slot(weeks: &WeekPatterns, week_ref: &str) -> Result<WeekSlot> {
    let week_ref = week_ref.trim();
    if week_ref.eq_ignore_ascii_case(SKIP_TOKEN) {
        return Ok(WeekSlot::skipped());
    }
    weeks
        .get(week_ref)
        .map(|pattern| WeekSlot {
            name: pattern.name.clone(),
            days: Some(pattern.days.clone()),
        })
        .ok_or_else(|| {
            TrackerError::validation("weeks").with_reason(format!(
                "'{week_ref}' is not a saved week pattern (use '{SKIP_TOKEN}' for an empty week)"
            ))
        })
}
