//! Ordered sequence of month patterns consumed by the expansion engine.

use serde::{Deserialize, Serialize};

use super::{MonthPattern, MonthPatterns, SKIP_TOKEN, WeekPatterns};
use crate::error::{Result, TrackerError};

/// User-ordered list of month pattern snapshots.
///
/// Ordering is append-only: each call to [`PatternSequence::order`] extends
/// the sequence, so a long schedule can be built across several commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSequence {
    ordered_months: Vec<MonthPattern>,
}

impl PatternSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the named month patterns, in input order.
    ///
    /// `skip` appends a month in which every week is skipped. A name may
    /// appear more than once.
    ///
    /// # Errors
    ///
    /// - `TrackerError::State` if no week or no month patterns exist
    /// - `TrackerError::Validation` if any name is unknown; nothing is
    ///   appended in that case
    pub fn order<S: AsRef<str>>(
        &mut self,
        weeks: &WeekPatterns,
        months: &MonthPatterns,
        names: &[S],
    ) -> Result<usize> {
        if weeks.is_empty() {
            return Err(TrackerError::state("First create a week pattern"));
        }
        if months.is_empty() {
            return Err(TrackerError::state("First create a month pattern"));
        }
        if names.is_empty() {
            return Err(TrackerError::validation("months")
                .with_reason("Enter at least one month pattern to order"));
        }

        let resolved = names
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                if name.eq_ignore_ascii_case(SKIP_TOKEN) {
                    return Ok(MonthPattern::skipped());
                }
                months.get(name).cloned().ok_or_else(|| {
                    TrackerError::validation("months")
                        .with_reason(format!("'{name}' is not a saved month pattern"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let appended = resolved.len();
        self.ordered_months.extend(resolved);
        Ok(appended)
    }

    pub fn months(&self) -> &[MonthPattern] {
        &self.ordered_months
    }

    pub fn len(&self) -> usize {
        self.ordered_months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_months.is_empty()
    }

    /// Number of calendar days an expansion of this sequence walks.
    pub fn span_days(&self) -> u32 {
        let days_per_month = (super::WEEKS_PER_MONTH * 7) as u32;
        u32::try_from(self.ordered_months.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(days_per_month)
    }

    pub fn clear(&mut self) {
        self.ordered_months.clear();
    }
}
