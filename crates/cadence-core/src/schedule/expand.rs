//! Expansion of a habit template over a pattern sequence.

use log::{debug, warn};

use super::{CalendarCursor, MonthPattern, PatternSequence, WEEKS_PER_MONTH};
use crate::{
    error::Result,
    models::{HabitTemplate, NewHabit},
};

/// Days walked for every week slot.
const DAYS_PER_WEEK: u8 = 7;

/// A habit instance produced by the expansion, ready to be saved.
pub type GeneratedInstance = NewHabit;

/// Receiver for generated instances, called once per instance in emission
/// order.
pub trait InstanceSink {
    /// What a successful save hands back.
    type Saved;

    fn save(&mut self, instance: GeneratedInstance) -> Result<Self::Saved>;
}

impl InstanceSink for Vec<GeneratedInstance> {
    type Saved = ();

    fn save(&mut self, instance: GeneratedInstance) -> Result<()> {
        self.push(instance);
        Ok(())
    }
}

/// Lazy walk over the calendar that yields one instance per matching day.
///
/// The walk starts at the template's own start date+time. Each week slot
/// covers the seven days beginning at the cursor, which need not be a
/// Monday. A skipped slot and a slot with no days both move the cursor seven
/// days without emitting anything. The walk ends early if it would pass the
/// last representable date.
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    template: &'a HabitTemplate,
    months: &'a [MonthPattern],
    cursor: CalendarCursor,
    month: usize,
    week: usize,
    day: u8,
    exhausted: bool,
}

/// Starts an expansion of `template` over `sequence`.
///
/// # Examples
///
/// ```rust
/// use cadence_core::{
///     models::HabitTemplate,
///     schedule::{AuthoringSession, expand},
/// };
/// use jiff::{SignedDuration, civil::date};
///
/// let mut session = AuthoringSession::new();
/// session.define_week("gym", "mon wed fri").unwrap();
/// session.compose_month("month1", &["gym", "skip", "gym", "skip"]).unwrap();
/// session.order(&["month1"]).unwrap();
///
/// // 2030-01-07 is a Monday
/// let template = HabitTemplate {
///     name: "Gym".to_string(),
///     start: date(2030, 1, 7).at(7, 0, 0, 0),
///     duration: SignedDuration::from_mins(45),
///     description: None,
/// };
/// let instances: Vec<_> = expand(&template, session.sequence()).collect();
/// assert_eq!(instances.len(), 6);
/// assert_eq!(instances[3].start, date(2030, 1, 21).at(7, 0, 0, 0));
/// ```
pub fn expand<'a>(template: &'a HabitTemplate, sequence: &'a PatternSequence) -> Expansion<'a> {
    Expansion {
        template,
        months: sequence.months(),
        cursor: CalendarCursor::new(template.start),
        month: 0,
        week: 0,
        day: 0,
        exhausted: false,
    }
}

impl Expansion<'_> {
    /// Where the walk currently stands. After the iterator is exhausted this
    /// is `28 × months` days after the template start, unless the walk hit
    /// the end of the calendar first.
    pub fn cursor(&self) -> &CalendarCursor {
        &self.cursor
    }

    /// Saves every remaining instance into `sink`, one at a time.
    ///
    /// Stops at the first failed save and returns its error. Instances saved
    /// before the failure stay saved.
    pub fn emit_into<S: InstanceSink>(self, sink: &mut S) -> Result<Vec<S::Saved>> {
        let mut saved = Vec::new();
        for instance in self {
            let at = instance.start;
            match sink.save(instance) {
                Ok(record) => {
                    debug!("Saved habit instance at {at}");
                    saved.push(record);
                }
                Err(e) => {
                    warn!(
                        "Saving habit instance at {at} failed after {} saved: {e}",
                        saved.len()
                    );
                    return Err(e);
                }
            }
        }
        Ok(saved)
    }
}

impl Iterator for Expansion<'_> {
    type Item = GeneratedInstance;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.exhausted {
                return None;
            }
            let month = self.months.get(self.month)?;
            if self.week == WEEKS_PER_MONTH {
                self.month += 1;
                self.week = 0;
                continue;
            }

            let Some(days) = &month.weeks()[self.week].days else {
                self.exhausted = !self.cursor.advance(u32::from(DAYS_PER_WEEK));
                self.week += 1;
                continue;
            };

            if self.day == DAYS_PER_WEEK {
                self.day = 0;
                self.week += 1;
                continue;
            }

            let matched = days.contains(self.cursor.weekday());
            let at = self.cursor.position();
            self.exhausted = !self.cursor.advance(1);
            self.day += 1;
            if matched {
                return Some(self.template.instance_at(at));
            }
        }
    }
}
