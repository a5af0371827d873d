//! Recurring pattern authoring and expansion.
//!
//! Recurring habits are described bottom-up:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ WeekPattern  │    │ MonthPattern │    │   Pattern    │    │  Expansion   │
//! │ (day set)    │───▶│ (4 weeks)    │───▶│   Sequence   │───▶│ (instances)  │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! - [`WeekPatterns`] holds named day sets such as `mon wed fri`.
//! - [`MonthPatterns`] holds four-week compositions. Each week is either a
//!   copy of a week pattern's days or `skip`.
//! - [`PatternSequence`] is the append-only order in which month patterns are
//!   walked.
//! - [`expand`] walks a [`CalendarCursor`] from a habit template's start,
//!   seven days per week slot, and yields one instance per day whose weekday
//!   is in the active week's day set.
//!
//! [`AuthoringSession`] bundles the three collections and is what callers
//! pass around and persist.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::schedule::AuthoringSession;
//!
//! let mut session = AuthoringSession::new();
//! session.define_week("weekdays", "mon tues wed thurs fri").unwrap();
//! session.define_week("rest", "").unwrap();
//! session
//!     .compose_month("steady", &["weekdays", "weekdays", "rest", "skip"])
//!     .unwrap();
//! session.order(&["steady", "steady"]).unwrap();
//! assert_eq!(session.sequence().len(), 2);
//! assert_eq!(session.sequence().span_days(), 56);
//! ```

pub mod cursor;
pub mod expand;
pub mod month;
pub mod sequence;
pub mod session;
pub mod week;
pub mod weekday;


/// Token that stands for "no pattern this week" (or month, in a sequence).
pub const SKIP_TOKEN: &str = "skip";

pub use cursor::CalendarCursor;
pub use expand::{Expansion, GeneratedInstance, InstanceSink, expand};
pub use month::{MonthPattern, MonthPatterns, WEEKS_PER_MONTH, WeekSlot};
pub use sequence::PatternSequence;
pub use session::AuthoringSession;
pub use week::{MIN_NAME_LEN, PatternId, WeekPattern, WeekPatterns};
pub use weekday::{DaySet, EVERYDAY_TOKEN, Weekday};
