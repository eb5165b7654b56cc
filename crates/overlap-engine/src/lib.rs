//! # overlap-engine
//!
//! Deterministic meeting-slot search across time zones.
//!
//! Given the participants' IANA time zones and working hours, the engine
//! scores every hour of the coming week and returns the slots that suit the
//! most people. All functions take an explicit [`ReferenceClock`] instead of
//! reading the system clock, so results are reproducible.
//!
//! ## Modules
//!
//! - [`zone`] — Time-zone projection, 12-hour formatting, the reference clock
//! - [`hours`] — Working-hour windows and time-of-day buckets
//! - [`scorer`] — Score a single candidate instant
//! - [`search`] — Enumerate and score the 7-day horizon, keep the top 10
//! - [`rank`] — Re-rank search results by a preferred time of day
//! - [`preferences`] — Search options with documented defaults
//! - [`team`] — Named teams of participants
//! - [`poll`] — Votes over candidate meeting times
//! - [`error`] — Error types

pub mod error;
pub mod hours;
pub mod poll;
pub mod preferences;
pub mod rank;
pub mod scorer;
pub mod search;
pub mod team;
pub mod zone;

pub use error::OverlapError;
pub use hours::{TimeBucket, WorkingHours};
pub use poll::{OptionTally, Poll, PollId, PollStore};
pub use preferences::SearchPreferences;
pub use rank::{apply_time_preference, suggest_best_meeting_time};
pub use scorer::{score_slot, ScoredMeeting};
pub use search::find_overlapping_hours;
pub use team::{Member, Team, TeamStore};
pub use zone::{format_local_time, parse_local_time, ReferenceClock};
