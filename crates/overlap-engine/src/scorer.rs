//! Suitability scoring for a single candidate instant.
//!
//! The score is a sum of independent bonuses:
//!
//! | Condition (per zone)                        | Points |
//! |---------------------------------------------|--------|
//! | local hour inside that zone's working hours | +10    |
//! | local hour inside the 08:00-18:59 band      | +5     |
//!
//! | Condition (per slot)                        | Points |
//! |---------------------------------------------|--------|
//! | every zone in working hours                 | +20    |
//! | otherwise, at least 80% of zones            | +10    |
//! | reference-zone date is Monday-Friday        | +5     |
//!
//! The two per-zone bonuses overlap on purpose: a zone in both windows earns 15.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hours::{in_daytime_band, WorkingHours};
use crate::zone::{is_weekend, project, NamedZone, ReferenceClock};

pub const WORKING_HOURS_POINTS: u32 = 10;
pub const DAYTIME_BAND_POINTS: u32 = 5;
pub const ALL_IN_HOURS_POINTS: u32 = 20;
pub const MOST_IN_HOURS_POINTS: u32 = 10;
pub const WEEKDAY_POINTS: u32 = 5;

pub const ALL_IN_HOURS_REASON: &str = "All timezones in business hours";
pub const MOST_IN_HOURS_REASON: &str = "Most timezones in business hours";

/// A candidate instant with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMeeting {
    /// The candidate instant.
    pub time: DateTime<Utc>,
    /// Suitability; higher is better.
    pub score: u32,
    /// Why the slot scored the way it did.
    pub reason: String,
    /// Local `"h:mm AM"` time for each zone identifier.
    pub timezone_times: BTreeMap<String, String>,
}

impl ScoredMeeting {
    /// One-line rendering, e.g.
    /// `"2026-03-18 09:00 UTC   55  All timezones in business hours  (UTC 9:00 AM, ...)"`.
    pub fn summary(&self) -> String {
        let times: Vec<String> = self
            .timezone_times
            .iter()
            .map(|(zone, time)| format!("{zone} {time}"))
            .collect();
        format!(
            "{}  {:>3}  {}  ({})",
            self.time.format("%Y-%m-%d %H:%M UTC"),
            self.score,
            self.reason,
            times.join(", ")
        )
    }
}

/// Score one candidate instant.
///
/// `working_hours` is parallel to `zones` and must be at least as long; use
/// [`WorkingHours::padded`] to fill gaps with the default window. The weekday
/// bonus is decided by the candidate's date in the `clock` zone.
pub fn score_slot(
    instant: DateTime<Utc>,
    zones: &[NamedZone],
    working_hours: &[WorkingHours],
    clock: &ReferenceClock,
) -> ScoredMeeting {
    let total = zones.len();
    let mut score = 0;
    let mut in_hours = 0;
    let mut timezone_times = BTreeMap::new();

    for (zone, hours) in zones.iter().zip(working_hours) {
        let local = project(instant, &zone.tz);

        if hours.contains(local.hour) {
            in_hours += 1;
            score += WORKING_HOURS_POINTS;
        }
        if in_daytime_band(local.hour) {
            score += DAYTIME_BAND_POINTS;
        }

        timezone_times.insert(zone.id.clone(), local.formatted);
    }

    // `in_hours >= 0.8 * total`, kept in integers.
    let reason = if in_hours == total {
        score += ALL_IN_HOURS_POINTS;
        ALL_IN_HOURS_REASON.to_string()
    } else if in_hours * 5 >= total * 4 {
        score += MOST_IN_HOURS_POINTS;
        MOST_IN_HOURS_REASON.to_string()
    } else {
        format!("{in_hours}/{total} timezones in business hours")
    };

    if !is_weekend(clock.view(instant).weekday) {
        score += WEEKDAY_POINTS;
    }

    ScoredMeeting {
        time: instant,
        score,
        reason,
        timezone_times,
    }
}
