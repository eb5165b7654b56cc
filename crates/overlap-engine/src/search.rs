//! Meeting-slot search over a fixed horizon.
//!
//! Starting from the reference clock's local date, every hour of every day in
//! the next [`HORIZON_DAYS`] days is a candidate (168 in total). Candidates
//! are scored with [`score_slot`]; those scoring zero are dropped, the rest are
//! sorted by score (stable, so equal scores stay in chronological order) and
//! the best [`MAX_RESULTS`] returned.
//!
//! Candidates are built from the reference-local wall clock. An hour that does
//! not exist on a DST spring-forward day is skipped; an hour that occurs twice
//! on a fall-back day uses its first occurrence.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use tracing::{debug, trace};

use crate::error::Result;
use crate::hours::WorkingHours;
use crate::scorer::{score_slot, ScoredMeeting};
use crate::zone::{is_weekend, parse_zones, ReferenceClock};

/// Days searched, counting the reference clock's current day.
pub const HORIZON_DAYS: i64 = 7;

/// Candidates per day, one per local hour.
pub const HOURS_PER_DAY: u32 = 24;

/// Upper bound on the number of slots a search returns.
pub const MAX_RESULTS: usize = 10;

/// Find the best meeting slots for a set of time zones.
///
/// # Arguments
///
/// * `clock` — The reference "now" and the zone whose calendar defines days
/// * `timezones` — IANA identifiers, one per participant
/// * `working_hours` — Working hours parallel to `timezones`; missing entries
///   default to 09:00-17:00
/// * `exclude_weekends` — Skip Saturdays and Sundays before scoring
///
/// # Returns
///
/// Up to [`MAX_RESULTS`] slots, every one with a positive score, sorted by
/// score descending.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTimezone`](crate::OverlapError::InvalidTimezone)
/// if any identifier is not a valid IANA time zone. Nothing is scored in that case.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::search::find_overlapping_hours;
/// use overlap_engine::zone::ReferenceClock;
///
/// let clock = ReferenceClock::utc(Utc.with_ymd_and_hms(2026, 3, 18, 6, 0, 0).unwrap());
/// let slots = find_overlapping_hours(&clock, &["Europe/London", "America/New_York"], &[], true).unwrap();
/// assert_eq!(slots.len(), 10);
/// assert!(slots.windows(2).all(|w| w[0].score >= w[1].score));
/// ```
pub fn find_overlapping_hours<S: AsRef<str>>(
    clock: &ReferenceClock,
    timezones: &[S],
    working_hours: &[WorkingHours],
    exclude_weekends: bool,
) -> Result<Vec<ScoredMeeting>> {
    let zones = parse_zones(timezones)?;
    let hours = WorkingHours::padded(working_hours, zones.len());

    let mut scored = 0usize;
    let mut results = Vec::new();

    for candidate in candidates(clock, exclude_weekends) {
        let meeting = score_slot(candidate, &zones, &hours, clock);
        scored += 1;
        trace!(time = %candidate, score = meeting.score, "scored candidate");
        if meeting.score > 0 {
            results.push(meeting);
        }
    }

    let kept = results.len();
    sort_by_score(&mut results);
    results.truncate(MAX_RESULTS);

    debug!(
        zones = zones.len(),
        scored,
        kept,
        returned = results.len(),
        "meeting slot search complete"
    );

    Ok(results)
}

/// Every candidate instant in the horizon, in chronological order.
///
/// Weekend days are dropped whole when `exclude_weekends` is set.
pub fn candidates(clock: &ReferenceClock, exclude_weekends: bool) -> Vec<DateTime<Utc>> {
    let today = clock.today();
    let mut out = Vec::with_capacity((HORIZON_DAYS as usize) * (HOURS_PER_DAY as usize));

    for day_offset in 0..HORIZON_DAYS {
        let date = today + Duration::days(day_offset);
        if exclude_weekends && is_weekend(date.weekday()) {
            trace!(%date, "skipping weekend day");
            continue;
        }

        for hour in 0..HOURS_PER_DAY {
            let Some(naive) = date.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            match clock.zone.from_local_datetime(&naive).earliest() {
                Some(local) => out.push(local.with_timezone(&Utc)),
                None => trace!(%naive, "skipping nonexistent local hour"),
            }
        }
    }

    out
}

/// Stable sort, highest score first.
pub(crate) fn sort_by_score(meetings: &mut [ScoredMeeting]) {
    meetings.sort_by(|a, b| b.score.cmp(&a.score));
}
