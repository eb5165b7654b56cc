//! Preference-aware ranking on top of the slot search.

use tracing::debug;

use crate::error::Result;
use crate::hours::TimeBucket;
use crate::preferences::SearchPreferences;
use crate::scorer::ScoredMeeting;
use crate::search::{find_overlapping_hours, sort_by_score};
use crate::zone::ReferenceClock;

/// Bonus for a slot whose reference-local hour is in the preferred bucket.
pub const PREFERRED_TIME_POINTS: u32 = 10;

/// Suggest meeting slots, honouring the caller's preferences.
///
/// Runs [`find_overlapping_hours`] and, when a preferred time of day is set,
/// re-ranks its (already truncated) results with [`apply_time_preference`].
/// A slot that would only have made the top list after the bonus is never
/// considered.
///
/// Callers are expected to pass at least two zones; this is not checked here.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTimezone`](crate::OverlapError::InvalidTimezone)
/// for an unknown zone identifier.
pub fn suggest_best_meeting_time<S: AsRef<str>>(
    clock: &ReferenceClock,
    timezones: &[S],
    preferences: &SearchPreferences,
) -> Result<Vec<ScoredMeeting>> {
    let meetings = find_overlapping_hours(
        clock,
        timezones,
        &preferences.working_hours,
        preferences.exclude_weekends,
    )?;

    Ok(match preferences.preferred_time {
        Some(bucket) => apply_time_preference(meetings, bucket, clock),
        None => meetings,
    })
}

/// Add [`PREFERRED_TIME_POINTS`] to every meeting whose reference-local hour
/// falls in `bucket`, then re-sort by score. Nothing is dropped.
pub fn apply_time_preference(
    mut meetings: Vec<ScoredMeeting>,
    bucket: TimeBucket,
    clock: &ReferenceClock,
) -> Vec<ScoredMeeting> {
    let mut boosted = 0;
    for meeting in &mut meetings {
        if bucket.contains(clock.view(meeting.time).hour) {
            meeting.score += PREFERRED_TIME_POINTS;
            boosted += 1;
        }
    }
    sort_by_score(&mut meetings);

    debug!(%bucket, boosted, total = meetings.len(), "applied time-of-day preference");
    meetings
}
