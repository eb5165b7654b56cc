//! Time-zone projection for candidate instants.
//!
//! Every candidate is a UTC instant. Scoring needs to know, for each
//! participant's zone, the local hour and a display string, and the search
//! needs the weekday and wall-clock date in the reference zone. This module
//! wraps `chrono-tz` for all of those and owns the 12-hour display format
//! (`"9:00 AM"`), including parsing it back.
//!
//! Zone identifiers are validated here and nowhere else: an unknown IANA name
//! is a [`OverlapError::InvalidTimezone`] and is never replaced by a default.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{OverlapError, Result};

/// 12-hour display format used for every per-zone time string.
const LOCAL_TIME_FORMAT: &str = "%-I:%M %p";

/// Parse format for [`LOCAL_TIME_FORMAT`]; numeric fields accept one or two digits.
const LOCAL_TIME_PARSE_FORMAT: &str = "%I:%M %p";

/// A time zone together with the identifier the caller used for it.
///
/// The identifier is kept verbatim so results can be keyed by what the caller
/// passed in, even when two aliases resolve to the same zone.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedZone {
    pub id: String,
    pub tz: Tz,
}

impl NamedZone {
    /// Parse an IANA identifier such as `"America/New_York"`.
    pub fn parse(id: &str) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            tz: parse_timezone(id)?,
        })
    }
}

/// Parse every identifier, failing on the first unknown one.
pub fn parse_zones<S: AsRef<str>>(ids: &[S]) -> Result<Vec<NamedZone>> {
    ids.iter().map(|id| NamedZone::parse(id.as_ref())).collect()
}

/// An instant as seen from one time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalView {
    /// Local hour, 0-23.
    pub hour: u32,
    /// Local day of week.
    pub weekday: Weekday,
    /// Local calendar date.
    pub date: NaiveDate,
    /// Local wall-clock time as `"h:mm AM"`.
    pub formatted: String,
}

/// Project a UTC instant into `tz`.
pub fn project(instant: DateTime<Utc>, tz: &Tz) -> LocalView {
    let local = instant.with_timezone(tz);
    LocalView {
        hour: local.hour(),
        weekday: local.weekday(),
        date: local.date_naive(),
        formatted: local.format(LOCAL_TIME_FORMAT).to_string(),
    }
}

/// Format a UTC instant as the local `"h:mm AM"` time in `tz`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::zone::format_local_time;
///
/// let instant = Utc.with_ymd_and_hms(2026, 3, 18, 14, 0, 0).unwrap();
/// // March 18 2026 is EDT (UTC-4)
/// assert_eq!(format_local_time(instant, &chrono_tz::America::New_York), "10:00 AM");
/// ```
pub fn format_local_time(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format(LOCAL_TIME_FORMAT).to_string()
}

/// Parse an `"h:mm AM"` string produced by [`format_local_time`].
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTime`] if the string is not a 12-hour time.
pub fn parse_local_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), LOCAL_TIME_PARSE_FORMAT)
        .map_err(|e| OverlapError::InvalidTime(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| OverlapError::InvalidTimezone(format!("'{}'", s)))
}

/// Saturday or Sunday.
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// The single "current time" that anchors a search.
///
/// `now` fixes the start of the 7-day horizon; `zone` is the zone whose
/// calendar decides candidate dates, weekends, and time-of-day buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceClock {
    pub now: DateTime<Utc>,
    pub zone: Tz,
}

impl ReferenceClock {
    pub fn new(now: DateTime<Utc>, zone: Tz) -> Self {
        Self { now, zone }
    }

    /// A clock anchored at `now` in UTC.
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, Tz::UTC)
    }

    /// A clock anchored at `now` in the zone named by `zone`.
    pub fn in_zone(now: DateTime<Utc>, zone: &str) -> Result<Self> {
        Ok(Self::new(now, parse_timezone(zone)?))
    }

    /// The reference-local calendar date of `now`.
    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.zone).date_naive()
    }

    /// Project an instant into the reference zone.
    pub fn view(&self, instant: DateTime<Utc>) -> LocalView {
        project(instant, &self.zone)
    }
}
