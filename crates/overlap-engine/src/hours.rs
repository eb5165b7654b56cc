//! Local-hour windows: per-person working hours and time-of-day buckets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OverlapError;

/// Hours that earn the flat daytime bonus regardless of working hours (inclusive).
pub const DAYTIME_BAND: (u32, u32) = (8, 18);

/// A local-hour window in which a person accepts meetings.
///
/// An hour `h` is inside the window when `start <= h < end`. Values are not
/// validated: negative, inverted, or out-of-range windows are accepted and
/// match whatever local hours 0-23 happen to fall inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: i32,
    pub end: i32,
}

impl WorkingHours {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        let hour = hour as i32;
        self.start <= hour && hour < self.end
    }

    /// Working hours for each of `count` zones, substituting the 09:00-17:00
    /// default wherever `hours` has no entry.
    pub fn padded(hours: &[WorkingHours], count: usize) -> Vec<WorkingHours> {
        (0..count)
            .map(|i| hours.get(i).copied().unwrap_or_default())
            .collect()
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self::new(9, 17)
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

/// Parses `"9-17"`, `"09:00-17:00"`, or `"-1-17"`; the separator is the first
/// `-` after the start hour's optional sign.
impl FromStr for WorkingHours {
    type Err = OverlapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OverlapError::InvalidPreferences(format!("working hours '{s}'"));
        let trimmed = s.trim();
        let split = trimmed
            .get(1..)
            .and_then(|rest| rest.find('-'))
            .map(|i| i + 1)
            .ok_or_else(invalid)?;
        let (start, end) = (&trimmed[..split], &trimmed[split + 1..]);
        let hour = |part: &str| -> Result<i32, OverlapError> {
            let part = part.trim();
            let part = part.strip_suffix(":00").unwrap_or(part);
            part.parse().map_err(|_| invalid())
        };
        Ok(Self::new(hour(start)?, hour(end)?))
    }
}

/// Whether `hour` falls in the [`DAYTIME_BAND`].
pub fn in_daytime_band(hour: u32) -> bool {
    (DAYTIME_BAND.0..=DAYTIME_BAND.1).contains(&hour)
}

/// A preferred time of day for a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    /// 08:00 through 11:59.
    Morning,
    /// 12:00 through 16:59.
    Afternoon,
    /// 17:00 through 19:59.
    Evening,
}

impl TimeBucket {
    /// Inclusive range of local hours in this bucket.
    pub fn hours(self) -> (u32, u32) {
        match self {
            TimeBucket::Morning => (8, 11),
            TimeBucket::Afternoon => (12, 16),
            TimeBucket::Evening => (17, 19),
        }
    }

    pub fn contains(self, hour: u32) -> bool {
        let (first, last) = self.hours();
        (first..=last).contains(&hour)
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeBucket::Morning => "morning",
            TimeBucket::Afternoon => "afternoon",
            TimeBucket::Evening => "evening",
        })
    }
}

impl FromStr for TimeBucket {
    type Err = OverlapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeBucket::Morning),
            "afternoon" => Ok(TimeBucket::Afternoon),
            "evening" => Ok(TimeBucket::Evening),
            other => Err(OverlapError::InvalidPreferences(format!(
                "unknown time of day '{other}'"
            ))),
        }
    }
}
