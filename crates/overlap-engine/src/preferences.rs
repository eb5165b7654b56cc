//! Search preferences.

use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};
use crate::hours::{TimeBucket, WorkingHours};

/// Options for [`suggest_best_meeting_time`](crate::rank::suggest_best_meeting_time).
///
/// Every field is optional in JSON:
///
/// ```json
/// { "exclude_weekends": true, "working_hours": [{ "start": 8, "end": 16 }], "preferred_time": "morning" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPreferences {
    /// Skip Saturdays and Sundays (reference-zone calendar). Default `false`.
    pub exclude_weekends: bool,
    /// Working hours parallel to the zone list. Missing entries default to 09:00-17:00.
    pub working_hours: Vec<WorkingHours>,
    /// Time-of-day bucket that earns a ranking bonus. Default none.
    pub preferred_time: Option<TimeBucket>,
}

impl SearchPreferences {
    /// Decode preferences from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| OverlapError::InvalidPreferences(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let prefs = SearchPreferences::from_json("{}").unwrap();
        assert_eq!(prefs, SearchPreferences::default());
        assert!(!prefs.exclude_weekends);
        assert!(prefs.working_hours.is_empty());
        assert!(prefs.preferred_time.is_none());
    }

    #[test]
    fn test_full_document() {
        let prefs = SearchPreferences::from_json(
            r#"{
                "exclude_weekends": true,
                "working_hours": [{"start": 8, "end": 16}, {"start": 10, "end": 18}],
                "preferred_time": "afternoon"
            }"#,
        )
        .unwrap();
        assert!(prefs.exclude_weekends);
        assert_eq!(
            prefs.working_hours,
            vec![WorkingHours::new(8, 16), WorkingHours::new(10, 18)]
        );
        assert_eq!(prefs.preferred_time, Some(TimeBucket::Afternoon));
    }

    #[test]
    fn test_negative_working_hours_pass_through() {
        let prefs =
            SearchPreferences::from_json(r#"{"working_hours": [{"start": -1, "end": 17}]}"#)
                .unwrap();
        assert_eq!(prefs.working_hours, vec![WorkingHours::new(-1, 17)]);
        assert!((0..17).all(|h| prefs.working_hours[0].contains(h)));
    }

    #[test]
    fn test_unknown_bucket_is_rejected() {
        let err = SearchPreferences::from_json(r#"{"preferred_time": "night"}"#).unwrap_err();
        assert!(matches!(err, OverlapError::InvalidPreferences(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(SearchPreferences::from_json("{ exclude_weekends: yes").is_err());
    }
}
