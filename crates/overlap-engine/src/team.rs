//! Named teams of participants.
//!
//! A [`TeamStore`] is a plain in-memory map owned by whoever needs it. Saving a
//! team under an existing name replaces it; there is no history or merge.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};
use crate::hours::WorkingHours;

/// One participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// IANA identifier. Validated only when the team is searched.
    pub timezone: String,
    /// Defaults to 09:00-17:00 when absent.
    #[serde(default)]
    pub working_hours: Option<WorkingHours>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<Member>,
}

impl Team {
    /// Zone identifiers in member order.
    pub fn timezones(&self) -> Vec<String> {
        self.members.iter().map(|m| m.timezone.clone()).collect()
    }

    /// Working hours in member order, parallel to [`Team::timezones`].
    pub fn working_hours(&self) -> Vec<WorkingHours> {
        self.members
            .iter()
            .map(|m| m.working_hours.unwrap_or_default())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamStore {
    teams: HashMap<String, Team>,
}

impl TeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a roster: a JSON array of teams.
    pub fn from_json(json: &str) -> Result<Self> {
        let teams: Vec<Team> = serde_json::from_str(json)
            .map_err(|e| OverlapError::InvalidPreferences(e.to_string()))?;
        let mut store = Self::new();
        for team in teams {
            store.save(team);
        }
        Ok(store)
    }

    /// Store `team`, returning the team it replaced, if any.
    pub fn save(&mut self, team: Team) -> Option<Team> {
        self.teams.insert(team.name.clone(), team)
    }

    pub fn get(&self, name: &str) -> Result<&Team> {
        self.teams
            .get(name)
            .ok_or_else(|| OverlapError::UnknownTeam(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Team> {
        self.teams
            .remove(name)
            .ok_or_else(|| OverlapError::UnknownTeam(name.to_string()))
    }

    /// Team names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.teams.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, timezone: &str, working_hours: Option<WorkingHours>) -> Member {
        Member {
            name: name.to_string(),
            timezone: timezone.to_string(),
            working_hours,
        }
    }

    fn platform() -> Team {
        Team {
            name: "platform".to_string(),
            members: vec![
                member("ana", "Europe/Lisbon", Some(WorkingHours::new(8, 16))),
                member("raj", "Asia/Kolkata", None),
            ],
        }
    }

    #[test]
    fn test_team_projections() {
        let team = platform();
        assert_eq!(team.timezones(), vec!["Europe/Lisbon", "Asia/Kolkata"]);
        assert_eq!(
            team.working_hours(),
            vec![WorkingHours::new(8, 16), WorkingHours::new(9, 17)]
        );
    }

    #[test]
    fn test_save_is_last_write_wins() {
        let mut store = TeamStore::new();
        assert!(store.save(platform()).is_none());

        let mut smaller = platform();
        smaller.members.truncate(1);
        let replaced = store.save(smaller).unwrap();
        assert_eq!(replaced.members.len(), 2);
        assert_eq!(store.get("platform").unwrap().members.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_team() {
        let mut store = TeamStore::new();
        assert!(matches!(store.get("ghost"), Err(OverlapError::UnknownTeam(_))));
        assert!(matches!(store.remove("ghost"), Err(OverlapError::UnknownTeam(_))));
    }

    #[test]
    fn test_remove_and_names() {
        let mut store = TeamStore::new();
        store.save(platform());
        store.save(Team {
            name: "design".to_string(),
            members: vec![],
        });
        assert_eq!(store.names(), vec!["design", "platform"]);
        store.remove("design").unwrap();
        assert_eq!(store.names(), vec!["platform"]);
    }

    #[test]
    fn test_from_json_roster() {
        let store = TeamStore::from_json(
            r#"[
                {"name": "core", "members": [
                    {"name": "li", "timezone": "Asia/Shanghai"},
                    {"name": "sam", "timezone": "America/Chicago", "working_hours": {"start": 7, "end": 15}}
                ]}
            ]"#,
        )
        .unwrap();
        let core = store.get("core").unwrap();
        assert_eq!(core.timezones(), vec!["Asia/Shanghai", "America/Chicago"]);
        assert_eq!(core.working_hours()[1], WorkingHours::new(7, 15));
    }

    #[test]
    fn test_from_json_rejects_bad_roster() {
        assert!(TeamStore::from_json(r#"{"name": "core"}"#).is_err());
    }
}
