//! Turns command-line flags and files into a search request.
//!
//! Precedence, lowest first: defaults, the `--config` preferences file, the
//! selected team's working hours, explicit flags.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use overlap_engine::{SearchPreferences, TeamStore, TimeBucket, WorkingHours};

/// Raw inputs shared by `find` and `suggest`.
#[derive(Debug, Clone, Default)]
pub struct RequestInputs<'a> {
    pub zones: &'a [String],
    pub team: Option<&'a str>,
    pub teams_file: Option<&'a Path>,
    pub config_file: Option<&'a Path>,
    pub hours: &'a [WorkingHours],
    pub exclude_weekends: bool,
    pub prefer: Option<TimeBucket>,
}

/// A fully resolved search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub zones: Vec<String>,
    pub preferences: SearchPreferences,
}

impl SearchRequest {
    pub fn resolve(inputs: &RequestInputs<'_>) -> Result<Self> {
        let mut preferences = match inputs.config_file {
            Some(path) => load_preferences(path)?,
            None => SearchPreferences::default(),
        };

        let zones = match inputs.team {
            Some(name) => {
                let path = inputs.teams_file.context("--team requires --teams <FILE>")?;
                let store = load_teams(path)?;
                let team = store.get(name)?;
                preferences.working_hours = team.working_hours();
                team.timezones()
            }
            None => inputs.zones.to_vec(),
        };

        if !inputs.hours.is_empty() {
            preferences.working_hours = inputs.hours.to_vec();
        }
        if inputs.exclude_weekends {
            preferences.exclude_weekends = true;
        }
        if inputs.prefer.is_some() {
            preferences.preferred_time = inputs.prefer;
        }

        if zones.len() < 2 {
            bail!("at least two time zones are required, got {}", zones.len());
        }

        Ok(Self { zones, preferences })
    }
}

pub fn load_preferences(path: &Path) -> Result<SearchPreferences> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SearchPreferences::from_json(&json)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

pub fn load_teams(path: &Path) -> Result<TeamStore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read teams {}", path.display()))?;
    TeamStore::from_json(&json)
        .with_context(|| format!("failed to parse teams {}", path.display()))
}
