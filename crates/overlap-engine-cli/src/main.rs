mod config;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use overlap_engine::{
    find_overlapping_hours, suggest_best_meeting_time, ReferenceClock, ScoredMeeting, TimeBucket,
    WorkingHours,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{RequestInputs, SearchRequest};

#[derive(Parser)]
#[command(name = "tzmeet", version, about = "Find meeting times that work across time zones")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the best-scoring slots over the next 7 days
    Find {
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Like `find`, then re-rank by a preferred time of day
    Suggest {
        #[command(flatten)]
        search: SearchArgs,
        /// Preferred time of day: morning, afternoon, or evening
        #[arg(long)]
        prefer: Option<TimeBucket>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// IANA time zones, one per participant (e.g. Europe/London)
    #[arg(conflicts_with = "team")]
    zones: Vec<String>,

    /// Search for a team from the --teams roster instead of listing zones
    #[arg(long, requires = "teams")]
    team: Option<String>,

    /// Team roster JSON file
    #[arg(long, value_name = "FILE")]
    teams: Option<PathBuf>,

    /// Preferences JSON file; explicit flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Working hours per zone, in zone order (e.g. 9-17); repeat for each zone
    #[arg(long = "hours", value_name = "START-END")]
    hours: Vec<WorkingHours>,

    /// Skip Saturdays and Sundays
    #[arg(long)]
    exclude_weekends: bool,

    /// Anchor the search at this RFC 3339 instant instead of the current time
    #[arg(long, value_name = "RFC3339")]
    now: Option<DateTime<Utc>>,

    /// Zone whose calendar defines days, weekends, and time-of-day
    #[arg(long, default_value = "UTC")]
    reference_zone: String,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn request(&self, prefer: Option<TimeBucket>) -> Result<SearchRequest> {
        SearchRequest::resolve(&RequestInputs {
            zones: &self.zones,
            team: self.team.as_deref(),
            teams_file: self.teams.as_deref(),
            config_file: self.config.as_deref(),
            hours: &self.hours,
            exclude_weekends: self.exclude_weekends,
            prefer,
        })
    }

    fn clock(&self) -> Result<ReferenceClock> {
        let now = self.now.unwrap_or_else(Utc::now);
        Ok(ReferenceClock::in_zone(now, &self.reference_zone)?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tzmeet=info,overlap_engine=info")),
        )
        .init();

    let cli = Cli::parse();

    let (search, meetings) = match &cli.command {
        Command::Find { search } => {
            let request = search.request(None)?;
            let clock = search.clock()?;
            info!(zones = request.zones.len(), now = %clock.now, "searching");
            let meetings = find_overlapping_hours(
                &clock,
                &request.zones,
                &request.preferences.working_hours,
                request.preferences.exclude_weekends,
            )?;
            (search, meetings)
        }
        Command::Suggest { search, prefer } => {
            let request = search.request(*prefer)?;
            let clock = search.clock()?;
            info!(
                zones = request.zones.len(),
                now = %clock.now,
                prefer = ?request.preferences.preferred_time,
                "suggesting"
            );
            let meetings = suggest_best_meeting_time(&clock, &request.zones, &request.preferences)?;
            (search, meetings)
        }
    };

    print_meetings(&meetings, search.json)
}

fn print_meetings(meetings: &[ScoredMeeting], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(meetings)?);
    } else if meetings.is_empty() {
        println!("No suitable meeting times found");
    } else {
        for meeting in meetings {
            println!("{}", meeting.summary());
        }
    }
    Ok(())
}
