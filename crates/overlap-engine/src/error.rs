//! Error types for overlap-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown poll: {0}")]
    UnknownPoll(u64),

    #[error("Poll {poll} has no option {option}")]
    InvalidOption { poll: u64, option: usize },

    #[error("Poll {0} is closed")]
    PollClosed(u64),
}

pub type Result<T> = std::result::Result<T, OverlapError>;
