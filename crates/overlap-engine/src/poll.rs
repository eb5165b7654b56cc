//! Availability polls over candidate meeting times.
//!
//! A [`PollStore`] holds polls and their votes in memory. Each voter has at
//! most one vote per poll; voting again moves it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{OverlapError, Result};
use crate::scorer::ScoredMeeting;

pub type PollId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poll {
    pub id: PollId,
    pub title: String,
    pub options: Vec<DateTime<Utc>>,
    pub closed: bool,
    /// Voter name → option index.
    votes: HashMap<String, usize>,
}

impl Poll {
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    pub fn vote_of(&self, voter: &str) -> Option<usize> {
        self.votes.get(voter).copied()
    }
}

/// Vote count for one poll option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTally {
    pub option: usize,
    pub time: DateTime<Utc>,
    pub votes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PollStore {
    polls: HashMap<PollId, Poll>,
    next_id: PollId,
}

impl PollStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, title: &str, options: Vec<DateTime<Utc>>) -> PollId {
        self.next_id += 1;
        let id = self.next_id;
        self.polls.insert(
            id,
            Poll {
                id,
                title: title.to_string(),
                options,
                closed: false,
                votes: HashMap::new(),
            },
        );
        id
    }

    /// Create a poll whose options are the times of `meetings`, in order.
    pub fn create_from_meetings(&mut self, title: &str, meetings: &[ScoredMeeting]) -> PollId {
        self.create(title, meetings.iter().map(|m| m.time).collect())
    }

    pub fn get(&self, id: PollId) -> Result<&Poll> {
        self.polls.get(&id).ok_or(OverlapError::UnknownPoll(id))
    }

    fn get_mut(&mut self, id: PollId) -> Result<&mut Poll> {
        self.polls.get_mut(&id).ok_or(OverlapError::UnknownPoll(id))
    }

    /// Record `voter`'s choice, replacing any earlier vote of theirs.
    pub fn vote(&mut self, id: PollId, voter: &str, option: usize) -> Result<()> {
        let poll = self.get_mut(id)?;
        if poll.closed {
            return Err(OverlapError::PollClosed(id));
        }
        if option >= poll.options.len() {
            return Err(OverlapError::InvalidOption { poll: id, option });
        }
        poll.votes.insert(voter.to_string(), option);
        Ok(())
    }

    /// Withdraw `voter`'s vote. Returns whether there was one.
    pub fn retract(&mut self, id: PollId, voter: &str) -> Result<bool> {
        let poll = self.get_mut(id)?;
        if poll.closed {
            return Err(OverlapError::PollClosed(id));
        }
        Ok(poll.votes.remove(voter).is_some())
    }

    pub fn close(&mut self, id: PollId) -> Result<()> {
        self.get_mut(id)?.closed = true;
        Ok(())
    }

    /// Votes per option, most votes first; ties keep option order.
    pub fn tally(&self, id: PollId) -> Result<Vec<OptionTally>> {
        let poll = self.get(id)?;
        let mut counts = vec![0usize; poll.options.len()];
        for &option in poll.votes.values() {
            counts[option] += 1;
        }

        let mut tally: Vec<OptionTally> = poll
            .options
            .iter()
            .zip(counts)
            .enumerate()
            .map(|(option, (&time, votes))| OptionTally {
                option,
                time,
                votes,
            })
            .collect();
        tally.sort_by(|a, b| b.votes.cmp(&a.votes));
        Ok(tally)
    }

    pub fn remove(&mut self, id: PollId) -> Result<Poll> {
        self.polls.remove(&id).ok_or(OverlapError::UnknownPoll(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn options() -> Vec<DateTime<Utc>> {
        (9..12)
            .map(|h| Utc.with_ymd_and_hms(2026, 3, 18, h, 0, 0).unwrap())
            .collect()
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = PollStore::new();
        let a = store.create("standup", options());
        let b = store.create("retro", options());
        assert!(b > a);
        assert_eq!(store.get(a).unwrap().title, "standup");
    }

    #[test]
    fn test_revote_replaces_previous_vote() {
        let mut store = PollStore::new();
        let id = store.create("standup", options());
        store.vote(id, "ana", 0).unwrap();
        store.vote(id, "ana", 2).unwrap();
        let poll = store.get(id).unwrap();
        assert_eq!(poll.vote_count(), 1);
        assert_eq!(poll.vote_of("ana"), Some(2));
    }

    #[test]
    fn test_tally_orders_by_votes() {
        let mut store = PollStore::new();
        let id = store.create("standup", options());
        store.vote(id, "ana", 1).unwrap();
        store.vote(id, "raj", 1).unwrap();
        store.vote(id, "li", 2).unwrap();

        let tally = store.tally(id).unwrap();
        assert_eq!(
            tally.iter().map(|t| (t.option, t.votes)).collect::<Vec<_>>(),
            vec![(1, 2), (2, 1), (0, 0)]
        );
        assert_eq!(tally[0].time, options()[1]);
    }

    #[test]
    fn test_invalid_option_and_unknown_poll() {
        let mut store = PollStore::new();
        let id = store.create("standup", options());
        assert!(matches!(
            store.vote(id, "ana", 3),
            Err(OverlapError::InvalidOption { option: 3, .. })
        ));
        assert!(matches!(
            store.vote(id + 1, "ana", 0),
            Err(OverlapError::UnknownPoll(_))
        ));
    }

    #[test]
    fn test_closed_poll_rejects_votes() {
        let mut store = PollStore::new();
        let id = store.create("standup", options());
        store.vote(id, "ana", 0).unwrap();
        store.close(id).unwrap();
        assert!(matches!(store.vote(id, "raj", 0), Err(OverlapError::PollClosed(_))));
        assert!(matches!(store.retract(id, "ana"), Err(OverlapError::PollClosed(_))));
        assert_eq!(store.tally(id).unwrap()[0].votes, 1);
    }

    #[test]
    fn test_retract() {
        let mut store = PollStore::new();
        let id = store.create("standup", options());
        store.vote(id, "ana", 0).unwrap();
        assert!(store.retract(id, "ana").unwrap());
        assert!(!store.retract(id, "ana").unwrap());
        assert_eq!(store.get(id).unwrap().vote_count(), 0);
    }

    #[test]
    fn test_create_from_meetings() {
        let meetings: Vec<ScoredMeeting> = options()
            .into_iter()
            .map(|time| ScoredMeeting {
                time,
                score: 40,
                reason: String::new(),
                timezone_times: Default::default(),
            })
            .collect();
        let mut store = PollStore::new();
        let id = store.create_from_meetings("sync", &meetings);
        assert_eq!(store.get(id).unwrap().options, options());
        store.remove(id).unwrap();
        assert!(store.get(id).is_err());
    }
}
