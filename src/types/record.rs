//! Team standings types
//!
//! This module defines the per-team record kept in the standings store and the
//! ranked view derived from it.

use super::error::StandingsError;
use super::game::Decision;

/// Team identifier
///
/// NHL team IDs run from 1 to [`TEAM_COUNT`] and double as 1-based positions
/// in the standings store.
pub type TeamId = u32;

/// Number of teams tracked by the store
pub const TEAM_COUNT: usize = 30;

/// Largest value a counter can hold (counters are signed 64-bit on disk)
pub const MAX_COUNTER: u64 = i64::MAX as u64;

/// Check whether `id` names a team in the league
pub fn is_valid_team_id(id: TeamId) -> bool {
    (1..=TEAM_COUNT as TeamId).contains(&id)
}

/// Parse a team identifier from free text
///
/// Accepts one or two ASCII digits (surrounding whitespace ignored) whose value
/// lies in `1..=30`. Anything else yields `None`.
pub fn parse_team_id(text: &str) -> Option<TeamId> {
    let text = text.trim();
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse::<TeamId>().ok().filter(|&id| is_valid_team_id(id))
}

/// Cumulative season record for one team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRecord {
    /// The team this record belongs to (1-30)
    pub team_id: TeamId,

    /// Games won, in regulation or beyond
    pub wins: u64,

    /// Games lost in regulation time
    pub losses: u64,

    /// Games lost in overtime or a shootout
    pub losses_ot: u64,
}

impl TeamRecord {
    /// Create an empty record for a team
    pub fn new(team_id: TeamId) -> Self {
        TeamRecord {
            team_id,
            wins: 0,
            losses: 0,
            losses_ot: 0,
        }
    }

    /// Standings points: two per win, one per overtime/shootout loss
    pub fn points(&self) -> u64 {
        self.wins.saturating_mul(2).saturating_add(self.losses_ot)
    }

    /// Bump the counter that `decision` refers to
    ///
    /// # Errors
    ///
    /// Returns `CounterOverflow` if the counter is already at [`MAX_COUNTER`].
    pub fn record(&mut self, decision: Decision) -> Result<(), StandingsError> {
        let team_id = self.team_id;
        let counter = match decision {
            Decision::Win => &mut self.wins,
            Decision::Loss => &mut self.losses,
            Decision::OvertimeLoss => &mut self.losses_ot,
        };

        *counter = counter
            .checked_add(1)
            .filter(|&value| value <= MAX_COUNTER)
            .ok_or_else(|| StandingsError::counter_overflow(team_id))?;

        Ok(())
    }
}

/// One row of the ranked standings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub team_id: TeamId,
    pub record: TeamRecord,
    pub points: u64,
}

impl From<TeamRecord> for Standing {
    fn from(record: TeamRecord) -> Self {
        Standing {
            team_id: record.team_id,
            record,
            points: record.points(),
        }
    }
}
