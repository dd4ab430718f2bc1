//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Team records, standings rows and team ID validation
//! - `game`: Raw game rows and classified game outcomes
//! - `error`: Error types for the standings tracker

pub mod error;
pub mod game;
pub mod record;

pub use error::StandingsError;
pub use game::{Decision, Finish, GameResult, Outcome, RawGameRow, ResultText, Side};
pub use record::{
    is_valid_team_id, parse_team_id, Standing, TeamId, TeamRecord, MAX_COUNTER, TEAM_COUNT,
};
