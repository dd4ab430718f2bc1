//! NHL Standings Library
//! # Overview
//!
//! This library loads monthly NHL game result CSV files, keeps a persistent
//! per-team win/loss/OT-loss record store, and produces ranked standings.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TeamRecord, GameResult, errors, etc.)
//! - [`store`] - Fixed-width binary record store with in-place updates
//! - [`io`] - Results CSV scanning, team name lookup and standings output
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Applying results and ranking teams
//!   - [`core::traits`] - Collaborator seams (team name lookup)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Resolved file locations and output settings
//!
//! # Results
//!
//! Each game credits the winner with a win and the loser with either:
//!
//! - **Regulation loss**: the game ended in regulation (`REG`)
//! - **OT/SO loss**: the game went to overtime (`OT`) or a shootout (`SO`)
//!
//! # Standings
//!
//! Each team record maintains:
//! - `wins`: Games won
//! - `losses`: Regulation losses
//! - `losses_ot`: Overtime and shootout losses
//! - `points`: Derived as `wins * 2 + losses_ot`, the ranking key

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod store;
pub mod types;

pub use config::StandingsConfig;
pub use crate::core::{ApplySummary, StandingsEngine, TeamDirectory};
pub use io::{write_standings, CsvTeamDirectory};
pub use store::RecordStore;
pub use types::{
    Decision, GameResult, Outcome, RawGameRow, Standing, StandingsError, TeamId, TeamRecord,
};
