//! Core business logic module
//!
//! This module contains the standings components:
//! - `traits` - Trait abstractions for collaborators (team name lookup)
//! - `engine` - Result application and ranked read-back

pub mod engine;
pub mod traits;

pub use engine::{ApplySummary, StandingsEngine};
pub use traits::TeamDirectory;
