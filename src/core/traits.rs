//! Core traits
//!
//! Seams between the standings engine and collaborators it does not own.

use crate::types::TeamId;

/// Name shown for teams the directory does not know
pub const UNKNOWN_TEAM: &str = "No Such Team";

/// Lookup from team ID to display name
///
/// Implementations can be backed by a CSV file, a static table or a test double.
pub trait TeamDirectory {
    /// Get the name of a team, if known
    fn team_name(&self, team_id: TeamId) -> Option<&str>;

    /// Get the name of a team, or [`UNKNOWN_TEAM`]
    fn display_name(&self, team_id: TeamId) -> &str {
        self.team_name(team_id).unwrap_or(UNKNOWN_TEAM)
    }
}
