//! Standings output rendering
//!
//! Renders standings either as a fixed-width text table for the console or as
//! CSV. Both writers take any `Write`, so tests render into a `Vec<u8>`.

use crate::cli::OutputFormat;
use crate::core::traits::TeamDirectory;
use crate::types::{Standing, StandingsError, TeamId};
use serde::Serialize;
use std::io::Write;

/// CSV row for one team
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StandingRow<'a> {
    pub team_id: TeamId,
    pub team: &'a str,
    pub wins: u64,
    pub losses: u64,
    pub losses_ot: u64,
    pub points: u64,
}

impl<'a> StandingRow<'a> {
    pub fn new(standing: &Standing, teams: &'a dyn TeamDirectory) -> Self {
        StandingRow {
            team_id: standing.team_id,
            team: teams.display_name(standing.team_id),
            wins: standing.record.wins,
            losses: standing.record.losses,
            losses_ot: standing.record.losses_ot,
            points: standing.points,
        }
    }
}

/// Write standings in the requested format
pub fn write_standings(
    standings: &[Standing],
    teams: &dyn TeamDirectory,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), StandingsError> {
    match format {
        OutputFormat::Table => write_standings_table(standings, teams, output),
        OutputFormat::Csv => write_standings_csv(standings, teams, output),
    }
}

/// Write standings as a fixed-width table, in the order given
pub fn write_standings_table(
    standings: &[Standing],
    teams: &dyn TeamDirectory,
    output: &mut dyn Write,
) -> Result<(), StandingsError> {
    writeln!(
        output,
        "{:<24}{:>6}{:>8}{:>11}{:>8}",
        "TEAM", "WINS", "LOSSES", "OT LOSSES", "POINTS"
    )?;

    for standing in standings {
        let row = StandingRow::new(standing, teams);
        writeln!(
            output,
            "{:<24}{:>6}{:>8}{:>11}{:>8}",
            row.team, row.wins, row.losses, row.losses_ot, row.points
        )?;
    }

    output.flush()?;
    Ok(())
}

/// Write standings as CSV with a header row, in the order given
pub fn write_standings_csv(
    standings: &[Standing],
    teams: &dyn TeamDirectory,
    output: &mut dyn Write,
) -> Result<(), StandingsError> {
    let mut writer = csv::Writer::from_writer(output);

    if standings.is_empty() {
        writer.write_record(["team_id", "team", "wins", "losses", "losses_ot", "points"])?;
    }
    for standing in standings {
        writer.serialize(StandingRow::new(standing, teams))?;
    }

    writer.flush()?;
    Ok(())
}
