//! CSV-backed team name lookup
//!
//! Loads `team_ids.csv` (a header line followed by `id,name` rows) into memory.

use crate::core::traits::TeamDirectory;
use crate::types::{StandingsError, TeamId};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// One row of the team table
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TeamRow {
    pub id: TeamId,
    pub name: String,
}

/// Team names keyed by team ID
#[derive(Debug, Clone, Default)]
pub struct CsvTeamDirectory {
    names: HashMap<TeamId, String>,
}

impl CsvTeamDirectory {
    /// Load team names from a CSV file
    ///
    /// Columns are read by position, so the header text does not matter.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the file does not exist
    /// - `InvalidFormat` if a row does not hold a numeric ID and a name
    pub fn load(path: &Path) -> Result<Self, StandingsError> {
        let file = File::open(path).map_err(|e| StandingsError::from_open(e, path))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let names = reader
            .deserialize::<(TeamId, String)>()
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(CsvTeamDirectory { names })
    }

    /// Number of teams loaded
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<TeamRow> for CsvTeamDirectory {
    fn from_iter<I: IntoIterator<Item = TeamRow>>(iter: I) -> Self {
        CsvTeamDirectory {
            names: iter.into_iter().map(|row| (row.id, row.name)).collect(),
        }
    }
}

impl TeamDirectory for CsvTeamDirectory {
    fn team_name(&self, team_id: TeamId) -> Option<&str> {
        self.names.get(&team_id).map(String::as_str)
    }
}
