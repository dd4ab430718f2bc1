//! Standings engine
//!
//! This module provides the StandingsEngine that turns game results files into
//! record updates and reads ranked standings back out of the store.
//!
//! The engine enforces the update rules:
//! - A results file is validated in full before any record is touched, so a
//!   malformed file is rejected without partial application
//! - Rows with an invalid team ID or an unknown winner are skipped
//! - The winner always gets a win; the loser gets a regulation or OT/SO loss,
//!   or nothing when the finish is not REG/OT/SO
//! - Every team update is its own open → read → increment → write → close cycle

use crate::io::result_parser;
use crate::store::RecordStore;
use crate::types::{
    is_valid_team_id, parse_team_id, Decision, GameResult, RawGameRow, ResultText,
    StandingsError, Standing, TeamId, TeamRecord,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counts reported after applying one results file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplySummary {
    /// Data rows read from the file
    pub rows: usize,
    /// Rows that produced at least one record update
    pub applied: usize,
    /// Rows dropped because of an invalid team or winner
    pub skipped: usize,
}

/// Standings engine bound to one store file
#[derive(Debug, Clone)]
pub struct StandingsEngine {
    store_path: PathBuf,
}

impl StandingsEngine {
    /// Create an engine for the store at `store_path`
    ///
    /// The store is not opened until an operation needs it.
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        StandingsEngine {
            store_path: store_path.into(),
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Apply every game in a results file to the store
    ///
    /// # Errors
    ///
    /// - `NotFound` if the results file or the store is missing
    /// - `InvalidFormat` if the file has a malformed line or a result that does
    ///   not split into three tokens; the store is left unchanged
    /// - `Io`, `CorruptData` or `CounterOverflow` if a record update fails;
    ///   updates made before the failure remain
    pub fn apply_results_file(&self, path: &Path) -> Result<ApplySummary, StandingsError> {
        let rows = result_parser::scan(path)?;
        let games = Self::plan_games(&rows)?;

        let mut summary = ApplySummary {
            rows: rows.len(),
            ..ApplySummary::default()
        };

        for game in games {
            match game {
                Some(game) => {
                    self.apply_game(&game)?;
                    summary.applied += 1;
                }
                None => summary.skipped += 1,
            }
        }

        info!(
            file = %path.display(),
            rows = summary.rows,
            applied = summary.applied,
            skipped = summary.skipped,
            "applied results file"
        );
        Ok(summary)
    }

    /// Validate rows into games, one entry per row
    ///
    /// Skipped rows come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` on the first row whose result text does not
    /// split into exactly three tokens.
    pub fn plan_games(rows: &[RawGameRow]) -> Result<Vec<Option<GameResult>>, StandingsError> {
        rows.iter().map(Self::classify_row).collect()
    }

    /// Validate a single row
    ///
    /// Team IDs are checked before the result text, so a row with a bad team
    /// is skipped even when its result text is malformed.
    pub fn classify_row(row: &RawGameRow) -> Result<Option<GameResult>, StandingsError> {
        let (Some(away_team), Some(home_team)) =
            (parse_team_id(&row.away_team), parse_team_id(&row.home_team))
        else {
            warn!(
                line = row.line,
                away = %row.away_team,
                home = %row.home_team,
                "skipping row with invalid team ID"
            );
            return Ok(None);
        };

        match ResultText::parse(&row.result_text, Some(row.line))? {
            ResultText::Decided { winner, finish } => {
                if finish.is_none() {
                    warn!(
                        line = row.line,
                        result = %row.result_text,
                        "unrecognized finish, crediting winner only"
                    );
                }
                Ok(Some(GameResult {
                    away_team,
                    home_team,
                    winner,
                    finish,
                }))
            }
            ResultText::UnknownWinner => {
                warn!(
                    line = row.line,
                    result = %row.result_text,
                    "skipping row with invalid data format"
                );
                Ok(None)
            }
        }
    }

    /// Apply one game, winner first
    ///
    /// Each team is updated in its own transaction; the two updates are not
    /// atomic with respect to each other.
    pub fn apply_game(&self, game: &GameResult) -> Result<(), StandingsError> {
        debug!(
            away = game.away_team,
            home = game.home_team,
            outcome = ?game.outcome(),
            "applying game"
        );
        for (team_id, decision) in game.updates() {
            self.record_decision(team_id, decision)?;
        }
        Ok(())
    }

    /// Increment one counter for one team in a single read-modify-write cycle
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `team_id` is not in `1..=30`
    /// - any store error from opening, reading or writing the record
    pub fn record_decision(
        &self,
        team_id: TeamId,
        decision: Decision,
    ) -> Result<TeamRecord, StandingsError> {
        let index = Self::index_of(team_id)?;

        let mut store = RecordStore::open(&self.store_path)?;
        let mut record = store.read_record(index)?;
        record.record(decision)?;
        store.write_record(index, &record)?;
        store.close()?;

        debug!(team_id, ?decision, "recorded decision");
        Ok(record)
    }

    /// Current record for one team
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `team_id` is not in `1..=30`
    /// - any store error from opening or reading the record
    pub fn get_standing(&self, team_id: TeamId) -> Result<TeamRecord, StandingsError> {
        let index = Self::index_of(team_id)?;

        let mut store = RecordStore::open(&self.store_path)?;
        let record = store.read_record(index)?;
        store.close()?;

        Ok(record)
    }

    /// All teams ordered by points, highest first
    ///
    /// Teams level on points keep ascending team ID order.
    pub fn rank_all(&self) -> Result<Vec<Standing>, StandingsError> {
        let mut store = RecordStore::open(&self.store_path)?;
        let records = store.read_all()?;
        store.close()?;

        let mut standings: Vec<Standing> = records.into_values().map(Standing::from).collect();
        standings.sort_by(|a, b| b.points.cmp(&a.points));

        Ok(standings)
    }

    fn index_of(team_id: TeamId) -> Result<usize, StandingsError> {
        if !is_valid_team_id(team_id) {
            return Err(StandingsError::out_of_range(team_id));
        }
        Ok(team_id as usize - 1)
    }
}
