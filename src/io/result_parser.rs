//! Game results CSV scanner
//!
//! Reads a monthly results file and projects each data line onto a
//! [`RawGameRow`]. Only the row *shape* is checked here; team IDs and result
//! text are validated by the engine.
//!
//! # Format
//!
//! ```text
//! date,visitor_id,home_id,visitor_goals,home_goals,result
//! 2021-10-12,3,11,2,3,HOME WINS OT
//! ```
//!
//! The header line is discarded. Every data line must hold exactly six
//! comma-separated fields; columns 1, 2 and 5 (zero-based) become the away
//! team, home team and result text.
//!
//! Lines are split on every comma. There is no quoting, so a comma inside
//! double quotes still separates fields, and blank lines are not skipped.
//!
//! # Error Handling
//!
//! A single malformed line rejects the whole file with `InvalidFormat`, so the
//! caller can leave the store untouched.

use crate::types::{RawGameRow, StandingsError};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Number of fields in a results line
pub const FIELD_COUNT: usize = 6;

const SEPARATOR: char = ',';
const AWAY_TEAM_FIELD: usize = 1;
const HOME_TEAM_FIELD: usize = 2;
const RESULT_FIELD: usize = 5;

/// Scan a results file into raw game rows
///
/// Fields are trimmed of surrounding whitespace before they are kept.
///
/// # Errors
///
/// - `NotFound` if the file does not exist
/// - `InvalidFormat` if any data line lacks a comma (blank lines included),
///   does not have exactly six fields, or is not valid UTF-8
/// - `Io` for other read failures
pub fn scan(path: &Path) -> Result<Vec<RawGameRow>, StandingsError> {
    let file = File::open(path).map_err(|e| StandingsError::from_open(e, path))?;
    let reader = BufReader::with_capacity(8 * 1024, file);

    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line_number = index as u64 + 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => {
                StandingsError::invalid_format(Some(line_number), "line is not valid UTF-8")
            }
            _ => e.into(),
        })?;
        rows.push(project_line(line_number, &line)?);
    }

    debug!(path = %path.display(), rows = rows.len(), "scanned results file");
    Ok(rows)
}

/// Project one results line onto a raw game row
///
/// # Errors
///
/// Returns `InvalidFormat` with `line` when the text has no comma or does not
/// split into exactly [`FIELD_COUNT`] fields.
pub fn project_line(line: u64, text: &str) -> Result<RawGameRow, StandingsError> {
    if !text.contains(SEPARATOR) {
        return Err(StandingsError::invalid_format(
            Some(line),
            "line has no comma-separated fields",
        ));
    }

    let fields: Vec<&str> = text.split(SEPARATOR).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StandingsError::invalid_format(
            Some(line),
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    Ok(RawGameRow {
        line,
        away_team: fields[AWAY_TEAM_FIELD].to_string(),
        home_team: fields[HOME_TEAM_FIELD].to_string(),
        result_text: fields[RESULT_FIELD].to_string(),
    })
}
