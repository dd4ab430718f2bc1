//! Error types for the standings tracker
//!
//! This module defines all error types that can occur while loading game results,
//! reading or writing the standings store, and looking up teams.
//!
//! # Error Categories
//!
//! - **File Errors**: Missing store/results files, refused seeding, other I/O failures
//! - **Format Errors**: Malformed CSV rows or result text (the whole file is rejected)
//! - **Range Errors**: Team IDs or record indexes outside the store
//! - **Store Errors**: Corrupt records and counter overflow

use crate::types::TeamId;
use thiserror::Error;

/// Main error type for the standings tracker
///
/// Each variant includes enough context to be printed directly by the CLI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StandingsError {
    /// File not found at the specified path
    ///
    /// The store is never created implicitly, so a missing store surfaces here.
    #[error("File not found: {path}")]
    NotFound {
        /// The path that was not found
        path: String,
    },

    /// Seeding refused because the store file already exists
    #[error("File already exists: {path}")]
    AlreadyExists {
        /// The path that already exists
        path: String,
    },

    /// Malformed input
    ///
    /// Raised for wrong field counts, rows without separators and result text
    /// that does not split into exactly three tokens. The whole results file is
    /// rejected and the store is left untouched.
    #[error("Invalid data format{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidFormat {
        /// Line number where the problem was found (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// Record index or team ID outside the store
    #[error("Index {index} is out of range")]
    OutOfRange {
        /// The offending zero-based record index or team ID
        index: i64,
    },

    /// A record on disk does not decode to a valid standing
    #[error("Corrupt record at index {index}: {message}")]
    CorruptData {
        /// Zero-based record index
        index: usize,
        /// What was wrong with the record
        message: String,
    },

    /// Incrementing a counter would overflow the on-disk field
    #[error("Counter overflow for team {team_id}")]
    CounterOverflow {
        /// Team whose counter would overflow
        team_id: TeamId,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for StandingsError {
    fn from(error: std::io::Error) -> Self {
        StandingsError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for StandingsError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());
        let message = error.to_string();

        match error.into_kind() {
            csv::ErrorKind::Io(io) => io.into(),
            _ => StandingsError::InvalidFormat { line, message },
        }
    }
}

impl StandingsError {
    /// Map an error from opening `path`, turning `ErrorKind::NotFound` into `NotFound`
    pub fn from_open(error: std::io::Error, path: &std::path::Path) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => StandingsError::not_found(path),
            std::io::ErrorKind::AlreadyExists => StandingsError::AlreadyExists {
                path: path.display().to_string(),
            },
            _ => error.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(path: &std::path::Path) -> Self {
        StandingsError::NotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(line: Option<u64>, message: impl Into<String>) -> Self {
        StandingsError::InvalidFormat {
            line,
            message: message.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(index: impl Into<i64>) -> Self {
        StandingsError::OutOfRange {
            index: index.into(),
        }
    }

    /// Create a CorruptData error
    pub fn corrupt(index: usize, message: impl Into<String>) -> Self {
        StandingsError::CorruptData {
            index,
            message: message.into(),
        }
    }

    /// Create a CounterOverflow error
    pub fn counter_overflow(team_id: TeamId) -> Self {
        StandingsError::CounterOverflow { team_id }
    }

    /// Whether the error rejects a single input file rather than the whole run
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StandingsError::InvalidFormat { .. } | StandingsError::NotFound { .. }
        )
    }
}
