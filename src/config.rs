//! Runtime configuration
//!
//! Resolved file locations and output settings used by the driver.

use crate::cli::OutputFormat;
use std::path::{Path, PathBuf};

/// Directory holding the store and team table when nothing else is given
pub const DEFAULT_DATA_DIR: &str = "nhl-game-data";

/// File name of the binary standings store inside the data directory
pub const STORE_FILE_NAME: &str = "standings.bin";

/// File name of the team table inside the data directory
pub const TEAMS_FILE_NAME: &str = "team_ids.csv";

/// Configuration for one run of the tracker
#[derive(Clone, Debug, PartialEq)]
pub struct StandingsConfig {
    /// Binary standings store
    pub store_path: PathBuf,
    /// Team ID to name table
    pub teams_path: PathBuf,
    /// How standings are printed
    pub format: OutputFormat,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self::from_data_dir(Path::new(DEFAULT_DATA_DIR))
    }
}

impl StandingsConfig {
    /// Configuration with both files inside `data_dir`
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            store_path: data_dir.join(STORE_FILE_NAME),
            teams_path: data_dir.join(TEAMS_FILE_NAME),
            format: OutputFormat::default(),
        }
    }
}
