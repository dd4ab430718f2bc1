//! I/O module
//!
//! Handles the CSV inputs and the standings output.
//!
//! # Components
//!
//! - `result_parser` - Game results scanning (row shape validation and field projection)
//! - `team_directory` - Team name lookup loaded from `team_ids.csv`
//! - `standings_format` - Table and CSV rendering of standings

pub mod result_parser;
pub mod standings_format;
pub mod team_directory;

pub use result_parser::scan;
pub use standings_format::{write_standings, write_standings_csv, write_standings_table};
pub use team_directory::CsvTeamDirectory;
