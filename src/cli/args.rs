use crate::config::{StandingsConfig, DEFAULT_DATA_DIR};
use crate::types::{parse_team_id, TeamId};
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Track NHL standings from monthly game result files
#[derive(Parser, Debug)]
#[command(name = "nhl-standings")]
#[command(about = "Track NHL standings from monthly game result files", long_about = None)]
pub struct CliArgs {
    #[command(flatten)]
    pub action: ActionArgs,

    /// Directory containing standings.bin and team_ids.csv
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "NHL_DATA_DIR",
        default_value = DEFAULT_DATA_DIR,
        help = "Directory containing standings.bin and team_ids.csv"
    )]
    pub data_dir: PathBuf,

    /// Explicit path of the binary standings store
    #[arg(
        long = "store",
        value_name = "PATH",
        help = "Path to the standings store (default: <DIR>/standings.bin)"
    )]
    pub store: Option<PathBuf>,

    /// Explicit path of the team table
    #[arg(
        long = "teams",
        value_name = "PATH",
        help = "Path to the team ID table (default: <DIR>/team_ids.csv)"
    )]
    pub teams: Option<PathBuf>,

    /// Output format for printed standings
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "table",
        help = "Output format: 'table' for aligned text or 'csv'"
    )]
    pub format: OutputFormat,
}

/// Exactly one action per run
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ActionArgs {
    /// Show the current standing of one team
    #[arg(
        short = 't',
        long = "team",
        value_name = "TEAM_ID",
        value_parser = parse_team_arg,
        help = "Display the current standing of the team with this ID (1-30)"
    )]
    pub team: Option<TeamId>,

    /// Load result files, then show the ranked standings
    #[arg(
        short = 'f',
        long = "files",
        value_name = "CSV",
        num_args = 1..,
        help = "Load game results from these CSV files, then display ranked standings"
    )]
    pub files: Option<Vec<PathBuf>>,

    /// Create an empty standings store
    #[arg(long = "init", help = "Create a standings store with every team at zero")]
    pub init: bool,
}

/// Available output formats for standings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

/// Action selected on the command line
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ShowTeam(TeamId),
    LoadResults(Vec<PathBuf>),
    InitStore,
}

impl CliArgs {
    /// Resolve file locations from CLI arguments
    ///
    /// Explicit `--store`/`--teams` paths win over the data directory.
    pub fn to_config(&self) -> StandingsConfig {
        let defaults = StandingsConfig::from_data_dir(&self.data_dir);

        StandingsConfig {
            store_path: self.store.clone().unwrap_or(defaults.store_path),
            teams_path: self.teams.clone().unwrap_or(defaults.teams_path),
            format: self.format,
        }
    }

    /// The action to run
    pub fn action(&self) -> Action {
        match (&self.action.team, &self.action.files) {
            (Some(team_id), _) => Action::ShowTeam(*team_id),
            (None, Some(files)) => Action::LoadResults(files.clone()),
            (None, None) => Action::InitStore,
        }
    }
}

fn parse_team_arg(value: &str) -> Result<TeamId, String> {
    parse_team_id(value)
        .ok_or_else(|| "please use an integer from 1 to 30 inclusive".to_string())
}
