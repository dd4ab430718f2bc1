//! NHL Standings CLI
//!
//! Command-line interface for loading game results and printing standings.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --init
//! cargo run -- -f nhl-game-data/games-oct.csv nhl-game-data/games-nov.csv
//! cargo run -- -t 11
//! cargo run -- --format csv --data-dir season-2021 -f games-dec.csv > standings.csv
//! ```
//!
//! Result files are applied in the order given. A file that fails validation
//! is reported and skipped; the remaining files are still applied before the
//! ranked standings are printed.
//!
//! # Logging
//!
//! Diagnostics go to stderr. Set `RUST_LOG` (e.g. `RUST_LOG=nhl_standings=debug`)
//! to see per-record updates.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (store missing or unreadable, invalid team, output failure, etc.)

use nhl_standings::cli::{self, Action};
use nhl_standings::io::write_standings;
use nhl_standings::{
    CsvTeamDirectory, RecordStore, Standing, StandingsConfig, StandingsEngine, StandingsError,
};
use std::path::PathBuf;
use std::process;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nhl_standings=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_config();
    if let Err(e) = run(args.action(), &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(action: Action, config: &StandingsConfig) -> Result<(), StandingsError> {
    let engine = StandingsEngine::new(&config.store_path);

    match action {
        Action::InitStore => RecordStore::initialize(&config.store_path),
        Action::ShowTeam(team_id) => {
            let record = engine.get_standing(team_id)?;
            print_standings(&[Standing::from(record)], config)
        }
        Action::LoadResults(files) => {
            load_results(&engine, &files);
            print_standings(&engine.rank_all()?, config)
        }
    }
}

fn load_results(engine: &StandingsEngine, files: &[PathBuf]) {
    for file in files {
        if let Err(e) = engine.apply_results_file(file) {
            if e.is_recoverable() {
                warn!(file = %file.display(), error = %e, "no changes have been made to records");
            } else {
                error!(file = %file.display(), error = %e, "failed to apply results file");
            }
        }
    }
}

fn print_standings(standings: &[Standing], config: &StandingsConfig) -> Result<(), StandingsError> {
    let teams = CsvTeamDirectory::load(&config.teams_path).unwrap_or_else(|e| {
        warn!(path = %config.teams_path.display(), error = %e, "team names unavailable");
        CsvTeamDirectory::default()
    });

    let mut output = std::io::stdout().lock();
    write_standings(standings, &teams, config.format, &mut output)
}
