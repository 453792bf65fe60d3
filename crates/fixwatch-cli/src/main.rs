//! fixwatch CLI
//!
//! Command-line interface for fixwatch

use clap::{Parser, Subcommand, ValueEnum};
use fixwatch_core::logging_facility::{init, Profile};
use fixwatch_core_types::RunId;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable logs on stderr
    Pretty,
    /// JSON logs on stderr
    Json,
    /// No logging
    Off,
}

#[derive(Debug, Parser)]
#[command(name = "fixwatch")]
#[command(about = "fixwatch - Track fixture changes against the last published baseline", long_about = None)]
struct Cli {
    /// Directory holding the fixtures, baseline and extract files
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Config file (default: <DIR>/fixwatch.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Off)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a raw fixture listing into the canonical fixtures file
    Ingest(commands::ingest::IngestArgs),
    /// Diff current fixtures against the baseline and write extracts
    Diff(commands::diff::DiffArgs),
    /// Mark the current fixtures as published (replace the baseline)
    Commit(commands::commit::CommitArgs),
    /// Show counts of current, baseline, new and removed fixtures
    Status(commands::status::StatusArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log_format {
        LogFormat::Pretty => init(Profile::Development),
        LogFormat::Json => init(Profile::Production),
        LogFormat::Off => {}
    }

    let run_id = RunId::new();
    let span = tracing::info_span!("run", run_id = %run_id);
    let _entered = span.enter();

    let result = commands::Workspace::open(cli.dir, cli.config, run_id).and_then(|ws| {
        match cli.command {
            Commands::Ingest(args) => commands::ingest::execute(args, &ws),
            Commands::Diff(args) => commands::diff::execute(args, &ws),
            Commands::Commit(args) => commands::commit::execute(args, &ws),
            Commands::Status(args) => commands::status::execute(args, &ws),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
