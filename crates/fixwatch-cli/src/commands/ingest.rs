//! Ingest command
//!
//! Usage: fixwatch ingest <RAW_CSV>

use super::{display_name, CommandResult, Workspace};
use clap::Args;
use fixwatch_core::snapshot::compute_snapshot_digest;
use fixwatch_core::{Normalizer, Snapshot};
use fixwatch_store::codec::{read_fixtures_lenient, read_raw_records, write_snapshot};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Raw listing (Date, Time, Home, Away, Venue, Referee, Competition)
    pub input: PathBuf,
}

pub fn execute(args: IngestArgs, ws: &Workspace) -> CommandResult {
    let records = read_raw_records(&args.input)?;
    let rules = ws.config.rule_table()?;
    let batch = Normalizer::new(&ws.config.organization, &rules).normalize_batch(&records);

    for warning in &batch.warnings {
        // +2: header line, then 1-based rows
        println!("  skipped line {}: {}", warning.index + 2, warning.reason);
    }

    let snapshot = Snapshot::from_fixtures(batch.fixtures);
    let schema = &ws.config.schema;
    let path = ws.fixtures_path();

    let previous_digest = if path.exists() {
        let (previous, _) = read_fixtures_lenient(&path, schema)?.into_snapshot();
        Some(compute_snapshot_digest(&previous, schema)?)
    } else {
        None
    };
    let digest = compute_snapshot_digest(&snapshot, schema)?;

    write_snapshot(&path, schema, &snapshot)?;

    println!(
        "Normalized {} fixtures ({} skipped) -> {}",
        snapshot.len(),
        batch.warnings.len(),
        display_name(&path)
    );
    if previous_digest.as_deref() == Some(digest.as_str()) {
        println!("No fixture changes since the last ingest");
    }
    println!("digest: {}", digest);

    Ok(())
}
