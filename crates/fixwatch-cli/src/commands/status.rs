//! Status command
//!
//! Usage: fixwatch status [--json]

use super::{CommandResult, Workspace};
use clap::Args;
use fixwatch_core::report::SyncStatus;
use fixwatch_core::snapshot::compute_snapshot_digest;
use fixwatch_core::{BaselineStore, Snapshot};
use serde_json::json;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Print counts as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: StatusArgs, ws: &Workspace) -> CommandResult {
    // Status is informational: a missing fixtures file counts as empty
    let current = if ws.fixtures_path().exists() {
        ws.current_snapshot()?
    } else {
        Snapshot::new()
    };
    let store = ws.baseline_store();
    let baseline = store.snapshot()?;

    let status = SyncStatus::from_snapshots(&current, &baseline)
        .with_baseline_committed(store.has_baseline());
    let digest = compute_snapshot_digest(&current, &ws.config.schema)?;

    if args.json {
        let value = json!({
            "status": status,
            "current_digest": digest,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", status);
        println!("Current digest:     {}", digest);
    }

    Ok(())
}
