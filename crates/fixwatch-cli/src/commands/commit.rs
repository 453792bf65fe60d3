//! Commit command
//!
//! Usage: fixwatch commit [--force]

use super::{display_name, CommandResult, Workspace};
use clap::Args;
use fixwatch_core::errors::{ExError, ExErrorKind};
use fixwatch_core::BaselineStore;
use fixwatch_store::{clean_extracts, WriterLock};

#[derive(Debug, Args)]
pub struct CommitArgs {
    /// Replace a non-empty baseline even when no current fixtures were found
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: CommitArgs, ws: &Workspace) -> CommandResult {
    let _lock = WriterLock::acquire(&ws.dir)?;

    let current = ws.current_snapshot()?;
    let mut store = ws.baseline_store();
    let baseline = store.snapshot()?;

    // An empty listing is far more likely a failed extraction than a
    // cancelled season.
    if current.is_empty() && !baseline.is_empty() && !args.force {
        return Err(Box::new(
            ExError::new(ExErrorKind::EmptySnapshot)
                .with_op("commit")
                .with_path(store.path().display().to_string())
                .with_run_id(ws.run_id.clone())
                .with_message(format!(
                    "refusing to replace {} baseline fixtures with an empty snapshot (use --force)",
                    baseline.len()
                )),
        ));
    }

    store.commit(&current)?;
    println!(
        "Baseline updated: {} fixtures marked as published -> {}",
        current.len(),
        display_name(store.path())
    );

    for path in clean_extracts(&ws.dir, &ws.config.files)? {
        println!("Cleaned up: {}", display_name(&path));
    }

    Ok(())
}
