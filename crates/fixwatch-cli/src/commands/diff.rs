//! Diff command
//!
//! Usage: fixwatch diff [--json | --notification] [--no-write]

use super::{display_name, CommandResult, Workspace};
use clap::Args;
use fixwatch_core::report::{build_extracts, build_notification};
use fixwatch_core::{compute_diff, render_human_summary, BaselineStore, FixtureDiff};
use fixwatch_store::write_extracts;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Print the structured diff as JSON instead of the text report
    #[arg(long, conflicts_with = "notification")]
    pub json: bool,

    /// Print the notification message (title, priority, body) as JSON
    #[arg(long)]
    pub notification: bool,

    /// Do not write or remove extract files
    #[arg(long)]
    pub no_write: bool,
}

pub fn execute(args: DiffArgs, ws: &Workspace) -> CommandResult {
    let current = ws.current_snapshot()?;
    let store = ws.baseline_store();
    let baseline = store.snapshot()?;
    let diff = compute_diff(&current, &baseline).with_baseline_committed(store.has_baseline());

    let mut written = Vec::new();
    if !args.no_write {
        let extracts = build_extracts(&diff, &ws.config.schema);
        let outcome = write_extracts(&ws.dir, &ws.config.files, &extracts)?;
        written = outcome
            .written
            .iter()
            .map(|(kind, path)| {
                let rows = extracts
                    .iter()
                    .find(|e| e.kind == *kind)
                    .map(|e| e.len())
                    .unwrap_or_default();
                format!("-> {} ({} {})", display_name(path), rows, kind)
            })
            .collect();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else if args.notification {
        let notification = build_notification(&diff, &ws.config.organization);
        println!("{}", serde_json::to_string_pretty(&notification)?);
    } else {
        print_report(&diff, &written);
    }

    Ok(())
}

fn print_report(diff: &FixtureDiff, written: &[String]) {
    println!("Current fixtures:   {}", diff.current_len);
    println!("Baseline fixtures:  {}", diff.baseline_len);
    if diff.is_first_run() {
        println!("First run: no baseline committed yet, every scheduled fixture is new");
    }
    println!(
        "New: {}  Changed: {}  Postponed: {}  Removed: {}  Unchanged: {}",
        diff.new.len(),
        diff.changed.len(),
        diff.postponed.len(),
        diff.removed.len(),
        diff.unchanged
    );
    println!();
    println!("{}", render_human_summary(diff));
    for line in written {
        println!("{}", line);
    }
    if diff.requires_action() {
        println!();
        println!("After publishing the changes, run: fixwatch commit");
    }
}
