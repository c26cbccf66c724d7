//! `fibertrace trace` command implementation.

use std::path::Path;

use colored::Colorize;
use fibertrace::Snapshot;

use super::display;

/// Run the trace command.
///
/// "No path" is an ordinary outcome and exits successfully; only snapshot
/// loading failures are errors.
pub fn run(snapshot_path: &Path, start: &str, end: &str, json: bool) -> Result<(), fibertrace::Error> {
    let snapshot = Snapshot::from_path(snapshot_path)?;
    let result = snapshot.topology().trace(start, end);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_found() {
        println!(
            "{} ({})",
            "Path found".green().bold(),
            hop_summary(result.hop_count())
        );
        println!();
        display::print_hops(&result.path);
    } else {
        println!("{}", "No path found".yellow().bold());
    }

    println!();
    println!("{}", display::wrap_notes(&result.notes).dimmed());

    Ok(())
}

fn hop_summary(hops: usize) -> String {
    if hops == 1 {
        "1 hop".to_string()
    } else {
        format!("{hops} hops")
    }
}
