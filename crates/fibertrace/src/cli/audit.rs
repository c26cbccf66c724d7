//! `fibertrace audit` command implementation.

use std::path::Path;

use colored::Colorize;
use fibertrace::Snapshot;

use super::display;

const MAX_LISTED_DEVICES: usize = 10;

/// Run the audit command.
pub fn run(snapshot_path: &Path) -> Result<(), fibertrace::Error> {
    let snapshot = Snapshot::from_path(snapshot_path)?;
    let topology = snapshot.topology();

    let segments = topology.segments();
    println!(
        "{} {}",
        "Segments:".white().bold(),
        segments.len().to_string().green()
    );
    for (i, segment) in segments.iter().enumerate() {
        let ring_marker = if segment.has_ring {
            format!(" {}", "[ring]".yellow().bold())
        } else {
            String::new()
        };
        println!(
            "  {} {} ({} devices){ring_marker}",
            "Segment".white().bold(),
            i + 1,
            segment.node_ids.len()
        );
        println!(
            "{}",
            display::wrap_notes(&segment.node_ids.join(" — ")).dimmed()
        );
    }
    println!();

    let isolated = topology.isolated_nodes();
    if isolated.is_empty() {
        println!("{}", "No isolated devices.".green());
    } else {
        println!(
            "{} {}",
            "Isolated devices:".white().bold(),
            isolated.len().to_string().yellow()
        );
        for node in isolated.iter().take(MAX_LISTED_DEVICES) {
            println!("  {} {}", "•".dimmed(), display::device_line(node));
        }
        if isolated.len() > MAX_LISTED_DEVICES {
            println!(
                "  {} ... and {} more",
                "•".dimmed(),
                isolated.len() - MAX_LISTED_DEVICES
            );
        }
    }
    println!();

    let dangling = topology.dangling_edge_count();
    if dangling == 0 {
        println!("{}", "All connections resolve to known devices.".green());
    } else {
        println!(
            "{} {} connection(s) reference unknown device identifiers",
            "Warning:".yellow().bold(),
            dangling.to_string().yellow()
        );
    }

    Ok(())
}
