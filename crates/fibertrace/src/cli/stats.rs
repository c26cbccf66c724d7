//! `fibertrace stats` command implementation.

use std::path::Path;

use colored::Colorize;
use fibertrace::Snapshot;

/// Run the stats command.
pub fn run(snapshot_path: &Path) -> Result<(), fibertrace::Error> {
    let snapshot = Snapshot::from_path(snapshot_path)?;
    let stats = snapshot.topology().stats();

    println!("{}", "Plant Snapshot Statistics".cyan().bold());
    println!();

    println!(
        "  {}: {}",
        "Snapshot".white().bold(),
        snapshot_path.display()
    );
    let captured = snapshot
        .captured_at
        .map_or_else(|| "not recorded".to_string(), |t| t.to_rfc3339());
    println!("  {}: {captured}", "Captured".white().bold());
    println!();

    println!(
        "  {}: {}",
        "Devices".white().bold(),
        stats.node_count.to_string().green()
    );
    println!(
        "  {}: {} total, {} resolved, {} dangling",
        "Connections".white().bold(),
        stats.edge_count.to_string().green(),
        stats.resolved_edge_count,
        highlight_nonzero(stats.dangling_edge_count)
    );
    println!(
        "  {}: {}",
        "Segments".white().bold(),
        stats.segment_count.to_string().green()
    );
    println!(
        "  {}: {}",
        "Isolated devices".white().bold(),
        highlight_nonzero(stats.isolated_node_count)
    );

    Ok(())
}

/// Render a count, highlighted in yellow when it is nonzero.
fn highlight_nonzero(count: usize) -> String {
    if count == 0 {
        count.to_string()
    } else {
        count.to_string().yellow().to_string()
    }
}
