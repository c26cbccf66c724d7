//! Common display utilities for CLI commands.

use colored::Colorize;
use fibertrace::Node;

const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Get the current terminal width, falling back to default if detection fails.
fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map_or(DEFAULT_TERMINAL_WIDTH, |(w, _)| usize::from(w.0))
}

/// Wrap free-form notes text to the terminal, indented two spaces.
pub fn wrap_notes(notes: &str) -> String {
    let options = textwrap::Options::new(terminal_width().saturating_sub(2))
        .initial_indent("  ")
        .subsequent_indent("  ");
    textwrap::fill(notes, options)
}

/// One-line summary of a device: id, category tag, name, status.
pub fn device_line(node: &Node) -> String {
    let mut line = format!("{} {}", node.id.cyan(), format!("({})", node.node_type).dimmed());
    if !node.name.is_empty() {
        line.push(' ');
        line.push_str(&node.name);
    }
    if let Some(status) = &node.status {
        line.push(' ');
        line.push_str(&colorize_status(status));
    }
    line
}

/// Apply color to a device status tag.
///
/// Status values are opaque to the tracer; this is presentation-only
/// pattern matching on common operational tags.
fn colorize_status(status: &str) -> String {
    let text = format!("[{status}]");
    match status.to_lowercase().as_str() {
        "active" | "ok" | "online" => text.green().to_string(),
        "faulty" | "down" | "offline" => text.red().to_string(),
        _ => text.yellow().to_string(),
    }
}

/// Print a traced hop sequence, one device per line.
pub fn print_hops(path: &[Node]) {
    for (i, node) in path.iter().enumerate() {
        if i > 0 {
            println!("  {}", "│".dimmed());
        }
        println!("  {} {}", format!("{i}.").dimmed(), device_line(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_line_includes_id_type_and_name() {
        let mut node = Node::new("OLT-01", "olt");
        node.name = "Central Office".to_string();

        let line = device_line(&node);

        assert!(line.contains("OLT-01"));
        assert!(line.contains("(olt)"));
        assert!(line.contains("Central Office"));
    }

    #[test]
    fn device_line_includes_status_when_present() {
        let mut node = Node::new("ONU-7", "onu");
        node.status = Some("faulty".to_string());

        let line = device_line(&node);

        assert!(line.contains("faulty"));
    }

    #[test]
    fn wrap_notes_indents_output() {
        let wrapped = wrap_notes("short note");

        assert!(wrapped.starts_with("  "));
        assert!(wrapped.contains("short note"));
    }
}
