//! Terminal output for CLI commands.
//!
//! Human-readable lines with colored status symbols, or one JSON object per
//! line when `--json` is set.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use serde_json::json;

static JSON_OUTPUT: AtomicBool = AtomicBool::new(false);

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply the global `--json` flag.
pub fn configure(json: bool) {
    JSON_OUTPUT.store(json, Ordering::Relaxed);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    JSON_OUTPUT.load(Ordering::Relaxed)
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if is_json() {
        emit_json_line("header", json!({ "app": "kickoff", "version": version }));
        return;
    }

    println!("{} {}", "kickoff".bold(), version.dimmed());
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();

    if is_json() {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }

    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if is_json() {
        emit_json_line("success", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    if is_json() {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}

/// Print a section header.
pub fn section(title: &str) {
    if is_json() {
        emit_json_line("section", json!({ "title": title }));
        return;
    }

    println!();
    println!("{}", title.bold());
}

/// Print a hint for what to do next.
pub fn hint(message: &str) {
    if is_json() {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "→".cyan(), message.dimmed());
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.cyan())
}

/// Print a complete JSON document.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}
