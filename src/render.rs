//! Report rendering: colored terminal text and a JSON summary.
//!
//! The renderer is the only place the message limit applies; the report
//! object itself always keeps every message.

use colored::Colorize;
use serde_json::json;

use crate::config::CheckConfig;
use crate::report::{check, CheckEntry, ValidationReport};

/// Render the full report as sectioned terminal text.
pub fn format_report(report: &ValidationReport, config: &CheckConfig) -> String {
    let mut output = vec![
        "Indicheck Report".bold().to_string(),
        "================".to_string(),
        String::new(),
    ];

    for (name, entry) in report.iter() {
        output.push(format_check(name, entry, config));
        for line in limited(&entry.errors, config.message_limit) {
            output.push(format!("    {} {}", "error:".red(), line));
        }
        for line in limited(&entry.warnings, config.message_limit) {
            output.push(format!("    {} {}", "warning:".yellow(), line));
        }
    }

    output.push(String::new());
    output.push("Summary".bold().to_string());
    output.push("───────".to_string());
    output.push(format!("  {:<12} {}", "Errors:", report.total_errors()));
    output.push(format!("  {:<12} {}", "Warnings:", report.total_warnings()));
    output.push(format!(
        "  {:<12} {} of {}",
        "Checks run:",
        report.executed_count(),
        report.iter().count()
    ));

    let skipped = report.not_executed();
    if !skipped.is_empty() {
        output.push(format!(
            "  {:<12} {}",
            "Not run:",
            skipped
                .iter()
                .map(|name| annotate_skipped(name, config))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    output.join("\n")
}

/// One check's status line.
fn format_check(name: &str, entry: &CheckEntry, _config: &CheckConfig) -> String {
    let status = if !entry.executed {
        "not executed".dimmed().to_string()
    } else if !entry.errors.is_empty() {
        format!("{} error(s)", entry.errors.len()).red().to_string()
    } else if !entry.warnings.is_empty() {
        format!("{} warning(s)", entry.warnings.len())
            .yellow()
            .to_string()
    } else {
        "ok".green().to_string()
    };
    format!("  {:<32} {}", name, status)
}

/// Truncate a message list to the configured limit, appending a
/// continuation marker. A limit of zero disables truncation.
fn limited(messages: &[String], limit: usize) -> Vec<String> {
    if limit == 0 || messages.len() <= limit {
        return messages.to_vec();
    }
    let mut shown: Vec<String> = messages[..limit].to_vec();
    shown.push(format!("... and {} more", messages.len() - limit));
    shown
}

fn annotate_skipped(name: &str, config: &CheckConfig) -> String {
    let disabled = (name == check::SPELLCHECK && config.disable_spellcheck)
        || (name == check::TITLE_LENGTH && config.disable_title_length);
    if disabled {
        format!("{} (disabled)", name)
    } else {
        name.to_string()
    }
}

/// Machine-readable summary consumed by downstream report tooling.
pub fn summary_json(report: &ValidationReport) -> serde_json::Value {
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "report": {
            "errors": report.total_errors(),
            "warnings": report.total_warnings(),
            "tests": report.executed_count(),
        }
    })
}
