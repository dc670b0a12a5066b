//! Rendering of diff results.
//!
//! The engine emits a structured line list; this module projects it into a
//! two-column line-numbered terminal view or a JSON document. Colorization is
//! routed through [`colored`], which already honors `NO_COLOR` and tty
//! detection, so the renderer itself stays policy-free.

use crate::diff::{DiffKind, DiffLine, DiffStats};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use tracing::{Level, info, span};

/// Width of each line-number gutter column.
const GUTTER_WIDTH: usize = 5;

/// Render a diff line list as a two-column line-numbered view.
///
/// Layout per line: original line number, modified line number, a `-`/`+`/
/// space marker, then the content. Separators render as an ellipsis row.
/// Ends with an additions/deletions summary derived from the list.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn render_diff(
    lines: &[DiffLine],
    old_label: &str,
    new_label: &str,
    writer: &mut dyn Write,
) -> Result<()> {
    let span = span!(Level::DEBUG, "render_diff", lines = lines.len());
    let _guard = span.enter();

    writeln!(writer, "{}", format!("--- a/{old_label}").red())?;
    writeln!(writer, "{}", format!("+++ b/{new_label}").green())?;

    for line in lines {
        writeln!(writer, "{}", format_line(line))?;
    }

    let stats = DiffStats::from_lines(lines);
    writeln!(writer, "{}", format_summary(&stats))?;

    info!(
        additions = stats.additions,
        deletions = stats.deletions,
        "Diff rendering complete"
    );

    Ok(())
}

/// Render only the additions/deletions summary line.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn render_stats(lines: &[DiffLine], writer: &mut dyn Write) -> Result<()> {
    let stats = DiffStats::from_lines(lines);
    writeln!(writer, "{}", format_summary(&stats))?;
    Ok(())
}

/// JSON document wrapping the structured line list with its summary counts.
#[derive(Serialize)]
struct JsonDiff<'a> {
    /// Original-side display label.
    original: &'a str,
    /// Modified-side display label.
    modified: &'a str,
    /// The ordered diff line records.
    lines: &'a [DiffLine],
    /// Count of added lines.
    additions: usize,
    /// Count of removed lines.
    deletions: usize,
}

/// Render a diff line list as a JSON document.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render_json(
    lines: &[DiffLine],
    old_label: &str,
    new_label: &str,
    writer: &mut dyn Write,
) -> Result<()> {
    let stats = DiffStats::from_lines(lines);
    let doc = JsonDiff {
        original: old_label,
        modified: new_label,
        lines,
        additions: stats.additions,
        deletions: stats.deletions,
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// Print the notice emitted instead of a diff for binary inputs.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn render_binary_notice(
    old_label: &str,
    new_label: &str,
    writer: &mut dyn Write,
) -> Result<()> {
    writeln!(writer, "Binary files {old_label} and {new_label} differ")?;
    Ok(())
}

/// Format one diff line with its number gutter and change marker.
fn format_line(line: &DiffLine) -> String {
    let old = gutter(line.old_line);
    let new = gutter(line.new_line);

    match line.kind {
        DiffKind::Context => format!("{old} {new}   {}", line.text),
        DiffKind::Removed => format!("{old} {new} {}", format!("- {}", line.text).red()),
        DiffKind::Added => format!("{old} {new} {}", format!("+ {}", line.text).green()),
        DiffKind::Separator => format!(
            "{:>width$} {:>width$} {}",
            "",
            "",
            "...".cyan().dimmed(),
            width = GUTTER_WIDTH
        ),
    }
}

/// Right-aligned gutter cell for an optional line number.
fn gutter(number: Option<usize>) -> String {
    match number {
        Some(n) => format!("{n:>GUTTER_WIDTH$}"),
        None => format!("{:>GUTTER_WIDTH$}", ""),
    }
}

/// Format the trailing summary, colorized per side.
fn format_summary(stats: &DiffStats) -> String {
    format!(
        "{} {}, {}",
        "Summary:".bold(),
        format!("{} additions", stats.additions).green(),
        format!("{} deletions", stats.deletions).red()
    )
}
