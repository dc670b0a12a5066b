//! Line-level diff engine.
//!
//! This module computes structured, renderer-agnostic diffs between two text
//! blobs in three stages:
//! - [`align`]: LCS alignment of the two line sequences
//! - [`builder`]: merging both sequences with the alignment into a flat,
//!   classified line list
//! - [`collapse`]: reducing the flat list to unified-diff-style hunks with a
//!   fixed context window
//!
//! The engine is a total function over any two strings: there are no error
//! paths and no hidden state, so it is safe to call concurrently.

/// LCS sequence alignment.
pub mod align;
/// Binary file detection utilities.
pub mod binary;
/// Flat diff line construction from an alignment.
pub mod builder;
/// Context collapsing into hunk-style output.
pub mod collapse;

pub use binary::{is_binary, is_binary_file};

use serde::Serialize;
use tracing::{Level, debug, span};

/// Default number of unchanged context lines kept around each change.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Classification of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Line is identical in both versions.
    Context,
    /// Line exists only in the modified version.
    Added,
    /// Line exists only in the original version.
    Removed,
    /// Synthetic marker standing in for elided context lines.
    Separator,
}

/// One record of a computed diff.
///
/// Exactly one of four shapes holds, enforced by the constructors:
/// - `Context`: both line numbers set
/// - `Removed`: only `old_line` set
/// - `Added`: only `new_line` set
/// - `Separator`: neither set, empty text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// Line classification.
    pub kind: DiffKind,
    /// Line content (empty for separators).
    pub text: String,
    /// 1-based line number in the original document (`Context`/`Removed`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line: Option<usize>,
    /// 1-based line number in the modified document (`Context`/`Added`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<usize>,
}

impl DiffLine {
    /// A line present, unchanged, in both documents.
    #[must_use]
    pub(crate) fn context(text: &str, old_line: usize, new_line: usize) -> Self {
        Self {
            kind: DiffKind::Context,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    /// A line present only in the modified document.
    #[must_use]
    pub(crate) fn added(text: &str, new_line: usize) -> Self {
        Self {
            kind: DiffKind::Added,
            text: text.to_string(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// A line present only in the original document.
    #[must_use]
    pub(crate) fn removed(text: &str, old_line: usize) -> Self {
        Self {
            kind: DiffKind::Removed,
            text: text.to_string(),
            old_line: Some(old_line),
            new_line: None,
        }
    }

    /// A marker for a skipped run of context lines.
    #[must_use]
    pub(crate) fn separator() -> Self {
        Self {
            kind: DiffKind::Separator,
            text: String::new(),
            old_line: None,
            new_line: None,
        }
    }

    /// Whether this record represents an actual change (added or removed).
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self.kind, DiffKind::Added | DiffKind::Removed)
    }
}

/// Addition/deletion counts derived from a diff line list.
///
/// This is a simple projection for summary display; it is not part of the
/// engine contract and can be recomputed from any line list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Number of `Added` records.
    pub additions: usize,
    /// Number of `Removed` records.
    pub deletions: usize,
}

impl DiffStats {
    /// Count additions and deletions in a diff line list.
    #[must_use]
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.kind {
                DiffKind::Added => stats.additions += 1,
                DiffKind::Removed => stats.deletions += 1,
                DiffKind::Context | DiffKind::Separator => {}
            }
        }
        stats
    }
}

/// Split input text into its line sequence.
///
/// Splitting follows [`str::lines`]: a trailing newline does not produce a
/// trailing empty line, and the empty string is a zero-line document. Both
/// diff inputs are split identically, so the choice cannot skew the result.
fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Compute the full, uncollapsed diff between two text blobs.
///
/// Every input line from both documents appears exactly once in the output:
/// unchanged lines merge into a single `Context` record carrying both line
/// numbers, changed lines split into `Removed`/`Added` records. The output
/// never contains `Separator` records.
#[must_use]
pub fn diff_lines(original: &str, modified: &str) -> Vec<DiffLine> {
    let old = split_lines(original);
    let new = split_lines(modified);

    let alignment = align::lcs_align(&old, &new);
    builder::build_flat_diff(&old, &new, &alignment)
}

/// Compute a collapsed, unified-diff-style line list between two text blobs.
///
/// Keeps `context_lines` unchanged lines around each change run and replaces
/// every elided gap between runs with a single `Separator` record. Identical
/// inputs produce an empty list. `context_lines = 0` yields only changed
/// lines and separators.
///
/// Cost is O(m·n) in the two line counts for the LCS table; callers diffing
/// very large files should enforce a size ceiling before calling (see
/// [`crate::config::DiffConfig::max_cells`]).
#[must_use]
pub fn compute_diff(original: &str, modified: &str, context_lines: usize) -> Vec<DiffLine> {
    let span = span!(Level::DEBUG, "compute_diff", context = context_lines);
    let _guard = span.enter();

    let flat = diff_lines(original, modified);
    let collapsed = collapse::collapse_context(&flat, context_lines);

    debug!(
        flat_lines = flat.len(),
        collapsed_lines = collapsed.len(),
        "Diff computation complete"
    );

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_collapse_to_empty() {
        let lines = compute_diff("a\nb\nc", "a\nb\nc", DEFAULT_CONTEXT_LINES);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_single_modification() {
        let lines = compute_diff("a\nb\nc", "a\nx\nc", 1);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], DiffLine::context("a", 1, 1));
        assert_eq!(lines[1], DiffLine::removed("b", 2));
        assert_eq!(lines[2], DiffLine::added("x", 2));
        assert_eq!(lines[3], DiffLine::context("c", 3, 3));
    }

    #[test]
    fn test_empty_original() {
        let lines = diff_lines("", "a");
        assert_eq!(lines, vec![DiffLine::added("a", 1)]);
    }

    #[test]
    fn test_empty_modified() {
        let lines = diff_lines("a", "");
        assert_eq!(lines, vec![DiffLine::removed("a", 1)]);
    }

    #[test]
    fn test_trailing_newline_is_not_a_line() {
        // "a\n" and "a" are the same one-line document
        let lines = diff_lines("a\n", "a");
        assert_eq!(lines, vec![DiffLine::context("a", 1, 1)]);
    }

    #[test]
    fn test_stats_projection() {
        let lines = diff_lines("a\nb\nc", "a\nx\ny\nc");
        let stats = DiffStats::from_lines(&lines);
        assert_eq!(stats.deletions, 1);
        assert_eq!(stats.additions, 2);
    }
}
