//! Context collapsing of a flat diff into hunk-style output.

use super::{DiffKind, DiffLine};

/// Half-open index range into the flat diff that survives collapsing.
type KeepRange = (usize, usize);

/// Collapse a flat diff to a fixed context window around each change run.
///
/// A change run is a maximal contiguous run of non-context lines. Each run
/// keeps up to `context_lines` context lines on either side; overlapping or
/// adjacent windows merge, so no context line is ever emitted twice. One
/// `Separator` record replaces each non-empty gap between surviving regions.
/// Context skipped before the first run or after the last gets no separator.
///
/// A diff with no changes collapses to an empty list. With
/// `context_lines = 0` the output holds only changed lines and separators.
/// The result is a pure function of the inputs.
#[must_use]
pub fn collapse_context(flat: &[DiffLine], context_lines: usize) -> Vec<DiffLine> {
    let ranges = keep_ranges(flat, context_lines);

    let mut collapsed = Vec::new();
    let mut prev_end = None;
    for (start, end) in ranges {
        if let Some(prev) = prev_end {
            if start > prev {
                collapsed.push(DiffLine::separator());
            }
        }
        collapsed.extend_from_slice(&flat[start..end]);
        prev_end = Some(end);
    }

    collapsed
}

/// Scan the flat diff and compute the merged keep-ranges around change runs.
fn keep_ranges(flat: &[DiffLine], context_lines: usize) -> Vec<KeepRange> {
    let mut ranges: Vec<KeepRange> = Vec::new();
    let mut i = 0;

    while i < flat.len() {
        if flat[i].kind == DiffKind::Context {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < flat.len() && flat[i].kind != DiffKind::Context {
            i += 1;
        }

        let start = run_start.saturating_sub(context_lines);
        let end = (i + context_lines).min(flat.len());
        match ranges.last_mut() {
            // Adjacent windows (zero skipped lines) merge as well
            Some(last) if start <= last.1 => last.1 = end,
            _ => ranges.push((start, end)),
        }
    }

    ranges
}
