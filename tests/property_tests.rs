//! Property-based tests for the diff engine.
//!
//! The engine is a pure function over two strings, so its documented
//! invariants can be checked against arbitrary documents. Line content is
//! drawn from a small alphabet (plus blank lines) to force repeated lines
//! and exercise the LCS tie-break paths.

use diffview::diff::{DiffKind, DiffLine, compute_diff, diff_lines};
use proptest::prelude::*;

/// A document as a newline-joined list of short, frequently-colliding lines.
fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(String::new()),
            Just("alpha".to_string()),
            Just("beta".to_string()),
            Just("gamma".to_string()),
            "[a-c]{0,3}",
        ],
        0..40,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Count records of one kind.
fn count(lines: &[DiffLine], kind: DiffKind) -> usize {
    lines.iter().filter(|l| l.kind == kind).count()
}

/// Sorted text contents of all records of one kind.
fn texts(lines: &[DiffLine], kind: DiffKind) -> Vec<String> {
    let mut out: Vec<String> = lines
        .iter()
        .filter(|l| l.kind == kind)
        .map(|l| l.text.clone())
        .collect();
    out.sort();
    out
}

proptest! {
    #[test]
    fn completeness(original in arb_document(), modified in arb_document()) {
        let flat = diff_lines(&original, &modified);

        let context = count(&flat, DiffKind::Context);
        prop_assert_eq!(
            context + count(&flat, DiffKind::Removed),
            original.lines().count()
        );
        prop_assert_eq!(
            context + count(&flat, DiffKind::Added),
            modified.lines().count()
        );
        prop_assert_eq!(count(&flat, DiffKind::Separator), 0);
    }

    #[test]
    fn line_numbers_are_strictly_monotonic(
        original in arb_document(),
        modified in arb_document()
    ) {
        let flat = diff_lines(&original, &modified);

        let old_numbers: Vec<usize> = flat.iter().filter_map(|l| l.old_line).collect();
        let new_numbers: Vec<usize> = flat.iter().filter_map(|l| l.new_line).collect();
        prop_assert!(old_numbers.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(new_numbers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn line_numbers_match_document_content(
        original in arb_document(),
        modified in arb_document()
    ) {
        let old_lines: Vec<&str> = original.lines().collect();
        let new_lines: Vec<&str> = modified.lines().collect();

        for record in diff_lines(&original, &modified) {
            if let Some(n) = record.old_line {
                prop_assert_eq!(old_lines[n - 1], &record.text);
            }
            if let Some(n) = record.new_line {
                prop_assert_eq!(new_lines[n - 1], &record.text);
            }
        }
    }

    #[test]
    fn identity_diff_is_all_context(document in arb_document()) {
        let flat = diff_lines(&document, &document);
        prop_assert!(flat.iter().all(|l| l.kind == DiffKind::Context));
        prop_assert!(compute_diff(&document, &document, 3).is_empty());
    }

    #[test]
    fn mirrored_diff_swaps_classification_counts(
        original in arb_document(),
        modified in arb_document()
    ) {
        // The LCS length is symmetric, so the classification counts mirror
        // exactly. The chosen common lines need not: when several common
        // subsequences tie, the two directions may pick different ones
        // (e.g. "a,b" vs "b,a"), so content comparison is a unit-test
        // concern on unambiguous inputs, not a universal property.
        let forward = diff_lines(&original, &modified);
        let mirrored = diff_lines(&modified, &original);

        prop_assert_eq!(
            count(&forward, DiffKind::Added),
            count(&mirrored, DiffKind::Removed)
        );
        prop_assert_eq!(
            count(&forward, DiffKind::Removed),
            count(&mirrored, DiffKind::Added)
        );
        prop_assert_eq!(
            count(&forward, DiffKind::Context),
            count(&mirrored, DiffKind::Context)
        );
    }

    #[test]
    fn zero_context_collapse_has_no_context_lines(
        original in arb_document(),
        modified in arb_document()
    ) {
        let collapsed = compute_diff(&original, &modified, 0);
        prop_assert!(collapsed.iter().all(|l| l.kind != DiffKind::Context));
    }

    #[test]
    fn collapse_never_invents_or_drops_changes(
        original in arb_document(),
        modified in arb_document(),
        context_lines in 0usize..6
    ) {
        let flat = diff_lines(&original, &modified);
        let collapsed = compute_diff(&original, &modified, context_lines);

        prop_assert_eq!(
            count(&flat, DiffKind::Added),
            count(&collapsed, DiffKind::Added)
        );
        prop_assert_eq!(
            count(&flat, DiffKind::Removed),
            count(&collapsed, DiffKind::Removed)
        );
    }

    #[test]
    fn collapse_is_deterministic(
        original in arb_document(),
        modified in arb_document(),
        context_lines in 0usize..6
    ) {
        prop_assert_eq!(
            compute_diff(&original, &modified, context_lines),
            compute_diff(&original, &modified, context_lines)
        );
    }
}

#[test]
fn mirrored_diff_matches_content_on_unambiguous_input() {
    let forward = diff_lines("a\nb\nc\nd", "a\nx\nc");
    let mirrored = diff_lines("a\nx\nc", "a\nb\nc\nd");

    assert_eq!(
        texts(&forward, DiffKind::Added),
        texts(&mirrored, DiffKind::Removed)
    );
    assert_eq!(
        texts(&forward, DiffKind::Removed),
        texts(&mirrored, DiffKind::Added)
    );
}
