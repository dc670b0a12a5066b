//! Construction of the flat, classified diff line list.

use super::DiffLine;
use super::align::AlignedPair;

/// Merge both line sequences with their alignment into a flat diff.
///
/// Walks two cursors over the original and modified sequences together with
/// the alignment. Lines at the next aligned pair merge into a single
/// `Context` record; lines before it on the original side become `Removed`,
/// lines before it on the modified side become `Added`. Once the alignment is
/// exhausted, remaining original lines are emitted as `Removed`, then
/// remaining modified lines as `Added`.
///
/// Every input line appears exactly once in the output: context + removed
/// records total the original line count, context + added records total the
/// modified line count. Line numbers are 1-based.
#[must_use]
pub fn build_flat_diff(
    original: &[&str],
    modified: &[&str],
    alignment: &[AlignedPair],
) -> Vec<DiffLine> {
    let mut lines = Vec::with_capacity(original.len().max(modified.len()));
    let mut oi = 0;
    let mut mi = 0;
    let mut k = 0;

    while oi < original.len() || mi < modified.len() {
        match alignment.get(k) {
            Some(pair) if oi == pair.original && mi == pair.modified => {
                lines.push(DiffLine::context(original[oi], oi + 1, mi + 1));
                oi += 1;
                mi += 1;
                k += 1;
            }
            Some(pair) if oi < pair.original => {
                lines.push(DiffLine::removed(original[oi], oi + 1));
                oi += 1;
            }
            Some(_) => {
                // oi is at the pair, so mi must still be behind it
                lines.push(DiffLine::added(modified[mi], mi + 1));
                mi += 1;
            }
            None if oi < original.len() => {
                lines.push(DiffLine::removed(original[oi], oi + 1));
                oi += 1;
            }
            None => {
                lines.push(DiffLine::added(modified[mi], mi + 1));
                mi += 1;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::super::align::lcs_align;
    use super::*;
    use crate::diff::DiffKind;

    /// Count records of a given kind.
    fn count_kind(lines: &[DiffLine], kind: DiffKind) -> usize {
        lines.iter().filter(|l| l.kind == kind).count()
    }

    fn flat(original: &[&str], modified: &[&str]) -> Vec<DiffLine> {
        build_flat_diff(original, modified, &lcs_align(original, modified))
    }

    #[test]
    fn test_all_context_for_identical_input() {
        let lines = flat(&["a", "b"], &["a", "b"]);
        assert_eq!(
            lines,
            vec![DiffLine::context("a", 1, 1), DiffLine::context("b", 2, 2)]
        );
    }

    #[test]
    fn test_replacement_orders_removed_before_added() {
        let lines = flat(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(
            lines,
            vec![
                DiffLine::context("a", 1, 1),
                DiffLine::removed("b", 2),
                DiffLine::added("x", 2),
                DiffLine::context("c", 3, 3),
            ]
        );
    }

    #[test]
    fn test_trailing_lines_after_alignment_exhausted() {
        let lines = flat(&["a", "b", "c"], &["a"]);
        assert_eq!(
            lines,
            vec![
                DiffLine::context("a", 1, 1),
                DiffLine::removed("b", 2),
                DiffLine::removed("c", 3),
            ]
        );

        let lines = flat(&["a"], &["a", "b", "c"]);
        assert_eq!(
            lines,
            vec![
                DiffLine::context("a", 1, 1),
                DiffLine::added("b", 2),
                DiffLine::added("c", 3),
            ]
        );
    }

    #[test]
    fn test_completeness_counts() {
        let original = ["a", "", "b", "c", ""];
        let modified = ["", "b", "x", "c", "d"];
        let lines = flat(&original, &modified);

        let context = count_kind(&lines, DiffKind::Context);
        assert_eq!(context + count_kind(&lines, DiffKind::Removed), original.len());
        assert_eq!(context + count_kind(&lines, DiffKind::Added), modified.len());
        assert_eq!(count_kind(&lines, DiffKind::Separator), 0);
    }

    #[test]
    fn test_disjoint_inputs() {
        let lines = flat(&["a", "b"], &["x"]);
        assert_eq!(
            lines,
            vec![
                DiffLine::removed("a", 1),
                DiffLine::removed("b", 2),
                DiffLine::added("x", 1),
            ]
        );
    }
}
