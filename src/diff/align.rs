//! Longest-common-subsequence alignment of two line sequences.

/// A line present, unchanged, in both documents.
///
/// Indices are zero-based. Across the alignment returned by [`lcs_align`],
/// both components are strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair {
    /// Zero-based index into the original line sequence.
    pub original: usize,
    /// Zero-based index into the modified line sequence.
    pub modified: usize,
}

/// Compute the LCS alignment between two line sequences.
///
/// Builds the standard dynamic-programming table where `dp[i][j]` is the LCS
/// length of `original[0..i)` and `modified[0..j)`, then backtracks from
/// `(m, n)` to recover the aligned index pairs in ascending order.
///
/// Tie-break: when `dp[i-1][j] == dp[i][j-1]` during backtracking, the
/// modified-side cursor is decremented first. After the backtracked list is
/// reversed this orders ambiguous lines as removed-then-added in the final
/// diff. Ties are common on runs of blank lines, so the choice must stay
/// consistent.
///
/// Time and space are O(m·n). The table is write-once, stored as a flat
/// `(m+1)*(n+1)` array, and discarded after backtracking. Callers wanting to
/// bound the cost on very large inputs must do so before calling.
#[must_use]
pub fn lcs_align(original: &[&str], modified: &[&str]) -> Vec<AlignedPair> {
    let m = original.len();
    let n = modified.len();
    if m == 0 || n == 0 {
        return Vec::new();
    }

    let width = n + 1;
    let mut dp = vec![0usize; (m + 1) * width];
    for i in 1..=m {
        for j in 1..=n {
            dp[i * width + j] = if original[i - 1] == modified[j - 1] {
                dp[(i - 1) * width + (j - 1)] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[m * width + n]);
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if original[i - 1] == modified[j - 1] {
            pairs.push(AlignedPair {
                original: i - 1,
                modified: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if dp[i * width + (j - 1)] >= dp[(i - 1) * width + j] {
            j -= 1;
        } else {
            i -= 1;
        }
    }

    pairs.reverse();
    pairs
}
