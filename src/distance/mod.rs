//! Distance metrics used by the fuzzy search filter.
//!
//! Two pure functions: the classic Levenshtein edit distance, computed
//! with a rolling two-row dynamic-programming table, and the absolute
//! length difference. Both operate on `char`s, not bytes, consistently
//! with the tree storing one `char` per node.

use smallvec::{smallvec, SmallVec};

/// Levenshtein edit distance between two strings.
///
/// Minimum number of single-character insertions, deletions, and
/// substitutions transforming `a` into `b`. Symmetric, zero iff
/// `a == b`, and satisfies the triangle inequality.
///
/// Uses two rolling rows of width `len(b) + 1` instead of the full
/// DP matrix; rows are stack-allocated for typical word lengths.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();
    let len_b = b_chars.len();

    let mut prev: SmallVec<[usize; 64]> = (0..=len_b).collect();
    let mut current: SmallVec<[usize; 64]> = smallvec![0; len_b + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[len_b]
}

/// Absolute difference in character count between two strings.
pub fn length_distance(a: &str, b: &str) -> usize {
    a.chars().count().abs_diff(b.chars().count())
}
