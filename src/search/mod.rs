//! Depth-windowed fuzzy search over the prefix tree.
//!
//! A query word and a [`Tolerance`] define a window of candidate word
//! lengths. Terminal nodes inside that window are enumerated depth by
//! depth, each reconstructed into its word and kept when it passes the
//! edit-distance acceptance test.

use crate::dictionary::TrieDict;
use crate::distance::{length_distance, levenshtein_distance};

/// Tolerated deviations between the query and a matching word.
///
/// All three counts default to 0, which makes the search an exact
/// lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tolerance {
    /// Tolerated substituted characters (`Ne`).
    pub substitutions: usize,
    /// Tolerated missing characters, query longer than match (`Ns`).
    pub missing: usize,
    /// Tolerated extra characters, query shorter than match (`Na`).
    pub extra: usize,
}

impl Tolerance {
    /// Tolerance with the given substituted / missing / extra counts.
    pub fn new(substitutions: usize, missing: usize, extra: usize) -> Self {
        Tolerance {
            substitutions,
            missing,
            extra,
        }
    }

    /// Zero tolerance: only the query word itself matches.
    pub fn exact() -> Self {
        Tolerance::default()
    }

    /// Acceptance test for a candidate word.
    ///
    /// Accepts iff `levenshtein(query, candidate) <= Ne + |len
    /// difference|`. Levenshtein already charges one edit per character
    /// of length difference, so adding the length difference on the
    /// right doubles the allowance for length mismatches relative to
    /// substitutions. Deliberately recall-favoring; callers must not
    /// "correct" the inequality.
    pub fn admits(&self, query: &str, candidate: &str) -> bool {
        levenshtein_distance(query, candidate)
            <= self.substitutions + length_distance(query, candidate)
    }
}

/// Search the dictionary for words approximately matching `query`.
///
/// Candidate lengths run from `len(query) - Ns` to `len(query) + Na`,
/// ascending. For each length, the terminal nodes at the matching depth
/// are enumerated left to right and filtered through
/// [`Tolerance::admits`]. Results come back in production order:
/// ascending length, then sibling/insertion order within a length. A
/// word has one fixed length, so no de-duplication is needed.
///
/// Returns an empty result, without raising an error, when the query
/// shape makes a match impossible: `Ns >= len(query)` (the whole query
/// would be trimmed away), or the query outruns the tree even with
/// every tolerated extra character.
pub fn search(dict: &TrieDict, query: &str, tolerance: Tolerance) -> Vec<String> {
    let query_len = query.chars().count();
    let max_depth = dict.max_depth();
    let mut results = Vec::new();

    if tolerance.missing >= query_len || query_len > max_depth + tolerance.extra + 1 {
        return results;
    }

    let min_len = query_len - tolerance.missing;
    let max_len = query_len + tolerance.extra;

    for len in min_len..=max_len {
        // No stored word reaches this length; longer ones cannot either.
        if len > max_depth + 1 {
            break;
        }

        for id in dict.nodes_at_depth(len - 1) {
            if !dict.is_terminal(id) {
                continue;
            }
            let candidate = dict.word_at(id);
            if tolerance.admits(query, &candidate) {
                results.push(candidate);
            }
        }
    }

    results
}
