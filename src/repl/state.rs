//! REPL session state
//!
//! One mutable dictionary plus the session's default search tolerance.
//! Input normalization (trimming, lower-casing) happens here, at the
//! shell boundary; the core dictionary never case-folds.

use crate::dictionary::TrieDict;
use crate::search::Tolerance;

/// Normalize user input the way the dictionary expects it: trimmed and
/// lower-cased.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Mutable state carried across REPL commands.
pub struct ReplState {
    /// The session's dictionary.
    pub dict: TrieDict,
    /// Default tolerance applied when a search gives no criteria.
    pub tolerance: Tolerance,
}

impl ReplState {
    /// Fresh state: empty dictionary, zero tolerance.
    pub fn new() -> Self {
        Self {
            dict: TrieDict::new(),
            tolerance: Tolerance::exact(),
        }
    }

    /// Insert a batch of already-read lines, normalizing each. Returns
    /// how many were new to the dictionary.
    pub fn insert_lines<'a, I: IntoIterator<Item = &'a str>>(&mut self, lines: I) -> usize {
        let mut inserted = 0;
        for line in lines {
            let word = normalize(line);
            if !word.is_empty() && self.dict.insert(&word) {
                inserted += 1;
            }
        }
        inserted
    }
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}
