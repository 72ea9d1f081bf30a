//! # fuzzydict
//!
//! Fuzzy word dictionary backed by a shared-prefix character tree.
//!
//! Words are inserted into a trie (one character per node, the root is a
//! sentinel for the empty prefix) and queried with an approximate-match
//! search that tolerates a configurable number of substituted, missing,
//! and extra characters relative to the query word.
//!
//! ## Example
//!
//! ```rust
//! use fuzzydict::prelude::*;
//!
//! let mut dict = TrieDict::new();
//! dict.insert("cat");
//! dict.insert("cats");
//! dict.insert("car");
//!
//! // One substituted character tolerated: "car" matches "cat".
//! let matches = search(&dict, "cat", Tolerance::new(1, 0, 0));
//! assert!(matches.contains(&"car".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dictionary;
pub mod distance;
pub mod search;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive REPL for exploring the dictionary
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::dictionary::{NodeId, TrieDict};
    pub use crate::distance::{length_distance, levenshtein_distance};
    pub use crate::search::{search, Tolerance};
}
