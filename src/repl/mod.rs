//! Interactive REPL for the fuzzy dictionary
//!
//! Provides a line-oriented shell over one in-memory [`TrieDict`]:
//! loading word lists, inserting words, fuzzy searching, and inspecting
//! the tree.
//!
//! [`TrieDict`]: crate::dictionary::TrieDict

pub mod command;
pub mod helper;
pub mod state;

pub use command::{Command, CommandResult};
pub use helper::FuzzydictHelper;
pub use state::ReplState;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "fuzzydict> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".fuzzydict_history"),
            ),
        }
    }
}
