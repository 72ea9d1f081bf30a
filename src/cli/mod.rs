//! CLI interface for fuzzydict
//!
//! Provides one-shot command-line queries and the entry into the REPL.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
