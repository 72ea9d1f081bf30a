//! CLI command implementations
//!
//! One-shot commands build the dictionary from a word list file, run the
//! requested operation, and print the outcome. The interactive `repl`
//! subcommand is handled by the binary itself.

use crate::dictionary::TrieDict;
use crate::repl::state::normalize;
use crate::search::{search, Tolerance};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::args::Commands;

/// Execute a one-shot CLI command.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Query {
            term,
            dict,
            substitutions,
            missing,
            extra,
        } => {
            let dictionary = load_dictionary(&dict)?;
            let word = normalize(&term);
            let tolerance = Tolerance::new(substitutions, missing, extra);
            let results = search(&dictionary, &word, tolerance);

            if results.is_empty() {
                println!(
                    "No results were found matching '{}' (Ne={} Ns={} Na={})",
                    word.cyan(),
                    substitutions,
                    missing,
                    extra
                );
            } else {
                println!(
                    "Found {} result(s) for '{}':",
                    results.len().to_string().green().bold(),
                    word.cyan()
                );
                for result in &results {
                    println!("  - {}", result);
                }
            }
            Ok(())
        }

        Commands::Info { dict } => {
            let dictionary = load_dictionary(&dict)?;
            println!("Word list: {}", dict.display().to_string().cyan());
            println!(
                "Words: {}",
                dictionary.word_count().to_string().green().bold()
            );
            println!("Nodes: {}", dictionary.node_count().to_string().green());
            println!("Max depth: {}", dictionary.max_depth().to_string().green());
            Ok(())
        }

        Commands::Repl { .. } => unreachable!("repl is handled by the binary"),
    }
}

/// Build a dictionary from a line-delimited word list, normalizing each
/// line.
pub fn load_dictionary(path: &Path) -> Result<TrieDict> {
    let file =
        File::open(path).with_context(|| format!("Could not open word list '{}'", path.display()))?;

    let mut dict = TrieDict::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("Failed reading '{}'", path.display()))?;
        let word = normalize(&line);
        if !word.is_empty() {
            dict.insert(&word);
        }
    }
    Ok(dict)
}
