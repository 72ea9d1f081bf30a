//! Command parsing and execution
//!
//! Defines all REPL commands and their execution logic.

use super::state::{normalize, ReplState};
use crate::search::{search, Tolerance};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fuzzy search: search <word> [Ne [Ns [Na]]]
    Search {
        /// Query word
        term: String,
        /// Search criteria; the session default applies when omitted
        tolerance: Option<Tolerance>,
    },
    /// Insert word(s): insert <word> [word2] [word3] ...
    Insert {
        /// Words to insert
        terms: Vec<String>,
    },
    /// Insert a comma-delimited word list: insert-list <w1,w2,...>
    InsertList {
        /// Raw comma-delimited list
        words: String,
    },
    /// Check if a word exists: contains <word>
    Contains {
        /// Word to check
        term: String,
    },
    /// Load a line-delimited word list: load <path>
    Load {
        /// Path to the word list file
        path: PathBuf,
    },
    /// Print the bracketed tree rendering: print
    Print,
    /// Dump all words: dump [limit]
    Dump {
        /// Limit number of words to dump
        limit: Option<usize>,
    },
    /// Show statistics: stats | info
    Stats,
    /// Show or set the default tolerance: tolerance [Ne Ns Na]
    SetTolerance {
        /// New default criteria; show current when omitted
        tolerance: Option<Tolerance>,
    },
    /// Clear dictionary: clear
    Clear,
    /// Show help: help
    Help,
    /// Exit REPL: exit | quit
    Exit,
}

/// Command result
pub enum CommandResult {
    /// Continue REPL with a message to display
    Continue(String),
    /// Exit REPL
    Exit,
}

impl Command {
    /// Parse command from input string
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(anyhow::anyhow!("Empty command"));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "search" | "query" | "q" => Self::parse_search(&parts[1..]),
            "insert" | "add" => Self::parse_insert(&parts[1..]),
            "insert-list" | "add-list" => Self::parse_insert_list(&parts[1..]),
            "contains" | "has" => Self::parse_contains(&parts[1..]),
            "load" => Self::parse_load(&parts[1..]),
            "print" | "tree" | "show" => Ok(Self::Print),
            "dump" | "list" => Self::parse_dump(&parts[1..]),
            "stats" | "info" => Ok(Self::Stats),
            "tolerance" | "tol" | "criteria" => Self::parse_tolerance(&parts[1..]),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(anyhow::anyhow!(
                "Unknown command: '{}'. Type 'help' for available commands.",
                cmd
            )),
        }
    }

    fn parse_search(args: &[&str]) -> Result<Self> {
        if args.is_empty() {
            return Err(anyhow::anyhow!("Usage: search <word> [Ne [Ns [Na]]]"));
        }

        let term = args[0].to_string();
        let tolerance = if args.len() > 1 {
            Some(Self::parse_criteria(&args[1..])?)
        } else {
            None
        };

        Ok(Self::Search { term, tolerance })
    }

    fn parse_insert(args: &[&str]) -> Result<Self> {
        if args.is_empty() {
            return Err(anyhow::anyhow!("Usage: insert <word> [word2] [word3] ..."));
        }
        Ok(Self::Insert {
            terms: args.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn parse_insert_list(args: &[&str]) -> Result<Self> {
        if args.is_empty() {
            return Err(anyhow::anyhow!("Usage: insert-list <word1,word2,...>"));
        }
        // Tolerate spaces after the commas by rejoining the arguments.
        Ok(Self::InsertList {
            words: args.join(""),
        })
    }

    fn parse_contains(args: &[&str]) -> Result<Self> {
        if args.len() != 1 {
            return Err(anyhow::anyhow!("Usage: contains <word>"));
        }
        Ok(Self::Contains {
            term: args[0].to_string(),
        })
    }

    fn parse_load(args: &[&str]) -> Result<Self> {
        if args.is_empty() {
            return Err(anyhow::anyhow!("Usage: load <path>"));
        }
        Ok(Self::Load {
            path: PathBuf::from(args.join(" ")),
        })
    }

    fn parse_dump(args: &[&str]) -> Result<Self> {
        let limit = if args.is_empty() {
            None
        } else {
            Some(args[0].parse().context("Invalid limit value")?)
        };
        Ok(Self::Dump { limit })
    }

    fn parse_tolerance(args: &[&str]) -> Result<Self> {
        let tolerance = if args.is_empty() {
            None
        } else {
            Some(Self::parse_criteria(args)?)
        };
        Ok(Self::SetTolerance { tolerance })
    }

    /// Parse up to three criteria values: Ne [Ns [Na]]. Omitted values
    /// default to 0.
    fn parse_criteria(args: &[&str]) -> Result<Tolerance> {
        if args.len() > 3 {
            return Err(anyhow::anyhow!("Expected at most three values: Ne Ns Na"));
        }
        let mut values = [0usize; 3];
        for (slot, arg) in values.iter_mut().zip(args) {
            *slot = arg
                .parse()
                .with_context(|| format!("Invalid criteria value '{arg}'"))?;
        }
        Ok(Tolerance::new(values[0], values[1], values[2]))
    }

    /// Execute command
    pub fn execute(&self, state: &mut ReplState) -> Result<CommandResult> {
        match self {
            Self::Search { term, tolerance } => {
                let word = normalize(term);
                let tolerance = tolerance.unwrap_or(state.tolerance);

                let started = Instant::now();
                let results = search(&state.dict, &word, tolerance);
                let elapsed = started.elapsed();

                let mut out = Self::format_results(&word, &results, tolerance);
                out.push_str(&format!(
                    "\n  Search took {}",
                    format!("{:.3} ms", elapsed.as_secs_f64() * 1000.0).bright_black()
                ));
                Ok(CommandResult::Continue(out))
            }

            Self::Insert { terms } => {
                let started = Instant::now();
                let mut inserted = 0;
                let mut skipped = 0;

                for term in terms {
                    let word = normalize(term);
                    if word.is_empty() {
                        continue;
                    }
                    if state.dict.insert(&word) {
                        inserted += 1;
                    } else {
                        skipped += 1;
                    }
                }
                let elapsed = started.elapsed();

                let msg = if skipped > 0 {
                    format!(
                        "Inserted {} word(s), {} already existed ({:.3} ms)",
                        inserted.to_string().green().bold(),
                        skipped.to_string().yellow(),
                        elapsed.as_secs_f64() * 1000.0
                    )
                } else {
                    format!(
                        "Inserted {} word(s) ({:.3} ms)",
                        inserted.to_string().green().bold(),
                        elapsed.as_secs_f64() * 1000.0
                    )
                };
                Ok(CommandResult::Continue(msg))
            }

            Self::InsertList { words } => {
                let list = normalize(words);
                let before = state.dict.word_count();
                if !state.dict.insert_all(&list) {
                    return Ok(CommandResult::Continue(
                        "No words to add were found".yellow().to_string(),
                    ));
                }
                let added = state.dict.word_count() - before;
                Ok(CommandResult::Continue(format!(
                    "Added {} new word(s), dictionary now holds {}",
                    added.to_string().green().bold(),
                    state.dict.word_count().to_string().green()
                )))
            }

            Self::Contains { term } => {
                let word = normalize(term);
                let msg = if state.dict.contains(&word) {
                    format!("'{}' {}", word.cyan(), "is in the dictionary".green())
                } else {
                    format!("'{}' {}", word.cyan(), "is not in the dictionary".red())
                };
                Ok(CommandResult::Continue(msg))
            }

            Self::Load { path } => {
                let started = Instant::now();
                let inserted = Self::load_words(path, state)?;
                let elapsed = started.elapsed();

                Ok(CommandResult::Continue(format!(
                    "Loaded {} from {} in {:.1} ms ({} word(s), depth {})",
                    format!("{} new word(s)", inserted).green().bold(),
                    path.display().to_string().cyan(),
                    elapsed.as_secs_f64() * 1000.0,
                    state.dict.word_count(),
                    state.dict.max_depth()
                )))
            }

            Self::Print => {
                if state.dict.is_empty() {
                    return Ok(CommandResult::Continue(
                        "The dictionary is empty".yellow().to_string(),
                    ));
                }
                Ok(CommandResult::Continue(state.dict.render_bracketed()))
            }

            Self::Dump { limit } => {
                let total = state.dict.word_count();
                let shown = limit.unwrap_or(total);
                let mut out = String::new();
                for word in state.dict.words().take(shown) {
                    out.push_str("  ");
                    out.push_str(&word);
                    out.push('\n');
                }
                if shown < total {
                    out.push_str(&format!("  ... and {} more", total - shown));
                } else {
                    out.push_str(&format!("  {} word(s)", total));
                }
                Ok(CommandResult::Continue(out))
            }

            Self::Stats => {
                let msg = format!(
                    "Words: {}\nNodes: {}\nMax depth: {}\nDefault tolerance: {}",
                    state.dict.word_count().to_string().green().bold(),
                    state.dict.node_count().to_string().green(),
                    state.dict.max_depth().to_string().green(),
                    Self::format_tolerance(state.tolerance).cyan()
                );
                Ok(CommandResult::Continue(msg))
            }

            Self::SetTolerance { tolerance } => {
                let msg = match tolerance {
                    Some(t) => {
                        state.tolerance = *t;
                        format!(
                            "Default tolerance set to {}",
                            Self::format_tolerance(*t).green().bold()
                        )
                    }
                    None => format!(
                        "Default tolerance is {}",
                        Self::format_tolerance(state.tolerance).cyan()
                    ),
                };
                Ok(CommandResult::Continue(msg))
            }

            Self::Clear => {
                let count = state.dict.word_count();
                if count == 0 {
                    return Ok(CommandResult::Continue(
                        "Dictionary is already empty".yellow().to_string(),
                    ));
                }

                let message = format!(
                    "Clear {} word(s) from the dictionary?",
                    count.to_string().red().bold()
                );
                if !Self::confirm(&message)? {
                    return Ok(CommandResult::Continue(
                        "Clear cancelled".yellow().to_string(),
                    ));
                }

                state.dict.clear();
                Ok(CommandResult::Continue(
                    "The dictionary is cleared".green().to_string(),
                ))
            }

            Self::Help => Ok(CommandResult::Continue(Self::help_text())),

            Self::Exit => Ok(CommandResult::Exit),
        }
    }

    /// Read a line-delimited word list and insert every line.
    fn load_words(path: &Path, state: &mut ReplState) -> Result<usize> {
        let file = File::open(path)
            .with_context(|| format!("Could not open word list '{}'", path.display()))?;
        let mut inserted = 0;
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("Failed reading '{}'", path.display()))?;
            inserted += state.insert_lines([line.as_str()]);
        }
        Ok(inserted)
    }

    fn format_tolerance(tolerance: Tolerance) -> String {
        format!(
            "Ne={} Ns={} Na={}",
            tolerance.substitutions, tolerance.missing, tolerance.extra
        )
    }

    fn format_results(word: &str, results: &[String], tolerance: Tolerance) -> String {
        if results.is_empty() {
            return format!(
                "No results were found matching '{}' with {}",
                word.cyan(),
                Self::format_tolerance(tolerance).yellow()
            );
        }

        let mut out = format!(
            "Found {} result(s) for '{}' with {}:",
            results.len().to_string().green().bold(),
            word.cyan(),
            Self::format_tolerance(tolerance).yellow()
        );
        for result in results {
            out.push_str("\n  - ");
            out.push_str(&result.bright_white().to_string());
        }
        out
    }

    /// Prompt for a yes/no confirmation on stdin.
    fn confirm(message: &str) -> Result<bool> {
        print!("{} (y/N): ", message);
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        Ok(response.trim().eq_ignore_ascii_case("y"))
    }

    fn help_text() -> String {
        let lines = [
            ("search <word> [Ne [Ns [Na]]]", "fuzzy search the dictionary"),
            ("insert <word> [word2] ...", "add word(s)"),
            ("insert-list <w1,w2,...>", "add a comma-delimited word list"),
            ("contains <word>", "exact-match check"),
            ("load <path>", "load a word-per-line file"),
            ("print", "bracketed rendering of the tree"),
            ("dump [limit]", "list stored words"),
            ("stats", "dictionary statistics"),
            ("tolerance [Ne Ns Na]", "show or set the default criteria"),
            ("clear", "discard the whole dictionary"),
            ("help", "this message"),
            ("exit", "leave the shell"),
        ];
        let mut out = String::from("Available commands:\n");
        for (usage, blurb) in lines {
            out.push_str(&format!("  {:<30} {}\n", usage.cyan(), blurb));
        }
        out.push_str("\nNe = substituted, Ns = missing, Na = extra characters tolerated");
        out
    }
}
