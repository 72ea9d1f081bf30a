//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI parser.
#[derive(Parser)]
#[command(name = "fuzzydict")]
#[command(about = "Fuzzy word dictionary backed by a shared-prefix tree")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to the REPL.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive REPL
    Repl {
        /// Word list to load on startup (one word per line)
        #[arg(short, long)]
        dict: Option<PathBuf>,
    },

    /// One-shot fuzzy query against a word list file
    Query {
        /// Query word
        term: String,

        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,

        /// Tolerated substituted characters (Ne)
        #[arg(short = 'e', long, default_value = "0")]
        substitutions: usize,

        /// Tolerated missing characters (Ns)
        #[arg(short = 'm', long, default_value = "0")]
        missing: usize,

        /// Tolerated extra characters (Na)
        #[arg(short = 'a', long, default_value = "0")]
        extra: usize,
    },

    /// Display word list statistics
    Info {
        /// Word list file (one word per line)
        #[arg(short, long)]
        dict: PathBuf,
    },
}
