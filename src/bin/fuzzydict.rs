//! fuzzydict - fuzzy word dictionary shell
//!
//! Dispatches one-shot CLI subcommands and hosts the interactive REPL.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use fuzzydict::cli::{commands, Cli, Commands};
use fuzzydict::repl::{Command, CommandResult, FuzzydictHelper, ReplConfig, ReplState};
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_repl(None),
        Some(Commands::Repl { dict }) => run_repl(dict),
        Some(command) => commands::execute(command),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run_repl(dict_path: Option<PathBuf>) -> anyhow::Result<()> {
    print_banner();

    let mut state = ReplState::new();

    // Preload a word list when one was given on the command line.
    if let Some(path) = dict_path {
        match (Command::Load { path }).execute(&mut state) {
            Ok(CommandResult::Continue(msg)) => println!("  {}\n", msg),
            Ok(CommandResult::Exit) => {}
            Err(e) => eprintln!("  {}: {}\n", "Warning".yellow(), e),
        }
    }

    let repl_config = ReplConfig::default();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let mut editor: Editor<FuzzydictHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(FuzzydictHelper::new()));

    if let Some(history_path) = &repl_config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    loop {
        let prompt = format!(
            "{} [{}w/d{}]> ",
            "fuzzydict".bright_cyan().bold(),
            state.dict.word_count(),
            state.dict.max_depth()
        );

        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                continue;
            }
        };

        match command.execute(&mut state) {
            Ok(CommandResult::Continue(msg)) => println!("{}", msg),
            Ok(CommandResult::Exit) => break,
            Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
        }
    }

    if let Some(history_path) = &repl_config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "{}",
        "═══════════════════════════════════════════════════════".bright_cyan()
    );
    println!(
        "{}",
        "   fuzzydict - Fuzzy Word Dictionary".bright_cyan().bold()
    );
    println!(
        "{}",
        "═══════════════════════════════════════════════════════".bright_cyan()
    );
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!("  Type {} for available commands", "'help'".yellow().bold());
    println!(
        "  Type {} or press {} to exit",
        "'exit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
    println!("{}", "  Quick Start:".bold());
    println!(
        "    • Load a word list:  {}",
        "load /usr/share/dict/words".cyan()
    );
    println!("    • Fuzzy search:      {}", "search word 1 0 1".cyan());
    println!("    • Insert words:      {}", "insert hello world".cyan());
    println!();
}
