//! Rustyline helper integration
//!
//! Provides command-name completion and history hinting for the REPL.

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// REPL helper
pub struct FuzzydictHelper {
    hinter: HistoryHinter,
    commands: Vec<String>,
}

impl FuzzydictHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            hinter: HistoryHinter::new(),
            commands: vec![
                "search",
                "insert",
                "insert-list",
                "contains",
                "load",
                "print",
                "dump",
                "stats",
                "tolerance",
                "clear",
                "help",
                "exit",
                "quit",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for FuzzydictHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for FuzzydictHelper {}

impl Completer for FuzzydictHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.is_empty() {
            let candidates = self
                .commands
                .iter()
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                })
                .collect();
            return Ok((0, candidates));
        }

        // Command completion only while still typing the first word;
        // arguments are free-form words and paths.
        if parts.len() == 1 && !line.ends_with(char::is_whitespace) {
            let prefix = parts[0].to_lowercase();
            let candidates = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(&prefix))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                })
                .collect();
            return Ok((0, candidates));
        }

        Ok((0, vec![]))
    }
}

impl Hinter for FuzzydictHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for FuzzydictHelper {}

impl Validator for FuzzydictHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        // Always accept input (validation happens during execution)
        Ok(ValidationResult::Valid(None))
    }
}
