//! Command handler for REPL built-in commands
//!
//! Plain input adds symptoms (comma-separated input adds several);
//! `/`-prefixed input is a command.

use anyhow::Result;
use colored::*;

use crate::repl::session::SessionManager;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Add { symptoms: Vec<String> },
    Remove { symptom: String },
    List,
    Suggest,
    Pick { number: usize },
    Diagnose,
    Clear,
    History { limit: Option<usize> },
    Stats,
    Verbose { enable: bool },
    Reset,
    Exit,
    Unknown { input: String },
}

/// What the REPL loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Diagnose,
    ShowStats,
    Exit,
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse an input line into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Add {
                symptoms: split_symptoms(trimmed),
            };
        }

        let body = &trimmed[1..];
        let (name, rest) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (body, ""),
        };

        match name.to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "add" | "a" if !rest.is_empty() => Command::Add {
                symptoms: split_symptoms(rest),
            },
            "remove" | "rm" if !rest.is_empty() => Command::Remove {
                symptom: rest.to_string(),
            },
            "list" | "ls" => Command::List,
            "suggest" | "s" => Command::Suggest,
            "pick" | "p" => match rest.parse::<usize>() {
                Ok(number) if number > 0 => Command::Pick { number },
                _ => Command::Unknown { input: input.to_string() },
            },
            "diagnose" | "d" => Command::Diagnose,
            "clear" => Command::Clear,
            "history" => Command::History {
                limit: rest.parse().ok(),
            },
            "stats" => Command::Stats,
            "verbose" => {
                let enable = if rest.is_empty() {
                    true
                } else {
                    matches!(rest.to_lowercase().as_str(), "on" | "1" | "true")
                };
                Command::Verbose { enable }
            }
            "reset" => Command::Reset,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command against the session
    pub fn execute(&mut self, command: Command, session: &mut SessionManager) -> Result<Flow> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(Flow::Continue)
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(Flow::Exit)
            }
            Command::Add { symptoms } => {
                for symptom in symptoms {
                    if session.selector_mut().add(&symptom) {
                        println!("{} {}", "+".green(), symptom.trim().to_lowercase());
                    } else if self.verbose {
                        println!("{}", format!("Skipped '{}' (empty or already selected)", symptom).dimmed());
                    }
                }
                Ok(Flow::Continue)
            }
            Command::Remove { symptom } => {
                if session.selector_mut().remove(&symptom) {
                    println!("{} {}", "-".red(), symptom.trim().to_lowercase());
                } else {
                    println!("{}", format!("'{}' is not selected", symptom).yellow());
                }
                Ok(Flow::Continue)
            }
            Command::List => {
                self.show_selection(session);
                Ok(Flow::Continue)
            }
            Command::Suggest => {
                self.show_suggestions(session);
                Ok(Flow::Continue)
            }
            Command::Pick { number } => {
                match session.selector_mut().pick_suggestion(number - 1) {
                    Some(symptom) => println!("{} {}", "+".green(), symptom),
                    None => println!("{}", format!("No suggestion #{}", number).yellow()),
                }
                Ok(Flow::Continue)
            }
            Command::Diagnose => {
                if session.selector().is_empty() {
                    println!("{}", "Select at least one symptom first.".yellow());
                    Ok(Flow::Continue)
                } else {
                    Ok(Flow::Diagnose)
                }
            }
            Command::Clear => {
                session.selector_mut().clear();
                println!("{}", "Selection cleared.".yellow());
                Ok(Flow::Continue)
            }
            Command::History { limit } => {
                self.show_history(session, limit.unwrap_or(10));
                Ok(Flow::Continue)
            }
            Command::Stats => Ok(Flow::ShowStats),
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
                Ok(Flow::Continue)
            }
            Command::Reset => {
                session.reset();
                println!("{}", "Session reset. Selection and history cleared.".yellow());
                Ok(Flow::Continue)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(Flow::Continue)
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("<symptom>[, ...]", "Add one or more symptoms"),
            ("/add <symptom>", "Add a symptom"),
            ("/remove <symptom>", "Remove a selected symptom"),
            ("/list, /ls", "Show selected symptoms"),
            ("/suggest, /s", "Show common symptoms"),
            ("/pick <n>", "Add suggestion number n"),
            ("/diagnose, /d", "Analyze the selected symptoms"),
            ("/clear", "Clear the selection"),
            ("/history [n]", "Show last n diagnoses (default: 10)"),
            ("/stats", "Show session statistics"),
            ("/verbose [on|off]", "Toggle verbose output"),
            ("/reset", "Clear selection and history"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }
        println!("\nPress {} during analysis to cancel it.\n", "Ctrl-C".cyan());
    }

    fn show_selection(&self, session: &SessionManager) {
        let selected = session.selector().selected();
        if selected.is_empty() {
            println!("{}", "No symptoms selected".dimmed().italic());
            return;
        }
        println!("{}", "Selected symptoms:".bold());
        for symptom in selected.iter() {
            println!("  {} {}", "•".cyan(), symptom);
        }
    }

    fn show_suggestions(&self, session: &SessionManager) {
        let suggestions = session.selector().suggestions();
        if suggestions.is_empty() {
            println!("{}", "No more suggestions.".dimmed());
            return;
        }
        println!("{}", "Common symptoms:".dimmed());
        for (i, symptom) in suggestions.iter().enumerate() {
            println!("  {}. {}", (i + 1).to_string().cyan(), symptom);
        }
    }

    /// Display diagnosis history
    fn show_history(&self, session: &SessionManager, limit: usize) {
        let history = session.get_history(limit);

        if history.is_empty() {
            println!("{}", "No diagnoses in history yet.".yellow());
            return;
        }

        println!("\n{}", format!("Diagnosis History (last {}):", history.len()).bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        for (i, record) in history.iter().enumerate() {
            println!(
                "  {}. {} {}",
                (i + 1).to_string().cyan(),
                record.label.bold(),
                format!("({})", record.symptoms.join(", ")).dimmed()
            );
            if self.verbose {
                println!("     Matched by: {}", record.matched_by.dimmed());
            }
        }
        println!();
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn split_symptoms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
