//! Command-line argument parsing for symptomcheck
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// symptomcheck - rule-based symptom checker
#[derive(Parser, Debug)]
#[command(name = "symptomcheck")]
#[command(version)]
#[command(about = "Suggest a likely condition from a list of symptoms", long_about = None)]
pub struct Args {
    /// Symptoms to diagnose (quote multi-word symptoms)
    #[arg(value_name = "SYMPTOM")]
    pub symptoms: Vec<String>,

    /// Simulated analysis latency in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the random fallback (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the diagnosis as JSON
    #[arg(long)]
    pub json: bool,

    /// Show which rule produced the diagnosis
    #[arg(long)]
    pub explain: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except final result)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive symptom selection
    Start,

    /// List common symptoms
    Symptoms {
        /// Include every symptom the rules know about
        #[arg(long)]
        all: bool,
    },

    /// List the indexed disease labels
    Labels,

    /// Show description and recommendations for a condition
    Info {
        /// Disease label, e.g. "Malaria"
        label: String,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check that symptoms and subcommands are not mixed
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_some() && !self.symptoms.is_empty() {
            return Err("Cannot specify symptoms with a subcommand.".to_string());
        }

        if self.json && self.command.is_some() {
            return Err("--json only applies to a diagnosis.".to_string());
        }

        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the config-file spelling
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Check if should show progress spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show detailed events
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Log level filter for env_logger
    pub fn log_level(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::VeryVerbose => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(symptoms: &[&str], verbose: u8, quiet: bool, command: Option<Commands>) -> Args {
        Args {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            delay_ms: None,
            seed: None,
            json: false,
            explain: false,
            config: None,
            verbose,
            quiet,
            command,
        }
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(args(&["fever"], 0, true, None).verbosity(), Verbosity::Quiet);
        assert_eq!(args(&["fever"], 0, false, None).verbosity(), Verbosity::Normal);
        assert_eq!(args(&["fever"], 1, false, None).verbosity(), Verbosity::Verbose);
        assert_eq!(args(&["fever"], 2, false, None).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_validate_success() {
        assert!(args(&["fever", "cough"], 0, false, None).validate().is_ok());
        assert!(args(&[], 0, false, Some(Commands::Labels)).validate().is_ok());
        // No symptoms and no subcommand is allowed; main prints usage
        assert!(args(&[], 0, false, None).validate().is_ok());
    }

    #[test]
    fn test_validate_fail_symptoms_and_command() {
        assert!(args(&["fever"], 0, false, Some(Commands::Start)).validate().is_err());
    }

    #[test]
    fn test_validate_fail_json_with_command() {
        let mut a = args(&[], 0, false, Some(Commands::Labels));
        a.json = true;
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_parse_from_command_line() {
        let a = Args::parse_from(["symptomcheck", "fever", "sore throat", "--seed", "9", "-v"]);
        assert_eq!(a.symptoms, vec!["fever", "sore throat"]);
        assert_eq!(a.seed, Some(9));
        assert_eq!(a.verbosity(), Verbosity::Verbose);

        let a = Args::parse_from(["symptomcheck", "info", "Malaria"]);
        assert!(matches!(a.command, Some(Commands::Info { ref label }) if label == "Malaria"));
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert!(!Verbosity::Normal.show_events());
        assert!(Verbosity::Verbose.show_events());
        assert_eq!(Verbosity::parse("very_verbose"), Some(Verbosity::VeryVerbose));
        assert_eq!(Verbosity::parse("loud"), None);
        assert_eq!(Verbosity::VeryVerbose.log_level(), log::LevelFilter::Debug);
    }
}
