//! Display manager for terminal output
//!
//! Spinner while a diagnosis is pending, report rendering, and the
//! color-coded message helpers shared by the one-shot CLI and the REPL.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use crate::errors::Result;
use crate::telemetry::TelemetryDisplay;
use crate::types::Diagnosis;

const DISCLAIMER: &str = "This is an automated suggestion and should not replace professional \
medical advice. Please consult a healthcare professional for proper evaluation.";

/// Display manager for terminal UI
pub struct DisplayManager {
    current_bar: Option<ProgressBar>,
    update_interval: Duration,
    show_progress: bool,
}

impl DisplayManager {
    /// Create new display manager
    pub fn new() -> Self {
        DisplayManager {
            current_bar: None,
            update_interval: Duration::from_millis(100),
            show_progress: true,
        }
    }

    /// Disable spinners (quiet mode, JSON output)
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Disable ANSI colors globally when `enabled` is false; otherwise
    /// `colored` keeps deciding from the terminal
    pub fn set_color(enabled: bool) {
        if let Some(value) = color_override(enabled) {
            colored::control::set_override(value);
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", format!("  symptomcheck {} - Symptom Selection", version).bold().cyan());
        println!("{}", "  Type a symptom to add it, or pick from the suggestions".dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Type {} for commands, {} to analyze, {} to quit\n",
            "/help".green(),
            "/diagnose".green(),
            "/exit".green()
        );
    }

    /// Start the "Analyzing Symptoms..." spinner
    pub fn start_analysis(&mut self, symptom_count: usize) -> Option<ProgressBar> {
        self.finish_current();
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Analyzing Symptoms... ({} reported)", symptom_count));
        pb.enable_steady_tick(self.update_interval);

        self.current_bar = Some(pb.clone());
        Some(pb)
    }

    /// Finish current spinner
    pub fn finish_current(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Print a diagnosis report
    pub fn show_diagnosis(&mut self, report: &Diagnosis, explain: bool) {
        self.finish_current();
        println!("{}", render_diagnosis(report, explain));
    }

    /// Display error message
    pub fn show_error(&mut self, error: &str) {
        self.finish_current();
        eprintln!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Show bullet point
    pub fn show_bullet(&self, text: &str) {
        println!("  {} {}", "•".cyan(), text);
    }

    /// Show numbered item
    pub fn show_numbered(&self, index: usize, text: &str) {
        println!("  {}. {}", index.to_string().cyan(), text);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

fn color_override(enabled: bool) -> Option<bool> {
    if enabled {
        None
    } else {
        Some(false)
    }
}

/// Write a one-shot result
///
/// With `json`, `out` receives exactly one JSON document and the summary
/// (if any) goes to `diag`. Otherwise both go to `out`.
pub fn write_report<O: Write, D: Write>(
    out: &mut O,
    diag: &mut D,
    report: &Diagnosis,
    summary: Option<&TelemetryDisplay>,
    json: bool,
    explain: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        if let Some(summary) = summary {
            summary.write_summary(diag)?;
        }
    } else {
        writeln!(out, "{}", render_diagnosis(report, explain))?;
        if let Some(summary) = summary {
            summary.write_summary(out)?;
        }
    }
    Ok(())
}

/// Render a report as terminal text
pub fn render_diagnosis(report: &Diagnosis, explain: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Diagnosis Result".bold().cyan()));
    out.push_str(&format!("{}\n", "=".repeat(60).cyan()));
    out.push_str(&format!("Likely condition: {}\n", report.label.as_str().bold().green()));
    if explain {
        out.push_str(&format!("Matched by:       {}\n", report.matched_by.to_string().dimmed()));
    }

    out.push_str(&format!("\n{}\n", "Symptoms reported:".bold()));
    out.push_str(&format!("  {}\n", report.symptoms.as_slice().join(", ")));

    out.push_str(&format!("\n{}\n", "About this condition:".bold()));
    out.push_str(&format!("  {}\n", report.description));

    out.push_str(&format!("\n{}\n", "Recommendations:".bold()));
    for rec in &report.recommendations {
        out.push_str(&format!("  • {}\n", rec));
    }

    out.push_str(&format!("\n{} {}\n", "Important:".yellow().bold(), DISCLAIMER.yellow()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Classification, MatchStage, TreeRule};
    use crate::cli::Verbosity;
    use crate::telemetry::{TelemetryCollector, TelemetryEvent};
    use crate::types::{DiseaseLabel, SymptomSet};

    fn report() -> Diagnosis {
        Diagnosis::new(
            Classification::new(
                DiseaseLabel::from_static("Typhoid"),
                MatchStage::DecisionTree { rule: TreeRule::FeverOnly },
            ),
            SymptomSet::from_tokens(["fever", "chills"]),
        )
    }

    #[test]
    fn test_display_manager_creation() {
        let manager = DisplayManager::new();
        assert!(manager.current_bar.is_none());
        assert_eq!(manager.update_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_start_and_finish_analysis() {
        let mut manager = DisplayManager::new();
        let pb = manager.start_analysis(3);
        assert!(pb.is_some());
        assert!(manager.current_bar.is_some());
        manager.finish_current();
        assert!(manager.current_bar.is_none());
    }

    #[test]
    fn test_no_spinner_when_progress_disabled() {
        let mut manager = DisplayManager::new().with_progress(false);
        assert!(manager.start_analysis(1).is_none());
        assert!(manager.current_bar.is_none());
    }

    #[test]
    fn test_render_diagnosis() {
        colored::control::set_override(false);
        let text = render_diagnosis(&report(), false);
        assert!(text.contains("Likely condition: Typhoid"));
        assert!(text.contains("fever, chills"));
        assert!(text.contains("Complete the full course of antibiotics"));
        assert!(!text.contains("Matched by"));

        let explained = render_diagnosis(&report(), true);
        assert!(explained.contains("Matched by:       decision tree (fever)"));
    }

    #[test]
    fn test_message_display() {
        let mut manager = DisplayManager::new();
        manager.show_error("Test error");
        manager.show_warning("Test warning");
        manager.show_info("Test info");
        manager.show_section("Known symptoms");
        manager.show_bullet("fever");
        manager.show_numbered(1, "cough");
    }

    #[test]
    fn test_color_only_ever_forced_off() {
        assert_eq!(color_override(true), None);
        assert_eq!(color_override(false), Some(false));
    }

    #[test]
    fn test_json_report_is_single_document() {
        let collector = TelemetryCollector::new();
        collector.record(TelemetryEvent::DiagnosisCompleted {
            label: "Typhoid".to_string(),
            duration_ms: 0,
            timestamp: std::time::Instant::now(),
        });
        let summary = TelemetryDisplay::new(collector, Verbosity::Verbose);

        let mut out = Vec::new();
        let mut diag = Vec::new();
        write_report(&mut out, &mut diag, &report(), Some(&summary), true, false).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["label"], "Typhoid");
        assert!(String::from_utf8(diag).unwrap().contains("Rule coverage"));
    }

    #[test]
    fn test_text_report_includes_summary() {
        let summary = TelemetryDisplay::new(TelemetryCollector::new(), Verbosity::Verbose);
        let mut out = Vec::new();
        let mut diag = Vec::new();
        write_report(&mut out, &mut diag, &report(), Some(&summary), false, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Typhoid"));
        assert!(text.contains("Session Summary"));
        assert!(diag.is_empty());
    }
}
